use serde::Serialize;

/// 修饰符分隔符（`hover:p-4`）
pub const MODIFIER_SEPARATOR: char = ':';

/// 重要性标记（`p-4!`，旧语法 `!p-4`）
pub const IMPORTANT_MODIFIER: char = '!';

/// 后缀修饰符分隔符（`bg-red-500/50`, `text-lg/7`）
pub const POSTFIX_SEPARATOR: char = '/';

/// 解析后的 class token
///
/// 所有字段都借用自输入 token，每次合并调用中临时创建、用完即弃。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParsedClassName<'a> {
    /// 修饰符，保持原始顺序（如 `["md", "hover"]`）
    pub modifiers: Vec<&'a str>,

    /// 是否带有 `!` 标记
    pub has_important_modifier: bool,

    /// 去掉修饰符和 `!` 之后的基础类名（如 `bg-red-500/50`）
    pub base_class_name: &'a str,

    /// `/` 在 base_class_name 中的位置（字节偏移）
    pub postfix_modifier_position: Option<usize>,

    /// 未带配置前缀的外部类名，原样保留、不参与冲突处理
    pub is_external: bool,
}

impl<'a> ParsedClassName<'a> {
    /// 外部类名：整个 token 作为基础类名
    pub fn external(class_name: &'a str) -> Self {
        Self {
            modifiers: Vec::new(),
            has_important_modifier: false,
            base_class_name: class_name,
            postfix_modifier_position: None,
            is_external: true,
        }
    }

    /// base class 中 `/` 之前的部分
    ///
    /// 没有后缀修饰符时返回整个 base class。
    pub fn base_without_postfix(&self) -> &'a str {
        match self.postfix_modifier_position {
            Some(pos) => &self.base_class_name[..pos],
            None => self.base_class_name,
        }
    }

    pub fn has_postfix_modifier(&self) -> bool {
        self.postfix_modifier_position.is_some()
    }
}

/// 是否为任意变体（`[&>*]:underline` 中的 `[&>*]`）
pub fn is_arbitrary_variant(modifier: &str) -> bool {
    modifier.starts_with('[')
}
