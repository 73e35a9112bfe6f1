use crate::types::{ParsedClassName, IMPORTANT_MODIFIER, MODIFIER_SEPARATOR};

/// class token 解析器
///
/// 把一个已按空白拆分的 token 拆成修饰符、重要性标记、基础类名和后缀修饰符位置。
///
/// 支持的格式：
/// - 修饰符：`hover:bg-blue-500`, `md:hover:p-4`
/// - 任意变体：`[&>*]:p-4`, `data-[state=open]:block`
/// - 任意值/变量中的冒号和斜杠不会被拆分：`bg-[url(a:b/c)]`, `p-(--gap:1)`
/// - 后缀修饰符：`bg-blue-500/50`, `text-lg/7`
/// - 重要性：`p-4!`（旧语法 `!p-4`）
/// - 前缀：配置 `tw` 后只处理 `tw:` 开头的 token
///
/// # 示例
///
/// ```
/// use tailmerge_tw_parse::ClassNameParser;
///
/// let parser = ClassNameParser::new(None);
/// let parsed = parser.parse("md:hover:bg-blue-500/50!");
/// assert_eq!(parsed.modifiers, vec!["md", "hover"]);
/// assert_eq!(parsed.base_class_name, "bg-blue-500/50");
/// assert_eq!(parsed.postfix_modifier_position, Some(11));
/// assert!(parsed.has_important_modifier);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ClassNameParser {
    prefix: Option<String>,
}

impl ClassNameParser {
    /// 空前缀视为未配置前缀
    pub fn new(prefix: Option<String>) -> Self {
        Self {
            prefix: prefix.filter(|p| !p.is_empty()),
        }
    }

    pub fn prefix(&self) -> Option<&str> {
        self.prefix.as_deref()
    }

    /// 解析单个 class token，不会失败
    pub fn parse<'a>(&self, class_name: &'a str) -> ParsedClassName<'a> {
        let class_name = match self.strip_prefix(class_name) {
            Some(rest) => rest,
            None => return ParsedClassName::external(class_name),
        };

        let mut modifiers = Vec::new();
        let mut bracket_depth: i32 = 0;
        let mut paren_depth: i32 = 0;
        let mut modifier_start = 0;
        let mut postfix_position = None;

        for (index, byte) in class_name.bytes().enumerate() {
            if bracket_depth == 0 && paren_depth == 0 {
                match byte {
                    b':' => {
                        modifiers.push(&class_name[modifier_start..index]);
                        modifier_start = index + 1;
                        // 修饰符里的 `/` 不属于基础类名
                        postfix_position = None;
                        continue;
                    }
                    b'/' => {
                        if postfix_position.is_none() {
                            postfix_position = Some(index);
                        }
                        continue;
                    }
                    _ => {}
                }
            }

            match byte {
                b'[' => bracket_depth += 1,
                b']' => bracket_depth -= 1,
                b'(' => paren_depth += 1,
                b')' => paren_depth -= 1,
                _ => {}
            }
        }

        let base_with_important = &class_name[modifier_start..];
        let (base_class_name, important) = strip_important_modifier(base_with_important);

        let postfix_modifier_position = postfix_position
            .filter(|&pos| pos > modifier_start)
            .map(|pos| pos - modifier_start)
            .and_then(|pos| match important {
                Important::Leading => pos.checked_sub(1),
                _ => Some(pos),
            })
            .filter(|&pos| pos < base_class_name.len());

        ParsedClassName {
            modifiers,
            has_important_modifier: important != Important::None,
            base_class_name,
            postfix_modifier_position,
            is_external: false,
        }
    }

    /// 有前缀时剥离 `prefix:`，不匹配返回 None（外部类名）
    fn strip_prefix<'a>(&self, class_name: &'a str) -> Option<&'a str> {
        match &self.prefix {
            Some(prefix) => class_name
                .strip_prefix(prefix.as_str())
                .and_then(|rest| rest.strip_prefix(MODIFIER_SEPARATOR)),
            None => Some(class_name),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Important {
    None,
    Trailing,
    Leading,
}

fn strip_important_modifier(base: &str) -> (&str, Important) {
    if let Some(stripped) = base.strip_suffix(IMPORTANT_MODIFIER) {
        return (stripped, Important::Trailing);
    }

    // 旧语法：`!` 在开头
    if let Some(stripped) = base.strip_prefix(IMPORTANT_MODIFIER) {
        return (stripped, Important::Leading);
    }

    (base, Important::None)
}
