use std::collections::HashSet;

use crate::types::{is_arbitrary_variant, MODIFIER_SEPARATOR};

/// 修饰符排序器
///
/// 把一个 token 的修饰符规范化成可比较的形式，用作冲突 key 的一部分。
/// 位置敏感的修饰符（任意变体 `[...]`，以及配置中的伪元素、`*`/`**` 等）
/// 保持原位，它们之间的普通修饰符按字典序排序。
///
/// # 示例
///
/// ```
/// use tailmerge_tw_parse::ModifierSorter;
///
/// let sorter = ModifierSorter::new(["before"]);
/// assert_eq!(sorter.sort(&["hover", "focus"]), vec!["focus", "hover"]);
/// assert_eq!(
///     sorter.sort(&["md", "before", "focus", "dark"]),
///     vec!["md", "before", "dark", "focus"]
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct ModifierSorter {
    order_sensitive: HashSet<String>,
}

impl ModifierSorter {
    pub fn new<I, S>(order_sensitive: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            order_sensitive: order_sensitive.into_iter().map(Into::into).collect(),
        }
    }

    /// 修饰符的相对位置是否会改变含义
    pub fn is_position_sensitive(&self, modifier: &str) -> bool {
        is_arbitrary_variant(modifier) || self.order_sensitive.contains(modifier)
    }

    pub fn sort<'a>(&self, modifiers: &[&'a str]) -> Vec<&'a str> {
        let mut sorted = Vec::with_capacity(modifiers.len());
        let mut pending: Vec<&'a str> = Vec::new();

        for &modifier in modifiers {
            if self.is_position_sensitive(modifier) {
                pending.sort_unstable();
                sorted.append(&mut pending);
                sorted.push(modifier);
            } else {
                pending.push(modifier);
            }
        }

        pending.sort_unstable();
        sorted.append(&mut pending);

        sorted
    }

    /// 冲突 key 中使用的修饰符字符串
    ///
    /// - 无修饰符 → `""`
    /// - 一个 → 原样
    /// - 多个 → 排序后以 `:` 连接
    pub fn modifier_key(&self, modifiers: &[&str]) -> String {
        match modifiers {
            [] => String::new(),
            [single] => (*single).to_string(),
            _ => self.sort(modifiers).join(MODIFIER_SEPARATOR.to_string().as_str()),
        }
    }
}
