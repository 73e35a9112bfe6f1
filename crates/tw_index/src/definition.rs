use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::validators::Validator;

/// class group 定义中的一项
///
/// - `Literal("auto")`：固定路径，按 `-` 拆分后挂到 trie 上
/// - `Nested({"p": [...]})`：子路径前缀 + 子定义
/// - `Validator(Number)`：在当前节点挂载校验器，匹配任意剩余部分
/// - `Theme("spacing")`：引用主题刻度，构建时展开
///
/// JSON 表示：字符串为字面量，`{"$validator": "number"}` 为校验器，
/// `{"$theme": "spacing"}` 为主题引用，其他对象为嵌套映射。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawDefinition", into = "RawDefinition")]
pub enum ClassDefinition {
    Literal(String),
    Nested(IndexMap<String, Vec<ClassDefinition>>),
    Validator(Validator),
    Theme(String),
}

impl ClassDefinition {
    pub fn literal(value: impl Into<String>) -> Self {
        ClassDefinition::Literal(value.into())
    }

    pub fn theme(scale: impl Into<String>) -> Self {
        ClassDefinition::Theme(scale.into())
    }

    /// 只有一个键的嵌套映射
    pub fn nest(key: impl Into<String>, definitions: Vec<ClassDefinition>) -> Self {
        let mut map = IndexMap::with_capacity(1);
        map.insert(key.into(), definitions);
        ClassDefinition::Nested(map)
    }

    pub fn nested<const N: usize>(entries: [(&str, Vec<ClassDefinition>); N]) -> Self {
        ClassDefinition::Nested(
            entries
                .into_iter()
                .map(|(key, definitions)| (key.to_string(), definitions))
                .collect(),
        )
    }
}

impl From<&str> for ClassDefinition {
    fn from(value: &str) -> Self {
        ClassDefinition::Literal(value.to_string())
    }
}

impl From<String> for ClassDefinition {
    fn from(value: String) -> Self {
        ClassDefinition::Literal(value)
    }
}

impl From<Validator> for ClassDefinition {
    fn from(validator: Validator) -> Self {
        ClassDefinition::Validator(validator)
    }
}

/// 构建定义列表：`defs!["auto", Number, theme("spacing")]`
#[macro_export]
macro_rules! defs {
    ($($item:expr),* $(,)?) => {
        vec![$($crate::definition::ClassDefinition::from($item)),*]
    };
}

// ── serde 镜像类型 ────────────────────────────────────────────

#[derive(Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct ValidatorRef {
    #[serde(rename = "$validator")]
    validator: Validator,
}

#[derive(Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct ThemeRef {
    #[serde(rename = "$theme")]
    theme: String,
}

#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum RawDefinition {
    Literal(String),
    Validator(ValidatorRef),
    Theme(ThemeRef),
    Nested(IndexMap<String, Vec<ClassDefinition>>),
}

impl From<RawDefinition> for ClassDefinition {
    fn from(raw: RawDefinition) -> Self {
        match raw {
            RawDefinition::Literal(value) => ClassDefinition::Literal(value),
            RawDefinition::Validator(r) => ClassDefinition::Validator(r.validator),
            RawDefinition::Theme(r) => ClassDefinition::Theme(r.theme),
            RawDefinition::Nested(map) => ClassDefinition::Nested(map),
        }
    }
}

impl From<ClassDefinition> for RawDefinition {
    fn from(definition: ClassDefinition) -> Self {
        match definition {
            ClassDefinition::Literal(value) => RawDefinition::Literal(value),
            ClassDefinition::Validator(validator) => {
                RawDefinition::Validator(ValidatorRef { validator })
            }
            ClassDefinition::Theme(theme) => RawDefinition::Theme(ThemeRef { theme }),
            ClassDefinition::Nested(map) => RawDefinition::Nested(map),
        }
    }
}
