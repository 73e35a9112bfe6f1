use indexmap::IndexMap;
use serde::de::{self, MapAccess, SeqAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// 待合并的类名输入
///
/// JSON 中字符串、数组、对象分别对应三个变体：
/// ```json
/// ["p-2", ["hover:p-4"], { "text-red-500": true, "text-gray-500": false }]
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ClassValue {
    /// 以空白分隔的类名
    Class(String),
    /// 嵌套列表，按深度优先展开
    List(Vec<ClassValue>),
    /// 类名 → 是否启用
    ///
    /// 条件按真值判断：`null`, `0`, `""`, `"0"`, 空数组/对象为假。
    Conditional(#[serde(deserialize_with = "deserialize_conditions")] IndexMap<String, bool>),
}

impl ClassValue {
    /// 展开为以单个空格分隔的类名字符串，跳过空片段
    pub fn flatten(&self) -> String {
        let mut out = String::new();
        self.write_into(&mut out);
        out
    }

    /// 展开多个输入
    pub fn flatten_all(values: &[ClassValue]) -> String {
        let mut out = String::new();
        for value in values {
            value.write_into(&mut out);
        }
        out
    }

    fn write_into(&self, out: &mut String) {
        match self {
            ClassValue::Class(classes) => push_fragment(out, classes),
            ClassValue::List(values) => {
                for value in values {
                    value.write_into(out);
                }
            }
            ClassValue::Conditional(map) => {
                for (classes, enabled) in map {
                    if *enabled {
                        push_fragment(out, classes);
                    }
                }
            }
        }
    }
}

fn push_fragment(out: &mut String, fragment: &str) {
    let fragment = fragment.trim();
    if fragment.is_empty() {
        return;
    }
    if !out.is_empty() {
        out.push(' ');
    }
    out.push_str(fragment);
}

fn deserialize_conditions<'de, D>(deserializer: D) -> Result<IndexMap<String, bool>, D::Error>
where
    D: Deserializer<'de>,
{
    let conditions = IndexMap::<String, Truthy>::deserialize(deserializer)?;
    Ok(conditions
        .into_iter()
        .map(|(classes, Truthy(enabled))| (classes, enabled))
        .collect())
}

/// 任意 JSON / JS 值的真值
struct Truthy(bool);

impl<'de> Deserialize<'de> for Truthy {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(TruthyVisitor).map(Truthy)
    }
}

struct TruthyVisitor;

impl<'de> Visitor<'de> for TruthyVisitor {
    type Value = bool;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a condition value")
    }

    fn visit_bool<E: de::Error>(self, value: bool) -> Result<bool, E> {
        Ok(value)
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> Result<bool, E> {
        Ok(value != 0)
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> Result<bool, E> {
        Ok(value != 0)
    }

    fn visit_f64<E: de::Error>(self, value: f64) -> Result<bool, E> {
        Ok(value != 0.0 && !value.is_nan())
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<bool, E> {
        Ok(!matches!(value, "" | "0"))
    }

    fn visit_unit<E: de::Error>(self) -> Result<bool, E> {
        Ok(false)
    }

    fn visit_none<E: de::Error>(self) -> Result<bool, E> {
        Ok(false)
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<bool, D::Error> {
        deserializer.deserialize_any(TruthyVisitor)
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<bool, A::Error> {
        let mut non_empty = false;
        while seq.next_element::<de::IgnoredAny>()?.is_some() {
            non_empty = true;
        }
        Ok(non_empty)
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<bool, A::Error> {
        let mut non_empty = false;
        while map.next_entry::<de::IgnoredAny, de::IgnoredAny>()?.is_some() {
            non_empty = true;
        }
        Ok(non_empty)
    }
}

impl From<&str> for ClassValue {
    fn from(classes: &str) -> Self {
        ClassValue::Class(classes.to_string())
    }
}

impl From<String> for ClassValue {
    fn from(classes: String) -> Self {
        ClassValue::Class(classes)
    }
}

impl<T: Into<ClassValue>> From<Vec<T>> for ClassValue {
    fn from(values: Vec<T>) -> Self {
        ClassValue::List(values.into_iter().map(Into::into).collect())
    }
}

impl From<IndexMap<String, bool>> for ClassValue {
    fn from(map: IndexMap<String, bool>) -> Self {
        ClassValue::Conditional(map)
    }
}

impl<const N: usize> From<[(&str, bool); N]> for ClassValue {
    fn from(entries: [(&str, bool); N]) -> Self {
        ClassValue::Conditional(
            entries
                .into_iter()
                .map(|(classes, enabled)| (classes.to_string(), enabled))
                .collect(),
        )
    }
}
