use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};

use crate::definition::ClassDefinition;
use crate::error::{ConfigError, Result};

/// 默认的结果缓存容量
pub const DEFAULT_CACHE_SIZE: usize = 500;

/// class group 定义表
pub type ClassGroups = IndexMap<String, Vec<ClassDefinition>>;

/// class group → 会被它覆盖的其他 class group
pub type ConflictTable = IndexMap<String, Vec<String>>;

/// 合并引擎配置
///
/// 所有映射都使用 `IndexMap`：同一节点上的校验器按插入顺序匹配，
/// 先定义的 class group 优先。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// 类名前缀（`tw` 表示只处理 `tw:` 开头的 token）
    pub prefix: Option<String>,

    /// 结果缓存容量
    pub cache_size: usize,

    /// 主题刻度，通过 `ClassDefinition::Theme` 引用
    pub theme: ClassGroups,

    pub class_groups: ClassGroups,

    /// 胜出时额外覆盖的 class group（如 `p` 覆盖 `px`, `pt` ...）
    pub conflicting_class_groups: ConflictTable,

    /// 带后缀修饰符时额外覆盖的 class group（如 `text-lg/7` 覆盖 `leading`）
    pub conflicting_class_group_modifiers: ConflictTable,

    /// 位置敏感的修饰符（伪元素、`*`、`**` 等）
    pub order_sensitive_modifiers: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        crate::default_config::default_config()
    }
}

impl Config {
    /// 没有任何规则的空配置
    pub fn empty() -> Self {
        Self {
            prefix: None,
            cache_size: DEFAULT_CACHE_SIZE,
            theme: IndexMap::new(),
            class_groups: IndexMap::new(),
            conflicting_class_groups: IndexMap::new(),
            conflicting_class_group_modifiers: IndexMap::new(),
            order_sensitive_modifiers: Vec::new(),
        }
    }

    /// 把调用方的覆盖项合并进当前配置
    ///
    /// 规则：
    /// - 标量（`prefix`, `cacheSize`）直接替换，`prefix: null` 清除前缀
    /// - 列表拼接（默认在前，覆盖项在后）
    /// - 映射按键递归合并，同名键的列表拼接
    pub fn merge(mut self, overrides: ConfigOverrides) -> Self {
        if let Some(prefix) = overrides.prefix {
            self.prefix = prefix;
        }
        if let Some(cache_size) = overrides.cache_size {
            self.cache_size = cache_size;
        }

        merge_map(&mut self.theme, overrides.theme);
        merge_map(&mut self.class_groups, overrides.class_groups);
        merge_map(
            &mut self.conflicting_class_groups,
            overrides.conflicting_class_groups,
        );
        merge_map(
            &mut self.conflicting_class_group_modifiers,
            overrides.conflicting_class_group_modifiers,
        );
        self.order_sensitive_modifiers
            .extend(overrides.order_sensitive_modifiers);

        self
    }

    /// 生效的前缀（空字符串视为无前缀）
    pub fn effective_prefix(&self) -> Option<&str> {
        self.prefix.as_deref().filter(|p| !p.is_empty())
    }

    /// 结构校验：class group id 非空，冲突表只引用已定义的 class group
    ///
    /// 主题引用在展开时校验。
    pub fn validate(&self) -> Result<()> {
        if self.class_groups.keys().any(|id| id.is_empty()) {
            return Err(ConfigError::EmptyClassGroupId);
        }

        for (table, conflicts) in [
            ("conflictingClassGroups", &self.conflicting_class_groups),
            (
                "conflictingClassGroupModifiers",
                &self.conflicting_class_group_modifiers,
            ),
        ] {
            for (group, targets) in conflicts {
                for id in std::iter::once(group).chain(targets) {
                    if !self.class_groups.contains_key(id) {
                        return Err(ConfigError::UnknownClassGroup {
                            table,
                            group: id.clone(),
                        });
                    }
                }
            }
        }

        Ok(())
    }
}

fn merge_map<V>(base: &mut IndexMap<String, Vec<V>>, overrides: IndexMap<String, Vec<V>>) {
    for (key, values) in overrides {
        base.entry(key).or_default().extend(values);
    }
}

/// 调用方提供的配置覆盖项，所有字段可选
///
/// ```
/// use tailmerge_tw_index::{Config, ConfigOverrides};
///
/// let overrides: ConfigOverrides = serde_json::from_str(r#"{
///     "prefix": "tw",
///     "classGroups": { "shadow": [{ "shadow": ["100", "200"] }] }
/// }"#).unwrap();
///
/// let config = Config::default().merge(overrides);
/// assert_eq!(config.effective_prefix(), Some("tw"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct ConfigOverrides {
    #[serde(deserialize_with = "deserialize_replacement")]
    pub prefix: Option<Option<String>>,
    pub cache_size: Option<usize>,
    pub theme: ClassGroups,
    pub class_groups: ClassGroups,
    pub conflicting_class_groups: ConflictTable,
    pub conflicting_class_group_modifiers: ConflictTable,
    pub order_sensitive_modifiers: Vec<String>,
}

/// 区分“字段缺失”（外层 None）和“显式 null”（Some(None)）
fn deserialize_replacement<'de, D>(
    deserializer: D,
) -> std::result::Result<Option<Option<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Some)
}

impl ConfigOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(Some(prefix.into()));
        self
    }

    pub fn without_prefix(mut self) -> Self {
        self.prefix = Some(None);
        self
    }

    pub fn with_cache_size(mut self, cache_size: usize) -> Self {
        self.cache_size = Some(cache_size);
        self
    }

    pub fn extend_theme(
        mut self,
        scale: impl Into<String>,
        definitions: Vec<ClassDefinition>,
    ) -> Self {
        self.theme.entry(scale.into()).or_default().extend(definitions);
        self
    }

    pub fn extend_class_group(
        mut self,
        group: impl Into<String>,
        definitions: Vec<ClassDefinition>,
    ) -> Self {
        self.class_groups
            .entry(group.into())
            .or_default()
            .extend(definitions);
        self
    }

    pub fn with_conflicts<I, S>(mut self, group: impl Into<String>, targets: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.conflicting_class_groups
            .entry(group.into())
            .or_default()
            .extend(targets.into_iter().map(Into::into));
        self
    }

    pub fn with_order_sensitive_modifier(mut self, modifier: impl Into<String>) -> Self {
        self.order_sensitive_modifiers.push(modifier.into());
        self
    }
}
