use indexmap::IndexMap;
use std::collections::HashMap;

use crate::config::{ClassGroups, Config};
use crate::definition::ClassDefinition;
use crate::error::{ConfigError, Result};
use crate::validators::Validator;

/// 展开主题引用之后的定义（不再包含 `Theme`）
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolvedDefinition {
    Literal(String),
    Nested(Vec<(String, Vec<ResolvedDefinition>)>),
    Validator(Validator),
}

/// 主题展开器
///
/// 构建阶段的第一步：把所有 `ClassDefinition::Theme` 替换成对应刻度的定义列表，
/// 刻度之间可以互相引用，每个刻度只展开一次。
pub struct ThemeResolver<'a> {
    theme: &'a ClassGroups,
    resolved: HashMap<&'a str, Vec<ResolvedDefinition>>,
    stack: Vec<&'a str>,
}

impl<'a> ThemeResolver<'a> {
    pub fn new(theme: &'a ClassGroups) -> Self {
        Self {
            theme,
            resolved: HashMap::new(),
            stack: Vec::new(),
        }
    }

    /// 展开配置中所有 class group
    pub fn resolve_class_groups(
        config: &'a Config,
    ) -> Result<IndexMap<&'a str, Vec<ResolvedDefinition>>> {
        let mut resolver = ThemeResolver::new(&config.theme);
        let mut groups = IndexMap::with_capacity(config.class_groups.len());

        for (group, definitions) in &config.class_groups {
            let resolved = resolver.resolve_all(group, definitions)?;
            groups.insert(group.as_str(), resolved);
        }

        Ok(groups)
    }

    /// 展开一组定义；`group` 只用于错误信息
    pub fn resolve_all(
        &mut self,
        group: &str,
        definitions: &'a [ClassDefinition],
    ) -> Result<Vec<ResolvedDefinition>> {
        let mut out = Vec::with_capacity(definitions.len());
        for definition in definitions {
            self.resolve_into(group, definition, &mut out)?;
        }
        Ok(out)
    }

    fn resolve_into(
        &mut self,
        group: &str,
        definition: &'a ClassDefinition,
        out: &mut Vec<ResolvedDefinition>,
    ) -> Result<()> {
        match definition {
            ClassDefinition::Literal(value) => out.push(ResolvedDefinition::Literal(value.clone())),
            ClassDefinition::Validator(validator) => {
                out.push(ResolvedDefinition::Validator(*validator))
            }
            ClassDefinition::Nested(map) => {
                let mut entries = Vec::with_capacity(map.len());
                for (key, children) in map {
                    entries.push((key.clone(), self.resolve_all(group, children)?));
                }
                out.push(ResolvedDefinition::Nested(entries));
            }
            ClassDefinition::Theme(scale) => {
                let expanded = self.resolve_scale(group, scale)?;
                out.extend(expanded);
            }
        }
        Ok(())
    }

    fn resolve_scale(&mut self, group: &str, scale: &str) -> Result<Vec<ResolvedDefinition>> {
        if let Some(resolved) = self.resolved.get(scale) {
            return Ok(resolved.clone());
        }

        let (key, definitions) = self
            .theme
            .get_key_value(scale)
            .ok_or_else(|| ConfigError::UnknownThemeScale {
                group: group.to_string(),
                scale: scale.to_string(),
            })?;

        if self.stack.contains(&key.as_str()) {
            let mut path = self.stack.join(" -> ");
            path.push_str(" -> ");
            path.push_str(key);
            return Err(ConfigError::ThemeCycle {
                scale: key.clone(),
                path,
            });
        }

        self.stack.push(key);
        let resolved = self.resolve_all(group, definitions);
        self.stack.pop();

        let resolved = resolved?;
        self.resolved.insert(key, resolved.clone());
        Ok(resolved)
    }
}
