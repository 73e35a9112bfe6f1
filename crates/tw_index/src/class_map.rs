use log::debug;
use std::collections::HashMap;
use std::fmt;

use crate::config::{Config, ConflictTable};
use crate::error::Result;
use crate::theme::{ResolvedDefinition, ThemeResolver};
use crate::validators::Validator;

/// 类名分段分隔符（`bg-red-500` → `bg`, `red`, `500`）
pub const CLASS_PART_SEPARATOR: char = '-';

const ROOT: usize = 0;

/// class group 在 [`ClassMap`] 中的编号
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GroupIndex(u32);

impl GroupIndex {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for GroupIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Default)]
struct ClassPartNode {
    next: HashMap<String, usize>,
    class_group: Option<GroupIndex>,
    validators: Vec<(Validator, GroupIndex)>,
}

/// 类名前缀树
///
/// 节点存放在一个 `Vec` 中，子节点通过下标引用。构建完成后只读，
/// 可以在多个线程之间共享。
#[derive(Debug)]
pub struct ClassMap {
    nodes: Vec<ClassPartNode>,
    group_names: Vec<String>,
    group_ids: HashMap<String, GroupIndex>,
    conflicts: Vec<Vec<GroupIndex>>,
    modifier_conflicts: Vec<Vec<GroupIndex>>,
}

impl ClassMap {
    /// 从配置构建前缀树
    ///
    /// 先校验配置并展开主题引用，再逐个 class group 挂载定义。
    pub fn new(config: &Config) -> Result<Self> {
        config.validate()?;
        let resolved = ThemeResolver::resolve_class_groups(config)?;

        let group_names: Vec<String> = resolved.keys().map(|id| id.to_string()).collect();
        let group_ids = group_names
            .iter()
            .enumerate()
            .map(|(i, id)| (id.clone(), GroupIndex(i as u32)))
            .collect();

        let mut map = Self {
            nodes: vec![ClassPartNode::default()],
            group_names,
            group_ids,
            conflicts: Vec::new(),
            modifier_conflicts: Vec::new(),
        };

        for (i, definitions) in resolved.values().enumerate() {
            map.add_definitions(ROOT, definitions, GroupIndex(i as u32));
        }

        map.conflicts = map.conflict_vectors(&config.conflicting_class_groups);
        map.modifier_conflicts = map.conflict_vectors(&config.conflicting_class_group_modifiers);

        debug!(
            "Built class map: {} groups, {} nodes",
            map.group_count(),
            map.node_count()
        );
        Ok(map)
    }

    fn add_definitions(
        &mut self,
        node: usize,
        definitions: &[ResolvedDefinition],
        group: GroupIndex,
    ) {
        for definition in definitions {
            match definition {
                ResolvedDefinition::Literal(path) => {
                    let target = if path.is_empty() {
                        node
                    } else {
                        self.part(node, path)
                    };
                    self.nodes[target].class_group = Some(group);
                }
                ResolvedDefinition::Nested(entries) => {
                    for (key, children) in entries {
                        let child = self.part(node, key);
                        self.add_definitions(child, children, group);
                    }
                }
                ResolvedDefinition::Validator(validator) => {
                    self.nodes[node].validators.push((*validator, group));
                }
            }
        }
    }

    /// 沿 `path` 的各分段向下走，缺失的节点即时创建
    fn part(&mut self, node: usize, path: &str) -> usize {
        let mut current = node;
        for segment in path.split(CLASS_PART_SEPARATOR) {
            current = match self.nodes[current].next.get(segment) {
                Some(&child) => child,
                None => {
                    let child = self.nodes.len();
                    self.nodes.push(ClassPartNode::default());
                    self.nodes[current].next.insert(segment.to_string(), child);
                    child
                }
            };
        }
        current
    }

    fn conflict_vectors(&self, table: &ConflictTable) -> Vec<Vec<GroupIndex>> {
        let mut vectors = vec![Vec::new(); self.group_names.len()];
        for (group, targets) in table {
            // 两张冲突表都已在 validate 中检查过
            if let Some(index) = self.group_index(group) {
                vectors[index.index()].extend(targets.iter().filter_map(|t| self.group_index(t)));
            }
        }
        vectors
    }

    /// 在前缀树中查找分段序列所属的 class group
    ///
    /// 1. 分段用完：返回当前节点的 class group
    /// 2. 优先沿字面量子节点继续匹配
    /// 3. 否则按挂载顺序用校验器匹配剩余部分（以 `-` 重新拼接）
    pub fn resolve_parts(&self, parts: &[&str], start: usize) -> Option<GroupIndex> {
        self.resolve_recursive(parts, start, ROOT)
    }

    fn resolve_recursive(&self, parts: &[&str], start: usize, node: usize) -> Option<GroupIndex> {
        let current = &self.nodes[node];
        let Some(part) = parts.get(start) else {
            return current.class_group;
        };

        if let Some(&child) = current.next.get(*part) {
            if let Some(group) = self.resolve_recursive(parts, start + 1, child) {
                return Some(group);
            }
        }

        if current.validators.is_empty() {
            return None;
        }

        let rest = parts[start..].join("-");
        current
            .validators
            .iter()
            .find(|(validator, _)| validator.matches(&rest))
            .map(|(_, group)| *group)
    }

    pub fn group_name(&self, group: GroupIndex) -> &str {
        &self.group_names[group.index()]
    }

    pub fn group_index(&self, name: &str) -> Option<GroupIndex> {
        self.group_ids.get(name).copied()
    }

    /// `group` 胜出后需要一并屏蔽的 class group
    ///
    /// 后缀修饰符生效时追加修饰符冲突表中的条目。
    pub fn conflicting_groups(
        &self,
        group: GroupIndex,
        has_postfix_modifier: bool,
    ) -> impl Iterator<Item = GroupIndex> + '_ {
        let modifiers: &[GroupIndex] = if has_postfix_modifier {
            &self.modifier_conflicts[group.index()]
        } else {
            &[]
        };
        self.conflicts[group.index()].iter().chain(modifiers).copied()
    }

    pub fn group_count(&self) -> usize {
        self.group_names.len()
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }
}
