use std::borrow::Cow;

use crate::class_map::{ClassMap, GroupIndex, CLASS_PART_SEPARATOR};

/// 任意属性 class group 的名字前缀（两个点，和插件的单点前缀区分开）
pub const ARBITRARY_PROPERTY_PREFIX: &str = "arbitrary..";

/// 类名所属的 class group
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClassGroup<'a> {
    /// 配置中定义的 class group
    Known(GroupIndex),
    /// `[prop:value]` 形式的任意属性，按属性名分组
    ArbitraryProperty(&'a str),
}

impl ClassMap {
    /// 查找基础类名（不含修饰符和后缀）所属的 class group
    ///
    /// ```
    /// use tailmerge_tw_index::{ClassGroup, ClassMap, Config};
    ///
    /// let map = ClassMap::new(&Config::default()).unwrap();
    /// let group = map.class_group_id("-inset-x-1").unwrap();
    /// assert_eq!(map.group_label(group), "inset-x");
    /// assert_eq!(map.class_group_id("[mask-type:luminance]"), Some(ClassGroup::ArbitraryProperty("mask-type")));
    /// ```
    pub fn class_group_id<'a>(&self, class: &'a str) -> Option<ClassGroup<'a>> {
        if class.len() >= 2 && class.starts_with('[') && class.ends_with(']') {
            return arbitrary_property(class);
        }

        let parts: Vec<&str> = class.split(CLASS_PART_SEPARATOR).collect();
        // `-inset-1` 之类的负值以空分段开头，跳过
        let start = usize::from(parts.len() > 1 && parts[0].is_empty());

        self.resolve_parts(&parts, start).map(ClassGroup::Known)
    }

    /// 带后缀修饰符时的查找
    ///
    /// 先用 `/` 之前的部分查找；找不到再用完整类名（如 `w-1/2` 的分数），
    /// 此时后缀修饰符视为不存在。返回值的第二项表示后缀修饰符是否仍然生效。
    pub fn resolve_class_group<'a>(
        &self,
        base_class_name: &'a str,
        postfix_modifier_position: Option<usize>,
    ) -> Option<(ClassGroup<'a>, bool)> {
        if let Some(prefix) = postfix_modifier_position.and_then(|pos| base_class_name.get(..pos)) {
            if let Some(group) = self.class_group_id(prefix) {
                return Some((group, true));
            }
        }

        self.class_group_id(base_class_name)
            .map(|group| (group, false))
    }

    /// class group 的名字；任意属性为 `arbitrary..<prop>`
    pub fn group_label<'a>(&'a self, group: ClassGroup<'a>) -> Cow<'a, str> {
        match group {
            ClassGroup::Known(index) => Cow::Borrowed(self.group_name(index)),
            ClassGroup::ArbitraryProperty(property) => {
                Cow::Owned(format!("{}{}", ARBITRARY_PROPERTY_PREFIX, property))
            }
        }
    }
}

fn arbitrary_property(class: &str) -> Option<ClassGroup<'_>> {
    let content = &class[1..class.len() - 1];
    let (property, _) = content.split_once(':')?;

    if property.is_empty() || property == "0" {
        return None;
    }
    Some(ClassGroup::ArbitraryProperty(property))
}
