use log::trace;
use std::collections::HashSet;
use tailmerge_tw_index::{ClassGroup, ClassMap, Config, ConfigError};
use tailmerge_tw_parse::{ClassNameParser, ModifierSorter, ParsedClassName};

/// 冲突键：排序后的修饰符、是否 important、class group
type ConflictKey<'a> = (String, bool, ClassGroup<'a>);

/// 类名列表合并器
///
/// 从后往前扫描：后出现的类名优先，先出现且冲突键已被占用的类名被丢弃，
/// 无法识别的类名原样保留。输出保持输入中的相对顺序。
#[derive(Debug)]
pub struct ClassListMerger {
    parser: ClassNameParser,
    class_map: ClassMap,
    sorter: ModifierSorter,
}

impl ClassListMerger {
    pub fn new(config: &Config) -> Result<Self, ConfigError> {
        Ok(Self {
            parser: ClassNameParser::new(config.effective_prefix().map(String::from)),
            class_map: ClassMap::new(config)?,
            sorter: ModifierSorter::new(&config.order_sensitive_modifiers),
        })
    }

    pub fn class_map(&self) -> &ClassMap {
        &self.class_map
    }

    /// 合并以空白分隔的类名列表
    ///
    /// ```
    /// use tailmerge_core::ClassListMerger;
    /// use tailmerge_tw_index::Config;
    ///
    /// let merger = ClassListMerger::new(&Config::default()).unwrap();
    /// assert_eq!(merger.merge("px-2 py-1 bg-red hover:bg-dark-red p-3 bg-[#B91C1C]"), "hover:bg-dark-red p-3 bg-[#B91C1C]");
    /// ```
    pub fn merge(&self, class_list: &str) -> String {
        let mut seen: HashSet<ConflictKey<'_>> = HashSet::new();
        let mut kept: Vec<&str> = Vec::new();

        for class_name in class_list.split_whitespace().rev() {
            if self.claim(class_name, &mut seen) {
                kept.push(class_name);
            }
        }

        kept.reverse();
        kept.join(" ")
    }

    /// 为类名登记冲突键；键已被后面的类名占用时返回 false
    fn claim<'a>(&self, class_name: &'a str, seen: &mut HashSet<ConflictKey<'a>>) -> bool {
        let parsed = self.parser.parse(class_name);
        if parsed.is_external {
            return true;
        }

        let Some((group, has_postfix_modifier)) = self.resolve(&parsed) else {
            return true;
        };

        let modifier_id = self.sorter.modifier_key(&parsed.modifiers);
        let important = parsed.has_important_modifier;

        if !seen.insert((modifier_id.clone(), important, group)) {
            trace!(
                "Dropping '{}': {} already set by a later class",
                class_name,
                self.class_map.group_label(group)
            );
            return false;
        }

        if let ClassGroup::Known(index) = group {
            for conflict in self.class_map.conflicting_groups(index, has_postfix_modifier) {
                seen.insert((modifier_id.clone(), important, ClassGroup::Known(conflict)));
            }
        }

        true
    }

    fn resolve<'a>(&self, parsed: &ParsedClassName<'a>) -> Option<(ClassGroup<'a>, bool)> {
        self.class_map
            .resolve_class_group(parsed.base_class_name, parsed.postfix_modifier_position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tailmerge_tw_index::ConfigOverrides;

    fn merger() -> ClassListMerger {
        ClassListMerger::new(&Config::default()).unwrap()
    }

    #[test]
    fn test_last_wins() {
        let merger = merger();
        assert_eq!(merger.merge("p-2 p-4"), "p-4");
        assert_eq!(merger.merge("text-sm text-lg"), "text-lg");
        assert_eq!(merger.merge("bg-red-500 bg-blue-500"), "bg-blue-500");
    }

    #[test]
    fn test_broader_overrides_narrower() {
        let merger = merger();
        assert_eq!(merger.merge("px-2 p-4"), "p-4");
        assert_eq!(merger.merge("p-4 px-2"), "p-4 px-2");
        assert_eq!(merger.merge("pt-2 pr-3 px-4"), "pt-2 px-4");
    }

    #[test]
    fn test_modifiers_scope_conflicts() {
        let merger = merger();
        assert_eq!(merger.merge("hover:p-2 p-4"), "hover:p-2 p-4");
        assert_eq!(merger.merge("hover:p-2 hover:p-4"), "hover:p-4");
        assert_eq!(
            merger.merge("hover:focus:p-2 focus:hover:p-4"),
            "focus:hover:p-4"
        );
    }

    #[test]
    fn test_important_scopes_conflicts() {
        let merger = merger();
        assert_eq!(merger.merge("p-2 p-4!"), "p-2 p-4!");
        assert_eq!(merger.merge("p-2! p-4!"), "p-4!");
        assert_eq!(merger.merge("!p-2 p-4!"), "p-4!");
    }

    #[test]
    fn test_unknown_classes_pass_through() {
        let merger = merger();
        assert_eq!(merger.merge("custom-class p-4"), "custom-class p-4");
        assert_eq!(merger.merge("foo foo"), "foo foo");
    }

    #[test]
    fn test_whitespace_is_normalised() {
        let merger = merger();
        assert_eq!(merger.merge("  p-2 \n\t p-4  "), "p-4");
        assert_eq!(merger.merge(""), "");
        assert_eq!(merger.merge("   "), "");
    }

    #[test]
    fn test_postfix_modifier() {
        let merger = merger();
        assert_eq!(merger.merge("text-lg/7 leading-9 text-sm/8"), "text-sm/8");
        assert_eq!(merger.merge("text-lg/7 leading-9"), "text-lg/7 leading-9");
        assert_eq!(merger.merge("leading-9 text-lg/7"), "text-lg/7");
        assert_eq!(merger.merge("bg-red-500/50 bg-blue-500"), "bg-blue-500");
        assert_eq!(merger.merge("w-1/2 w-full"), "w-full");
    }

    #[test]
    fn test_arbitrary_properties() {
        let merger = merger();
        assert_eq!(
            merger.merge("[mask-type:luminance] [mask-type:alpha]"),
            "[mask-type:alpha]"
        );
        assert_eq!(
            merger.merge("[mask-type:luminance] [--scroll-offset:56px]"),
            "[mask-type:luminance] [--scroll-offset:56px]"
        );
        assert_eq!(
            merger.merge("hover:[paint-order:markers] [paint-order:normal]"),
            "hover:[paint-order:markers] [paint-order:normal]"
        );
    }

    #[test]
    fn test_order_sensitive_modifiers() {
        let merger = merger();
        assert_eq!(
            merger.merge("before:hover:p-2 hover:before:p-4"),
            "before:hover:p-2 hover:before:p-4"
        );
        assert_eq!(
            merger.merge("hover:focus:before:p-2 focus:hover:before:p-4"),
            "focus:hover:before:p-4"
        );
    }

    #[test]
    fn test_negative_values() {
        let merger = merger();
        assert_eq!(merger.merge("-m-2 m-4"), "m-4");
        assert_eq!(merger.merge("-top-2 inset-0"), "inset-0");
    }

    #[test]
    fn test_prefix() {
        let config = Config::default().merge(ConfigOverrides::new().with_prefix("tw"));
        let merger = ClassListMerger::new(&config).unwrap();

        assert_eq!(merger.merge("tw:p-2 other-class"), "tw:p-2 other-class");
        assert_eq!(merger.merge("tw:p-2 tw:p-4"), "tw:p-4");
        assert_eq!(merger.merge("p-2 p-4"), "p-2 p-4");
        assert_eq!(merger.merge("tw:hover:p-2 tw:hover:p-4"), "tw:hover:p-4");
    }

    #[test]
    fn test_idempotent() {
        let merger = merger();
        for input in [
            "p-2 px-4 p-3 hover:p-1",
            "text-lg/7 leading-9 text-sm",
            "tw:p-2 foo bar p-4!",
        ] {
            let once = merger.merge(input);
            assert_eq!(merger.merge(&once), once);
        }
    }
}
