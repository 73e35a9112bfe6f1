use crate::config::{Config, ConfigOverrides};
use crate::error::Result;

/// 从 JSON 字符串加载配置覆盖项
///
/// JSON 格式示例：
/// ```json
/// {
///   "prefix": "tw",
///   "theme": { "spacing": ["huge"] },
///   "classGroups": {
///     "shadow": [{ "shadow": ["100", { "$validator": "number" }] }]
///   },
///   "conflictingClassGroups": { "p": ["px"] }
/// }
/// ```
pub fn load_overrides_from_json(json_str: &str) -> Result<ConfigOverrides> {
    Ok(serde_json::from_str(json_str)?)
}

/// 加载 JSON 覆盖项并合并到默认配置上
///
/// 返回前会做结构校验，主题引用在构建 [`ClassMap`](crate::ClassMap) 时校验。
pub fn load_config_from_json(json_str: &str) -> Result<Config> {
    let config = Config::default().merge(load_overrides_from_json(json_str)?);
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::definition::ClassDefinition;
    use crate::error::ConfigError;
    use crate::validators::Validator;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_load_overrides_basic() {
        let json = r#"{
            "prefix": "tw",
            "classGroups": {
                "shadow": [{ "shadow": ["100", { "$validator": "number" }] }]
            }
        }"#;

        let overrides = load_overrides_from_json(json).unwrap();
        assert_eq!(overrides.prefix, Some(Some("tw".to_string())));
        assert_eq!(
            overrides.class_groups["shadow"],
            vec![ClassDefinition::nest(
                "shadow",
                vec![
                    ClassDefinition::literal("100"),
                    ClassDefinition::Validator(Validator::Number),
                ]
            )]
        );
    }

    #[test]
    fn test_load_config_extends_defaults() {
        let config =
            load_config_from_json(r#"{ "conflictingClassGroups": { "p": ["m"] } }"#).unwrap();
        let defaults = Config::default();

        assert_eq!(config.class_groups.len(), defaults.class_groups.len());
        assert_eq!(
            config.conflicting_class_groups["p"].last().map(String::as_str),
            Some("m")
        );
        assert_eq!(
            config.conflicting_class_groups["p"].len(),
            defaults.conflicting_class_groups["p"].len() + 1
        );
    }

    #[test]
    fn test_load_config_empty_object() {
        let config = load_config_from_json("{}").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_load_invalid_json() {
        assert!(matches!(
            load_config_from_json("invalid json"),
            Err(ConfigError::Json(_))
        ));
    }

    #[test]
    fn test_load_unknown_validator() {
        let json = r#"{ "classGroups": { "w": [{ "w": [{ "$validator": "huge" }] }] } }"#;
        assert!(matches!(load_overrides_from_json(json), Err(ConfigError::Json(_))));
    }

    #[test]
    fn test_load_unknown_conflict_group() {
        let json = r#"{ "conflictingClassGroups": { "p": ["not-a-group"] } }"#;
        assert!(matches!(
            load_config_from_json(json),
            Err(ConfigError::UnknownClassGroup { .. })
        ));
    }
}
