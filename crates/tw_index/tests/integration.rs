use pretty_assertions::assert_eq;
use tailmerge_tw_index::{load_config_from_json, ClassGroup, ClassMap, Config, ConfigError};

fn label(map: &ClassMap, class: &str) -> Option<String> {
    map.class_group_id(class)
        .map(|group| map.group_label(group).into_owned())
}

#[test]
fn test_default_class_map() {
    let map = ClassMap::new(&Config::default()).expect("Failed to build default class map");

    println!(
        "Default class map: {} groups, {} nodes",
        map.group_count(),
        map.node_count()
    );
    assert!(map.group_count() > 300, "Expected more than 300 groups, got {}", map.group_count());

    let cases = [
        ("absolute", Some("position")),
        ("flex", Some("display")),
        ("p-4", Some("p")),
        ("px-2.5", Some("px")),
        ("-mt-2", Some("mt")),
        ("-inset-x-1", Some("inset-x")),
        ("bg-red-500", Some("bg-color")),
        ("bg-fixed", Some("bg-attachment")),
        ("text-lg", Some("font-size")),
        ("text-red-500", Some("text-color")),
        ("leading-7", Some("leading")),
        ("shadow-lg", Some("shadow")),
        ("shadow-red-500", Some("shadow-color")),
        ("border-2", Some("border-w")),
        ("border-red-500", Some("border-color")),
        ("w-1/2", Some("w")),
        ("z-10", Some("z")),
        ("[mask-type:luminance]", Some("arbitrary..mask-type")),
        ("custom-class", None),
        ("p-auto", None),
    ];

    for (class, expected) in cases {
        assert_eq!(label(&map, class).as_deref(), expected, "class: {}", class);
    }
}

#[test]
fn test_postfix_resolution() {
    let map = ClassMap::new(&Config::default()).unwrap();

    // `text-lg/7`：前缀 `text-lg` 命中，后缀生效
    let (group, has_postfix) = map.resolve_class_group("text-lg/7", Some(7)).unwrap();
    assert_eq!(map.group_label(group), "font-size");
    assert!(has_postfix);

    // `w-1/2`：前缀 `w-1` 也能命中，按前缀处理
    let (group, _) = map.resolve_class_group("w-1/2", Some(3)).unwrap();
    assert_eq!(map.group_label(group), "w");

    // 前缀和完整类名都不认识
    assert_eq!(map.resolve_class_group("foo-bar/50", Some(7)), None);
}

#[test]
fn test_json_config_extends_default() {
    let json = r#"{
        "theme": { "spacing": ["gutter"] },
        "classGroups": {
            "elevation": [{ "elevation": ["low", "high", { "$validator": "integer" }] }]
        }
    }"#;
    let config = load_config_from_json(json).expect("Failed to load JSON config");
    let map = ClassMap::new(&config).unwrap();

    assert_eq!(label(&map, "p-gutter").as_deref(), Some("p"));
    assert_eq!(label(&map, "elevation-high").as_deref(), Some("elevation"));
    assert_eq!(label(&map, "elevation-3").as_deref(), Some("elevation"));
    assert_eq!(label(&map, "elevation-mid"), None);
}

#[test]
fn test_json_config_errors() {
    let json = r#"{ "classGroups": { "w2": [{ "$theme": "missing" }] } }"#;
    let config = load_config_from_json(json).unwrap();
    assert!(matches!(
        ClassMap::new(&config),
        Err(ConfigError::UnknownThemeScale { .. })
    ));

    let json = r#"{
        "theme": { "a": [{ "$theme": "b" }], "b": [{ "$theme": "a" }] },
        "classGroups": { "loop": [{ "loop": [{ "$theme": "a" }] }] }
    }"#;
    let config = load_config_from_json(json).unwrap();
    assert!(matches!(
        ClassMap::new(&config),
        Err(ConfigError::ThemeCycle { .. })
    ));
}

#[test]
fn test_arbitrary_property_groups() {
    let map = ClassMap::new(&Config::default()).unwrap();
    assert_eq!(
        map.class_group_id("[--scroll-offset:56px]"),
        Some(ClassGroup::ArbitraryProperty("--scroll-offset"))
    );
    assert_eq!(map.class_group_id("[0:value]"), None);
    assert_eq!(map.class_group_id("[novalue]"), None);
}
