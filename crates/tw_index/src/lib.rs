pub mod class_map;
pub mod config;
pub mod default_config;
pub mod definition;
pub mod error;
pub mod group;
pub mod loader;
pub mod theme;
pub mod validators;

// Re-export main types
pub use class_map::{ClassMap, GroupIndex, CLASS_PART_SEPARATOR};
pub use config::{ClassGroups, Config, ConfigOverrides, ConflictTable, DEFAULT_CACHE_SIZE};
pub use default_config::default_config;
pub use definition::ClassDefinition;
pub use error::ConfigError;
pub use group::{ClassGroup, ARBITRARY_PROPERTY_PREFIX};
pub use loader::{load_config_from_json, load_overrides_from_json};
pub use theme::{ResolvedDefinition, ThemeResolver};
pub use validators::Validator;
