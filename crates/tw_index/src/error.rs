use thiserror::Error;

/// 配置构建错误
///
/// 只在构建引擎时出现，说明集成方提供的配置有问题。
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("JSON configuration error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Class group id must not be empty")]
    EmptyClassGroupId,

    #[error("Class group '{group}' references unknown theme scale '{scale}'")]
    UnknownThemeScale { group: String, scale: String },

    #[error("Theme scale '{scale}' references itself (via {path})")]
    ThemeCycle { scale: String, path: String },

    #[error("Conflict table '{table}' references unknown class group '{group}'")]
    UnknownClassGroup { table: &'static str, group: String },
}

pub type Result<T> = std::result::Result<T, ConfigError>;
