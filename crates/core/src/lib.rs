pub mod cache;
pub mod engine;
pub mod merge;
pub mod types;

// Re-export commonly used types
pub use cache::{cache_key, CacheError, MemoryCache, MergeCache};
pub use engine::{TailwindMerge, TailwindMergeBuilder};
pub use merge::ClassListMerger;
pub use types::ClassValue;

pub use tailmerge_tw_index::{Config, ConfigError, ConfigOverrides};
