use log::{debug, warn};
use std::time::Duration;
use tailmerge_tw_index::{Config, ConfigError, ConfigOverrides};
use tailmerge_tw_parse::MODIFIER_SEPARATOR;

use crate::cache::{cache_key, MemoryCache, MergeCache};
use crate::merge::ClassListMerger;
use crate::types::ClassValue;

/// Tailwind 类名合并引擎
///
/// 构建后不可变，可在线程间共享。每个集成方自己持有实例，没有全局单例。
///
/// ```
/// use tailmerge_core::TailwindMerge;
///
/// let tw = TailwindMerge::with_defaults().unwrap();
/// assert_eq!(tw.merge("px-2 py-1 p-3"), "p-3");
/// assert_eq!(tw.modify("hover", "p-2 p-4"), "hover:p-4");
/// ```
pub struct TailwindMerge {
    merger: ClassListMerger,
    cache: Option<Box<dyn MergeCache>>,
    cache_ttl: Option<Duration>,
}

impl std::fmt::Debug for TailwindMerge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TailwindMerge")
            .field("merger", &self.merger)
            .field("cache", &self.cache.is_some())
            .field("cache_ttl", &self.cache_ttl)
            .finish()
    }
}

impl TailwindMerge {
    pub fn builder() -> TailwindMergeBuilder {
        TailwindMergeBuilder::default()
    }

    /// 使用完整配置构建，不带缓存
    pub fn build(config: Config) -> Result<Self, ConfigError> {
        Self::from_parts(&config, None, None)
    }

    pub fn with_defaults() -> Result<Self, ConfigError> {
        Self::build(Config::default())
    }

    fn from_parts(
        config: &Config,
        cache: Option<Box<dyn MergeCache>>,
        cache_ttl: Option<Duration>,
    ) -> Result<Self, ConfigError> {
        let merger = ClassListMerger::new(config)?;
        debug!(
            "Tailwind merge engine ready (prefix: {:?}, cache: {})",
            config.effective_prefix(),
            cache.is_some()
        );

        Ok(Self {
            merger,
            cache,
            cache_ttl,
        })
    }

    /// 合并类名列表，后出现的类名覆盖先出现的冲突类名
    pub fn merge(&self, class_list: &str) -> String {
        let Some(cache) = &self.cache else {
            return self.merger.merge(class_list);
        };

        let normalized = normalize(class_list);
        let key = cache_key(&normalized);

        match cache.get(&key) {
            Ok(Some(cached)) => {
                debug!("Cache hit for '{}'", normalized);
                return cached;
            }
            Ok(None) => debug!("Cache miss for '{}'", normalized),
            Err(e) => warn!("Cache lookup failed, merging without cache: {}", e),
        }

        let merged = self.merger.merge(&normalized);

        if let Err(e) = cache.set(&key, &merged, self.cache_ttl) {
            warn!("Failed to store merge result in cache: {}", e);
        }

        merged
    }

    /// 展开字符串 / 列表 / 条件对象后合并
    pub fn merge_values(&self, values: &[ClassValue]) -> String {
        self.merge(&ClassValue::flatten_all(values))
    }

    /// 给每个类名加上同一个修饰符后合并
    ///
    /// `modify("hover", "p-2 p-4")` 等价于 `merge("hover:p-2 hover:p-4")`。
    pub fn modify(&self, modifier: &str, classes: &str) -> String {
        let modified: Vec<String> = classes
            .split_whitespace()
            .map(|class| format!("{}{}{}", modifier, MODIFIER_SEPARATOR, class))
            .collect();
        self.merge(&modified.join(" "))
    }

    pub fn class_list_merger(&self) -> &ClassListMerger {
        &self.merger
    }
}

fn normalize(class_list: &str) -> String {
    class_list.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// [`TailwindMerge`] 构建器
///
/// ```
/// use tailmerge_core::{MemoryCache, TailwindMerge};
/// use tailmerge_tw_index::ConfigOverrides;
///
/// let tw = TailwindMerge::builder()
///     .with_configuration(ConfigOverrides::new().with_prefix("tw"))
///     .with_cache(MemoryCache::new(100))
///     .build()
///     .unwrap();
///
/// assert_eq!(tw.merge("tw:p-2 tw:p-4 p-1"), "tw:p-4 p-1");
/// ```
#[derive(Default)]
pub struct TailwindMergeBuilder {
    overrides: Vec<ConfigOverrides>,
    cache: Option<Box<dyn MergeCache>>,
    memory_cache: bool,
    cache_ttl: Option<Duration>,
}

impl TailwindMergeBuilder {
    /// 追加配置覆盖项，多次调用按顺序合并
    pub fn with_configuration(mut self, overrides: ConfigOverrides) -> Self {
        self.overrides.push(overrides);
        self
    }

    pub fn with_cache(mut self, cache: impl MergeCache + 'static) -> Self {
        self.cache = Some(Box::new(cache));
        self
    }

    /// 使用进程内缓存，容量取配置中的 `cacheSize`
    pub fn with_memory_cache(mut self) -> Self {
        self.memory_cache = true;
        self
    }

    pub fn with_cache_ttl(mut self, ttl: Duration) -> Self {
        self.cache_ttl = Some(ttl);
        self
    }

    pub fn build(self) -> Result<TailwindMerge, ConfigError> {
        let config = self
            .overrides
            .into_iter()
            .fold(Config::default(), Config::merge);

        let cache = match self.cache {
            Some(cache) => Some(cache),
            None if self.memory_cache => {
                Some(Box::new(MemoryCache::new(config.cache_size)) as Box<dyn MergeCache>)
            }
            None => None,
        };

        TailwindMerge::from_parts(&config, cache, self.cache_ttl)
    }
}
