use indexmap::IndexMap;
use std::sync::{Mutex, PoisonError};
use std::time::{Duration, Instant};
use thiserror::Error;

/// 缓存 key 的固定前缀
const CACHE_KEY_PREFIX: &str = "tailwind-merge-";

#[derive(Debug, Error)]
pub enum CacheError {
    #[error("Cache lock poisoned")]
    Poisoned,

    #[error("Cache backend error: {0}")]
    Backend(String),
}

/// 合并结果缓存
///
/// 所有操作都可能失败；引擎把失败当作未命中处理，只记录日志。
pub trait MergeCache: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, CacheError>;

    fn set(&self, key: &str, value: &str, ttl: Option<Duration>) -> Result<(), CacheError>;

    fn has(&self, key: &str) -> Result<bool, CacheError> {
        Ok(self.get(key)?.is_some())
    }
}

/// 计算缓存 key：`"tailwind-merge-" + 输入` 的 blake3 十六进制摘要
pub fn cache_key(class_list: &str) -> String {
    let mut hasher = blake3::Hasher::new();
    hasher.update(CACHE_KEY_PREFIX.as_bytes());
    hasher.update(class_list.as_bytes());
    format!("{}", hasher.finalize())
}

#[derive(Debug)]
struct Entry {
    value: String,
    expires_at: Option<Instant>,
}

impl Entry {
    fn is_expired(&self) -> bool {
        // 没有 TTL 时不读时钟（wasm32 上 Instant::now 不可用）
        self.expires_at.is_some_and(|at| Instant::now() >= at)
    }
}

/// 进程内缓存
///
/// 容量满时淘汰最早插入的条目。
#[derive(Debug)]
pub struct MemoryCache {
    capacity: usize,
    entries: Mutex<IndexMap<String, Entry>>,
}

impl MemoryCache {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            entries: Mutex::new(IndexMap::with_capacity(capacity)),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) -> Result<(), CacheError> {
        self.entries.lock().map_err(|_| CacheError::Poisoned)?.clear();
        Ok(())
    }
}

impl Default for MemoryCache {
    fn default() -> Self {
        Self::new(tailmerge_tw_index::DEFAULT_CACHE_SIZE)
    }
}

impl MergeCache for MemoryCache {
    fn get(&self, key: &str) -> Result<Option<String>, CacheError> {
        let mut entries = self.entries.lock().map_err(|_| CacheError::Poisoned)?;

        let Some(entry) = entries.get(key) else {
            return Ok(None);
        };
        if !entry.is_expired() {
            return Ok(Some(entry.value.clone()));
        }

        entries.shift_remove(key);
        Ok(None)
    }

    fn set(&self, key: &str, value: &str, ttl: Option<Duration>) -> Result<(), CacheError> {
        if self.capacity == 0 {
            return Ok(());
        }

        let mut entries = self.entries.lock().map_err(|_| CacheError::Poisoned)?;

        if !entries.contains_key(key) {
            while entries.len() >= self.capacity {
                entries.shift_remove_index(0);
            }
        }

        entries.insert(
            key.to_string(),
            Entry {
                value: value.to_string(),
                // 溢出的 TTL（如 `Duration::MAX`）视为永不过期
                expires_at: ttl.and_then(|ttl| Instant::now().checked_add(ttl)),
            },
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_cache_key_stability() {
        let key1 = cache_key("p-2 p-4");
        let key2 = cache_key("p-2 p-4");
        assert_eq!(key1, key2);
        assert_eq!(key1.len(), 64);
        assert!(key1.chars().all(|c| c.is_ascii_hexdigit()));
        assert_ne!(key1, cache_key("p-4 p-2"));
    }

    #[test]
    fn test_cache_key_is_prefixed() {
        let expected = blake3::hash(b"tailwind-merge-p-4");
        assert_eq!(cache_key("p-4"), expected.to_hex().to_string());
    }

    #[test]
    fn test_memory_cache_get_set() {
        let cache = MemoryCache::new(10);
        assert_eq!(cache.get("a").unwrap(), None);
        assert!(!cache.has("a").unwrap());

        cache.set("a", "p-4", None).unwrap();
        assert_eq!(cache.get("a").unwrap().as_deref(), Some("p-4"));
        assert!(cache.has("a").unwrap());
    }

    #[test]
    fn test_memory_cache_evicts_oldest() {
        let cache = MemoryCache::new(2);
        cache.set("a", "1", None).unwrap();
        cache.set("b", "2", None).unwrap();
        cache.set("c", "3", None).unwrap();

        assert_eq!(cache.len(), 2);
        assert_eq!(cache.get("a").unwrap(), None);
        assert_eq!(cache.get("b").unwrap().as_deref(), Some("2"));
        assert_eq!(cache.get("c").unwrap().as_deref(), Some("3"));
    }

    #[test]
    fn test_memory_cache_overwrite_does_not_evict() {
        let cache = MemoryCache::new(2);
        cache.set("a", "1", None).unwrap();
        cache.set("b", "2", None).unwrap();
        cache.set("a", "3", None).unwrap();

        assert_eq!(cache.len(), 2);
        assert_eq!(cache.get("a").unwrap().as_deref(), Some("3"));
        assert_eq!(cache.get("b").unwrap().as_deref(), Some("2"));
    }

    #[test]
    fn test_memory_cache_ttl() {
        let cache = MemoryCache::new(2);
        cache.set("a", "1", Some(Duration::ZERO)).unwrap();
        cache.set("b", "2", Some(Duration::from_secs(3600))).unwrap();

        assert_eq!(cache.get("a").unwrap(), None);
        assert_eq!(cache.len(), 1);
        assert_eq!(cache.get("b").unwrap().as_deref(), Some("2"));
    }

    #[test]
    fn test_memory_cache_unbounded_ttl() {
        let cache = MemoryCache::new(2);
        cache.set("a", "1", Some(Duration::MAX)).unwrap();
        assert_eq!(cache.get("a").unwrap().as_deref(), Some("1"));
    }

    #[test]
    fn test_memory_cache_len_after_poison() {
        let cache = std::sync::Arc::new(MemoryCache::new(2));
        cache.set("a", "1", None).unwrap();

        let poisoner = cache.clone();
        let _ = std::thread::spawn(move || {
            let _guard = poisoner.entries.lock().unwrap();
            panic!("poison the cache lock");
        })
        .join();

        assert_eq!(cache.len(), 1);
        assert!(!cache.is_empty());
        assert!(matches!(cache.get("a"), Err(CacheError::Poisoned)));
    }

    #[test]
    fn test_memory_cache_zero_capacity() {
        let cache = MemoryCache::new(0);
        cache.set("a", "1", None).unwrap();
        assert!(cache.is_empty());
    }
}
