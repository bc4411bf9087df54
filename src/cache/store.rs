use chrono::{DateTime, Duration, Utc};
use dashmap::DashMap;

/// 默认缓存过期时间（秒）
pub const DEFAULT_TTL_SECS: i64 = 60 * 20;

/// 缓存条目，写入后不再修改，只会被整体替换或删除
#[derive(Debug, Clone)]
pub struct CacheEntry<V> {
    pub data: V,
    pub created_at: DateTime<Utc>,
    pub ttl: Duration,
}

impl<V> CacheEntry<V> {
    fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now - self.created_at > self.ttl
    }
}

/// 进程内共享的 TTL 缓存
///
/// 过期条目在读取时惰性删除；`purge_expired` 供后台清理任务使用。
#[derive(Debug)]
pub struct CacheStore<V> {
    entries: DashMap<String, CacheEntry<V>>,
    default_ttl: Duration,
}

impl<V: Clone> Default for CacheStore<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Clone> CacheStore<V> {
    pub fn new() -> Self {
        Self::with_default_ttl(Duration::seconds(DEFAULT_TTL_SECS))
    }

    pub fn with_default_ttl(default_ttl: Duration) -> Self {
        Self {
            entries: DashMap::new(),
            default_ttl,
        }
    }

    pub fn get(&self, key: &str) -> Option<V> {
        self.get_at(key, Utc::now())
    }

    pub fn get_at(&self, key: &str, now: DateTime<Utc>) -> Option<V> {
        {
            let entry = self.entries.get(key)?;
            if !entry.is_expired(now) {
                return Some(entry.data.clone());
            }
        }
        // 读锁已释放，再删除过期条目
        self.entries.remove_if(key, |_, entry| entry.is_expired(now));
        None
    }

    pub fn set(&self, key: impl Into<String>, data: V) {
        self.set_with_ttl(key, data, self.default_ttl);
    }

    pub fn set_with_ttl(&self, key: impl Into<String>, data: V, ttl: Duration) {
        self.set_at(key, data, ttl, Utc::now());
    }

    pub fn set_at(&self, key: impl Into<String>, data: V, ttl: Duration, now: DateTime<Utc>) {
        self.entries.insert(
            key.into(),
            CacheEntry {
                data,
                created_at: now,
                ttl,
            },
        );
    }

    /// 删除所有过期条目，返回删除数量
    pub fn purge_expired(&self) -> usize {
        self.purge_expired_at(Utc::now())
    }

    pub fn purge_expired_at(&self, now: DateTime<Utc>) -> usize {
        let before = self.entries.len();
        self.entries.retain(|_, entry| !entry.is_expired(now));
        before.saturating_sub(self.entries.len())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
