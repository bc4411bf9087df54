// 缓存模块
// 包含缓存键生成和进程内 TTL 缓存

pub mod keys;
pub mod store;

pub use store::{CacheEntry, CacheStore, DEFAULT_TTL_SECS};
