/// 缓存键模块
/// 由操作名和全部输入参数生成确定性的缓存键

pub mod trend_keys;

pub use trend_keys::{interest_key, related_key, trending_key};
