/// 热门搜索缓存键前缀
const TRENDING_PREFIX: &str = "trending";

/// 关键词热度缓存键前缀
const INTEREST_PREFIX: &str = "interest";

/// 相关查询缓存键前缀
const RELATED_PREFIX: &str = "related";

// 转义分隔符，保证不同参数组合不会拼出同一个键
fn escape(part: &str) -> String {
    let mut out = String::with_capacity(part.len());
    for ch in part.chars() {
        if ch == '\\' || ch == ':' {
            out.push('\\');
        }
        out.push(ch);
    }
    out
}

fn compose(prefix: &str, parts: &[&str]) -> String {
    let mut key = String::from(prefix);
    for part in parts {
        key.push(':');
        key.push_str(&escape(part));
    }
    key
}

/// 生成热门搜索缓存键
pub fn trending_key(geo: &str) -> String {
    compose(TRENDING_PREFIX, &[geo])
}

/// 生成关键词热度缓存键，window 为已解析的时间窗口
pub fn interest_key(term: &str, geo: &str, window: &str) -> String {
    compose(INTEREST_PREFIX, &[term, geo, window])
}

/// 生成相关查询缓存键
pub fn related_key(term: &str, geo: &str, window: &str) -> String {
    compose(RELATED_PREFIX, &[term, geo, window])
}
