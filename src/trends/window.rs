//! 把 `3m`、`2y` 这类时间范围翻译成数据源的时间窗口

/// 默认窗口：最近 12 个月
pub const DEFAULT_WINDOW: &str = "today 12-m";

const MAX_MONTHS: u64 = 12;
const MAX_YEARS: u64 = 5;

fn parse_count(input: &str, unit: char) -> Option<u64> {
    let digits = input.strip_suffix(unit)?;
    // 只接受 ASCII 数字，`٣m` 这类其他文字的数字按无法识别处理
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    // 超出 u64 的数字必然大于上限
    Some(digits.parse().unwrap_or(u64::MAX))
}

/// 总是返回一个窗口，无法识别的输入回落到默认值
pub fn translate(range_spec: &str) -> String {
    let input = range_spec.trim().to_lowercase();

    if let Some(months) = parse_count(&input, 'm') {
        return format!("today {}-m", months.min(MAX_MONTHS));
    }
    if let Some(years) = parse_count(&input, 'y') {
        return format!("today {}-y", years.min(MAX_YEARS));
    }
    DEFAULT_WINDOW.to_string()
}
