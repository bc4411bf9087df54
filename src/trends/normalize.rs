//! 把数据源原始结构整理成对外的稳定结构，纯函数，不做 I/O

use super::types::{RawRankedQuery, RawRelated, RawSeries, RelatedBlock, RelatedQueryRecord, TimeSeries};

/// 时间桶标签格式
pub const LABEL_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

fn to_int(value: Option<f64>) -> i64 {
    match value {
        Some(v) if v.is_finite() => v as i64,
        _ => 0,
    }
}

pub fn interest_series(raw: &RawSeries) -> TimeSeries {
    let (labels, values) = raw
        .buckets
        .iter()
        .map(|b| (b.time.format(LABEL_FORMAT).to_string(), to_int(b.value)))
        .unzip();
    TimeSeries { labels, values }
}

fn records(block: Option<&Vec<RawRankedQuery>>) -> Vec<RelatedQueryRecord> {
    block
        .into_iter()
        .flatten()
        .filter_map(|r| {
            Some(RelatedQueryRecord {
                query: r.query.clone()?,
                value: to_int(r.value),
            })
        })
        .collect()
}

pub fn related_block(raw: &RawRelated) -> RelatedBlock {
    RelatedBlock {
        top: records(raw.top.as_ref()),
        rising: records(raw.rising.as_ref()),
    }
}
