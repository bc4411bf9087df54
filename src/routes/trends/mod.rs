mod handler;
mod model;

pub use handler::{batch_interest, interest, related, trending};
pub use model::{BatchInterestRequest, DEFAULT_GEO, DEFAULT_SINCE, KeywordQuery, TrendingQuery};
