mod handler;
mod model;

pub use handler::{create_keyword, delete_keyword};
pub use model::{CreateKeywordRequest, Keyword};
