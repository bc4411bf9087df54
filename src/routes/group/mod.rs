mod handler;
mod model;

pub use handler::{DeleteResponse, create_group, delete_group, list_groups};
pub use model::{CreateGroupRequest, Group, GroupInfo, GroupKeyword};
