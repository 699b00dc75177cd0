mod project;
mod project_user;
mod tag;
mod task;
mod time_entry;
mod user;
mod workspace;
mod workspace_client;
mod workspace_user;

pub use project::*;
pub use project_user::*;
pub use tag::*;
pub use task::*;
pub use time_entry::*;
pub use user::*;
pub use workspace::*;
pub use workspace_client::*;
pub use workspace_user::*;
