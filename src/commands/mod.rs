pub mod commit;
pub mod config;
pub mod create;
pub mod edit;
pub mod focus;
pub mod list;
pub mod pull;
pub mod remove;
pub mod revert;
pub mod show;
pub mod status;
pub mod sync;

pub use commit::*;
pub use config::*;
pub use create::*;
pub use edit::*;
pub use focus::*;
pub use list::*;
pub use pull::*;
pub use remove::*;
pub use revert::*;
pub use show::*;
pub use status::*;
pub use sync::*;
