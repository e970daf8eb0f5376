pub mod commands;
pub mod format;
pub mod history;
pub mod parser;
pub mod revision;
pub mod workdir;

pub use commands::GitClient;
pub use history::{GitLog, Params};
pub use revision::Revision;
