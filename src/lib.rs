pub mod cli;
pub mod commit;
pub mod config;
pub mod error;
pub mod git;
pub mod output;

pub use commit::{Author, Commit, Committer, Hash, Person, Tag, Tree};
pub use config::Config;
pub use error::{GitLogError, Result};
pub use git::{GitLog, Params, Revision};
