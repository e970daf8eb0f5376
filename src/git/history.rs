use crate::commit::Commit;
use crate::config::Config;
use crate::error::Result;
use crate::git::commands::GitClient;
use crate::git::format::LOG_FORMAT;
use crate::git::parser;
use crate::git::revision::Revision;
use crate::git::workdir;

/// Filters and ordering applied on top of a [`Revision`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Params {
    /// Only commits with more than one parent (`--merges`)
    pub merges_only: bool,
    /// Skip commits with more than one parent (`--no-merges`)
    pub ignore_merges: bool,
    /// Oldest first (`--reverse`)
    pub reverse: bool,
}

/// Reads commit history of one repository through `git log`
#[derive(Debug, Clone)]
pub struct GitLog {
    client: GitClient,
    config: Config,
}

impl Default for GitLog {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

impl GitLog {
    pub fn new(config: Config) -> Self {
        let config = config.normalized();
        Self {
            client: GitClient::new(config.bin.clone()),
            config,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Arguments passed to `git log`
    pub fn build_args(
        &self,
        revision: Option<&Revision>,
        params: Option<&Params>,
    ) -> Vec<String> {
        let mut args = vec![
            "--no-decorate".to_string(),
            format!("--pretty=\"{}\"", *LOG_FORMAT),
        ];

        if let Some(params) = params {
            if params.merges_only {
                args.push("--merges".to_string());
            }
            if params.ignore_merges {
                args.push("--no-merges".to_string());
            }
            if params.reverse {
                args.push("--reverse".to_string());
            }
        }

        if let Some(revision) = revision {
            args.extend(revision.args());
        }

        args
    }

    /// Runs `git log` in the configured repository and parses its output
    ///
    /// Changes the process working directory for the duration of the call and
    /// restores it before returning, also on failure. Not safe to call
    /// concurrently with anything else that depends on the working directory.
    pub fn log(&self, revision: Option<&Revision>, params: Option<&Params>) -> Result<Vec<Commit>> {
        self.client.can_exec()?;

        let _cwd = workdir::enter(&self.config.path)?;

        self.client.inside_work_tree()?;

        let args = self.build_args(revision, params);
        log::debug!("Running {} log with {} arguments", self.client.bin(), args.len());

        let output = self.client.run("log", &args)?;
        parser::parse(&output)
    }
}
