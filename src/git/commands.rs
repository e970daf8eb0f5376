use crate::error::{GitLogError, Result};
use std::io::ErrorKind;
use std::process::{Command, Output};

/// Runs git in the current working directory of the process
#[derive(Debug, Clone)]
pub struct GitClient {
    bin: String,
}

impl GitClient {
    pub fn new(bin: impl Into<String>) -> Self {
        Self { bin: bin.into() }
    }

    pub fn bin(&self) -> &str {
        &self.bin
    }

    /// Checks that the configured binary can be started at all
    pub fn can_exec(&self) -> Result<()> {
        let output = self.spawn(&["--version"])?;
        if !output.status.success() {
            return Err(GitLogError::BinaryNotFound {
                bin: self.bin.clone(),
            });
        }
        log::debug!("Using {}", String::from_utf8_lossy(&output.stdout).trim());
        Ok(())
    }

    /// Checks that the current directory is inside a git work tree
    pub fn inside_work_tree(&self) -> Result<()> {
        let output = self.spawn(&["rev-parse", "--is-inside-work-tree"])?;
        let inside = output.status.success()
            && String::from_utf8_lossy(&output.stdout).trim() == "true";

        if !inside {
            let path = std::env::current_dir()?;
            return Err(GitLogError::NotARepository { path });
        }
        Ok(())
    }

    /// Executes a git subcommand and returns its standard output
    pub fn run(&self, subcommand: &str, args: &[String]) -> Result<String> {
        let mut argv: Vec<&str> = Vec::with_capacity(args.len() + 1);
        argv.push(subcommand);
        argv.extend(args.iter().map(String::as_str));

        let output = self.spawn(&argv)?;
        let command = format!("{} {}", self.bin, argv.join(" "));

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(GitLogError::CommandFailed {
                command,
                output: stderr.to_string(),
            });
        }

        String::from_utf8(output.stdout).map_err(|e| GitLogError::CommandFailed {
            command,
            output: format!("output is not valid UTF-8: {}", e),
        })
    }

    fn spawn(&self, args: &[&str]) -> Result<Output> {
        Command::new(&self.bin)
            .args(args)
            .output()
            .map_err(|e| match e.kind() {
                ErrorKind::NotFound | ErrorKind::PermissionDenied => GitLogError::BinaryNotFound {
                    bin: self.bin.clone(),
                },
                _ => GitLogError::CommandFailed {
                    command: format!("{} {}", self.bin, args.join(" ")),
                    output: e.to_string(),
                },
            })
    }
}

impl Default for GitClient {
    fn default() -> Self {
        Self::new("git")
    }
}
