use crate::config::Config;
use crate::git::{Params, Revision};
use chrono::{NaiveDate, NaiveDateTime};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "gitlog",
    version,
    about = "Print structured commit history of a git repository",
    long_about = None
)]
pub struct Args {
    /// Commit or refname to start from
    #[arg(value_name = "REV")]
    pub rev: Option<String>,

    /// Commits reachable from NEW but not from OLD, given as OLD..NEW
    #[arg(long = "range", value_name = "OLD..NEW")]
    pub range: Option<String>,

    /// Walk all refs
    #[arg(long = "all")]
    pub all: bool,

    /// Limit the number of commits
    #[arg(short = 'n', long = "max-count", value_name = "N", allow_negative_numbers = true)]
    pub max_count: Option<i64>,

    /// Commits more recent than DATE (YYYY-MM-DD [HH:MM:SS])
    #[arg(long = "since", value_name = "DATE", value_parser = parse_date)]
    pub since: Option<NaiveDateTime>,

    /// Commits older than DATE (YYYY-MM-DD [HH:MM:SS])
    #[arg(long = "until", value_name = "DATE", value_parser = parse_date)]
    pub until: Option<NaiveDateTime>,

    /// Show only merge commits
    #[arg(long = "merges")]
    pub merges: bool,

    /// Hide merge commits
    #[arg(long = "no-merges")]
    pub no_merges: bool,

    /// Oldest commits first
    #[arg(long = "reverse")]
    pub reverse: bool,

    /// Print commits as JSON
    #[arg(long = "json")]
    pub json: bool,

    /// Repository directory (defaults to the config file, then the current directory)
    #[arg(short = 'C', long = "repo", value_name = "DIR", env = "GITLOG_REPO")]
    pub repo_path: Option<PathBuf>,

    /// Git executable to run
    #[arg(long = "git-bin", value_name = "BIN", env = "GITLOG_GIT_BIN")]
    pub git_bin: Option<String>,

    /// Enable debug logging
    #[arg(long = "debug")]
    pub debug: bool,
}

impl Args {
    pub fn validate(&self) -> Result<(), String> {
        if let Some(range) = &self.range {
            split_range(range)?;
        }
        if let (Some(since), Some(until)) = (self.since, self.until) {
            if since > until {
                return Err("--since must not be later than --until".to_string());
            }
        }
        Ok(())
    }

    /// The commit selection requested on the command line
    ///
    /// When several are given, a range wins over `--all`, which wins over
    /// `-n`, then the time window, then a single revision.
    pub fn revision(&self) -> Result<Option<Revision>, String> {
        if let Some(range) = &self.range {
            let (old, new) = split_range(range)?;
            return Ok(Some(Revision::range(old, new)));
        }
        if self.all {
            return Ok(Some(Revision::All));
        }
        if let Some(limit) = self.max_count {
            return Ok(Some(Revision::Number(limit)));
        }
        if self.since.is_some() || self.until.is_some() {
            return Ok(Some(Revision::Time {
                since: self.since,
                until: self.until,
            }));
        }
        Ok(self.rev.clone().map(Revision::Ref))
    }

    pub fn params(&self) -> Params {
        Params {
            merges_only: self.merges,
            ignore_merges: self.no_merges,
            reverse: self.reverse,
        }
    }

    /// Applies command line overrides on top of a loaded config
    pub fn apply_to(&self, mut config: Config) -> Config {
        if let Some(bin) = &self.git_bin {
            config.bin = bin.clone();
        }
        if let Some(path) = &self.repo_path {
            config.path = path.clone();
        }
        config.normalized()
    }
}

fn split_range(range: &str) -> Result<(&str, &str), String> {
    match range.split_once("..") {
        Some((old, new)) if !old.is_empty() && !new.is_empty() => Ok((old, new)),
        _ => Err(format!("Invalid range {:?}, expected OLD..NEW", range)),
    }
}

fn parse_date(value: &str) -> Result<NaiveDateTime, String> {
    if let Ok(datetime) = NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S") {
        return Ok(datetime);
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .ok_or_else(|| format!("Invalid date {:?}, expected YYYY-MM-DD [HH:MM:SS]", value))
}
