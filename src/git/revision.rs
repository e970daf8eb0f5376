use chrono::NaiveDateTime;

/// Format git accepts for `--since` and `--until`
pub const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Selects which commits `git log` walks
///
/// Values are passed through as given. A negative limit, for instance, is
/// left for git to reject.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Revision {
    /// A single refname or commit, e.g. `v0.1.0`
    Ref(String),
    /// `<old>..<new>`
    Range { old: String, new: String },
    /// `--all`
    All,
    /// `-n <limit>`
    Number(i64),
    /// `--since <date>` and/or `--until <date>`; `None` leaves that side open
    Time {
        since: Option<NaiveDateTime>,
        until: Option<NaiveDateTime>,
    },
}

impl Revision {
    pub fn range(old: impl Into<String>, new: impl Into<String>) -> Self {
        Revision::Range {
            old: old.into(),
            new: new.into(),
        }
    }

    /// Command line arguments for this selection
    pub fn args(&self) -> Vec<String> {
        match self {
            Revision::Ref(reference) => vec![reference.clone()],
            Revision::Range { old, new } => vec![format!("{}..{}", old, new)],
            Revision::All => vec!["--all".to_string()],
            Revision::Number(limit) => vec!["-n".to_string(), limit.to_string()],
            Revision::Time { since, until } => {
                let mut args = Vec::new();
                if let Some(since) = since {
                    args.push("--since".to_string());
                    args.push(since.format(TIME_FORMAT).to_string());
                }
                if let Some(until) = until {
                    args.push("--until".to_string());
                    args.push(until.format(TIME_FORMAT).to_string());
                }
                args
            }
        }
    }
}
