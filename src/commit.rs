use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;

/// Full and abbreviated object name of a commit
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Hash {
    pub long: String,
    pub short: String,
}

/// Full and abbreviated object name of a commit's tree
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Tree {
    pub long: String,
    pub short: String,
}

/// Name, email and timestamp of whoever authored or committed a change
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Person {
    pub name: String,
    pub email: String,
    pub date: DateTime<Utc>,
}

pub type Author = Person;
pub type Committer = Person;

/// Decoration attached to a commit (tag and branch names as git prints them)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Tag {
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Commit {
    pub hash: Hash,
    pub tree: Tree,
    pub author: Author,
    pub committer: Committer,
    pub tag: Option<Tag>,
    pub subject: String,
    pub body: String,
}

impl Person {
    pub fn new(name: impl Into<String>, email: impl Into<String>, date: DateTime<Utc>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            date,
        }
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.email.is_empty() {
            write!(f, "{}", self.name)
        } else {
            write!(f, "{} <{}>", self.name, self.email)
        }
    }
}

impl Commit {
    /// Full commit message: subject, blank line, body
    pub fn message(&self) -> String {
        if self.body.is_empty() {
            self.subject.clone()
        } else {
            format!("{}\n\n{}", self.subject, self.body)
        }
    }
}
