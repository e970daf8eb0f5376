use crate::commit::{Commit, Hash, Person, Tag, Tree};
use crate::error::Result;
use crate::git::format::{
    AUTHOR_FIELD, BODY_FIELD, COMMITTER_FIELD, DELIMITER, HASH_FIELD, SEPARATOR, SUBJECT_FIELD,
    TAG_FIELD, TREE_FIELD,
};
use chrono::DateTime;
use once_cell::sync::Lazy;
use std::collections::HashMap;

type Decoder = fn(&mut Commit, &str);

/// Field decoders keyed by field name. Names not listed here are skipped.
static DECODERS: Lazy<HashMap<&'static str, Decoder>> = Lazy::new(|| {
    let mut decoders: HashMap<&'static str, Decoder> = HashMap::new();
    decoders.insert(HASH_FIELD, |commit, value| commit.hash = parse_hash(value));
    decoders.insert(TREE_FIELD, |commit, value| commit.tree = parse_tree(value));
    decoders.insert(AUTHOR_FIELD, |commit, value| commit.author = parse_person(value));
    decoders.insert(COMMITTER_FIELD, |commit, value| {
        commit.committer = parse_person(value)
    });
    decoders.insert(TAG_FIELD, |commit, value| commit.tag = parse_tag(value));
    decoders.insert(SUBJECT_FIELD, |commit, value| commit.subject = parse_subject(value));
    decoders.insert(BODY_FIELD, |commit, value| commit.body = parse_body(value));
    decoders
});

/// Parses the raw output of `git log` run with [`LOG_FORMAT`](crate::git::format::LOG_FORMAT)
///
/// Everything before the first separator is discarded. Records keep the order
/// git printed them in.
pub fn parse(raw: &str) -> Result<Vec<Commit>> {
    let mut records = raw.split(SEPARATOR);
    let leading = records.next().unwrap_or_default();
    if !leading.trim().is_empty() && leading.trim() != "\"" {
        log::warn!("Ignoring {} bytes of output before the first commit", leading.len());
    }

    let commits: Vec<Commit> = records.map(parse_commit).collect();
    log::debug!("Parsed {} commits", commits.len());
    Ok(commits)
}

/// Parses one record (the text between two separators)
pub fn parse_commit(record: &str) -> Commit {
    let mut commit = Commit::default();

    for segment in record.split(DELIMITER) {
        let Some((field, value)) = segment.split_once(':') else {
            if !segment.trim().is_empty() {
                log::warn!("Skipping field without a name: {:?}", segment);
            }
            continue;
        };

        match DECODERS.get(field) {
            Some(decode) => decode(&mut commit, value),
            None => log::trace!("Ignoring unknown field {:?}", field),
        }
    }

    commit
}

/// Splits `"<long> <short>"` into its two parts
pub fn parse_hash(value: &str) -> Hash {
    let (long, short) = split_pair(value);
    Hash { long, short }
}

pub fn parse_tree(value: &str) -> Tree {
    let (long, short) = split_pair(value);
    Tree { long, short }
}

fn split_pair(value: &str) -> (String, String) {
    match value.split_once(' ') {
        Some((long, short)) => (long.to_string(), short.to_string()),
        None => {
            log::warn!("Expected \"<long> <short>\", got {:?}", value);
            (value.to_string(), String::new())
        }
    }
}

/// Parses `Name<email>[epoch-seconds]`
///
/// The email is bounded by the first `<` and `>`. The timestamp is bounded by
/// the last `[` and `]` since a name may contain brackets itself. A timestamp
/// that is not an integer reads as zero.
pub fn parse_person(value: &str) -> Person {
    let date_start = value.rfind('[');
    let date_end = value.rfind(']');

    let (name, email) = match (value.find('<'), value.find('>')) {
        (Some(start), Some(end)) if start < end => (&value[..start], &value[start + 1..end]),
        _ => (&value[..date_start.unwrap_or(value.len())], ""),
    };

    let timestamp = match (date_start, date_end) {
        (Some(start), Some(end)) if start < end => {
            value[start + 1..end].trim().parse::<i64>().unwrap_or(0)
        }
        _ => 0,
    };

    Person::new(
        name,
        email,
        DateTime::from_timestamp(timestamp, 0).unwrap_or_default(),
    )
}

pub fn parse_tag(value: &str) -> Option<Tag> {
    let name = value.trim();
    if name.is_empty() {
        None
    } else {
        Some(Tag {
            name: name.to_string(),
        })
    }
}

pub fn parse_subject(value: &str) -> String {
    normalize_newlines(value).trim().to_string()
}

/// Normalizes line endings and trims, peeling off at most two layers of `"`
///
/// The template is passed to git wrapped in quotes, which git echoes around
/// every record, so the body of each record ends up next to a closing quote and
/// the opening quote of the record after it.
pub fn parse_body(value: &str) -> String {
    let normalized = normalize_newlines(value);
    let mut body = normalized.trim();
    for _ in 0..2 {
        body = strip_quote_layer(body).trim();
    }
    body.to_string()
}

fn strip_quote_layer(s: &str) -> &str {
    let s = s.strip_prefix('"').unwrap_or(s);
    s.strip_suffix('"').unwrap_or(s)
}

fn normalize_newlines(s: &str) -> String {
    s.replace("\r\n", "\n").replace('\r', "\n")
}
