//! Output template requested from `git log`.
//!
//! Every commit is printed as one record starting with [`SEPARATOR`], made of
//! `NAME:value` fields joined by [`DELIMITER`]. Subject and body are free-form
//! text, so they come last.

use once_cell::sync::Lazy;

/// Marks the start of each commit record
pub const SEPARATOR: &str = "@@__GIT_LOG_SEPARATOR__@@";

/// Marks the boundary between fields of one record
pub const DELIMITER: &str = "@@__GIT_LOG_DELIMITER__@@";

pub const HASH_FIELD: &str = "HASH";
pub const TREE_FIELD: &str = "TREE";
pub const AUTHOR_FIELD: &str = "AUTHOR";
pub const COMMITTER_FIELD: &str = "COMMITTER";
pub const TAG_FIELD: &str = "TAG";
pub const SUBJECT_FIELD: &str = "SUBJECT";
pub const BODY_FIELD: &str = "BODY";

/// Field names paired with their git placeholders, in template order
pub const FIELDS: [(&str, &str); 7] = [
    (HASH_FIELD, "%H %h"),
    (TREE_FIELD, "%T %t"),
    (AUTHOR_FIELD, "%an<%ae>[%at]"),
    (COMMITTER_FIELD, "%cn<%ce>[%ct]"),
    (TAG_FIELD, "%D"),
    (SUBJECT_FIELD, "%s"),
    (BODY_FIELD, "%b"),
];

/// The complete `--pretty` template
pub static LOG_FORMAT: Lazy<String> = Lazy::new(|| {
    let fields: Vec<String> = FIELDS
        .iter()
        .map(|(name, placeholder)| format!("{}:{}", name, placeholder))
        .collect();
    format!("{}{}", SEPARATOR, fields.join(DELIMITER))
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_format_starts_with_separator() {
        assert!(LOG_FORMAT.starts_with("@@__GIT_LOG_SEPARATOR__@@HASH:%H %h"));
        assert_eq!(LOG_FORMAT.matches(SEPARATOR).count(), 1);
        assert_eq!(LOG_FORMAT.matches(DELIMITER).count(), FIELDS.len() - 1);
    }

    #[test]
    fn test_free_form_fields_come_last() {
        let order: Vec<&str> = FIELDS.iter().map(|(name, _)| *name).collect();
        assert_eq!(
            order,
            vec!["HASH", "TREE", "AUTHOR", "COMMITTER", "TAG", "SUBJECT", "BODY"]
        );
        assert!(LOG_FORMAT.ends_with("SUBJECT:%s@@__GIT_LOG_DELIMITER__@@BODY:%b"));
    }
}
