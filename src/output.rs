use crate::commit::Commit;

/// One line per commit: short hash, commit date, author, decoration, subject
pub fn render_text(commits: &[Commit]) -> String {
    let mut out = String::new();
    for commit in commits {
        out.push_str(&commit.hash.short);
        out.push(' ');
        out.push_str(&commit.committer.date.format("%Y-%m-%d").to_string());
        out.push(' ');
        out.push_str(&commit.author.name);
        if let Some(tag) = &commit.tag {
            out.push_str(&format!(" ({})", tag.name));
        }
        out.push(' ');
        out.push_str(&commit.subject);
        out.push('\n');
    }
    out
}

pub fn render_json(commits: &[Commit]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(commits)
}
