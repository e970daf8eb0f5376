use std::path::Path;
use std::process::Command;
use tempfile::TempDir;

/// Epoch seconds of the first fixture commit; each later commit is one minute newer
pub const BASE_TIMESTAMP: i64 = 1517122160;

pub const SUBJECTS_NEWEST_FIRST: [&str; 7] = [
    "chore(release): Bump version to v0.0.0",
    "style(*): Run rustfmt",
    "fix(logger): Fix bar function",
    "Merge pull request #12 from gitlog/topic",
    "feat(parser): Add foo feature",
    "docs(readme): Has body commit message",
    "chore(*): Initial Commit",
];

pub const BODY: &str = "This is commit message body.\nThere are no problems on multiple lines :)";

pub struct TestRepo {
    temp_dir: TempDir,
    commits: i64,
}

impl TestRepo {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().unwrap();
        let repo = Self {
            temp_dir,
            commits: 0,
        };

        repo.git(&["init", "-q"]);
        repo.git(&["config", "--local", "user.name", "authorname"]);
        repo.git(&["config", "--local", "user.email", "mail@example.com"]);
        repo.git(&["config", "--local", "commit.gpgsign", "false"]);

        repo
    }

    /// Seven commits, one of them a merge of a topic branch:
    ///
    /// ```text
    /// init - feat - merge - fix - style - release
    ///    \        /
    ///     docs ---
    /// ```
    pub fn new_with_history() -> Self {
        let mut repo = Self::new();

        repo.commit(SUBJECTS_NEWEST_FIRST[6]);

        repo.git(&["checkout", "-q", "-b", "topic"]);
        repo.commit(&format!("{}\n\n{}", SUBJECTS_NEWEST_FIRST[5], BODY));

        repo.git(&["checkout", "-q", "-"]);
        repo.commit(SUBJECTS_NEWEST_FIRST[4]);

        let date = repo.next_date();
        repo.git_at(
            &["merge", "-q", "--no-ff", "topic", "-m", SUBJECTS_NEWEST_FIRST[3]],
            &date,
        );

        repo.commit(SUBJECTS_NEWEST_FIRST[2]);
        repo.commit(SUBJECTS_NEWEST_FIRST[1]);
        repo.commit(SUBJECTS_NEWEST_FIRST[0]);

        repo
    }

    pub fn commit(&mut self, message: &str) {
        let date = self.next_date();
        self.git_at(&["commit", "-q", "--allow-empty", "-m", message], &date);
    }

    pub fn tag(&self, name: &str) {
        self.git(&["tag", name]);
    }

    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    fn next_date(&mut self) -> String {
        let date = format!("{} +0000", BASE_TIMESTAMP + self.commits * 60);
        self.commits += 1;
        date
    }

    fn git(&self, args: &[&str]) {
        let output = Command::new("git")
            .args(args)
            .current_dir(self.path())
            .output()
            .unwrap();
        assert!(output.status.success(), "git {:?} failed: {:?}", args, output);
    }

    fn git_at(&self, args: &[&str], date: &str) {
        let output = Command::new("git")
            .args(args)
            .current_dir(self.path())
            .env("GIT_AUTHOR_DATE", date)
            .env("GIT_COMMITTER_DATE", date)
            .output()
            .unwrap();
        assert!(output.status.success(), "git {:?} failed: {:?}", args, output);
    }
}
