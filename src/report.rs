use std::fmt;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rename {
    pub from: PathBuf,
    pub to: PathBuf,
    pub collided: bool, // target needed a -N suffix
}

impl Rename {
    pub fn new(from: PathBuf, to: PathBuf, collided: bool) -> Self {
        Rename { from, to, collided }
    }
}

impl fmt::Display for Rename {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Rename: {} -> {}", self.from.display(), self.to.display())
    }
}

/// Outcome of one run over all roots.
#[derive(Debug, Clone, Default)]
pub struct RunReport {
    pub renames: Vec<Rename>,
    pub skipped_roots: Vec<PathBuf>,
    pub dry_run: bool,
}

impl RunReport {
    pub fn new(dry_run: bool) -> Self {
        RunReport { dry_run, ..Default::default() }
    }

    pub fn add_rename(&mut self, rename: Rename) {
        self.renames.push(rename);
    }

    pub fn add_skipped_root(&mut self, root: PathBuf) {
        self.skipped_roots.push(root);
    }

    pub fn renamed_count(&self) -> usize {
        self.renames.len()
    }

    pub fn summary_line(&self) -> String {
        if self.dry_run {
            format!("Dry run: {} candidate(s) found", self.renamed_count())
        } else {
            format!("Completed: {} file(s) renamed", self.renamed_count())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rename_displays_as_log_line() {
        let r = Rename::new(PathBuf::from("d/a .md"), PathBuf::from("d/a.md"), false);
        assert_eq!(r.to_string(), "Rename: d/a .md -> d/a.md");
    }

    #[test]
    fn summary_line_counts_renames() {
        let mut report = RunReport::new(false);
        assert_eq!(report.summary_line(), "Completed: 0 file(s) renamed");
        report.add_rename(Rename::new("a".into(), "b".into(), false));
        report.add_rename(Rename::new("c".into(), "d".into(), true));
        assert_eq!(report.summary_line(), "Completed: 2 file(s) renamed");
    }

    #[test]
    fn dry_run_summary_mentions_candidates() {
        let mut report = RunReport::new(true);
        report.add_rename(Rename::new("a".into(), "b".into(), false));
        assert_eq!(report.summary_line(), "Dry run: 1 candidate(s) found");
    }
}
