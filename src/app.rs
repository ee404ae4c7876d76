// src/app.rs
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use crate::error::Result;
use crate::normalize::normalize_name;
use crate::report::{Rename, RunReport};
use crate::tools::fs_tools::{rename_file, unique_path, unique_path_with, walk};
use crate::tools::split_name;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunOptions {
    pub dry_run: bool,
    pub verbose: bool,
}

/// Paths claimed and released by a dry run, so its plan matches a real run.
#[derive(Debug, Default)]
struct Plan {
    claimed: HashSet<PathBuf>,
    vacated: HashSet<PathBuf>,
}

impl Plan {
    fn is_taken(&self, path: &Path) -> bool {
        self.claimed.contains(path) || (path.exists() && !self.vacated.contains(path))
    }

    fn record(&mut self, from: &Path, to: &Path) {
        self.claimed.remove(from);
        self.vacated.insert(from.to_path_buf());
        self.vacated.remove(to);
        self.claimed.insert(to.to_path_buf());
    }
}

#[derive(Debug)]
pub struct App {
    pub options: RunOptions,
}

impl App {
    pub fn new(options: RunOptions) -> Self {
        App { options }
    }

    /// Normalizes every Markdown file name under each root.
    ///
    /// Missing roots are reported and skipped. The first directory that
    /// cannot be listed, or rename that fails, aborts the run.
    pub fn run(&self, roots: &[PathBuf]) -> Result<RunReport> {
        let mut report = RunReport::new(self.options.dry_run);
        let mut plan = Plan::default();

        if self.options.verbose {
            println!("Roots to process:");
            for root in roots {
                println!(" - {}", root.display());
            }
        }

        for root in roots {
            if !root.exists() {
                eprintln!("Skip missing root: {}", root.display());
                report.add_skipped_root(root.clone());
                continue;
            }
            log::info!("Processing root {}", root.display());
            for file in walk(root)? {
                if let Some(rename) = self.process_file(&file, &mut plan)? {
                    report.add_rename(rename);
                }
            }
        }

        let collisions = report.renames.iter().filter(|r| r.collided).count();
        log::info!(
            "{} rename(s), {} with collision suffix, {} skipped root(s)",
            report.renamed_count(),
            collisions,
            report.skipped_roots.len()
        );
        Ok(report)
    }

    fn process_file(&self, file: &Path, plan: &mut Plan) -> Result<Option<Rename>> {
        let Some((dir, name)) = split_name(file) else {
            log::debug!("Skipping non UTF-8 name: {}", file.display());
            return Ok(None);
        };

        let normalized = normalize_name(name);
        if normalized == name {
            return Ok(None);
        }

        let wanted = dir.join(&normalized);
        let target = if self.options.dry_run {
            unique_path_with(&wanted, |p| plan.is_taken(p))
        } else {
            unique_path(&wanted)
        };
        let collided = target != wanted;
        if collided && self.options.verbose {
            println!("Collision, will use: {}", target.display());
        }

        let rename = Rename::new(file.to_path_buf(), target, collided);
        println!("{}", rename);
        if self.options.dry_run {
            plan.record(&rename.from, &rename.to);
        } else {
            rename_file(&rename.from, &rename.to)?;
        }
        Ok(Some(rename))
    }
}
