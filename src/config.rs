use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::env;
use std::fs;

#[derive(Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    pub debug: Option<bool>,
    pub dry_run: Option<bool>,
    pub verbose: Option<bool>,
}

impl Config {
    pub fn load() -> Self {
        let paths = Self::config_paths();
        let mut cfg = Self::load_from_files(paths.iter().flatten());
        cfg.apply_env(|key| env::var(key).ok());
        log::debug!("Loaded config: {:?}", cfg);
        cfg
    }

    /// Candidate files, lowest precedence first.
    fn config_paths() -> [Option<PathBuf>; 3] {
        [
            dirs::config_dir().map(|p| p.join("mdnorm/config.json")),
            dirs::home_dir().map(|p| p.join(".mdnorm.json")),
            Some(PathBuf::from("./.mdnorm.json")),
        ]
    }

    fn load_from_files<'a, I>(paths: I) -> Self
    where
        I: IntoIterator<Item = &'a PathBuf>,
    {
        let mut config = Config::default();
        for path in paths {
            if !path.exists() {
                continue;
            }
            log::debug!("Attempting to load config from: {:?}", path);
            match Self::read_file(path) {
                Ok(loaded) => {
                    config.merge(loaded);
                    log::debug!("Loaded and merged config from: {:?}", path);
                }
                Err(e) => log::warn!("Ignoring config file at {:?}: {}", path, e),
            }
        }
        config
    }

    fn read_file(path: &Path) -> anyhow::Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str::<Config>(&content)?)
    }

    fn merge(&mut self, other: Config) {
        if other.debug.is_some() { self.debug = other.debug; }
        if other.dry_run.is_some() { self.dry_run = other.dry_run; }
        if other.verbose.is_some() { self.verbose = other.verbose; }
    }

    fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let flag = |key: &str| lookup(key).and_then(|s| s.trim().parse::<bool>().ok());
        if let Some(debug) = flag("MDNORM_DEBUG") {
            self.debug = Some(debug);
        }
        if let Some(dry_run) = flag("MDNORM_DRY_RUN") {
            self.dry_run = Some(dry_run);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn later_files_override_earlier_ones() {
        let dir = tempdir().unwrap();
        let global = dir.path().join("global.json");
        let local = dir.path().join("local.json");
        fs::write(&global, r#"{"debug": true, "dryRun": true}"#).unwrap();
        fs::write(&local, r#"{"dryRun": false, "verbose": true}"#).unwrap();

        let cfg = Config::load_from_files(&[global, local]);
        assert_eq!(cfg.debug, Some(true));
        assert_eq!(cfg.dry_run, Some(false));
        assert_eq!(cfg.verbose, Some(true));
    }

    #[test]
    fn missing_and_malformed_files_are_ignored() {
        let dir = tempdir().unwrap();
        let bad = dir.path().join("bad.json");
        fs::write(&bad, "{ not json").unwrap();
        let missing = dir.path().join("missing.json");

        let cfg = Config::load_from_files(&[bad, missing]);
        assert_eq!(cfg, Config::default());
    }

    #[test]
    fn env_overrides_file_values() {
        let mut cfg = Config { debug: Some(false), dry_run: None, verbose: None };
        cfg.apply_env(|key| match key {
            "MDNORM_DEBUG" => Some("true".to_string()),
            "MDNORM_DRY_RUN" => Some("not-a-bool".to_string()),
            _ => None,
        });
        assert_eq!(cfg.debug, Some(true));
        assert_eq!(cfg.dry_run, None);
    }
}
