//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use super::types::{Config, Verbosity};
use super::{ConfigError, ConfigResult, ConfigWarning};

/// Project config file, looked up in the working directory
pub const PROJECT_CONFIG_FILE: &str = "lendlib.toml";

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> ConfigResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path).map_err(|e| ConfigError::Read {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| ConfigError::Invalid {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
                key,
                file: path.to_path_buf(),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Load `lendlib.toml` from `project_dir`, else the user config, else
/// defaults. Environment overrides are applied last.
pub fn load_layered(project_dir: &Path) -> ConfigResult<(Config, Vec<ConfigWarning>)> {
    let candidates = [
        Some(project_dir.join(PROJECT_CONFIG_FILE)),
        user_config_path(),
    ];

    for path in candidates.into_iter().flatten() {
        if path.exists() {
            tracing::debug!(path = %path.display(), "loading config");
            let (config, warnings) = load_with_warnings(&path)?;
            return Ok((apply_env(config), warnings));
        }
    }

    tracing::debug!("no config file found, using defaults");
    Ok((apply_env(Config::default()), Vec::new()))
}

fn apply_env(config: Config) -> Config {
    with_env_overrides(config, |key| std::env::var(key).ok())
}

/// Apply environment variable overrides (LENDLIB_* prefix).
///
/// `lookup` resolves a variable name to its value.
pub fn with_env_overrides(mut config: Config, lookup: impl Fn(&str) -> Option<String>) -> Config {
    // LENDLIB_SNAPSHOT
    if let Some(path) = lookup("LENDLIB_SNAPSHOT").filter(|p| !p.trim().is_empty()) {
        config.storage.snapshot = PathBuf::from(path);
    }

    // LENDLIB_VERBOSITY
    if let Some(verbosity) = lookup("LENDLIB_VERBOSITY") {
        config.output.verbosity = verbosity.parse().unwrap_or(Verbosity::Normal);
    }

    // LENDLIB_JSON
    if let Some(val) = lookup("LENDLIB_JSON") {
        config.output.json = val.to_lowercase() != "false" && val != "0";
    }

    config
}

/// `$XDG_CONFIG_HOME/lendlib/config.toml`, falling back to `~/.config`
pub fn user_config_path() -> Option<PathBuf> {
    dirs_config_dir().map(|dir| dir.join("lendlib").join("config.toml"))
}

fn dirs_config_dir() -> Option<PathBuf> {
    std::env::var("XDG_CONFIG_HOME")
        .ok()
        .filter(|dir| !dir.is_empty())
        .map(PathBuf::from)
        .or_else(|| dirs::home_dir().map(|h| h.join(".config")))
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| line.contains(needle))
        .map(|i| i + 1)
}

/// Closest known key within two edits
fn suggest_key(unknown: &str) -> Option<String> {
    const KNOWN_KEYS: &[&str] = &["storage", "snapshot", "import", "output", "verbosity", "json"];

    KNOWN_KEYS
        .iter()
        .map(|key| (levenshtein(unknown, key), *key))
        .filter(|(distance, _)| *distance <= 2)
        .min_by_key(|(distance, _)| *distance)
        .map(|(_, key)| key.to_string())
}

/// Edit distance over chars, one row at a time
fn levenshtein(a: &str, b: &str) -> usize {
    let target: Vec<char> = b.chars().collect();
    let mut row: Vec<usize> = (0..=target.len()).collect();

    for (i, ca) in a.chars().enumerate() {
        let mut diagonal = row[0];
        row[0] = i + 1;
        for (j, cb) in target.iter().enumerate() {
            let above = row[j + 1];
            let substitution = diagonal + usize::from(ca != *cb);
            row[j + 1] = substitution.min(above + 1).min(row[j] + 1);
            diagonal = above;
        }
    }
    row[target.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn levenshtein_counts_edits() {
        assert_eq!(levenshtein("json", "json"), 0);
        assert_eq!(levenshtein("jsno", "json"), 2);
        assert_eq!(levenshtein("snapshots", "snapshot"), 1);
    }

    #[test]
    fn suggest_key_only_for_close_matches() {
        assert_eq!(suggest_key("verbosty").as_deref(), Some("verbosity"));
        assert_eq!(suggest_key("completely_different"), None);
    }
}
