use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use marquee_generate::GenerateOptions;

/// Config file picked up from the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "marquee.toml";

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error("toml decode error: {0}")]
    TomlDecode(#[from] toml::de::Error),
    #[error("config file not found: {0}")]
    NotFound(PathBuf),
}

pub type SettingsResult<T> = Result<T, SettingsError>;

/// Contents of `marquee.toml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub generate: GenerateOptions,
}

/// Load settings from `explicit`, or from `marquee.toml` in `cwd` if it exists.
///
/// An explicit path that does not exist is an error; a missing default file
/// yields the built-in defaults.
pub fn load_settings(explicit: Option<&Path>, cwd: &Path) -> SettingsResult<Settings> {
    let path = match explicit {
        Some(path) if !path.exists() => return Err(SettingsError::NotFound(path.to_path_buf())),
        Some(path) => path.to_path_buf(),
        None => {
            let path = cwd.join(DEFAULT_CONFIG_FILE);
            if !path.exists() {
                return Ok(Settings::default());
            }
            path
        }
    };

    let content = std::fs::read_to_string(&path)?;
    let settings: Settings = toml::from_str(&content)?;
    tracing::debug!(path = %path.display(), "settings loaded");
    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_dir() -> PathBuf {
        let dir = std::env::temp_dir().join(format!("marquee_settings_{}", uuid::Uuid::new_v4()));
        std::fs::create_dir_all(&dir).expect("create temp dir");
        dir
    }

    #[test]
    fn missing_default_file_uses_defaults() {
        let dir = temp_dir();
        let settings = load_settings(None, &dir).expect("load");
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.generate.titles, 100);
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let dir = temp_dir();
        let result = load_settings(Some(&dir.join("nope.toml")), &dir);
        assert!(matches!(result, Err(SettingsError::NotFound(_))));
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let dir = temp_dir();
        std::fs::write(
            dir.join(DEFAULT_CONFIG_FILE),
            "[generate]\ntitles = 5\nseed = 42\nout_dir = \"data\"\n",
        )
        .expect("write config");

        let settings = load_settings(None, &dir).expect("load");

        assert_eq!(settings.generate.titles, 5);
        assert_eq!(settings.generate.seed, Some(42));
        assert_eq!(settings.generate.out_dir, PathBuf::from("data"));
        assert_eq!(settings.generate.credits, 100);
        assert!(!settings.generate.write_report);
    }

    #[test]
    fn malformed_file_reports_decode_error() {
        let dir = temp_dir();
        let path = dir.join("bad.toml");
        std::fs::write(&path, "[generate]\ntitles = \"many\"\n").expect("write config");

        let result = load_settings(Some(&path), &dir);
        assert!(matches!(result, Err(SettingsError::TomlDecode(_))));
    }
}
