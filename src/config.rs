use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE: &str = "guidedesk.toml";

/// Optional `guidedesk.toml` in the working directory. Every field has a default.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub storage: StorageConfig,

    #[serde(default)]
    pub desk: DeskConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    pub history_dir: PathBuf,
    pub guide_file: PathBuf,
    pub attachment_dir: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            history_dir: PathBuf::from("history"),
            guide_file: Path::new("guide").join("guide.json"),
            attachment_dir: Path::new("guide").join("attachments"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DeskConfig {
    pub counselor_name: String,
    /// Font with Hangul coverage; system fonts are probed when unset.
    pub font_path: Option<PathBuf>,
}

impl Default for DeskConfig {
    fn default() -> Self {
        Self {
            counselor_name: "담당자A".to_string(),
            font_path: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

/// Storage locations resolved against the working directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoragePaths {
    pub history_dir: PathBuf,
    pub guide_file: PathBuf,
    pub attachment_dir: PathBuf,
}

impl Config {
    pub fn load(workspace: &Path) -> Result<Self, ConfigError> {
        let path = workspace.join(CONFIG_FILE);
        let raw = match fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(source) => return Err(ConfigError::Read { path, source }),
        };
        toml::from_str(&raw).map_err(|source| ConfigError::Parse { path, source })
    }

    pub fn storage_paths(&self, workspace: &Path) -> StoragePaths {
        StoragePaths {
            history_dir: workspace.join(&self.storage.history_dir),
            guide_file: workspace.join(&self.storage.guide_file),
            attachment_dir: workspace.join(&self.storage.attachment_dir),
        }
    }

    pub fn font_path(&self, workspace: &Path) -> Option<PathBuf> {
        self.desk
            .font_path
            .as_ref()
            .map(|path| workspace.join(path))
    }
}

/// Where exported attachments go.
pub fn export_dir(workspace: &Path) -> PathBuf {
    dirs::download_dir().unwrap_or_else(|| workspace.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::{Config, CONFIG_FILE};
    use crate::error::ConfigError;
    use std::fs;
    use std::path::Path;

    #[test]
    fn missing_file_uses_defaults() {
        let dir = tempfile::tempdir().expect("tempdir should be created");
        let config = Config::load(dir.path()).expect("defaults should load");
        let paths = config.storage_paths(dir.path());

        assert_eq!(paths.history_dir, dir.path().join("history"));
        assert_eq!(paths.guide_file, dir.path().join("guide").join("guide.json"));
        assert_eq!(
            paths.attachment_dir,
            dir.path().join("guide").join("attachments")
        );
        assert_eq!(config.desk.counselor_name, "담당자A");
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn partial_file_overrides_only_given_fields() {
        let dir = tempfile::tempdir().expect("tempdir should be created");
        fs::write(
            dir.path().join(CONFIG_FILE),
            "[storage]\nguide_file = \"/srv/kb/guide.json\"\n\n[desk]\ncounselor_name = \"담당자B\"\n",
        )
        .expect("config fixture should write");

        let config = Config::load(dir.path()).expect("config should load");
        let paths = config.storage_paths(dir.path());
        assert_eq!(paths.guide_file, Path::new("/srv/kb/guide.json"));
        assert_eq!(paths.history_dir, dir.path().join("history"));
        assert_eq!(config.desk.counselor_name, "담당자B");
        assert!(config.desk.font_path.is_none());
    }

    #[test]
    fn invalid_file_is_reported() {
        let dir = tempfile::tempdir().expect("tempdir should be created");
        fs::write(dir.path().join(CONFIG_FILE), "[storage\n").expect("fixture should write");

        let err = Config::load(dir.path()).expect_err("invalid toml should fail");
        assert!(matches!(err, ConfigError::Parse { .. }));
    }
}
