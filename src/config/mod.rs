// ABOUTME: Configuration types and parsing for crxdeploy.yml.
// ABOUTME: Handles YAML parsing, secret resolution, destinations, and CLI overrides.

mod deserialize;
mod init;
mod secret;

pub use init::init_config;
pub use secret::Secret;

use crate::console::{Credentials, VersionedNodePolicy};
use crate::error::{Error, Result};
use crate::http::{BaseUrl, DEFAULT_CONNECT_TIMEOUT};
use crate::types::{DeletePaths, PackageArtifact};
use deserialize::{
    deserialize_artifact, deserialize_base_url, deserialize_base_url_option,
    deserialize_delete_paths,
};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const CONFIG_FILENAME: &str = "crxdeploy.yml";
pub const CONFIG_FILENAME_ALT: &str = "crxdeploy.yaml";
pub const CONFIG_FILENAME_DIR: &str = ".crxdeploy/config.yml";

pub const DEFAULT_WORKSPACE: &str = "crx.default";
pub const DEFAULT_BACKUP_FOLDER: &str = "backup";

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(deserialize_with = "deserialize_base_url")]
    pub server: BaseUrl,

    #[serde(default = "default_workspace")]
    pub workspace: String,

    pub login: String,

    pub password: Secret,

    #[serde(deserialize_with = "deserialize_artifact")]
    pub package: PackageArtifact,

    /// Repository folder the package is stored under; `/etc/packages` when unset.
    #[serde(default)]
    pub install_path: Option<String>,

    #[serde(default, deserialize_with = "deserialize_delete_paths")]
    pub delete_paths: Option<DeletePaths>,

    #[serde(default)]
    pub acl_ignore: bool,

    #[serde(default)]
    pub skip: bool,

    #[serde(default)]
    pub skip_install: bool,

    #[serde(default)]
    pub backup: BackupConfig,

    #[serde(default = "default_connect_timeout", with = "humantime_serde")]
    pub connect_timeout: Duration,

    #[serde(default)]
    pub versioned_nodes: VersionedNodePolicy,

    #[serde(default)]
    pub destinations: HashMap<String, Destination>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BackupConfig {
    #[serde(default)]
    pub enabled: bool,

    /// Stop after the backup step.
    #[serde(default)]
    pub only: bool,

    #[serde(default = "default_backup_folder")]
    pub folder: PathBuf,
}

impl Default for BackupConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            only: false,
            folder: default_backup_folder(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct Destination {
    #[serde(default, deserialize_with = "deserialize_base_url_option")]
    pub server: Option<BaseUrl>,

    #[serde(default)]
    pub workspace: Option<String>,

    #[serde(default)]
    pub login: Option<String>,

    #[serde(default)]
    pub password: Option<Secret>,

    #[serde(default)]
    pub install_path: Option<String>,
}

/// Command-line settings layered over the file configuration.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub package: Option<PathBuf>,
    pub skip_install: bool,
    pub backup: bool,
    pub backup_only: bool,
}

fn default_workspace() -> String {
    DEFAULT_WORKSPACE.to_string()
}

fn default_backup_folder() -> PathBuf {
    PathBuf::from(DEFAULT_BACKUP_FOLDER)
}

fn default_connect_timeout() -> Duration {
    DEFAULT_CONNECT_TIMEOUT
}

impl Config {
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        serde_yaml::from_str(yaml).map_err(Error::from)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    pub fn discover(dir: &Path) -> Result<Self> {
        let candidates = [
            dir.join(CONFIG_FILENAME),
            dir.join(CONFIG_FILENAME_ALT),
            dir.join(CONFIG_FILENAME_DIR),
        ];

        for path in &candidates {
            if path.exists() {
                tracing::debug!(path = %path.display(), "Loading configuration");
                return Self::load(path);
            }
        }

        Err(Error::ConfigNotFound(dir.to_path_buf()))
    }

    /// Merge a named destination over the base configuration. Fields the
    /// destination leaves unset keep their base values.
    pub fn for_destination(&self, name: &str) -> Result<Config> {
        let dest = self
            .destinations
            .get(name)
            .ok_or_else(|| Error::UnknownDestination(name.to_string()))?;

        let mut merged = self.clone();

        if let Some(ref server) = dest.server {
            merged.server = server.clone();
        }
        if let Some(ref workspace) = dest.workspace {
            merged.workspace = workspace.clone();
        }
        if let Some(ref login) = dest.login {
            merged.login = login.clone();
        }
        if let Some(ref password) = dest.password {
            merged.password = password.clone();
        }
        if dest.install_path.is_some() {
            merged.install_path = dest.install_path.clone();
        }

        Ok(merged)
    }

    /// Apply command-line overrides. Flags only ever switch behaviour on.
    pub fn with_overrides(mut self, overrides: &Overrides) -> Result<Config> {
        if let Some(ref package) = overrides.package {
            self.package = PackageArtifact::new(package.clone())
                .map_err(|e| Error::InvalidConfig(e.to_string()))?;
        }
        if overrides.skip_install {
            self.skip_install = true;
        }
        if overrides.backup || overrides.backup_only {
            self.backup.enabled = true;
        }
        if overrides.backup_only {
            self.backup.only = true;
        }
        Ok(self)
    }

    pub fn credentials(&self) -> Result<Credentials> {
        Ok(Credentials::new(
            self.workspace.clone(),
            self.login.clone(),
            self.password.resolve()?,
        ))
    }
}
