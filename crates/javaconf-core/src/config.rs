use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use javaconf_util::errors::JavaconfError;
use javaconf_util::fs::{expand_home, reroot};

/// Environment variable that points at an alternative config file.
pub const CONFIG_ENV: &str = "JAVACONF_CONFIG";

/// javaconf configuration loaded from `/etc/javaconf/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub paths: PathsConfig,

    #[serde(default)]
    pub preferences: PreferencesConfig,

    #[serde(default)]
    pub resolve: ResolveConfig,
}

/// Registry locations from `[paths]`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathsConfig {
    /// Directory holding `20*` runtime descriptors.
    #[serde(default = "default_vms_dir", rename = "vms-dir")]
    pub vms_dir: PathBuf,
    /// Directory whose subdirectories hold installed `package.env` files.
    #[serde(default = "default_packages_root", rename = "packages-root")]
    pub packages_root: PathBuf,
    /// System env file naming the active runtime's `JAVA_HOME`.
    #[serde(default = "default_system_env", rename = "system-env")]
    pub system_env: PathBuf,
    /// Per-user env file, consulted before the system one.
    #[serde(default = "default_user_env", rename = "user-env")]
    pub user_env: String,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            vms_dir: default_vms_dir(),
            packages_root: default_packages_root(),
            system_env: default_system_env(),
            user_env: default_user_env(),
        }
    }
}

fn default_vms_dir() -> PathBuf {
    PathBuf::from("/etc/env.d/java")
}

fn default_packages_root() -> PathBuf {
    PathBuf::from("/usr/share")
}

fn default_system_env() -> PathBuf {
    PathBuf::from("/etc/env.d/20java")
}

fn default_user_env() -> String {
    "~/.gentoo/java".to_string()
}

/// Preference file candidates from `[preferences]`, most specific first.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PreferencesConfig {
    #[serde(default = "default_preference_files")]
    pub files: Vec<PathBuf>,
}

impl Default for PreferencesConfig {
    fn default() -> Self {
        Self {
            files: default_preference_files(),
        }
    }
}

fn default_preference_files() -> Vec<PathBuf> {
    vec![
        PathBuf::from("/etc/java-config-2/build/jdk.conf"),
        PathBuf::from("/usr/share/java-config-2/config/jdk-defaults.conf"),
    ]
}

/// Resolution defaults from `[resolve]`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResolveConfig {
    #[serde(default, rename = "allow-build-only")]
    pub allow_build_only: bool,
}

impl Config {
    /// Load the configuration from [`Config::default_path`], or return
    /// defaults if the file doesn't exist.
    pub fn load() -> miette::Result<Self> {
        Self::load_from(&Self::default_path())
    }

    /// Load the configuration from `path`, or return defaults if the file
    /// doesn't exist.
    pub fn load_from(path: &Path) -> miette::Result<Self> {
        if !path.is_file() {
            tracing::debug!("no config at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path).map_err(|e| JavaconfError::Config {
            message: format!("Failed to read {}: {e}", path.display()),
        })?;
        toml::from_str(&content).map_err(|e| {
            JavaconfError::Config {
                message: format!("Failed to parse {}: {e}", path.display()),
            }
            .into()
        })
    }

    /// `$JAVACONF_CONFIG` if set, otherwise `/etc/javaconf/config.toml`.
    pub fn default_path() -> PathBuf {
        std::env::var_os(CONFIG_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("/etc/javaconf/config.toml"))
    }

    /// Copy of this configuration with every absolute path moved under
    /// `root`. The user env file is expanded first.
    pub fn rerooted(&self, root: Option<&Path>) -> Self {
        let user_env = reroot(root, &self.user_env_path());
        Self {
            paths: PathsConfig {
                vms_dir: reroot(root, &self.paths.vms_dir),
                packages_root: reroot(root, &self.paths.packages_root),
                system_env: reroot(root, &self.paths.system_env),
                user_env: user_env.to_string_lossy().into_owned(),
            },
            preferences: PreferencesConfig {
                files: self
                    .preferences
                    .files
                    .iter()
                    .map(|f| reroot(root, f))
                    .collect(),
            },
            resolve: self.resolve.clone(),
        }
    }

    /// The user env file with `~` expanded.
    pub fn user_env_path(&self) -> PathBuf {
        expand_home(&self.paths.user_env)
    }

    /// Env files naming the active runtime, user file first.
    pub fn active_env_files(&self) -> Vec<PathBuf> {
        vec![self.user_env_path(), self.paths.system_env.clone()]
    }
}
