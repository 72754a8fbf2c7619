//! Installed packages described by `<root>/<name>/package.env`.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use javaconf_core::envfile::load_env_file;
use javaconf_core::package::{DependencyEdge, Package, PackageRegistry};
use javaconf_core::runtime::{version_satisfies, Runtime};

/// File name of an installed package descriptor.
pub const PACKAGE_ENV: &str = "package.env";

/// An installed package and its descriptor values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstalledPackage {
    name: String,
    config: BTreeMap<String, String>,
    provides: Vec<String>,
}

impl InstalledPackage {
    pub fn from_file(name: impl Into<String>, path: &Path) -> miette::Result<Self> {
        Ok(Self::from_config(name, load_env_file(path)?))
    }

    pub fn from_config(name: impl Into<String>, config: BTreeMap<String, String>) -> Self {
        let provides = config
            .get("PROVIDES")
            .map(|p| p.split_whitespace().map(str::to_string).collect())
            .unwrap_or_default();
        Self {
            name: name.into(),
            config,
            provides,
        }
    }

    pub fn query(&self, key: &str) -> Option<&str> {
        self.config.get(key).map(String::as_str)
    }
}

impl Package for InstalledPackage {
    fn name(&self) -> &str {
        &self.name
    }

    fn target(&self) -> Option<&str> {
        self.query("TARGET").filter(|t| !t.is_empty())
    }

    /// `DEPEND` holds `:`-separated `jar@package` or bare `package` entries.
    fn dependencies(&self) -> Vec<DependencyEdge> {
        self.query("DEPEND")
            .map(|depend| depend.split(':').filter_map(DependencyEdge::parse).collect())
            .unwrap_or_default()
    }

    fn provides(&self) -> &[String] {
        &self.provides
    }

    fn vm_constraint(&self) -> Option<&str> {
        self.query("VM").filter(|v| !v.is_empty())
    }
}

/// Installed packages under a root such as `/usr/share`.
#[derive(Debug, Clone)]
pub struct InstalledPackages {
    root: PathBuf,
}

impl InstalledPackages {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Every readable installed package, sorted by name.
    pub fn list_packages(&self) -> Vec<InstalledPackage> {
        let mut names: Vec<String> = fs::read_dir(&self.root)
            .into_iter()
            .flatten()
            .filter_map(|e| e.ok())
            .filter(|e| e.path().join(PACKAGE_ENV).is_file())
            .map(|e| e.file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names.iter().filter_map(|n| self.get_package(n)).collect()
    }
}

impl PackageRegistry for InstalledPackages {
    type Package = InstalledPackage;

    fn get_package(&self, name: &str) -> Option<InstalledPackage> {
        if name.is_empty() || name.contains('/') {
            return None;
        }
        let path = self.root.join(name).join(PACKAGE_ENV);
        if !path.is_file() {
            return None;
        }
        match InstalledPackage::from_file(name, &path) {
            Ok(pkg) => Some(pkg),
            Err(e) => {
                tracing::warn!("Skipping package descriptor {}: {e}", path.display());
                None
            }
        }
    }

    fn has_provider<R: Runtime>(&self, virtuals: &str, runtime: &R) -> bool {
        let installed = self.list_packages();
        virtuals.split_whitespace().all(|virtual_name| {
            if runtime.provides().iter().any(|p| p == virtual_name) {
                tracing::trace!("{} provides {virtual_name} itself", runtime.name());
                return true;
            }
            installed.iter().any(|pkg| {
                pkg.provides().iter().any(|p| p == virtual_name)
                    && pkg
                        .vm_constraint()
                        .map_or(true, |constraint| version_satisfies(constraint, runtime))
            })
        })
    }
}
