//! Installed Java packages and the registry they are queried from.

use crate::runtime::Runtime;

/// A dependency edge declared by an installed package.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DependencyEdge {
    /// Jar the dependency is used for; empty when the whole package is used.
    pub artifact: String,
    /// Installed name of the package depended upon.
    pub package: String,
}

impl DependencyEdge {
    /// Parse a single `jar@package` or bare `package` entry.
    pub fn parse(entry: &str) -> Option<Self> {
        let entry = entry.trim();
        if entry.is_empty() {
            return None;
        }
        let (artifact, package) = entry.split_once('@').unwrap_or(("", entry));
        Some(Self {
            artifact: artifact.to_string(),
            package: package.to_string(),
        })
    }
}

/// An installed Java package.
pub trait Package {
    fn name(&self) -> &str;

    /// Minimum runtime version the package was built for.
    fn target(&self) -> Option<&str>;

    fn dependencies(&self) -> Vec<DependencyEdge>;

    /// Virtual capabilities this package provides.
    fn provides(&self) -> &[String] {
        &[]
    }

    /// Dependency text the package requires of the runtime it runs on.
    fn vm_constraint(&self) -> Option<&str> {
        None
    }
}

/// Source of installed packages.
pub trait PackageRegistry {
    type Package: Package + Clone;

    fn get_package(&self, name: &str) -> Option<Self::Package>;

    /// Whether every space-separated capability in `virtuals` is provided
    /// for `runtime`, either by the runtime itself or by an installed
    /// package usable on it.
    fn has_provider<R: Runtime>(&self, virtuals: &str, runtime: &R) -> bool;
}
