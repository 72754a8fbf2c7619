use miette::Diagnostic;
use thiserror::Error;

/// Why no runtime could be selected.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum ResolveError {
    /// The dependency text names no `virtual/jdk` or `virtual/jre` atom.
    #[error("No runtime dependency found in the dependency string")]
    #[diagnostic(help("Expected an atom such as >=virtual/jdk-1.5"))]
    NoDependencyAtoms,

    /// An installed package declares a dependency entry that cannot be a
    /// package name.
    #[error("Package {package} has a broken DEPEND entry in package.env")]
    #[diagnostic(help("Reinstall the package; if that does not fix it, report it upstream"))]
    BrokenDependency { package: String },

    /// An installed package depends on a package that is not installed.
    #[error("Package {dependency} not found in the system; it is listed as a dependency of {package}")]
    #[diagnostic(help("Reinstall the depending package together with its dependencies"))]
    MissingDependency { dependency: String, package: String },

    /// No installed runtime passed every constraint.
    #[error("Couldn't find a suitable VM. Possible invalid dependency string")]
    NoSuitableRuntime,
}
