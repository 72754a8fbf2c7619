//! Installed runtimes and the registry they are queried from.

use std::cmp::Ordering;

use crate::atom::{parse_dependency_atoms, RuntimeType};
use crate::version;

/// An installed JRE or JDK.
pub trait Runtime {
    /// Short name, e.g. `icedtea-bin-7`. Provider preferences match on it.
    fn name(&self) -> &str;

    /// Stable identity of the runtime, usually the descriptor path.
    fn identity(&self) -> &str;

    /// Provided Java version, e.g. `1.7`.
    fn version(&self) -> &str;

    fn is_type(&self, runtime_type: RuntimeType) -> bool;

    /// Build-only runtimes are skipped unless the caller allows them.
    fn is_build_only(&self) -> bool;

    /// Raw descriptor value, e.g. `JAVA_HOME`.
    fn query(&self, key: &str) -> Option<&str>;

    /// Virtual capabilities the runtime provides by itself.
    fn provides(&self) -> &[String] {
        &[]
    }
}

/// Source of installed runtimes.
///
/// Every call reflects current state; implementations must not cache
/// across calls.
pub trait RuntimeRegistry {
    type Runtime: Runtime + Clone;

    fn list_runtimes(&self) -> Vec<Self::Runtime>;

    /// Runtimes whose name or identity starts with `provider`. The empty
    /// provider matches every runtime.
    fn find_by_provider(&self, provider: &str) -> Vec<Self::Runtime> {
        self.list_runtimes()
            .into_iter()
            .filter(|rt| {
                provider.is_empty()
                    || rt.name().starts_with(provider)
                    || rt.identity().starts_with(provider)
            })
            .collect()
    }
}

/// Order two runtimes by version.
pub fn compare_runtimes<R: Runtime>(a: &R, b: &R) -> Ordering {
    version::compare(a.version(), b.version())
}

/// Sort runtimes highest version first.
///
/// Sorts ascending and then reverses, so runtimes with equal versions end
/// up in reverse registry order.
pub fn sort_descending<R: Runtime>(runtimes: &mut [R]) {
    runtimes.sort_by(compare_runtimes);
    runtimes.reverse();
}

/// Whether `runtime` satisfies any runtime atom in `dependency_text`.
pub fn version_satisfies<R: Runtime + ?Sized>(dependency_text: &str, runtime: &R) -> bool {
    parse_dependency_atoms(dependency_text).iter().any(|atom| {
        runtime.is_type(atom.runtime_type)
            && version::matches(runtime.version(), &atom.version, &atom.equality)
    })
}
