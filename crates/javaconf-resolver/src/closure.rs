//! Transitive dependency closure and the runtime target floor it implies.

use std::cmp::Ordering;
use std::collections::{HashSet, VecDeque};

use javaconf_core::atom::PackageAtom;
use javaconf_core::package::{Package, PackageRegistry};
use javaconf_core::version;

use crate::error::ResolveError;

/// The most demanding runtime target in a dependency closure.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TargetFloor {
    /// Package that declared the target.
    pub package: Option<String>,
    /// Lowest runtime version every package in the closure can run on.
    pub version: Option<String>,
}

/// Every package reachable from `initial` through declared dependencies,
/// in discovery order.
///
/// Packages are identified by name, so cycles terminate and nothing is
/// visited twice. A dependency that is not installed aborts the whole
/// closure.
pub fn closure<P: PackageRegistry>(
    registry: &P,
    initial: Vec<P::Package>,
) -> Result<Vec<P::Package>, ResolveError> {
    let mut queued: HashSet<String> = HashSet::new();
    let mut unresolved: VecDeque<P::Package> = VecDeque::new();
    for pkg in initial {
        if queued.insert(pkg.name().to_string()) {
            unresolved.push_back(pkg);
        }
    }

    let mut resolved = Vec::new();
    while let Some(pkg) = unresolved.pop_front() {
        for edge in pkg.dependencies() {
            let Some(dep) = registry.get_package(&edge.package) else {
                return Err(unresolved_dependency(pkg.name(), &edge.package));
            };
            if queued.insert(dep.name().to_string()) {
                tracing::trace!("{} pulls in {}", pkg.name(), dep.name());
                unresolved.push_back(dep);
            }
        }
        resolved.push(pkg);
    }
    Ok(resolved)
}

fn unresolved_dependency(package: &str, dependency: &str) -> ResolveError {
    if dependency.contains(',') {
        ResolveError::BrokenDependency {
            package: package.to_string(),
        }
    } else {
        ResolveError::MissingDependency {
            dependency: dependency.to_string(),
            package: package.to_string(),
        }
    }
}

/// Highest `target()` in the closure of the packages named by `atoms`.
///
/// Atoms that do not name an installed package are skipped. Ties keep the
/// package seen first.
pub fn target_floor<P: PackageRegistry>(
    registry: &P,
    atoms: &[PackageAtom],
) -> Result<TargetFloor, ResolveError> {
    let initial: Vec<P::Package> = atoms
        .iter()
        .filter_map(|atom| {
            let name = atom.registry_name();
            let pkg = registry.get_package(&name);
            if pkg.is_none() {
                tracing::debug!("{atom} is not an installed package, ignoring");
            }
            pkg
        })
        .collect();

    let floor = highest_target(&closure(registry, initial)?);
    if let (Some(pkg), Some(target)) = (&floor.package, &floor.version) {
        tracing::debug!("target floor {target} set by {pkg}");
    }
    Ok(floor)
}

/// Highest `target()` among `packages`. Ties keep the package seen first.
pub fn highest_target<Pk: Package>(packages: &[Pk]) -> TargetFloor {
    let mut floor = TargetFloor::default();
    for pkg in packages {
        let Some(target) = pkg.target() else {
            continue;
        };
        let higher = floor
            .version
            .as_deref()
            .map_or(true, |current| version::compare(current, target) == Ordering::Less);
        if higher {
            floor = TargetFloor {
                package: Some(pkg.name().to_string()),
                version: Some(target.to_string()),
            };
        }
    }
    floor
}
