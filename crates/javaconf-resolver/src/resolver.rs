//! Preference-ordered runtime selection.
//!
//! Resolution runs two passes over the installed runtimes. The preference
//! pass walks the atoms, the preference entries for the dependency's
//! version class, and each entry's providers, in that nesting order. The
//! fallback pass walks the atoms against the whole registry. Within each
//! step candidates are tried highest version first and the first one that
//! passes every check wins outright.

use std::cmp::Ordering;
use std::fmt;
use std::path::PathBuf;

use once_cell::unsync::OnceCell;

use javaconf_core::atom::{
    parse_dependency_atoms, parse_package_atoms, parse_virtual_atoms, DependencyAtom,
};
use javaconf_core::package::PackageRegistry;
use javaconf_core::runtime::{sort_descending, Runtime, RuntimeRegistry};
use javaconf_core::version;

use crate::closure::target_floor;
use crate::error::ResolveError;
use crate::preferences::Preferences;

/// Constraints a candidate runtime is checked against for one atom.
#[derive(Debug, Clone, Copy)]
pub struct CandidateFilter<'a> {
    pub atom: &'a DependencyAtom,
    /// Candidates below this version are rejected.
    pub target_floor: Option<&'a str>,
    pub allow_build_only: bool,
    /// Space-separated virtual capabilities that must have a provider.
    pub virtuals: Option<&'a str>,
}

/// Why a candidate runtime was passed over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    BelowTargetFloor,
    BuildOnly,
    WrongType,
    VersionMismatch,
    MissingVirtual,
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            Self::BelowTargetFloor => "below the target floor",
            Self::BuildOnly => "build-only",
            Self::WrongType => "wrong runtime type",
            Self::VersionMismatch => "version does not match",
            Self::MissingVirtual => "no provider for a required virtual",
        };
        f.write_str(reason)
    }
}

/// Selects runtimes for dependency strings.
///
/// The preference table is read once per resolver and reused by every
/// call on it; registries are queried afresh on every call. Create a new
/// resolver when on-disk preferences may have changed.
pub struct Resolver<R, P> {
    runtimes: R,
    packages: P,
    preference_files: Vec<PathBuf>,
    preferences: OnceCell<Preferences>,
}

impl<R, P> Resolver<R, P>
where
    R: RuntimeRegistry,
    P: PackageRegistry,
{
    /// `preference_files` are candidates in priority order; the first that
    /// exists is the preference table.
    pub fn new(runtimes: R, packages: P, preference_files: Vec<PathBuf>) -> Self {
        Self {
            runtimes,
            packages,
            preference_files,
            preferences: OnceCell::new(),
        }
    }

    pub fn runtimes(&self) -> &R {
        &self.runtimes
    }

    /// The preference table, loaded on first use.
    pub fn preferences(&self) -> &Preferences {
        self.preferences
            .get_or_init(|| Preferences::load(&self.preference_files))
    }

    /// Pick the runtime that best satisfies `dependency_text`.
    pub fn resolve(
        &self,
        dependency_text: &str,
        allow_build_only: bool,
    ) -> Result<R::Runtime, ResolveError> {
        let floor = target_floor(&self.packages, &parse_package_atoms(dependency_text))?;

        let atoms = parse_dependency_atoms(dependency_text);
        let lowest = lowest_atom(&atoms).ok_or(ResolveError::NoDependencyAtoms)?;
        let key = version::preference_key(&lowest.version);

        let virtuals = parse_virtual_atoms(dependency_text);
        let filter_for = |atom| CandidateFilter {
            atom,
            target_floor: floor.version.as_deref(),
            allow_build_only,
            virtuals: (!virtuals.is_empty()).then_some(virtuals.as_str()),
        };

        tracing::debug!(
            "resolving {} atom(s), version class {key}, virtuals [{virtuals}]",
            atoms.len()
        );

        let prefs = self.preferences();
        for atom in &atoms {
            for entry in prefs.matching(&key) {
                for provider in &entry.providers {
                    let runtimes = self.runtimes.find_by_provider(provider);
                    if let Some(runtime) = self.candidates(runtimes, filter_for(atom)).next() {
                        tracing::debug!(
                            "selected {} for {atom} via preference {} -> {provider}",
                            runtime.name(),
                            entry.version_pattern
                        );
                        return Ok(runtime);
                    }
                }
            }
        }

        for atom in &atoms {
            let runtimes = self.runtimes.list_runtimes();
            if let Some(runtime) = self.candidates(runtimes, filter_for(atom)).next() {
                tracing::debug!("selected {} for {atom} from the registry", runtime.name());
                return Ok(runtime);
            }
        }

        Err(ResolveError::NoSuitableRuntime)
    }

    /// Lazily yield the runtimes in `runtimes` that pass `filter`, highest
    /// version first.
    pub fn candidates<'a>(
        &'a self,
        mut runtimes: Vec<R::Runtime>,
        filter: CandidateFilter<'a>,
    ) -> impl Iterator<Item = R::Runtime> + 'a {
        sort_descending(&mut runtimes);
        runtimes
            .into_iter()
            .filter(move |runtime| match self.check(runtime, &filter) {
                Ok(()) => true,
                Err(reason) => {
                    tracing::trace!("{} rejected for {}: {reason}", runtime.name(), filter.atom);
                    false
                }
            })
    }

    /// Run every check on one candidate, cheapest first.
    pub fn check(&self, runtime: &R::Runtime, filter: &CandidateFilter<'_>) -> Result<(), Rejection> {
        if let Some(floor) = filter.target_floor {
            if version::compare(runtime.version(), floor) == Ordering::Less {
                return Err(Rejection::BelowTargetFloor);
            }
        }
        if !filter.allow_build_only && runtime.is_build_only() {
            return Err(Rejection::BuildOnly);
        }
        if !runtime.is_type(filter.atom.runtime_type) {
            return Err(Rejection::WrongType);
        }
        if !version::matches(runtime.version(), &filter.atom.version, &filter.atom.equality) {
            return Err(Rejection::VersionMismatch);
        }
        if let Some(virtuals) = filter.virtuals {
            if !self.packages.has_provider(virtuals, runtime) {
                return Err(Rejection::MissingVirtual);
            }
        }
        Ok(())
    }
}

/// The atom with the lowest version; the first one wins ties.
fn lowest_atom(atoms: &[DependencyAtom]) -> Option<&DependencyAtom> {
    atoms.iter().reduce(|lowest, atom| {
        if version::compare(&lowest.version, &atom.version) == Ordering::Greater {
            atom
        } else {
            lowest
        }
    })
}
