//! Dependency atom parsing.
//!
//! Dependency text arrives flattened: conditional groups have already been
//! resolved, leaving whitespace-separated tokens such as
//! `>=virtual/jdk-1.5 dev-java/ant-core:0 java-virtuals/jaf`.
//! Three independent scans pull out the runtime constraints, the package
//! atoms and the virtual capabilities.

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;

static RUNTIME_ATOM_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"([<>=~]*)virtual/(jre|jdk)[-:]([0-9.*]+)").expect("valid runtime atom regex")
});

static PACKAGE_ATOM_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"([\w-]+)/([\w-]+)(?::(\d+))?").expect("valid package atom regex")
});

static VIRTUAL_ATOM_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"([<>=~]+)?java-virtuals/([\w.:-]+)").expect("valid virtual atom regex")
});

/// The two kinds of runtime a dependency can ask for.
///
/// Variant order matches the lexicographic order of the names so that
/// atom sorting stays a plain string-tuple comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RuntimeType {
    Jdk,
    Jre,
}

impl RuntimeType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Jdk => "jdk",
            Self::Jre => "jre",
        }
    }

    fn from_atom(s: &str) -> Option<Self> {
        match s {
            "jdk" => Some(Self::Jdk),
            "jre" => Some(Self::Jre),
            _ => None,
        }
    }
}

impl fmt::Display for RuntimeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A runtime constraint such as `>=virtual/jdk-1.5`.
///
/// The derived ordering compares `(equality, runtime_type, version)` as
/// strings. `1.10` therefore sorts before `1.9`; resolution order depends
/// on this, so it is kept as is.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DependencyAtom {
    pub equality: String,
    pub runtime_type: RuntimeType,
    pub version: String,
}

impl fmt::Display for DependencyAtom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}virtual/{}-{}",
            self.equality, self.runtime_type, self.version
        )
    }
}

/// A `category/package(:slot)` reference to an installed package.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PackageAtom {
    pub category: String,
    pub name: String,
    pub slot: Option<String>,
}

impl PackageAtom {
    /// Name under which the package is installed: `name` for the default
    /// slot, `name-slot` otherwise.
    pub fn registry_name(&self) -> String {
        match self.slot.as_deref() {
            Some(slot) if slot != "0" => format!("{}-{slot}", self.name),
            _ => self.name.clone(),
        }
    }
}

impl fmt::Display for PackageAtom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.category, self.name)?;
        if let Some(ref slot) = self.slot {
            write!(f, ":{slot}")?;
        }
        Ok(())
    }
}

/// Extract runtime constraints, sorted by string tuple and then reversed.
pub fn parse_dependency_atoms(text: &str) -> Vec<DependencyAtom> {
    let mut atoms: Vec<DependencyAtom> = RUNTIME_ATOM_RE
        .captures_iter(text)
        .filter_map(|caps| {
            Some(DependencyAtom {
                equality: caps[1].to_string(),
                runtime_type: RuntimeType::from_atom(&caps[2])?,
                version: caps[3].to_string(),
            })
        })
        .collect();
    atoms.sort();
    atoms.reverse();
    atoms
}

/// Extract package atoms, skipping the `virtual/jdk` and `virtual/jre`
/// pseudo-packages (including the `-1` fragments left by `virtual/jdk-1.5`).
pub fn parse_package_atoms(text: &str) -> Vec<PackageAtom> {
    PACKAGE_ATOM_RE
        .captures_iter(text)
        .filter(|caps| {
            !(&caps[1] == "virtual" && matches!(&caps[2], "jdk" | "jre" | "jdk-1" | "jre-1"))
        })
        .map(|caps| PackageAtom {
            category: caps[1].to_string(),
            name: caps[2].to_string(),
            slot: caps.get(3).map(|m| m.as_str().to_string()),
        })
        .collect()
}

/// Extract required virtual capabilities as a space-separated list.
///
/// A trailing `:0` slot is dropped and any other slot separator becomes
/// `-`, so `java-virtuals/servlet-api:2.4` yields `servlet-api-2.4`.
/// Returns an empty string when nothing is required.
pub fn parse_virtual_atoms(text: &str) -> String {
    VIRTUAL_ATOM_RE
        .captures_iter(text)
        .map(|caps| {
            let name = &caps[2];
            name.strip_suffix(":0").unwrap_or(name).replace(':', "-")
        })
        .collect::<Vec<_>>()
        .join(" ")
}
