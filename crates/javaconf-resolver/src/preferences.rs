//! Administrator preference tables.
//!
//! A preference file maps a version class to providers in priority order:
//!
//! ```text
//! # version class   providers
//! 1.5= icedtea oracle-jdk-bin
//! *= icedtea-bin
//! ```
//!
//! Only the first existing file among the candidates is read; files are
//! never merged.

use std::path::{Path, PathBuf};

/// Pattern that applies to every version class.
pub const ANY_VERSION: &str = "*";

/// One line of a preference file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreferenceEntry {
    /// `X.Y` version class or `*`.
    pub version_pattern: String,
    /// Provider name prefixes, most preferred first.
    pub providers: Vec<String>,
}

impl PreferenceEntry {
    /// Whether this entry applies to the `X.Y` version class `key`.
    pub fn applies_to(&self, key: &str) -> bool {
        self.version_pattern == key || self.version_pattern == ANY_VERSION
    }
}

/// An ordered preference table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Preferences {
    entries: Vec<PreferenceEntry>,
    source: Option<PathBuf>,
}

impl Preferences {
    /// Read the first of `candidates` that exists.
    ///
    /// No candidate on disk yields an empty table. An unreadable first
    /// candidate also yields an empty table; later candidates are not
    /// consulted either way.
    pub fn load(candidates: &[PathBuf]) -> Self {
        let Some(path) = candidates.iter().find(|p| p.exists()) else {
            tracing::debug!("no preference file found, using registry order only");
            return Self::default();
        };
        match std::fs::read_to_string(path) {
            Ok(content) => {
                let prefs = Self::parse(&content).with_source(path);
                tracing::debug!(
                    "loaded {} preference entries from {}",
                    prefs.entries.len(),
                    path.display()
                );
                prefs
            }
            Err(e) => {
                tracing::warn!("Ignoring unreadable preference file {}: {e}", path.display());
                Self::default().with_source(path)
            }
        }
    }

    /// Parse preference file content. Malformed lines are skipped.
    pub fn parse(content: &str) -> Self {
        let entries = content.lines().filter_map(parse_line).collect();
        Self {
            entries,
            source: None,
        }
    }

    fn with_source(mut self, path: &Path) -> Self {
        self.source = Some(path.to_path_buf());
        self
    }

    pub fn entries(&self) -> &[PreferenceEntry] {
        &self.entries
    }

    /// File the table was read from, if any.
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries that apply to the version class `key`, in file order.
    pub fn matching<'a>(&'a self, key: &'a str) -> impl Iterator<Item = &'a PreferenceEntry> + 'a {
        self.entries.iter().filter(move |e| e.applies_to(key))
    }
}

fn parse_line(line: &str) -> Option<PreferenceEntry> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return None;
    }

    let (pattern, providers) = match line.split_once('=') {
        Some((pattern, rest)) => (pattern.trim(), rest),
        None => line.split_once(char::is_whitespace)?,
    };
    let providers: Vec<String> = providers.split_whitespace().map(str::to_string).collect();
    if pattern.is_empty() || providers.is_empty() {
        return None;
    }

    Some(PreferenceEntry {
        version_pattern: pattern.to_string(),
        providers,
    })
}
