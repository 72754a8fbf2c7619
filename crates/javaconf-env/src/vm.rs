//! Runtime descriptors and the runtime directory.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use javaconf_core::atom::RuntimeType;
use javaconf_core::envfile::load_env_file;
use javaconf_core::runtime::{Runtime, RuntimeRegistry};
use javaconf_util::errors::JavaconfError;

/// Descriptor files in the runtime directory carry this prefix.
pub const DESCRIPTOR_PREFIX: &str = "20";

const REQUIRED_KEYS: [&str; 3] = ["JAVA_HOME", "PROVIDES_TYPE", "PROVIDES_VERSION"];

/// A runtime registered through a descriptor file such as
/// `/etc/env.d/java/20icedtea-bin-7`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vm {
    name: String,
    identity: String,
    config: BTreeMap<String, String>,
    provides: Vec<String>,
}

impl Vm {
    /// Read and validate a descriptor file.
    pub fn from_file(path: &Path) -> miette::Result<Self> {
        let config = load_env_file(path)?;
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let name = file_name
            .strip_prefix(DESCRIPTOR_PREFIX)
            .unwrap_or(&file_name)
            .to_string();
        Self::from_config(name, path.display().to_string(), config)
    }

    /// Build a runtime from already-parsed descriptor values.
    pub fn from_config(
        name: String,
        identity: String,
        config: BTreeMap<String, String>,
    ) -> miette::Result<Self> {
        if let Some(missing) = REQUIRED_KEYS.iter().find(|k| !config.contains_key(**k)) {
            return Err(JavaconfError::InvalidDescriptor {
                path: identity,
                message: format!("missing {missing}"),
            }
            .into());
        }
        let provides = config
            .get("PROVIDES")
            .map(|p| p.split_whitespace().map(str::to_string).collect())
            .unwrap_or_default();
        Ok(Self {
            name,
            identity,
            config,
            provides,
        })
    }

    pub fn java_home(&self) -> &str {
        self.query("JAVA_HOME").unwrap_or_default()
    }

    /// The types this runtime provides, as listed in `PROVIDES_TYPE`.
    pub fn types(&self) -> Vec<RuntimeType> {
        [RuntimeType::Jdk, RuntimeType::Jre]
            .into_iter()
            .filter(|t| self.is_type(*t))
            .collect()
    }
}

impl Runtime for Vm {
    fn name(&self) -> &str {
        &self.name
    }

    fn identity(&self) -> &str {
        &self.identity
    }

    fn version(&self) -> &str {
        self.query("PROVIDES_VERSION").unwrap_or_default()
    }

    fn is_type(&self, runtime_type: RuntimeType) -> bool {
        let wanted = runtime_type.as_str().to_uppercase();
        self.query("PROVIDES_TYPE")
            .is_some_and(|types| types.split_whitespace().any(|t| t == wanted))
    }

    fn is_build_only(&self) -> bool {
        self.query("BUILD_ONLY")
            .is_some_and(|v| v.eq_ignore_ascii_case("true"))
    }

    fn query(&self, key: &str) -> Option<&str> {
        self.config.get(key).map(String::as_str)
    }

    fn provides(&self) -> &[String] {
        &self.provides
    }
}

/// The directory of runtime descriptors. Rescanned on every query.
#[derive(Debug, Clone)]
pub struct VmRegistry {
    dir: PathBuf,
}

impl VmRegistry {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Look a runtime up the way users name it on the command line:
    /// 1-based index in [`RuntimeRegistry::list_runtimes`] order, descriptor
    /// path, exact name, `JAVA_HOME`, or failing those the last runtime
    /// whose name starts with `machine`.
    pub fn find(&self, machine: &str) -> Option<Vm> {
        let runtimes = self.list_runtimes();

        if let Ok(index) = machine.parse::<usize>() {
            return index.checked_sub(1).and_then(|i| runtimes.get(i)).cloned();
        }

        let mut partial = None;
        for vm in runtimes {
            if vm.identity == machine || vm.name == machine || vm.java_home() == machine {
                return Some(vm);
            }
            if vm.name.starts_with(machine) {
                partial = Some(vm);
            }
        }
        partial
    }

    /// The runtime whose `JAVA_HOME` is named by the first of `env_files`
    /// that defines one.
    pub fn active(&self, env_files: &[PathBuf]) -> Option<Vm> {
        let java_home = env_files.iter().find_map(|file| {
            if !file.is_file() {
                return None;
            }
            match load_env_file(file) {
                Ok(env) => env.get("JAVA_HOME").cloned(),
                Err(e) => {
                    tracing::warn!("Skipping unreadable env file {}: {e}", file.display());
                    None
                }
            }
        })?;
        tracing::debug!("active JAVA_HOME is {java_home}");
        self.list_runtimes()
            .into_iter()
            .find(|vm| vm.java_home() == java_home)
    }
}

impl RuntimeRegistry for VmRegistry {
    type Runtime = Vm;

    fn list_runtimes(&self) -> Vec<Vm> {
        let mut paths: Vec<PathBuf> = fs::read_dir(&self.dir)
            .into_iter()
            .flatten()
            .filter_map(|e| e.ok())
            .filter(|e| {
                e.file_name()
                    .to_string_lossy()
                    .starts_with(DESCRIPTOR_PREFIX)
            })
            .map(|e| e.path())
            .filter(|p| p.is_file())
            .collect();
        paths.sort();

        paths
            .iter()
            .filter_map(|path| match Vm::from_file(path) {
                Ok(vm) => Some(vm),
                Err(e) => {
                    tracing::warn!("Skipping runtime descriptor {}: {e}", path.display());
                    None
                }
            })
            .collect()
    }
}
