#![allow(dead_code)]

use std::cell::Cell;
use std::collections::HashMap;

use javaconf_core::atom::RuntimeType;
use javaconf_core::package::{DependencyEdge, Package, PackageRegistry};
use javaconf_core::runtime::{version_satisfies, Runtime, RuntimeRegistry};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FakeRuntime {
    pub name: String,
    pub version: String,
    pub types: Vec<RuntimeType>,
    pub build_only: bool,
    pub provides: Vec<String>,
}

pub fn jdk(name: &str, version: &str) -> FakeRuntime {
    FakeRuntime {
        name: name.to_string(),
        version: version.to_string(),
        types: vec![RuntimeType::Jdk, RuntimeType::Jre],
        build_only: false,
        provides: Vec::new(),
    }
}

pub fn jre(name: &str, version: &str) -> FakeRuntime {
    FakeRuntime {
        types: vec![RuntimeType::Jre],
        ..jdk(name, version)
    }
}

impl FakeRuntime {
    pub fn build_only(mut self) -> Self {
        self.build_only = true;
        self
    }

    pub fn providing(mut self, virtual_name: &str) -> Self {
        self.provides.push(virtual_name.to_string());
        self
    }
}

impl Runtime for FakeRuntime {
    fn name(&self) -> &str {
        &self.name
    }

    fn identity(&self) -> &str {
        &self.name
    }

    fn version(&self) -> &str {
        &self.version
    }

    fn is_type(&self, runtime_type: RuntimeType) -> bool {
        self.types.contains(&runtime_type)
    }

    fn is_build_only(&self) -> bool {
        self.build_only
    }

    fn query(&self, key: &str) -> Option<&str> {
        match key {
            "JAVA_HOME" => Some("/usr/lib/jvm/fake"),
            _ => None,
        }
    }

    fn provides(&self) -> &[String] {
        &self.provides
    }
}

#[derive(Debug, Default)]
pub struct FakeRuntimes {
    pub runtimes: Vec<FakeRuntime>,
    pub scans: Cell<usize>,
}

impl FakeRuntimes {
    pub fn new(runtimes: Vec<FakeRuntime>) -> Self {
        Self {
            runtimes,
            scans: Cell::new(0),
        }
    }
}

impl RuntimeRegistry for FakeRuntimes {
    type Runtime = FakeRuntime;

    fn list_runtimes(&self) -> Vec<FakeRuntime> {
        self.scans.set(self.scans.get() + 1);
        self.runtimes.clone()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FakePackage {
    pub name: String,
    pub target: Option<String>,
    pub deps: Vec<String>,
    pub provides: Vec<String>,
    pub vm: Option<String>,
}

pub fn package(name: &str, target: Option<&str>, deps: &[&str]) -> FakePackage {
    FakePackage {
        name: name.to_string(),
        target: target.map(str::to_string),
        deps: deps.iter().map(|d| d.to_string()).collect(),
        provides: Vec::new(),
        vm: None,
    }
}

impl Package for FakePackage {
    fn name(&self) -> &str {
        &self.name
    }

    fn target(&self) -> Option<&str> {
        self.target.as_deref()
    }

    fn dependencies(&self) -> Vec<DependencyEdge> {
        self.deps
            .iter()
            .map(|d| DependencyEdge {
                artifact: format!("{d}.jar"),
                package: d.clone(),
            })
            .collect()
    }

    fn provides(&self) -> &[String] {
        &self.provides
    }

    fn vm_constraint(&self) -> Option<&str> {
        self.vm.as_deref()
    }
}

#[derive(Debug, Default)]
pub struct FakePackages {
    pub packages: HashMap<String, FakePackage>,
    pub lookups: Cell<usize>,
}

impl FakePackages {
    pub fn new(packages: Vec<FakePackage>) -> Self {
        Self {
            packages: packages.into_iter().map(|p| (p.name.clone(), p)).collect(),
            lookups: Cell::new(0),
        }
    }
}

impl PackageRegistry for FakePackages {
    type Package = FakePackage;

    fn get_package(&self, name: &str) -> Option<FakePackage> {
        self.lookups.set(self.lookups.get() + 1);
        self.packages.get(name).cloned()
    }

    fn has_provider<R: Runtime>(&self, virtuals: &str, runtime: &R) -> bool {
        virtuals.split_whitespace().all(|v| {
            runtime.provides().iter().any(|p| p == v)
                || self.packages.values().any(|pkg| {
                    pkg.provides.iter().any(|p| p == v)
                        && pkg
                            .vm
                            .as_deref()
                            .map_or(true, |c| version_satisfies(c, runtime))
                })
        })
    }
}
