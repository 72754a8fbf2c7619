use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use javaconf_core::package::{DependencyEdge, Package, PackageRegistry};
use javaconf_env::package::InstalledPackages;
use javaconf_env::vm::Vm;

fn write_package(root: &Path, name: &str, body: &str) {
    let dir = root.join(name);
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("package.env"), body).unwrap();
}

fn vm(name: &str, version: &str, provides: &str) -> Vm {
    let mut config = BTreeMap::new();
    config.insert("JAVA_HOME".to_string(), format!("/usr/lib/jvm/{name}"));
    config.insert("PROVIDES_TYPE".to_string(), "JDK JRE".to_string());
    config.insert("PROVIDES_VERSION".to_string(), version.to_string());
    if !provides.is_empty() {
        config.insert("PROVIDES".to_string(), provides.to_string());
    }
    Vm::from_config(name.to_string(), format!("/etc/env.d/java/20{name}"), config).unwrap()
}

#[test]
fn reads_target_and_dependencies() {
    let root = tempfile::tempdir().unwrap();
    write_package(
        root.path(),
        "ant-core",
        "DESCRIPTION=\"Java-based build tool\"\n\
         TARGET=\"1.4\"\n\
         DEPEND=\"ant-launcher.jar@ant-launcher:xerces-2\"\n",
    );
    let registry = InstalledPackages::new(root.path());

    let pkg = registry.get_package("ant-core").unwrap();
    assert_eq!(pkg.name(), "ant-core");
    assert_eq!(pkg.target(), Some("1.4"));
    assert_eq!(
        pkg.dependencies(),
        vec![
            DependencyEdge {
                artifact: "ant-launcher.jar".to_string(),
                package: "ant-launcher".to_string(),
            },
            DependencyEdge {
                artifact: String::new(),
                package: "xerces-2".to_string(),
            },
        ]
    );
}

#[test]
fn package_without_depend_or_target() {
    let root = tempfile::tempdir().unwrap();
    write_package(root.path(), "junit", "CLASSPATH=\"/usr/share/junit/lib/junit.jar\"\n");
    let pkg = InstalledPackages::new(root.path()).get_package("junit").unwrap();
    assert_eq!(pkg.target(), None);
    assert!(pkg.dependencies().is_empty());
    assert_eq!(pkg.vm_constraint(), None);
}

#[test]
fn unknown_package_is_none() {
    let root = tempfile::tempdir().unwrap();
    let registry = InstalledPackages::new(root.path());
    assert!(registry.get_package("does-not-exist").is_none());
    assert!(registry.get_package("").is_none());
    assert!(registry.get_package("ant-core,junit").is_none());
}

#[test]
fn list_packages_is_sorted_and_skips_plain_directories() {
    let root = tempfile::tempdir().unwrap();
    write_package(root.path(), "xerces-2", "TARGET=\"1.3\"\n");
    write_package(root.path(), "ant-core", "TARGET=\"1.4\"\n");
    fs::create_dir_all(root.path().join("doc")).unwrap();

    let names: Vec<String> = InstalledPackages::new(root.path())
        .list_packages()
        .iter()
        .map(|p| p.name().to_string())
        .collect();
    assert_eq!(names, vec!["ant-core", "xerces-2"]);
}

#[test]
fn runtime_providing_virtual_itself_satisfies() {
    let root = tempfile::tempdir().unwrap();
    let registry = InstalledPackages::new(root.path());
    assert!(registry.has_provider("jaf", &vm("sun-jdk-1.6", "1.6", "jaf jdbc-stdext")));
    assert!(!registry.has_provider("jaf", &vm("sun-jdk-1.4", "1.4", "")));
}

#[test]
fn installed_provider_must_accept_the_runtime() {
    let root = tempfile::tempdir().unwrap();
    write_package(
        root.path(),
        "sun-jaf",
        "PROVIDES=\"jaf\"\nVM=\">=virtual/jre-1.5\"\n",
    );
    let registry = InstalledPackages::new(root.path());

    assert!(registry.has_provider("jaf", &vm("sun-jdk-1.6", "1.6", "")));
    assert!(!registry.has_provider("jaf", &vm("sun-jdk-1.4", "1.4", "")));
}

#[test]
fn provider_without_vm_constraint_accepts_any_runtime() {
    let root = tempfile::tempdir().unwrap();
    write_package(root.path(), "gnu-jaf", "PROVIDES=\"jaf\"\n");
    let registry = InstalledPackages::new(root.path());
    assert!(registry.has_provider("jaf", &vm("sun-jdk-1.4", "1.4", "")));
}

#[test]
fn every_requested_virtual_must_be_provided() {
    let root = tempfile::tempdir().unwrap();
    write_package(root.path(), "gnu-jaf", "PROVIDES=\"jaf\"\n");
    let registry = InstalledPackages::new(root.path());
    let runtime = vm("sun-jdk-1.6", "1.6", "");

    assert!(registry.has_provider("jaf", &runtime));
    assert!(!registry.has_provider("jaf servlet-api-2.4", &runtime));
}
