use std::fs;
use std::path::Path;

use javaconf_core::runtime::Runtime;
use javaconf_env::package::InstalledPackages;
use javaconf_env::vm::VmRegistry;
use javaconf_resolver::{ResolveError, Resolver};

fn write_vm(dir: &Path, name: &str, version: &str, extra: &str) {
    fs::write(
        dir.join(format!("20{name}")),
        format!(
            "JAVA_HOME=\"/usr/lib/jvm/{name}\"\n\
             PROVIDES_TYPE=\"JDK JRE\"\n\
             PROVIDES_VERSION=\"{version}\"\n\
             {extra}"
        ),
    )
    .unwrap();
}

fn write_package(root: &Path, name: &str, body: &str) {
    let dir = root.join(name);
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("package.env"), body).unwrap();
}

struct Tree {
    _dir: tempfile::TempDir,
    vms: std::path::PathBuf,
    share: std::path::PathBuf,
    prefs: std::path::PathBuf,
}

fn tree() -> Tree {
    let dir = tempfile::tempdir().unwrap();
    let vms = dir.path().join("etc/env.d/java");
    let share = dir.path().join("usr/share");
    fs::create_dir_all(&vms).unwrap();
    fs::create_dir_all(&share).unwrap();
    let prefs = dir.path().join("jdk-defaults.conf");
    Tree {
        _dir: dir,
        vms,
        share,
        prefs,
    }
}

fn resolver(t: &Tree) -> Resolver<VmRegistry, InstalledPackages> {
    Resolver::new(
        VmRegistry::new(&t.vms),
        InstalledPackages::new(&t.share),
        vec![t.prefs.clone()],
    )
}

#[test]
fn resolves_against_descriptor_tree() {
    let t = tree();
    write_vm(&t.vms, "sun-jdk-1.4", "1.4", "");
    write_vm(&t.vms, "sun-jdk-1.5", "1.5", "");
    write_vm(&t.vms, "icedtea-bin-6", "1.6", "");

    let vm = resolver(&t).resolve(">=virtual/jdk-1.5", false).unwrap();
    assert_eq!(vm.name(), "icedtea-bin-6");
    assert_eq!(vm.query("JAVA_HOME"), Some("/usr/lib/jvm/icedtea-bin-6"));
}

#[test]
fn preference_file_and_target_floor_together() {
    let t = tree();
    write_vm(&t.vms, "sun-jdk-1.5", "1.5", "");
    write_vm(&t.vms, "sun-jdk-1.6", "1.6", "");
    write_vm(&t.vms, "icedtea-bin-7", "1.7", "");
    fs::write(&t.prefs, "# defaults\n*= sun-jdk icedtea-bin\n").unwrap();
    write_package(&t.share, "ant-core", "TARGET=\"1.4\"\nDEPEND=\"ant-launcher.jar@ant-launcher\"\n");
    write_package(&t.share, "ant-launcher", "TARGET=\"1.6\"\n");

    let vm = resolver(&t)
        .resolve(">=virtual/jdk-1.4 dev-java/ant-core:0", false)
        .unwrap();
    assert_eq!(vm.name(), "sun-jdk-1.6");
}

#[test]
fn broken_package_env_is_reported() {
    let t = tree();
    write_vm(&t.vms, "sun-jdk-1.6", "1.6", "");
    write_package(&t.share, "ant-core", "DEPEND=\"ant-launcher,xerces-2\"\n");

    let err = resolver(&t)
        .resolve(">=virtual/jdk-1.4 dev-java/ant-core", false)
        .unwrap_err();
    assert_eq!(
        err,
        ResolveError::BrokenDependency {
            package: "ant-core".to_string()
        }
    );
}

#[test]
fn build_only_descriptor_is_skipped() {
    let t = tree();
    write_vm(&t.vms, "gcj-jdk", "1.5", "BUILD_ONLY=\"TRUE\"\n");

    assert_eq!(
        resolver(&t).resolve(">=virtual/jdk-1.5", false).unwrap_err(),
        ResolveError::NoSuitableRuntime
    );
    assert_eq!(
        resolver(&t).resolve(">=virtual/jdk-1.5", true).unwrap().name(),
        "gcj-jdk"
    );
}
