#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;

/// A fake filesystem root laid out the way javaconf expects by default.
pub struct Root {
    dir: TempDir,
}

impl Root {
    pub fn new() -> Self {
        let root = Self {
            dir: TempDir::new().unwrap(),
        };
        fs::create_dir_all(root.vms_dir()).unwrap();
        fs::create_dir_all(root.path().join("usr/share")).unwrap();
        root
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn vms_dir(&self) -> PathBuf {
        self.path().join("etc/env.d/java")
    }

    pub fn vm(&self, name: &str, types: &str, version: &str) -> &Self {
        self.vm_with(name, types, version, "")
    }

    pub fn vm_with(&self, name: &str, types: &str, version: &str, extra: &str) -> &Self {
        fs::write(
            self.vms_dir().join(format!("20{name}")),
            format!(
                "VERSION=\"{name}\"\n\
                 JAVA_HOME=\"/usr/lib/jvm/{name}\"\n\
                 PROVIDES_TYPE=\"{types}\"\n\
                 PROVIDES_VERSION=\"{version}\"\n\
                 {extra}"
            ),
        )
        .unwrap();
        self
    }

    pub fn package(&self, name: &str, body: &str) -> &Self {
        let dir = self.path().join("usr/share").join(name);
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("package.env"), body).unwrap();
        self
    }

    pub fn file(&self, relative: &str, body: &str) -> &Self {
        let path = self.path().join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, body).unwrap();
        self
    }

    pub fn cmd(&self) -> Command {
        let mut cmd = javaconf_cmd();
        cmd.arg("--root").arg(self.path());
        cmd
    }
}

#[allow(deprecated)]
pub fn javaconf_cmd() -> Command {
    let mut cmd = Command::cargo_bin("javaconf").unwrap();
    cmd.env_remove("JAVACONF_CONFIG").env_remove("RUST_LOG");
    cmd
}
