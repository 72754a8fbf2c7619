use std::path::{Component, Path, PathBuf};

/// Re-root an absolute `path` under `root`.
///
/// `/etc/env.d/java` with root `/tmp/chroot` becomes
/// `/tmp/chroot/etc/env.d/java`. Relative paths and a `None` root leave
/// the path untouched.
pub fn reroot(root: Option<&Path>, path: &Path) -> PathBuf {
    let Some(root) = root else {
        return path.to_path_buf();
    };
    if !path.is_absolute() {
        return path.to_path_buf();
    }
    let relative: PathBuf = path
        .components()
        .filter(|c| !matches!(c, Component::RootDir | Component::Prefix(_)))
        .collect();
    root.join(relative)
}

/// Expand a leading `~` to the user's home directory.
pub fn expand_home(path: &str) -> PathBuf {
    match path.strip_prefix('~') {
        Some(rest) => {
            let home = std::env::var("HOME")
                .or_else(|_| std::env::var("USERPROFILE"))
                .unwrap_or_else(|_| ".".to_string());
            Path::new(&home).join(rest.trim_start_matches('/'))
        }
        None => PathBuf::from(path),
    }
}
