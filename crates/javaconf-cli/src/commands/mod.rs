//! Command dispatch and handler modules.

mod compare;
mod deps;
mod list;
mod resolve;
mod satisfies;

use std::path::Path;

use miette::Result;

use javaconf_core::config::Config;
use javaconf_env::package::InstalledPackages;
use javaconf_env::vm::VmRegistry;
use javaconf_resolver::Resolver;
use javaconf_util::fs::reroot;

use crate::cli::{Cli, Command};

/// Route a parsed CLI invocation to the appropriate command handler.
pub fn dispatch(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Compare { ref a, ref b } => compare::exec(a, b),
        Command::Resolve {
            ref depend,
            allow_build_only,
            java_home,
        } => {
            let ctx = Context::load(&cli)?;
            resolve::exec(&ctx, &depend.join(" "), allow_build_only, java_home)
        }
        Command::List => list::exec(&Context::load(&cli)?),
        Command::Satisfies { ref depend, ref vm } => {
            satisfies::exec(&Context::load(&cli)?, depend, vm)
        }
        Command::Deps { ref packages } => deps::exec(&Context::load(&cli)?, packages),
    }
}

/// Configuration shared by the commands that touch the registries.
pub struct Context {
    config: Config,
}

impl Context {
    /// Load the config named on the command line, or the default one, and
    /// re-root it under `--root`.
    fn load(cli: &Cli) -> Result<Self> {
        let root = cli.root.as_deref();
        let path = match &cli.config {
            Some(path) => path.clone(),
            None => reroot(root, &Config::default_path()),
        };
        let config = Config::load_from(&path)?.rerooted(root);
        tracing::debug!(
            "runtimes in {}, packages in {}",
            config.paths.vms_dir.display(),
            config.paths.packages_root.display()
        );
        Ok(Self { config })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn vms_dir(&self) -> &Path {
        &self.config.paths.vms_dir
    }

    pub fn vms(&self) -> VmRegistry {
        VmRegistry::new(&self.config.paths.vms_dir)
    }

    pub fn packages(&self) -> InstalledPackages {
        InstalledPackages::new(&self.config.paths.packages_root)
    }

    pub fn resolver(&self) -> Resolver<VmRegistry, InstalledPackages> {
        Resolver::new(
            self.vms(),
            self.packages(),
            self.config.preferences.files.clone(),
        )
    }
}
