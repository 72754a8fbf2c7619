//! Handler for `javaconf deps`.

use miette::Result;

use javaconf_core::package::{Package, PackageRegistry};
use javaconf_resolver::closure::{closure, highest_target};
use javaconf_util::errors::JavaconfError;

use super::Context;

pub fn exec(ctx: &Context, names: &[String]) -> Result<()> {
    let registry = ctx.packages();
    let initial = names
        .iter()
        .map(|name| {
            registry.get_package(name).ok_or_else(|| JavaconfError::Generic {
                message: format!(
                    "Package {name} is not installed under {}",
                    registry.root().display()
                ),
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    let packages = closure(&registry, initial)?;
    for pkg in &packages {
        match pkg.target() {
            Some(target) => println!("{} (target {target})", pkg.name()),
            None => println!("{}", pkg.name()),
        }
    }

    let floor = highest_target(&packages);
    match (floor.version, floor.package) {
        (Some(target), Some(package)) => println!("Target floor: {target} (from {package})"),
        _ => println!("Target floor: none"),
    }
    Ok(())
}
