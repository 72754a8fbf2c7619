//! Handler for `javaconf satisfies`.

use miette::Result;

use javaconf_core::runtime::{version_satisfies, Runtime};
use javaconf_util::errors::JavaconfError;

use super::Context;

pub fn exec(ctx: &Context, depend: &str, machine: &str) -> Result<()> {
    let vm = ctx
        .vms()
        .find(machine)
        .ok_or_else(|| JavaconfError::RuntimeNotFound {
            name: machine.to_string(),
        })?;

    if version_satisfies(depend, &vm) {
        println!("{} satisfies {depend}", vm.name());
        Ok(())
    } else {
        Err(JavaconfError::Generic {
            message: format!("{} does not satisfy {depend}", vm.name()),
        }
        .into())
    }
}
