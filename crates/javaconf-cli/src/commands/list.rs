//! Handler for `javaconf list`.

use console::Style;
use miette::Result;

use javaconf_core::atom::RuntimeType;
use javaconf_core::runtime::{Runtime, RuntimeRegistry};

use super::Context;

pub fn exec(ctx: &Context) -> Result<()> {
    let registry = ctx.vms();
    let runtimes = registry.list_runtimes();

    if runtimes.is_empty() {
        println!("No Java runtimes registered.");
        println!("  Descriptors are read from: {}", ctx.vms_dir().display());
        return Ok(());
    }

    let active = registry.active(&ctx.config().active_env_files());
    let highlight = Style::new().green().bold();

    println!("Available Java runtimes:");
    for (index, vm) in runtimes.iter().enumerate() {
        let types: Vec<&str> = vm.types().iter().map(RuntimeType::as_str).collect();
        let build_only = if vm.is_build_only() { " (build only)" } else { "" };
        let line = format!(
            "{:>3}) {} [{}] {}{build_only}",
            index + 1,
            vm.name(),
            vm.version(),
            types.join(" ")
        );
        if active.as_ref() == Some(vm) {
            println!("{} {}", highlight.apply_to("*"), highlight.apply_to(line));
        } else {
            println!("  {line}");
        }
    }
    Ok(())
}
