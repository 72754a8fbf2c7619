//! Handler for `javaconf resolve`.

use miette::Result;

use javaconf_core::runtime::Runtime;
use javaconf_util::progress;

use super::Context;

pub fn exec(ctx: &Context, depend: &str, allow_build_only: bool, java_home: bool) -> Result<()> {
    let allow_build_only = allow_build_only || ctx.config().resolve.allow_build_only;
    let resolver = ctx.resolver();

    if let Some(source) = resolver.preferences().source() {
        tracing::debug!("preferences from {}", source.display());
    }

    let vm = resolver.resolve(depend, allow_build_only)?;
    progress::status("Selected", &format!("{} [{}]", vm.name(), vm.version()));
    if vm.is_build_only() {
        progress::status_warn("Warning", &format!("{} is a build-only runtime", vm.name()));
    }

    println!("{}", vm.name());
    if java_home {
        println!("{}", vm.java_home());
    }
    Ok(())
}
