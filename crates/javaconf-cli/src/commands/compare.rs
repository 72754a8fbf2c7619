use std::cmp::Ordering;

use miette::Result;

use javaconf_core::version;

pub fn exec(a: &str, b: &str) -> Result<()> {
    let result = match version::compare(a, b) {
        Ordering::Less => -1,
        Ordering::Equal => 0,
        Ordering::Greater => 1,
    };
    println!("{result}");
    Ok(())
}
