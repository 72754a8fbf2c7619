//! Filesystem-backed registries: runtime descriptors from the runtime
//! directory, installed packages from their `package.env` files, and the
//! active runtime named by the user and system env files.

pub mod package;
pub mod vm;
