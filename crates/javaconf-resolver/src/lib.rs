//! Runtime selection engine: dependency closures and target floors,
//! administrator preference tables, and the preference-ordered search that
//! picks one installed runtime for a dependency string.

pub mod closure;
pub mod error;
pub mod preferences;
pub mod resolver;

pub use error::ResolveError;
pub use resolver::Resolver;
