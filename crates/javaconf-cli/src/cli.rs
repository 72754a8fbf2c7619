//! CLI argument definitions for javaconf.
//!
//! Uses `clap` derive macros to define the command surface. Each command
//! corresponds to a handler in the [`super::commands`] module.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "javaconf",
    version,
    about = "Select Java runtimes for package dependency strings",
    long_about = "javaconf picks the installed Java runtime that best satisfies a \
                  dependency string, honoring package targets, virtual providers \
                  and the system preference table."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Treat this directory as the filesystem root
    #[arg(long, global = true, value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// Configuration file to load instead of the default
    #[arg(long, global = true, env = "JAVACONF_CONFIG", value_name = "FILE")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Select the runtime for a dependency string
    Resolve {
        /// Dependency atoms, e.g. ">=virtual/jdk-1.5 dev-java/ant-core"
        #[arg(required = true, num_args = 1..)]
        depend: Vec<String>,
        /// Accept runtimes marked BUILD_ONLY
        #[arg(long)]
        allow_build_only: bool,
        /// Print the selected runtime's JAVA_HOME as well
        #[arg(long)]
        java_home: bool,
    },

    /// List registered runtimes
    List,

    /// Compare two version strings
    Compare {
        /// Left-hand version
        a: String,
        /// Right-hand version
        b: String,
    },

    /// Check whether a runtime satisfies a dependency string
    Satisfies {
        /// Dependency atoms to check against
        depend: String,
        /// Runtime name, list index, descriptor path or JAVA_HOME
        vm: String,
    },

    /// Show the dependency closure and target floor of installed packages
    Deps {
        /// Installed package names
        #[arg(required = true, num_args = 1..)]
        packages: Vec<String>,
    },
}

pub fn parse() -> Cli {
    Cli::parse()
}
