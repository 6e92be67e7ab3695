use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// dotbind - .NET assembly reference unification, retargeting, and portability
#[derive(Debug, Parser)]
#[command(name = "dotbind", version, about, long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOptions,

    #[command(subcommand)]
    pub command: Command,
}

/// Options shared across all subcommands.
#[derive(Debug, Parser)]
pub struct GlobalOptions {
    /// Emit output as JSON instead of human-readable text.
    #[arg(long, global = true)]
    pub json: bool,

    /// Enable verbose (debug-level) logging output.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Application configuration file providing the portability policy.
    #[arg(long, global = true, value_name = "FILE")]
    pub app_config: Option<PathBuf>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Decide whether a reference is satisfied by a definition.
    Compare {
        /// Display name of the assembly reference.
        #[arg(value_name = "REFERENCE")]
        reference: String,

        /// Display name of the candidate definition.
        #[arg(value_name = "DEFINITION")]
        definition: String,

        /// Report a match when only the versions differ.
        #[arg(long)]
        ignore_version: bool,

        /// Compare without unification policies.
        #[arg(long)]
        strict: bool,
    },

    /// Map a Silverlight or portable-library identity onto its desktop equivalent.
    Port {
        /// Display name of the assembly identity.
        #[arg(value_name = "IDENTITY")]
        identity: String,
    },

    /// Redirect a retargetable identity through the retargeting table.
    Retarget {
        /// Display name of the assembly identity.
        #[arg(value_name = "IDENTITY")]
        identity: String,
    },

    /// Classify an identity as framework and/or retargetable assembly.
    Classify {
        /// Display name of the assembly identity.
        #[arg(value_name = "IDENTITY")]
        identity: String,
    },

    /// Show the portability policy of an application configuration file.
    Policy {
        /// Path to the app.config / web.config file.
        #[arg(value_name = "FILE")]
        path: PathBuf,
    },
}
