use clap::{Args as ClapArgs, Parser, Subcommand};
use std::path::PathBuf;

/// Inventory the libraries a JVM workload runs on
#[derive(Parser, Debug)]
#[command(name = "runtime-inventory")]
#[command(version)]
#[command(
    about = "Inventory the archives a JVM workload loads, fingerprint the workload and generate CycloneDX SBOMs",
    long_about = None
)]
pub struct Args {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(ClapArgs, Debug, Default)]
pub struct GlobalArgs {
    /// Configuration file (defaults to runtime-inventory.config.yml in the current directory)
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Agent arguments in the form "name=app;pod_name=...;token=..."
    #[arg(long, global = true, value_name = "ARGS")]
    pub agent_args: Option<String>,

    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    pub log_json: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Recursively scan archives and emit a CycloneDX JSON SBOM
    Scan {
        /// Root archives (.jar, .war, .ear, .zip)
        #[arg(required = true, value_name = "ARCHIVE")]
        archives: Vec<PathBuf>,

        /// Output file path (if not specified, outputs to stdout)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Fingerprint the workload from its classpath and runtime properties
    Fingerprint {
        /// Archive on the workload's classpath; can be specified multiple times
        #[arg(long = "classpath", value_name = "PATH")]
        classpath: Vec<PathBuf>,

        /// Runtime property, e.g. -D jboss.home.dir=/opt/eap
        #[arg(short = 'D', value_name = "KEY=VALUE", value_parser = parse_property)]
        properties: Vec<(String, String)>,
    },

    /// Read load-event origins from stdin (one per line) and print each
    /// archive record the deduplicator emits as a JSON line
    Watch,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Log level implied by the flags, if any
    pub fn log_level(&self) -> Option<&'static str> {
        self.global.verbose.then_some("debug")
    }
}

fn parse_property(raw: &str) -> Result<(String, String), String> {
    match raw.split_once('=') {
        Some((key, value)) if !key.is_empty() => Ok((key.to_string(), value.to_string())),
        _ => Err(format!(
            "Invalid property: {}. Please specify it as key=value",
            raw
        )),
    }
}
