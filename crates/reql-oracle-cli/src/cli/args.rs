use clap::{ArgGroup, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "reql-oracle",
    version,
    about = "Checks recorded ReQL query results against their expected values"
)]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run one or more recorded suites
    Check(CheckArgs),
    /// Compare a single actual value against an expected literal
    Compare(CompareArgs),
    Version,
}

#[derive(ValueEnum, Clone, Debug, Default, PartialEq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(clap::Args, Clone, Debug)]
pub struct CheckArgs {
    /// Suite files (YAML)
    #[arg(required = true)]
    pub suites: Vec<PathBuf>,

    #[arg(long, value_enum, default_value_t, env = "REQL_ORACLE_FORMAT")]
    pub format: OutputFormat,

    /// Also write the JSON report to this file
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(clap::Args, Clone, Debug)]
#[command(group(
    ArgGroup::new("outcome")
        .required(true)
        .args(["actual", "error_type"])
))]
pub struct CompareArgs {
    /// Expected literal, e.g. `bag([1, 2])` or `err('RqlRuntimeError', 'Index out of bounds.')`
    #[arg(short, long)]
    pub expected: String,

    /// Actual result as JSON
    #[arg(short, long)]
    pub actual: Option<String>,

    /// Type name of the raised error, namespace allowed
    #[arg(long)]
    pub error_type: Option<String>,

    /// Text of the raised error
    #[arg(long, requires = "error_type")]
    pub error_message: Option<String>,
}
