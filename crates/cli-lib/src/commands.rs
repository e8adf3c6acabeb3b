use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "sqlfmt")]
#[command(about = "sqlfmt is a SQL pretty-printer", long_about = None, version = env!("CARGO_PKG_VERSION"))]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    #[command(name = "fmt", about = "Format a SQL file or stdin, printing the result to stdout")]
    Fmt(FmtArgs),
    #[command(
        name = "check",
        about = "Exit nonzero if formatting the input would change it"
    )]
    Check(FmtArgs),
}

#[derive(Debug, Parser)]
pub struct FmtArgs {
    /// File to read. Omit, or pass `-`, to read from stdin.
    pub path: Option<PathBuf>,
    /// Dialect tag, e.g. bigquery, postgresql, snowflake.
    #[arg(long)]
    pub dialect: Option<String>,
    /// Spaces per indent level.
    #[arg(long)]
    pub tab_width: Option<i64>,
    /// Use a single tab per indent level instead of spaces.
    #[arg(long)]
    pub use_tabs: Option<bool>,
    /// Case of reserved keywords: preserve, upper, lower.
    #[arg(long)]
    pub keyword_case: Option<String>,
    /// Case of plain identifiers.
    #[arg(long)]
    pub identifier_case: Option<String>,
    /// Case of function names.
    #[arg(long)]
    pub function_case: Option<String>,
    /// Case of data type names.
    #[arg(long)]
    pub data_type_case: Option<String>,
    /// Inline-block and multiline-list width threshold.
    #[arg(long)]
    pub expression_width: Option<i64>,
    /// multilineLists policy: always, avoid, expressionWidth, or an integer.
    #[arg(long)]
    pub multiline_lists: Option<String>,
    /// aliasAs policy: preserve, always, never.
    #[arg(long)]
    pub alias_as: Option<String>,
}
