//! Clap CLI definitions for the `px` command.

use clap::{Args, Parser, Subcommand};

/// px -- natural-language physics problem parser.
#[derive(Parser, Debug)]
#[command(
    name = "px",
    about = "Natural-language physics problem parser",
    long_about = "Parses free-form physics problems into a formula selection plus extracted \
                  variable values, and can submit them to a calculation service.",
    version,
    propagate_version = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Global flags available to all subcommands.
#[derive(Args, Debug, Clone)]
pub struct GlobalArgs {
    /// Output in JSON format.
    #[arg(long, global = true)]
    pub json: bool,

    /// Enable verbose/debug output.
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output (errors only).
    #[arg(short = 'q', long, global = true)]
    pub quiet: bool,
}

/// All available subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Parse a problem into a formula and variable values.
    Parse(ParseArgs),

    /// List the formula catalog.
    #[command(alias = "list")]
    Formulas(FormulasArgs),

    /// Parse a problem and solve it against the calculation service.
    Solve(SolveArgs),

    /// Print version and platform info.
    Version,
}

#[derive(Args, Debug)]
pub struct ParseArgs {
    /// The problem text.
    pub text: String,

    /// Formula id to keep when identification cannot pick one.
    #[arg(long, value_name = "ID")]
    pub formula: Option<String>,
}

#[derive(Args, Debug)]
pub struct FormulasArgs {
    /// Only show formulas in this category.
    #[arg(long, value_name = "NAME")]
    pub category: Option<String>,
}

#[derive(Args, Debug)]
pub struct SolveArgs {
    /// The problem text.
    pub text: String,

    /// Formula id to keep when identification cannot pick one.
    #[arg(long, value_name = "ID")]
    pub formula: Option<String>,

    /// Base URL of the calculation service.
    #[arg(long, env = "PX_API_URL", default_value = "http://127.0.0.1:8000")]
    pub base_url: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_structure_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_parse_anywhere() {
        let cli = Cli::parse_from(["px", "parse", "some text", "--json", "-v"]);
        assert!(cli.global.json);
        assert!(cli.global.verbose);
    }
}
