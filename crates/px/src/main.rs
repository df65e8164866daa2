//! `px` -- natural-language physics problem parser CLI.
//!
//! Parses CLI arguments with clap and dispatches to command handlers. The
//! parsing pipeline itself lives in the library crates; this binary is the
//! thin human/JSON surface over it.

mod cli;
mod commands;
mod output;

use clap::Parser;

use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    // Set up logging based on verbosity
    if cli.global.verbose {
        tracing_subscriber::fmt()
            .with_env_filter("px=debug,physika_parser=debug,physika_client=debug")
            .with_writer(std::io::stderr)
            .init();
    }

    let result = match &cli.command {
        Some(Commands::Parse(args)) => commands::parse_cmd::run(&cli.global, args),
        Some(Commands::Formulas(args)) => commands::formulas::run(&cli.global, args),
        Some(Commands::Solve(args)) => commands::solve::run(&cli.global, args),
        Some(Commands::Version) => commands::version::run(&cli.global),
        None => {
            use clap::CommandFactory;
            Cli::command().print_help().ok();
            println!();
            Ok(())
        }
    };

    // Handle errors: print message and exit with code 1
    if let Err(e) = result {
        if cli.global.json {
            let err_json = serde_json::json!({
                "error": format!("{:#}", e),
            });
            if let Ok(s) = serde_json::to_string_pretty(&err_json) {
                eprintln!("{}", s);
            }
        } else {
            eprintln!("Error: {:#}", e);
        }
        std::process::exit(1);
    }
}
