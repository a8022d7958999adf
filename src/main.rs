//! Stylegate CLI entry point

use clap::Parser;
use stylegate::cli::{Command, args::Cli};
use std::process;

fn main() {
    let cli = Cli::parse();

    let exit_code = match cli.command {
        Command::Check {
            paths,
            format,
            allow_warnings,
        } => stylegate::cli::check::run_check(&cli.config, &paths, format, allow_warnings, cli.color),
        Command::List { format } => stylegate::cli::list::run_list(&cli.config, format),
        Command::Resolve { path, format } => {
            stylegate::cli::resolve::run_resolve(&cli.config, &path, format)
        }
        Command::Init { force } => match stylegate::cli::init::run_init(&cli.config, force) {
            Ok(_) => {
                println!("Created {}. Declare your rules to start checking.", cli.config);
                0
            }
            Err(e) => {
                eprintln!("Error: {}", e);
                2
            }
        },
    };

    process::exit(exit_code);
}
