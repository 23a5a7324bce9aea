//! Azure Repos CLI Binary
//!
//! Command-line interface for listing the Git repositories of an Azure DevOps
//! organization.

use azure_repos::cli::{Cli, CliContext};
use clap::Parser;
use std::process;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = azure_repos::logging::init(cli.verbose, cli.log_level.as_deref()) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }

    // Create CLI context
    let context = match CliContext::new(cli.env_file.as_deref()) {
        Ok(ctx) => ctx,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    // Execute the listing
    match context.execute() {
        Ok(output) => {
            println!("{}", output);
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}
