//! Dirsite CLI Binary
//!
//! Writes folder_tree.html and sitemap.xml for a directory.

use clap::Parser;
use dirsite::cli::{map_error, Cli, RunContext};
use dirsite::logging::init_logging;
use std::process;
use tracing::{error, info};

fn main() {
    let cli = Cli::parse();

    // Configuration comes first: it carries the logging settings
    let context = match RunContext::new(&cli) {
        Ok(ctx) => ctx,
        Err(e) => {
            eprintln!("{}", map_error(&e));
            process::exit(1);
        }
    };

    if let Err(e) = init_logging(context.logging_config()) {
        eprintln!("Failed to initialize logging: {}", e);
        process::exit(1);
    }

    info!("Dirsite CLI starting");

    match context.execute() {
        Ok(output) => println!("{}", output),
        Err(e) => {
            error!("Generation failed: {}", e);
            eprintln!("{}", map_error(&e));
            process::exit(1);
        }
    }
}
