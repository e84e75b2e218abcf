//! Crumbtrail - breadcrumb trail generation for websites.

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use crumbtrail::{config::TrailConfig, generate_breadcrumbs, log, snapshot::SiteSnapshot};
use std::fs;

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Err(err) = run(&cli) {
        log!("error"; "{err:#}");
        std::process::exit(1);
    }

    Ok(())
}

fn run(cli: &Cli) -> Result<()> {
    let config = load_config(cli)?;
    let snapshot = SiteSnapshot::from_path(&cli.page)?;

    let html = generate_breadcrumbs(&snapshot.context()?, &config, snapshot.resolvers());

    match &cli.output {
        Some(path) => {
            fs::write(path, &html)?;
            log!("trail"; "{}", path.display());
        }
        None => println!("{html}"),
    }

    Ok(())
}

/// Load the TOML config next to the site, falling back to defaults when the
/// default-named file does not exist. An explicitly given path must exist.
fn load_config(cli: &Cli) -> Result<TrailConfig> {
    if cli.config.exists() {
        return TrailConfig::from_path(&cli.config);
    }

    if cli.config.as_os_str() != "trail.toml" {
        TrailConfig::from_path(&cli.config)
    } else {
        Ok(TrailConfig::default())
    }
}
