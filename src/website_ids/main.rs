use clap::Parser;
use tracing_subscriber::EnvFilter;
use website_ids::config::{self, ConfigSources};
use website_ids::error::Result;
use website_ids::report::{self, WebsiteMapping};

mod args;
use args::Cli;

fn main() {
    let _ = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    match run() {
        Ok(mappings) => print_mappings(&mappings),
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(e.exit_code());
        }
    }
}

fn run() -> Result<Vec<WebsiteMapping>> {
    let sources = ConfigSources::from_env()?;
    let config = config::resolve(&sources)?;
    report::run(&config)
}

fn print_mappings(mappings: &[WebsiteMapping]) {
    for mapping in mappings {
        println!("{}", mapping);
    }
}
