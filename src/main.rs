use anyhow::{Context, Result};
use clap::Parser;
use gitlog::{cli, output, Config, GitLog};

fn main() -> Result<()> {
    // Parse command line arguments
    let args = cli::Args::parse();

    // Initialize logging
    if args.debug {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug"))
            .init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
            .init();
    }

    // Validate arguments
    if let Err(e) = args.validate() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    if let Err(e) = run(args) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }

    Ok(())
}

fn run(args: cli::Args) -> Result<()> {
    let config = args.apply_to(Config::load().context("Failed to load config")?);
    log::debug!(
        "Reading history of {} with {}",
        config.path.display(),
        config.bin
    );

    let revision = args.revision().map_err(anyhow::Error::msg)?;
    let params = args.params();

    let commits = GitLog::new(config).log(revision.as_ref(), Some(&params))?;

    if args.json {
        println!("{}", output::render_json(&commits)?);
    } else {
        print!("{}", output::render_text(&commits));
    }

    Ok(())
}
