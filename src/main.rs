mod cli;
mod config;
mod db;
mod table;

use crate::cli::shell::{print_random_pick, print_records, run_shell};
use crate::cli::{Cli, Commands, ConfigCommands};
use crate::config::Config;
use crate::db::Database;
use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .with_target(false)
        .compact()
        .init();

    let cli = Cli::parse();

    match cli.command.unwrap_or(Commands::Shell) {
        Commands::Shell => {
            let config = load_or_default_config()?;
            run_shell(&config)
        }
        Commands::Add {
            name,
            category,
            finished,
            rating,
        } => {
            let database = open_database()?;
            let id = database.insert_anime(&name, &category, finished, rating)?;
            println!("Added #{id}: {name}");
            Ok(())
        }
        Commands::List => {
            let database = open_database()?;
            print_records(&database.list_all()?);
            Ok(())
        }
        Commands::Filter { category } => {
            let database = open_database()?;
            print_records(&database.list_by_category(&category)?);
            Ok(())
        }
        Commands::Random => {
            let database = open_database()?;
            print_random_pick(&database)
        }
        Commands::Seen { id } => {
            let database = open_database()?;
            database.mark_seen(id)?;
            println!("Marked #{id} as seen");
            Ok(())
        }
        Commands::Delete { id } => {
            let database = open_database()?;
            database.delete(id)?;
            println!("Deleted #{id}");
            Ok(())
        }
        Commands::Status => handle_status(),
        Commands::Config { command } => handle_config_command(command),
    }
}

fn handle_status() -> Result<()> {
    let config = load_or_default_config()?;
    let database = Database::open(&config.db_path)?;
    let counts = database.counts()?;

    println!("anidex status");
    println!("- db_path: {}", config.db_path.display());
    println!("- records: {}", counts.total);
    println!("- seen: {}", counts.seen);
    println!("- watchable (finished, unseen): {}", counts.watchable);

    Ok(())
}

fn handle_config_command(command: ConfigCommands) -> Result<()> {
    match command {
        ConfigCommands::Set { key, value } => {
            let mut config = load_or_default_config()?;
            config.set_value(&key, &value)?;
            config.ensure_bootstrap_files()?;
            config.save()?;

            println!("Config saved: {key} = {value}");
            Ok(())
        }
        ConfigCommands::Get { key } => {
            let config = load_or_default_config()?;
            let value = config
                .get_value(&key)
                .with_context(|| format!("Unsupported config key: {key}"))?;

            println!("{value}");
            Ok(())
        }
    }
}

fn open_database() -> Result<Database> {
    let config = load_or_default_config()?;
    Database::open(&config.db_path)
}

fn load_or_default_config() -> Result<Config> {
    Config::load().or_else(|_| {
        let config = Config::default();
        config.ensure_bootstrap_files()?;
        config.save()?;
        Ok(config)
    })
}
