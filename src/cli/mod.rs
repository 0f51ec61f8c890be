pub mod shell;

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "anidex", about = "Personal anime watchlist tracker")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    Shell,
    Add {
        name: String,
        category: String,
        #[arg(long, default_value_t = false)]
        finished: bool,
        #[arg(long, default_value_t = 0.0)]
        rating: f64,
    },
    List,
    Filter {
        category: String,
    },
    Random,
    Seen {
        id: i64,
    },
    Delete {
        id: i64,
    },
    Status,
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    Set { key: String, value: String },
    Get { key: String },
}
