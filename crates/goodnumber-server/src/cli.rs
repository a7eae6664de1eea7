//! Command line definition.

use std::net::IpAddr;
use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "goodnumber")]
#[command(about = "Find the next good number and the fewest actions to reach it")]
#[command(version)]
pub struct Cli {
    #[arg(long, short, global = true, value_name = "PATH", help = "TOML or YAML configuration file")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    #[command(about = "Run the HTTP server")]
    Serve {
        #[arg(long, help = "Address to bind, overrides the configuration")]
        host: Option<IpAddr>,
        #[arg(long, short, help = "Port to bind, overrides the configuration")]
        port: Option<u16>,
    },
    #[command(about = "Print the plan for one AP value")]
    Plan {
        #[arg(help = "Current AP")]
        ap: u64,
        #[arg(long, help = "Print the same JSON as the HTTP endpoint")]
        json: bool,
    },
    #[command(about = "List the next value of every number family")]
    Candidates {
        #[arg(help = "Current AP")]
        ap: u64,
    },
}
