//! Good Number command line and server.
//!
//! Run with: cargo run -p goodnumber-server -- serve
//! Then open: http://localhost:8080

use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use goodnumber_config::GoodNumberConfig;
use goodnumber_server::cli::{Cli, Commands};
use goodnumber_server::{app, report, ActionResponse, AppState};
use owo_colors::OwoColorize;
use tracing::info;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", "error:".bright_red().bold(), e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = match &cli.config {
        Some(path) => GoodNumberConfig::from_file(path)?,
        None => GoodNumberConfig::default(),
    };

    match cli.command {
        Commands::Serve { host, port } => {
            if let Some(host) = host {
                config = config.with_host(host);
            }
            if let Some(port) = port {
                config = config.with_port(port);
            }
            serve(config).await
        }
        Commands::Plan { ap, json } => {
            goodnumber_console::init_quiet();
            let planner = config.planner()?;
            let plan = planner
                .plan(ap)
                .ok_or_else(|| format!("No special number above {ap} is representable"))?;
            if json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&ActionResponse::from_plan(&plan))?
                );
            } else {
                print!("{}", report::render_plan(&plan));
            }
            Ok(())
        }
        Commands::Candidates { ap } => {
            let finder = config.finder()?;
            print!("{}", report::render_candidates(&finder.candidates(ap)));
            Ok(())
        }
    }
}

async fn serve(config: GoodNumberConfig) -> Result<(), Box<dyn std::error::Error>> {
    goodnumber_console::init();

    config.validate()?;
    let state = Arc::new(
        AppState::new(config.planner()?).with_plan_limit(config.server.max_concurrent_plans),
    );
    let app = app(state, &config.server.static_dir);

    let addr = config.server.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(addr = %addr, "Server started");

    axum::serve(listener, app).await?;
    Ok(())
}
