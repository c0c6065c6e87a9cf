mod commands;
mod render;
mod state;

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use rifa_core::{load_config, validate_config, Config};

use commands::{Command, Outcome};
use state::Session;

/// Application version
const VERSION: &str = env!("CARGO_PKG_VERSION");

fn main() {
    if let Err(e) = run() {
        error!("Fatal error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    // Determine config path
    let config_path = std::env::var("RIFA_CONFIG")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("config.toml"));

    // Load configuration; a missing file means defaults with open auth.
    let config = if config_path.exists() {
        info!("Loading configuration from {:?}", config_path);
        load_config(&config_path)
            .with_context(|| format!("Failed to load config from {:?}", config_path))?
    } else {
        warn!(
            "No configuration at {:?}, using defaults (auth disabled)",
            config_path
        );
        Config {
            auth: rifa_core::AuthConfig {
                method: rifa_core::AuthMethod::None,
                email: None,
                password: None,
            },
            raffle: Default::default(),
            payment: Default::default(),
        }
    };

    // Validate configuration
    validate_config(&config).context("Configuration validation failed")?;

    info!("Auth method: {:?}", config.auth.method);
    info!("Lock count: {}", config.raffle.lock_count);

    let mut session = Session::new(&config).context("Failed to start raffle session")?;

    println!("Rifa da Sorte v{} - Edição Nomes Especiais", VERSION);
    println!("Digite \"help\" para ver os comandos.\n");

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    loop {
        print!("rifa> ");
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            // EOF ends the session like "quit".
            break;
        }
        if line.trim().is_empty() {
            continue;
        }

        let command = match Command::parse(&line) {
            Ok(command) => command,
            Err(e) => {
                println!("erro: {}", e);
                continue;
            }
        };

        match command.execute(&mut session) {
            Ok(Outcome::Continue(output)) => print!("{}", output),
            Ok(Outcome::Quit) => break,
            Err(e) => println!("erro: {}", e),
        }
    }

    info!("Session ended");
    Ok(())
}
