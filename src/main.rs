use clap::Parser;
use ecoround::cli::{Cli, Commands};
use ecoround::types::config::Config;
use ecoround::OracleResult;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[tokio::main]
async fn main() -> OracleResult<()> {
    let cli = Cli::parse();

    // Load configuration first (no logging yet); validation is left to each command
    let config = if cli.config.exists() {
        Config::load(&cli.config).unwrap_or_else(|e| {
            eprintln!("Aviso: {} ignorado ({}), usando padrões", cli.config.display(), e);
            Config::default_config()
        })
    } else {
        Config::default_config()
    };

    // Determine log level: CLI flags take precedence over config
    let log_level = if cli.quiet {
        "error".to_string()
    } else if cli.verbose {
        "debug".to_string()
    } else {
        config.general.log_level.clone()
    };

    let filter = EnvFilter::from_default_env().add_directive(
        format!("ecoround={}", log_level)
            .parse()
            .unwrap_or_else(|_| "ecoround=info".parse().expect("fallback directive is valid")),
    );

    // Logs always go to stderr so stdout stays clean for results
    if config.general.log_format == "json" {
        tracing_subscriber::registry()
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .with(filter)
            .init();
    } else {
        tracing_subscriber::registry()
            .with(fmt::layer().with_writer(std::io::stderr))
            .with(filter)
            .init();
    }

    tracing::debug!("Configuration loaded from: {}", cli.config.display());

    match cli.command {
        Commands::Init { path } => {
            ecoround::cli::commands::init(path).await?;
        }
        Commands::Config => {
            ecoround::cli::commands::config_cmd(&cli.config, &config).await?;
        }
        Commands::Doctor => {
            ecoround::cli::commands::doctor(&config).await?;
        }
        Commands::Resolve { input, json } => {
            ecoround::cli::commands::resolve(&input, json, &config).await?;
        }
        Commands::Simulate {
            pandascore,
            vlr,
            liquipedia,
            json,
        } => {
            ecoround::cli::commands::simulate(
                pandascore.as_deref(),
                vlr.as_deref(),
                liquipedia.as_deref(),
                json,
                &config,
            )
            .await?;
        }
        Commands::Version => {
            ecoround::cli::commands::version();
        }
    }

    Ok(())
}
