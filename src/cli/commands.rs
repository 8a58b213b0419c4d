//! Implementação dos comandos CLI do oráculo.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use chrono::Utc;

use crate::book::MatchBook;
use crate::consensus::{ConsensusEngine, ResultAggregator};
use crate::oracle::MatchOracle;
use crate::sources::{LiquipediaSource, PandaScoreSource, VlrSource};
use crate::types::config::{Config, CONFIG_FILE};
use crate::types::matches::{MatchStatus, Winner};
use crate::types::requests::{CreateMatchRequest, MatchSnapshot, SetResultRequest};
use crate::types::responses::AggregatedResult;
use crate::{OracleError, OracleResult};

/// Initializes configuration in the specified directory.
pub async fn init(path: Option<PathBuf>) -> OracleResult<()> {
    let target_dir = path.unwrap_or_else(|| PathBuf::from("."));

    // Create directory if it doesn't exist
    if !target_dir.exists() {
        std::fs::create_dir_all(&target_dir)?;
        tracing::info!("Directory created: {}", target_dir.display());
    }

    let config_path = target_dir.join(CONFIG_FILE);

    if config_path.exists() {
        println!("Configuration already exists at: {}", config_path.display());
        println!("Use 'ecoround config' to inspect it.");
        return Ok(());
    }

    let config = Config::default_config();
    config.save(&config_path)?;

    println!("EcoRound initialized successfully!");
    println!("Configuration created at: {}", config_path.display());
    println!();
    println!("Next steps:");
    println!("  1. Check the configuration: ecoround doctor");
    println!("  2. Try a simulated match: ecoround simulate --pandascore TeamA --vlr TeamA");

    Ok(())
}

/// Mostra a configuração efetiva.
pub async fn config_cmd(config_path: &Path, config: &Config) -> OracleResult<()> {
    if config_path.exists() {
        println!("# {}", config_path.display());
    } else {
        println!("# {} não encontrado, usando padrões", config_path.display());
    }
    print!("{}", toml::to_string_pretty(config)?);
    Ok(())
}

/// Diagnostica problemas de configuração.
pub async fn doctor(config: &Config) -> OracleResult<()> {
    println!("Diagnosticando configuração do oráculo...\n");

    let mut issues: Vec<String> = Vec::new();
    let mut warnings: Vec<String> = Vec::new();

    println!("✓ Configuração carregada");

    let sources = [
        (PandaScoreSource::NAME, &config.sources.pandascore),
        (VlrSource::NAME, &config.sources.vlr),
        (LiquipediaSource::NAME, &config.sources.liquipedia),
    ];

    for (name, source) in sources {
        if source.enabled {
            println!(
                "✓ {} habilitada (timeout: {}s)",
                name,
                source.timeout(&config.general).as_secs()
            );
        } else {
            println!("○ {} está desabilitada no config", name);
        }
    }

    let enabled = config.sources.enabled_count();
    let quorum = config.consensus.consensus_min;

    if let Err(e) = config.validate() {
        issues.push(e.to_string());
    } else if quorum > enabled {
        issues.push(format!(
            "Quórum de {} fontes com apenas {} habilitada(s) - consenso não é possível",
            quorum, enabled
        ));
    } else if quorum == enabled {
        warnings.push(format!(
            "Quórum ({}) igual ao número de fontes - qualquer fonte fora do ar deixa a partida em disputa",
            quorum
        ));
    }

    println!();
    if issues.is_empty() && warnings.is_empty() {
        println!("✓ Tudo OK! Quórum de {} em {} fontes.", quorum, enabled);
    } else {
        if !warnings.is_empty() {
            println!("Avisos:");
            for warning in warnings {
                println!("  ⚠ {}", warning);
            }
        }
        if !issues.is_empty() {
            println!("Problemas:");
            for issue in issues {
                println!("  ✗ {}", issue);
            }
        }
    }

    Ok(())
}

/// Resolve um snapshot lido de arquivo.
pub async fn resolve(input: &Path, json: bool, config: &Config) -> OracleResult<()> {
    config.validate()?;

    let content = std::fs::read_to_string(input)?;
    let snapshot: MatchSnapshot = serde_json::from_str(&content)?;

    tracing::debug!(
        match_id = %snapshot.match_id,
        reports = snapshot.sources.len(),
        "Snapshot carregado de {}",
        input.display()
    );

    let engine = ConsensusEngine::new(config.consensus.clone());
    let result = engine.resolve(
        &snapshot.match_id,
        snapshot.team_a,
        snapshot.team_b,
        snapshot.sources,
    );

    print_result(&result, json)
}

/// Simula uma partida com as três fontes.
pub async fn simulate(
    pandascore: Option<&str>,
    vlr: Option<&str>,
    liquipedia: Option<&str>,
    json: bool,
    config: &Config,
) -> OracleResult<()> {
    let book = Arc::new(MatchBook::new());
    let created = book
        .create_match(
            CreateMatchRequest::new("Sentinels", "Fnatic", Utc::now())
                .with_tags("SEN", "FNC")
                .with_event("Simulação"),
        )
        .await?;

    let claims = [
        (PandaScoreSource::NAME, pandascore),
        (VlrSource::NAME, vlr),
        (LiquipediaSource::NAME, liquipedia),
    ];

    for (source, claim) in claims {
        if let Some(claim) = claim {
            let request = parse_claim(source, claim)?;
            book.set_result(&created.id, &request).await?;
        }
    }

    let oracle = MatchOracle::new(config, book)?;
    let result = oracle.resolve_match(&created.id).await?;

    print_result(&result, json)
}

/// Mostra versão.
pub fn version() {
    println!("ecoround {}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Oráculo de resultados por consenso de fontes (PandaScore, VLR, Liquipedia)");
}

/// Converte o argumento de uma fonte em requisição de resultado.
fn parse_claim(source: &str, claim: &str) -> OracleResult<SetResultRequest> {
    if let Some(winner) = Winner::from_token(claim) {
        return Ok(SetResultRequest::ended(source, winner));
    }

    match claim.parse::<MatchStatus>() {
        Ok(MatchStatus::Ended) | Err(_) => Err(OracleError::invalid(format!(
            "{}: esperado TeamA, TeamB, upcoming ou started (recebido '{}')",
            source, claim
        ))),
        Ok(status) => Ok(SetResultRequest::new(source, status)),
    }
}

fn print_result(result: &AggregatedResult, json: bool) -> OracleResult<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(result)?);
    } else {
        print!("{}", ResultAggregator::summarize(result));
    }
    Ok(())
}
