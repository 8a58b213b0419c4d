//! Interface de linha de comando do oráculo.

pub mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::types::config::CONFIG_FILE;

/// EcoRound - Oráculo de resultados de partidas por consenso de fontes.
#[derive(Parser, Debug)]
#[command(name = "ecoround")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Arquivo de configuração.
    #[arg(short, long, default_value = CONFIG_FILE)]
    pub config: PathBuf,

    /// Modo verbose.
    #[arg(short, long)]
    pub verbose: bool,

    /// Modo silencioso.
    #[arg(short, long)]
    pub quiet: bool,

    /// Comando a executar.
    #[command(subcommand)]
    pub command: Commands,
}

/// Comandos disponíveis.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Inicializa configuração no diretório atual.
    Init {
        /// Diretório de destino (padrão: diretório atual).
        #[arg(short, long)]
        path: Option<PathBuf>,
    },

    /// Mostra a configuração efetiva.
    Config,

    /// Diagnostica problemas de configuração.
    Doctor,

    /// Resolve um snapshot de relatórios lido de um arquivo JSON.
    Resolve {
        /// Arquivo com `{match_id, team_a, team_b, sources}`.
        #[arg(short, long)]
        input: PathBuf,

        /// Imprime o resultado em JSON.
        #[arg(long)]
        json: bool,
    },

    /// Simula uma partida: registra relatórios nas fontes e resolve.
    ///
    /// Cada fonte aceita TeamA, TeamB, upcoming ou started.
    Simulate {
        #[arg(long)]
        pandascore: Option<String>,

        #[arg(long)]
        vlr: Option<String>,

        #[arg(long)]
        liquipedia: Option<String>,

        /// Imprime o resultado em JSON.
        #[arg(long)]
        json: bool,
    },

    /// Mostra versão.
    Version,
}
