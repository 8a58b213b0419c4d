//! Tipos de partida e de relatório por fonte.

use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use crate::OracleError;

/// Identidade de um dos lados da partida.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    /// Nome de exibição.
    pub name: String,

    /// Sigla curta (ex: "SEN").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,

    /// Referência para o logo.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo_url: Option<String>,
}

impl Team {
    /// Cria um time apenas com o nome.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            tag: None,
            logo_url: None,
        }
    }

    /// Define a sigla.
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }
}

/// Lado vencedor declarado por uma fonte.
///
/// Conjunto fechado de dois valores. A ordem das variantes é a ordem
/// canônica usada na contagem e no desempate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Winner {
    TeamA,
    TeamB,
}

impl Winner {
    /// Todos os lados, em ordem canônica.
    pub const ALL: [Winner; 2] = [Winner::TeamA, Winner::TeamB];

    /// Converte um token de fio. Qualquer outro valor (inclusive "") não é voto.
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "TeamA" => Some(Winner::TeamA),
            "TeamB" => Some(Winner::TeamB),
            _ => None,
        }
    }

    /// Token de fio.
    pub fn as_str(&self) -> &'static str {
        match self {
            Winner::TeamA => "TeamA",
            Winner::TeamB => "TeamB",
        }
    }

    pub(crate) fn index(self) -> usize {
        match self {
            Winner::TeamA => 0,
            Winner::TeamB => 1,
        }
    }
}

impl std::fmt::Display for Winner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Aceita qualquer token de vencedor; tokens fora de `{TeamA, TeamB}` viram `None`.
pub(crate) fn deserialize_winner<'de, D>(deserializer: D) -> Result<Option<Winner>, D::Error>
where
    D: Deserializer<'de>,
{
    let token: Option<String> = Option::deserialize(deserializer)?;
    Ok(token.as_deref().and_then(Winner::from_token))
}

/// Estado da partida segundo uma fonte.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchStatus {
    #[default]
    Upcoming,
    Started,
    Ended,
}

impl FromStr for MatchStatus {
    type Err = OracleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "upcoming" => Ok(MatchStatus::Upcoming),
            "started" => Ok(MatchStatus::Started),
            "ended" => Ok(MatchStatus::Ended),
            _ => Err(OracleError::invalid(
                "invalid match_status, must be: upcoming, started, ended",
            )),
        }
    }
}

impl std::fmt::Display for MatchStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MatchStatus::Upcoming => write!(f, "upcoming"),
            MatchStatus::Started => write!(f, "started"),
            MatchStatus::Ended => write!(f, "ended"),
        }
    }
}

/// Placar informado. Não entra na aritmética de consenso.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchScore {
    #[serde(default)]
    pub score_a: u32,
    #[serde(default)]
    pub score_b: u32,
    #[serde(default)]
    pub map_count: u32,
}

impl MatchScore {
    pub fn new(score_a: u32, score_b: u32, map_count: u32) -> Self {
        Self {
            score_a,
            score_b,
            map_count,
        }
    }
}

/// Relatório de uma fonte para uma partida em um instante.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceResult {
    /// Token da fonte (pandascore, vlr, liquipedia, ...).
    pub source: String,

    /// Estado da partida segundo a fonte.
    #[serde(default)]
    pub match_status: MatchStatus,

    /// Vencedor declarado. Só tem sentido quando `match_status == ended`.
    #[serde(
        default,
        deserialize_with = "deserialize_winner",
        skip_serializing_if = "Option::is_none"
    )]
    pub winner: Option<Winner>,

    /// Placar informativo.
    #[serde(default)]
    pub result: MatchScore,

    /// Momento em que o relatório foi produzido.
    pub timestamp: DateTime<Utc>,

    /// Se o vencedor deste relatório conta para o consenso.
    #[serde(default)]
    pub confident: bool,
}

impl SourceResult {
    /// Cria um relatório sem vencedor e sem confiança.
    pub fn new(source: impl Into<String>, match_status: MatchStatus, timestamp: DateTime<Utc>) -> Self {
        Self {
            source: source.into(),
            match_status,
            winner: None,
            result: MatchScore::default(),
            timestamp,
            confident: false,
        }
    }

    /// Cria um relatório final e confiável a favor de `winner`.
    pub fn ended(source: impl Into<String>, winner: Winner, timestamp: DateTime<Utc>) -> Self {
        Self::new(source, MatchStatus::Ended, timestamp)
            .with_winner(Some(winner))
            .with_confidence(true)
    }

    /// Define o vencedor declarado.
    pub fn with_winner(mut self, winner: Option<Winner>) -> Self {
        self.winner = winner;
        self
    }

    /// Define o placar.
    pub fn with_score(mut self, result: MatchScore) -> Self {
        self.result = result;
        self
    }

    /// Define a confiança.
    pub fn with_confidence(mut self, confident: bool) -> Self {
        self.confident = confident;
        self
    }

    /// Voto efetivo deste relatório.
    pub fn vote(&self) -> Option<Winner> {
        if self.confident {
            self.winner
        } else {
            None
        }
    }
}

/// Ciclo de vida administrativo da partida.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchLifecycle {
    #[default]
    Open,
    Locked,
    Finished,
    Cancelled,
}

impl FromStr for MatchLifecycle {
    type Err = OracleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "open" => Ok(MatchLifecycle::Open),
            "locked" => Ok(MatchLifecycle::Locked),
            "finished" => Ok(MatchLifecycle::Finished),
            "cancelled" => Ok(MatchLifecycle::Cancelled),
            _ => Err(OracleError::invalid(
                "invalid status, must be: open, locked, finished, cancelled",
            )),
        }
    }
}

impl std::fmt::Display for MatchLifecycle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MatchLifecycle::Open => write!(f, "open"),
            MatchLifecycle::Locked => write!(f, "locked"),
            MatchLifecycle::Finished => write!(f, "finished"),
            MatchLifecycle::Cancelled => write!(f, "cancelled"),
        }
    }
}

/// Partida registrada no livro.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Match {
    pub id: String,

    /// Identificador da partida na fonte (`<fonte>-<id>`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_id: Option<String>,

    pub team_a: Team,
    pub team_b: Team,

    pub status: MatchLifecycle,

    /// Melhor de N mapas.
    pub best_of: u32,

    pub event: String,

    pub start_time: DateTime<Utc>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub on_chain_match_id: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vault_address: Option<String>,

    /// Placar anexado pela fonte que expõe a partida.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<MatchScore>,
}
