//! Tipos de resposta do oráculo.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::types::matches::{SourceResult, Team, Winner};

/// Resultado agregado de uma partida.
///
/// Construído inteiro a cada resolução e nunca alterado depois.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregatedResult {
    /// ID da partida.
    pub match_id: String,

    pub team_a: Team,
    pub team_b: Team,

    /// Relatórios recebidos, preservados como vieram.
    pub sources: Vec<SourceResult>,

    /// Se o quórum foi alcançado.
    pub consensus: bool,

    /// Quórum usado nesta resolução.
    pub consensus_min: usize,

    /// Votos do vencedor (ou do líder, em disputa).
    pub agreed_sources: usize,

    /// Vencedor final ou `disputed`.
    pub final_winner: FinalWinner,

    pub status: ResolutionStatus,

    /// Presente apenas quando `status == resolved`.
    pub resolved_at: Option<DateTime<Utc>>,
}

impl AggregatedResult {
    /// Verifica se a partida foi resolvida.
    pub fn is_resolved(&self) -> bool {
        self.status == ResolutionStatus::Resolved
    }

    /// Vencedor final, se houver.
    pub fn winner(&self) -> Option<Winner> {
        match self.final_winner {
            FinalWinner::Team(w) => Some(w),
            FinalWinner::Disputed => None,
        }
    }

    /// Time vencedor, se houver.
    pub fn winning_team(&self) -> Option<&Team> {
        self.winner().map(|w| match w {
            Winner::TeamA => &self.team_a,
            Winner::TeamB => &self.team_b,
        })
    }
}

/// Vencedor final de uma partida.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FinalWinner {
    Team(Winner),
    Disputed,
}

impl FinalWinner {
    pub fn as_str(&self) -> &'static str {
        match self {
            FinalWinner::Team(w) => w.as_str(),
            FinalWinner::Disputed => "disputed",
        }
    }
}

impl std::fmt::Display for FinalWinner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Serialize for FinalWinner {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for FinalWinner {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let token = String::deserialize(deserializer)?;
        if token == "disputed" {
            return Ok(FinalWinner::Disputed);
        }
        Winner::from_token(&token)
            .map(FinalWinner::Team)
            .ok_or_else(|| {
                serde::de::Error::invalid_value(
                    serde::de::Unexpected::Str(&token),
                    &"TeamA, TeamB or disputed",
                )
            })
    }
}

/// Estado terminal da resolução.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ResolutionStatus {
    /// Quórum alcançado.
    Resolved,
    /// Nenhum lado alcançou o quórum.
    Disputed,
}

impl std::fmt::Display for ResolutionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ResolutionStatus::Resolved => write!(f, "resolved"),
            ResolutionStatus::Disputed => write!(f, "disputed"),
        }
    }
}
