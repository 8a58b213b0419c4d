//! Tipos de requisição administrativa do livro de partidas.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::matches::{MatchLifecycle, MatchScore, MatchStatus, SourceResult, Team, Winner};
use crate::{OracleError, OracleResult};

/// Requisição de criação de partida.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateMatchRequest {
    pub team_a_name: String,

    #[serde(default)]
    pub team_a_tag: Option<String>,

    pub team_b_name: String,

    #[serde(default)]
    pub team_b_tag: Option<String>,

    /// Melhor de N. Zero significa o padrão (3).
    #[serde(default)]
    pub best_of: u32,

    #[serde(default)]
    pub event: String,

    pub start_time: DateTime<Utc>,

    #[serde(default)]
    pub on_chain_match_id: Option<u64>,

    #[serde(default)]
    pub vault_address: Option<String>,
}

impl CreateMatchRequest {
    /// Cria uma requisição com os dois nomes de time.
    pub fn new(
        team_a_name: impl Into<String>,
        team_b_name: impl Into<String>,
        start_time: DateTime<Utc>,
    ) -> Self {
        Self {
            team_a_name: team_a_name.into(),
            team_a_tag: None,
            team_b_name: team_b_name.into(),
            team_b_tag: None,
            best_of: 0,
            event: String::new(),
            start_time,
            on_chain_match_id: None,
            vault_address: None,
        }
    }

    /// Define as siglas.
    pub fn with_tags(mut self, team_a_tag: impl Into<String>, team_b_tag: impl Into<String>) -> Self {
        self.team_a_tag = Some(team_a_tag.into());
        self.team_b_tag = Some(team_b_tag.into());
        self
    }

    /// Define o evento.
    pub fn with_event(mut self, event: impl Into<String>) -> Self {
        self.event = event.into();
        self
    }

    /// Define o formato da série.
    pub fn with_best_of(mut self, best_of: u32) -> Self {
        self.best_of = best_of;
        self
    }

    /// Valida campos obrigatórios.
    pub fn validate(&self) -> OracleResult<()> {
        if self.team_a_name.trim().is_empty() || self.team_b_name.trim().is_empty() {
            return Err(OracleError::invalid("team_a_name and team_b_name are required"));
        }
        Ok(())
    }

    pub(crate) fn team_a(&self) -> Team {
        team(&self.team_a_name, self.team_a_tag.as_deref())
    }

    pub(crate) fn team_b(&self) -> Team {
        team(&self.team_b_name, self.team_b_tag.as_deref())
    }
}

fn team(name: &str, tag: Option<&str>) -> Team {
    match tag.filter(|t| !t.is_empty()) {
        Some(tag) => Team::new(name).with_tag(tag),
        None => Team::new(name),
    }
}

/// Requisição de mudança do ciclo de vida.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateStatusRequest {
    /// open, locked, finished, cancelled
    pub status: String,
}

impl UpdateStatusRequest {
    pub fn new(status: impl Into<String>) -> Self {
        Self {
            status: status.into(),
        }
    }

    /// Valida e converte o status.
    pub fn lifecycle(&self) -> OracleResult<MatchLifecycle> {
        self.status.parse()
    }
}

/// Requisição de vínculo com o cofre on-chain.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateVaultRequest {
    pub on_chain_match_id: u64,
    pub vault_address: String,
}

impl UpdateVaultRequest {
    /// Valida campos obrigatórios.
    pub fn validate(&self) -> OracleResult<()> {
        if self.on_chain_match_id == 0 || self.vault_address.trim().is_empty() {
            return Err(OracleError::invalid(
                "on_chain_match_id and vault_address are required",
            ));
        }
        Ok(())
    }
}

/// Requisição de registro do resultado reportado por uma fonte.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SetResultRequest {
    /// pandascore, vlr, liquipedia
    pub source: String,

    /// upcoming, started, ended
    pub match_status: String,

    /// TeamA, TeamB (obrigatório quando ended)
    #[serde(default)]
    pub winner: String,

    #[serde(default)]
    pub score_a: u32,

    #[serde(default)]
    pub score_b: u32,

    #[serde(default)]
    pub map_count: u32,
}

impl SetResultRequest {
    /// Cria uma requisição sem vencedor.
    pub fn new(source: impl Into<String>, match_status: MatchStatus) -> Self {
        Self {
            source: source.into(),
            match_status: match_status.to_string(),
            winner: String::new(),
            score_a: 0,
            score_b: 0,
            map_count: 0,
        }
    }

    /// Cria uma requisição de partida encerrada.
    pub fn ended(source: impl Into<String>, winner: Winner) -> Self {
        let mut request = Self::new(source, MatchStatus::Ended);
        request.winner = winner.to_string();
        request
    }

    /// Define o placar.
    pub fn with_score(mut self, score_a: u32, score_b: u32, map_count: u32) -> Self {
        self.score_a = score_a;
        self.score_b = score_b;
        self.map_count = map_count;
        self
    }

    /// Valida a requisição e devolve o relatório normalizado.
    pub fn validate(&self) -> OracleResult<ReportedResult> {
        if self.source.trim().is_empty() {
            return Err(OracleError::invalid("source is required"));
        }

        let match_status: MatchStatus = self.match_status.parse()?;
        let winner = Winner::from_token(&self.winner);

        if match_status == MatchStatus::Ended && winner.is_none() {
            return Err(OracleError::invalid(
                "winner must be TeamA or TeamB when match_status is ended",
            ));
        }

        Ok(ReportedResult {
            source: self.source.clone(),
            match_status,
            winner,
            score: MatchScore::new(self.score_a, self.score_b, self.map_count),
        })
    }
}

/// Snapshot já coletado de uma partida, pronto para resolução.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchSnapshot {
    pub match_id: String,
    pub team_a: Team,
    pub team_b: Team,
    #[serde(default)]
    pub sources: Vec<SourceResult>,
}

/// Resultado armazenado no livro, um por (partida, fonte).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportedResult {
    pub source: String,
    pub match_status: MatchStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub winner: Option<Winner>,
    pub score: MatchScore,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_requires_team_names() {
        let request = CreateMatchRequest::new("Sentinels", " ", Utc::now());
        assert!(matches!(
            request.validate(),
            Err(OracleError::InvalidRequest(_))
        ));
    }

    #[test]
    fn test_set_result_ended_requires_winner() {
        let request = SetResultRequest::new("vlr", MatchStatus::Ended);
        let err = request.validate().unwrap_err();
        assert!(err.to_string().contains("winner must be TeamA or TeamB"));
    }

    #[test]
    fn test_set_result_started_without_winner() {
        let request = SetResultRequest::new("vlr", MatchStatus::Started).with_score(1, 0, 1);
        let reported = request.validate().unwrap();

        assert_eq!(reported.match_status, MatchStatus::Started);
        assert_eq!(reported.winner, None);
        assert_eq!(reported.score.map_count, 1);
    }

    #[test]
    fn test_set_result_invalid_status() {
        let mut request = SetResultRequest::ended("pandascore", Winner::TeamA);
        request.match_status = "live".to_string();
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_update_status_parses_lifecycle() {
        assert_eq!(
            UpdateStatusRequest::new("cancelled").lifecycle().unwrap(),
            MatchLifecycle::Cancelled
        );
        assert!(UpdateStatusRequest::new("live").lifecycle().is_err());
    }

    #[test]
    fn test_update_vault_requires_fields() {
        let request = UpdateVaultRequest {
            on_chain_match_id: 4,
            vault_address: String::new(),
        };
        assert!(request.validate().is_err());
    }
}
