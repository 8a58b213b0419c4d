//! Livro de partidas em memória.

use std::collections::{BTreeMap, HashMap};

use tokio::sync::RwLock;

use crate::types::matches::{Match, MatchLifecycle};
use crate::types::requests::{
    CreateMatchRequest, ReportedResult, SetResultRequest, UpdateStatusRequest, UpdateVaultRequest,
};
use crate::{OracleError, OracleResult};

/// Melhor de N usado quando a requisição não informa.
const DEFAULT_BEST_OF: u32 = 3;

#[derive(Debug, Default)]
struct BookState {
    next_id: u64,
    matches: BTreeMap<u64, Match>,
    // (partida, fonte) -> último resultado
    results: HashMap<(u64, String), ReportedResult>,
}

/// Registro de partidas e dos resultados reportados por fonte.
///
/// Cada partida guarda no máximo um resultado por fonte; um novo
/// registro da mesma fonte substitui o anterior.
#[derive(Debug, Default)]
pub struct MatchBook {
    state: RwLock<BookState>,
}

impl MatchBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cria uma partida aberta.
    pub async fn create_match(&self, request: CreateMatchRequest) -> OracleResult<Match> {
        request.validate()?;

        let mut state = self.state.write().await;
        state.next_id += 1;
        let id = state.next_id;

        let record = Match {
            id: id.to_string(),
            external_id: None,
            team_a: request.team_a(),
            team_b: request.team_b(),
            status: MatchLifecycle::Open,
            best_of: if request.best_of == 0 {
                DEFAULT_BEST_OF
            } else {
                request.best_of
            },
            event: request.event,
            start_time: request.start_time,
            on_chain_match_id: request.on_chain_match_id,
            vault_address: request.vault_address,
            result: None,
        };

        state.matches.insert(id, record.clone());
        tracing::info!(match_id = id, "Partida criada");

        Ok(record)
    }

    /// Lista partidas, mais recentes primeiro.
    pub async fn list_matches(&self, status: Option<MatchLifecycle>) -> Vec<Match> {
        let state = self.state.read().await;
        state
            .matches
            .values()
            .rev()
            .filter(|m| status.map_or(true, |s| m.status == s))
            .cloned()
            .collect()
    }

    /// Busca uma partida pelo ID.
    pub async fn get_match(&self, id: &str) -> OracleResult<Match> {
        let key = parse_id(id)?;
        let state = self.state.read().await;
        state
            .matches
            .get(&key)
            .cloned()
            .ok_or_else(|| OracleError::MatchNotFound(id.to_string()))
    }

    /// Atualiza o ciclo de vida da partida.
    pub async fn update_status(&self, id: &str, request: &UpdateStatusRequest) -> OracleResult<Match> {
        let lifecycle = request.lifecycle()?;
        self.modify(id, |m| m.status = lifecycle).await
    }

    /// Vincula a partida a um cofre on-chain.
    pub async fn update_vault(&self, id: &str, request: &UpdateVaultRequest) -> OracleResult<Match> {
        request.validate()?;
        self.modify(id, |m| {
            m.on_chain_match_id = Some(request.on_chain_match_id);
            m.vault_address = Some(request.vault_address.clone());
        })
        .await
    }

    /// Registra (ou substitui) o resultado de uma fonte.
    pub async fn set_result(&self, id: &str, request: &SetResultRequest) -> OracleResult<ReportedResult> {
        let reported = request.validate()?;
        let key = parse_id(id)?;

        let mut state = self.state.write().await;
        if !state.matches.contains_key(&key) {
            return Err(OracleError::MatchNotFound(id.to_string()));
        }

        let replaced = state
            .results
            .insert((key, reported.source.clone()), reported.clone())
            .is_some();

        tracing::info!(
            match_id = key,
            source = %reported.source,
            status = %reported.match_status,
            replaced,
            "Resultado registrado"
        );

        Ok(reported)
    }

    /// Resultado reportado por uma fonte.
    pub async fn reported_result(&self, id: &str, source: &str) -> OracleResult<ReportedResult> {
        let key = parse_id(id)?;
        let state = self.state.read().await;

        if !state.matches.contains_key(&key) {
            return Err(OracleError::MatchNotFound(id.to_string()));
        }

        state
            .results
            .get(&(key, source.to_string()))
            .cloned()
            .ok_or_else(|| OracleError::no_result(source, id))
    }

    /// Todos os resultados de uma partida, ordenados por fonte.
    pub async fn results_for(&self, id: &str) -> OracleResult<Vec<ReportedResult>> {
        let key = parse_id(id)?;
        let state = self.state.read().await;

        if !state.matches.contains_key(&key) {
            return Err(OracleError::MatchNotFound(id.to_string()));
        }

        let mut results: Vec<_> = state
            .results
            .iter()
            .filter(|((match_key, _), _)| *match_key == key)
            .map(|(_, r)| r.clone())
            .collect();
        results.sort_by(|a, b| a.source.cmp(&b.source));

        Ok(results)
    }

    async fn modify<F>(&self, id: &str, update: F) -> OracleResult<Match>
    where
        F: FnOnce(&mut Match),
    {
        let key = parse_id(id)?;
        let mut state = self.state.write().await;
        let record = state
            .matches
            .get_mut(&key)
            .ok_or_else(|| OracleError::MatchNotFound(id.to_string()))?;

        update(record);
        Ok(record.clone())
    }
}

fn parse_id(id: &str) -> OracleResult<u64> {
    id.parse()
        .map_err(|_| OracleError::MatchNotFound(id.to_string()))
}
