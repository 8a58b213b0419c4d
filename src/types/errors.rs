//! Tipos de erro do oráculo.

use thiserror::Error;

/// Tipo de resultado padrão do oráculo.
pub type OracleResult<T> = Result<T, OracleError>;

/// Erros possíveis no oráculo.
///
/// O resolvedor de consenso nunca falha; estes erros vêm dos
/// colaboradores (livro de partidas, fontes, configuração, CLI).
#[derive(Error, Debug)]
pub enum OracleError {
    #[error("Erro de configuração: {0}")]
    Config(String),

    #[error("Erro de IO: {0}")]
    Io(#[from] std::io::Error),

    #[error("Erro ao parsear TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("Erro ao serializar TOML: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("Erro de JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Partida {0} não encontrada")]
    MatchNotFound(String),

    #[error("Nenhum resultado de '{source_name}' para a partida {match_id}")]
    NoSourceResult {
        source_name: String,
        match_id: String,
    },

    #[error("Requisição inválida: {0}")]
    InvalidRequest(String),

    #[error("Timeout ao consultar a fonte '{0}'")]
    SourceTimeout(String),
}

impl OracleError {
    /// Cria um erro de configuração.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Self::Config(msg.into())
    }

    /// Cria um erro de requisição inválida.
    pub fn invalid<S: Into<String>>(msg: S) -> Self {
        Self::InvalidRequest(msg.into())
    }

    /// Cria um erro de resultado ausente para uma fonte.
    pub fn no_result(source_name: impl Into<String>, match_id: impl Into<String>) -> Self {
        Self::NoSourceResult {
            source_name: source_name.into(),
            match_id: match_id.into(),
        }
    }
}
