// Core structs: Pessoa, SeedPerson, error types
use mongodb::bson::DateTime as BsonDateTime;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Canonical record returned by `GET /api/pessoas`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pessoa {
    pub id: Option<String>,
    pub nome: String,
    pub cidade: String,
    pub provedora: String,
    pub plano: String,
    pub contato: String,
    #[serde(rename = "atualizadoEm")]
    pub atualizado_em: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PeopleResponse {
    pub data: Vec<Pessoa>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ErrorBody {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: None,
        }
    }

    pub fn with_details(error: impl Into<String>, details: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: Some(details.into()),
        }
    }
}

/// A synthetic person document as written by the seeder.
///
/// `internet` and `provedora` always hold the same provider; both spellings
/// are kept because existing readers look for either one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeedPerson {
    pub nome: String,
    pub idade: u32,
    pub internet: String,
    pub provedora: String,
    pub plano: String,
    pub contato: String,
    pub cidade: String,
    pub localizacao: String,
    pub atualizado_em: BsonDateTime,
    pub created_at: BsonDateTime,
    pub updated_at: BsonDateTime,
}

/// Outcome of one seeding run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedReport {
    pub inserted: usize,
    /// Provider counts, highest first.
    pub distribution: Vec<(String, usize)>,
}

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("connection error: {0}")]
    Connection(String),
    #[error("query error: {0}")]
    Query(String),
    #[error("write error: {0}")]
    Write(String),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config error: {0}")]
    Load(#[from] config::ConfigError),
}

#[derive(Debug, Error)]
pub enum OrchestratorError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("mongod binary not found on PATH; install MongoDB or point MONGODB_URI at a running server")]
    MongodNotFound,
    #[error("`{command}` failed with {status}")]
    Command { command: String, status: std::process::ExitStatus },
    #[error("local mongod did not start on {host}:{port}, see {log}")]
    MongodStartup { host: String, port: u16, log: String },
}
