use crate::model::Pessoa;
use crate::utils::bson_to_iso8601;
use mongodb::bson::{Bson, Document};

pub const DEFAULT_NOME: &str = "Nome não informado";
pub const DEFAULT_CIDADE: &str = "Cidade não informada";
pub const DEFAULT_PROVEDORA: &str = "Não informado";
pub const DEFAULT_PLACEHOLDER: &str = "—";

// Synonyms per canonical field, first match wins.
const NOME_KEYS: &[&str] = &["nome", "name"];
const CIDADE_KEYS: &[&str] = &["cidade", "city"];
const PROVEDORA_KEYS: &[&str] = &["provedora", "provedor", "provider", "internet"];
const PLANO_KEYS: &[&str] = &["plano", "planoInternet", "planoContratado"];
const CONTATO_KEYS: &[&str] = &["contato", "email", "telefone", "phone"];
const ATUALIZADO_KEYS: &[&str] = &[
    "atualizadoEm",
    "updatedAt",
    "criadoEm",
    "createdAt",
    "dataAtualizacao",
];

pub fn normalize_all(documents: &[Document]) -> Vec<Pessoa> {
    documents.iter().map(normalize_document).collect()
}

pub fn normalize_document(doc: &Document) -> Pessoa {
    Pessoa {
        id: doc.get("_id").and_then(scalar_to_string),
        nome: resolve(doc, NOME_KEYS).unwrap_or_else(|| DEFAULT_NOME.to_string()),
        cidade: resolve(doc, CIDADE_KEYS).unwrap_or_else(|| DEFAULT_CIDADE.to_string()),
        provedora: resolve(doc, PROVEDORA_KEYS).unwrap_or_else(|| DEFAULT_PROVEDORA.to_string()),
        plano: resolve(doc, PLANO_KEYS).unwrap_or_else(|| DEFAULT_PLACEHOLDER.to_string()),
        contato: resolve(doc, CONTATO_KEYS).unwrap_or_else(|| DEFAULT_PLACEHOLDER.to_string()),
        atualizado_em: resolve(doc, ATUALIZADO_KEYS),
    }
}

/// Returns the first synonym holding a non-empty value.
fn resolve(doc: &Document, keys: &[&str]) -> Option<String> {
    keys.iter()
        .filter_map(|key| doc.get(*key))
        .filter(|value| !is_empty(value))
        .find_map(scalar_to_string)
}

fn is_empty(value: &Bson) -> bool {
    match value {
        Bson::Null | Bson::Undefined => true,
        Bson::String(s) => s.is_empty(),
        Bson::Boolean(b) => !b,
        Bson::Int32(n) => *n == 0,
        Bson::Int64(n) => *n == 0,
        Bson::Double(n) => *n == 0.0,
        Bson::Array(items) => items.is_empty(),
        Bson::Document(inner) => inner.is_empty(),
        _ => false,
    }
}

/// String form of a scalar: ObjectIds as hex, dates as ISO-8601, strings
/// unchanged. Compound values have no canonical string form.
fn scalar_to_string(value: &Bson) -> Option<String> {
    match value {
        Bson::ObjectId(oid) => Some(oid.to_hex()),
        Bson::DateTime(dt) => Some(bson_to_iso8601(dt)),
        Bson::String(s) => Some(s.clone()),
        Bson::Int32(n) => Some(n.to_string()),
        Bson::Int64(n) => Some(n.to_string()),
        Bson::Double(n) => Some(n.to_string()),
        Bson::Boolean(b) => Some(b.to_string()),
        Bson::Symbol(s) => Some(s.clone()),
        _ => None,
    }
}
