//! Synonym resolution across every canonical field.

use mongodb::bson::{Bson, DateTime as BsonDateTime, Document, doc, oid::ObjectId};
use pessoas_api::normalizer::{
    DEFAULT_CIDADE, DEFAULT_NOME, DEFAULT_PLACEHOLDER, DEFAULT_PROVEDORA, normalize_document,
};
use rstest::rstest;

fn single(key: &str, value: impl Into<Bson>) -> Document {
    let mut doc = Document::new();
    doc.insert(key, value.into());
    doc
}

#[rstest]
#[case("nome")]
#[case("name")]
fn every_name_synonym_is_read(#[case] key: &str) {
    assert_eq!(normalize_document(&single(key, "Caio Moreira")).nome, "Caio Moreira");
}

#[rstest]
#[case("cidade")]
#[case("city")]
fn every_city_synonym_is_read(#[case] key: &str) {
    assert_eq!(normalize_document(&single(key, "Natal")).cidade, "Natal");
}

#[rstest]
#[case("provedora")]
#[case("provedor")]
#[case("provider")]
#[case("internet")]
fn every_provider_synonym_is_read(#[case] key: &str) {
    assert_eq!(normalize_document(&single(key, "Claro")).provedora, "Claro");
}

#[rstest]
#[case("plano")]
#[case("planoInternet")]
#[case("planoContratado")]
fn every_plan_synonym_is_read(#[case] key: &str) {
    assert_eq!(normalize_document(&single(key, "Fibra 300 Mb")).plano, "Fibra 300 Mb");
}

#[rstest]
#[case("contato")]
#[case("email")]
#[case("telefone")]
#[case("phone")]
fn every_contact_synonym_is_read(#[case] key: &str) {
    assert_eq!(normalize_document(&single(key, "x@mail.com")).contato, "x@mail.com");
}

#[rstest]
#[case("atualizadoEm")]
#[case("updatedAt")]
#[case("criadoEm")]
#[case("createdAt")]
#[case("dataAtualizacao")]
fn every_timestamp_synonym_is_read(#[case] key: &str) {
    let pessoa = normalize_document(&single(key, BsonDateTime::from_millis(0)));
    assert_eq!(pessoa.atualizado_em.as_deref(), Some("1970-01-01T00:00:00.000Z"));
}

#[test]
fn timestamp_precedence_follows_list_order() {
    let pessoa = normalize_document(&doc! {
        "createdAt": "2020-01-01T00:00:00Z",
        "updatedAt": "2023-06-01T00:00:00Z",
        "dataAtualizacao": "2019-01-01T00:00:00Z",
    });
    assert_eq!(pessoa.atualizado_em.as_deref(), Some("2023-06-01T00:00:00Z"));
}

#[test]
fn contact_precedence_follows_list_order() {
    let pessoa = normalize_document(&doc! {
        "phone": "4",
        "telefone": "3",
        "email": "2",
    });
    assert_eq!(pessoa.contato, "2");
}

#[test]
fn documents_with_unrelated_fields_get_defaults() {
    let pessoa = normalize_document(&doc! {
        "_id": ObjectId::new(),
        "idade": 33,
        "localizacao": "Lages",
        "tags": ["a", "b"],
    });
    assert_eq!(pessoa.nome, DEFAULT_NOME);
    assert_eq!(pessoa.cidade, DEFAULT_CIDADE);
    assert_eq!(pessoa.provedora, DEFAULT_PROVEDORA);
    assert_eq!(pessoa.plano, DEFAULT_PLACEHOLDER);
    assert_eq!(pessoa.contato, DEFAULT_PLACEHOLDER);
    assert_eq!(pessoa.atualizado_em, None);
    assert!(pessoa.id.is_some());
}

#[test]
fn compound_values_are_skipped() {
    let pessoa = normalize_document(&doc! {
        "nome": { "first": "Ana" },
        "name": "Ana Costa",
    });
    assert_eq!(pessoa.nome, "Ana Costa");
}
