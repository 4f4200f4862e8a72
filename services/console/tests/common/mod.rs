use console::app::{AppState, PermissionsSource, build_router};
use console::store::memory::{InMemoryStore, SeedData};
use mrosc_authz::{AccessResolver, PermissionTable};
use mrosc_status::Normalizer;
use std::sync::Arc;

pub const SEED: &str = r#"
amendments:
  - id: a1
    number: "001/2025"
    author_name: "Vereadora Ana"
    value: 100
    year: 2025
    status: paid
    osc_id: osc-1
  - id: a2
    value: "50"
    status: pending
calls:
  - id: c1
    title: "Esporte nos bairros"
    status: open
    proposals_count: 3
  - id: c2
    status: judging
partnerships:
  - id: p1
    object: "Oficinas de música"
    osc_name: "Instituto Aurora"
    osc_cnpj: "12.345.678/0001-90"
    status: active
    total_value: 1000
  - id: p2
    object: "Horta comunitária"
    status: unknown_code_123
  - id: p3
    status: execution
    total_value: "500"
proposals:
  - id: x1
    title: "Biblioteca itinerante"
    status: draft
accountability_documents:
  - id: d1
    type: REFF
    amount: 300
    status: pending
oscs:
  - id: osc-1
    name: "Instituto Aurora"
    cnd_status: expired
  - id: osc-2
    name: "Associação Bem Viver"
    cnd_status: valid
audit_logs:
  - id: 9f1c2d3e-aaaa-bbbb-cccc-0123456789ab
    user_name: "Maria Souza"
    action: UPDATE
    entity: WorkPlan
    details: {goal: 2}
    ip_address: "10.0.0.7"
    created_at: "2025-03-01T10:00:00Z"
  - id: 00000000-1111-2222-3333-444455556666
    action: DELETE
    entity: Partnership
    created_at: "2025-01-01T10:00:00Z"
profiles:
  - id: u1
    email: "ana@prefeitura.gov.br"
    full_name: "Ana Lima"
    role: GESTOR
    department: SMAS
  - id: u2
    email: "bruno@osc.org"
    full_name: "Bruno Reis"
    role: AUDITOR
"#;

pub fn seeded_state() -> AppState {
    let seed = SeedData::from_yaml_str(SEED).expect("seed");
    AppState {
        instance_id: "test".to_string(),
        api_version: "v1".to_string(),
        permissions_source: PermissionsSource::Builtin,
        resolver: Arc::new(AccessResolver::new(PermissionTable::builtin())),
        normalizer: Arc::new(Normalizer::default()),
        store: Arc::new(InMemoryStore::with_seed(seed)),
    }
}

pub fn app() -> axum::routing::RouterIntoService<axum::body::Body, ()> {
    build_router(seeded_state()).into_service()
}

pub async fn read_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body");
    serde_json::from_slice(&bytes).expect("json")
}
