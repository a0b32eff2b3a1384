// Publishing against an in-process stub of the dashboard REST API
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::extract::{Path, Query, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post, put};
use axum::{Json, Router};
use serde_json::{json, Value};
use signal_dashboards::infrastructure::signalfx_repository::SignalFxRepository;
use signal_dashboards::{
    ChartDefinition, DashboardDefinition, DashboardError, DashboardResolver, FixedAnswer,
    PlotType, PublishOptions, PublishOutcome, RemoteError, ResolutionMode, WriteAction,
};

const TOKEN: &str = "test-token";

#[derive(Default)]
struct StubState {
    dashboards: Vec<(String, Value)>,
    searches: Vec<String>,
    next_id: usize,
}

type Stub = Arc<Mutex<StubState>>;

fn authorized(headers: &HeaderMap) -> bool {
    headers
        .get("x-sf-token")
        .and_then(|v| v.to_str().ok())
        .map(|v| v == TOKEN)
        .unwrap_or(false)
}

async fn search(
    State(stub): State<Stub>,
    headers: HeaderMap,
    Query(query): Query<HashMap<String, String>>,
) -> Response {
    if !authorized(&headers) {
        return (StatusCode::UNAUTHORIZED, "bad token").into_response();
    }
    let name = query.get("name").cloned().unwrap_or_default();
    let mut state = stub.lock().unwrap();
    state.searches.push(name.clone());

    // The real API matches on substrings, so the stub does too.
    let results: Vec<Value> = state
        .dashboards
        .iter()
        .filter(|(_, body)| body["name"].as_str().unwrap_or_default().contains(&name))
        .map(|(id, body)| json!({ "id": id, "name": body["name"], "created": 0 }))
        .collect();

    Json(json!({ "count": results.len(), "results": results })).into_response()
}

async fn create(State(stub): State<Stub>, headers: HeaderMap, Json(body): Json<Value>) -> Response {
    if !authorized(&headers) {
        return (StatusCode::UNAUTHORIZED, "bad token").into_response();
    }
    if body["name"] == "reject me" {
        return (StatusCode::BAD_REQUEST, "invalid dashboard").into_response();
    }
    let mut state = stub.lock().unwrap();
    state.next_id += 1;
    let id = format!("DASH{}", state.next_id);
    state.dashboards.push((id.clone(), body.clone()));

    Json(json!({ "id": id, "name": body["name"] })).into_response()
}

async fn update(
    State(stub): State<Stub>,
    headers: HeaderMap,
    Path(id): Path<String>,
    Json(body): Json<Value>,
) -> Response {
    if !authorized(&headers) {
        return (StatusCode::UNAUTHORIZED, "bad token").into_response();
    }
    let mut state = stub.lock().unwrap();
    match state.dashboards.iter_mut().find(|(existing, _)| *existing == id) {
        Some(entry) => {
            entry.1 = body;
            Json(json!({ "id": id })).into_response()
        }
        None => (StatusCode::NOT_FOUND, "no such dashboard").into_response(),
    }
}

async fn spawn_stub(seed: &[&str]) -> (Stub, String) {
    let stub: Stub = Arc::new(Mutex::new(StubState::default()));
    {
        let mut state = stub.lock().unwrap();
        for (i, name) in seed.iter().enumerate() {
            state
                .dashboards
                .push((format!("SEED{}", i + 1), json!({ "name": name, "charts": [] })));
        }
    }

    let router = Router::new()
        .route("/v2/dashboard", get(search))
        .route("/v2/dashboard/simple", post(create))
        .route("/v2/dashboard/:id", put(update))
        .with_state(stub.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    (stub, format!("http://{}/v2/", addr))
}

fn resolver(base_url: &str, token: &str, answer: bool) -> DashboardResolver {
    let repository = SignalFxRepository::new(base_url.to_string(), token.to_string());
    DashboardResolver::new(Arc::new(repository), Arc::new(FixedAnswer(answer)))
}

fn dashboard(name: &str) -> DashboardDefinition {
    DashboardDefinition::new().with_name(name).with_charts([
        ChartDefinition::time_series()
            .with_name("lol")
            .with_program("data('cpu.utilization').publish()")
            .with_default_plot_type(PlotType::ColumnChart),
    ])
}

#[tokio::test]
async fn test_create_then_conflict_then_force() {
    let (stub, base_url) = spawn_stub(&[]).await;
    let resolver = resolver(&base_url, TOKEN, false);
    let mut definition = dashboard("testy mctesterson");

    let created = resolver
        .resolve(&mut definition, PublishOptions::default())
        .await
        .unwrap();
    assert_eq!(created, PublishOutcome::Created { id: "DASH1".to_string() });
    assert_eq!(definition.remote_id.as_deref(), Some("DASH1"));

    let again = resolver
        .resolve(&mut definition, PublishOptions::default())
        .await;
    assert!(matches!(again, Err(DashboardError::AlreadyExists { ref id, .. }) if id == "DASH1"));

    let mut changed = definition.clone().with_description("second revision");
    let forced = resolver
        .resolve(&mut changed, PublishOptions::new(ResolutionMode::Force))
        .await
        .unwrap();
    assert_eq!(forced, PublishOutcome::Updated { id: "DASH1".to_string() });

    let state = stub.lock().unwrap();
    assert_eq!(state.dashboards.len(), 1);
    assert_eq!(state.dashboards[0].1["description"], "second revision");
    assert_eq!(
        state.dashboards[0].1["charts"][0]["options"]["defaultPlotType"],
        "ColumnChart"
    );
}

#[tokio::test]
async fn test_interactive_overwrite() {
    let (stub, base_url) = spawn_stub(&["testy mctesterson"]).await;

    let declined = resolver(&base_url, TOKEN, false)
        .resolve(&mut dashboard("testy mctesterson"), PublishOptions::new(ResolutionMode::Interactive))
        .await;
    assert!(matches!(declined, Err(DashboardError::AlreadyExists { .. })));
    assert_eq!(stub.lock().unwrap().dashboards[0].1["charts"], json!([]));

    let confirmed = resolver(&base_url, TOKEN, true)
        .resolve(&mut dashboard("testy mctesterson"), PublishOptions::new(ResolutionMode::Interactive))
        .await
        .unwrap();
    assert_eq!(confirmed, PublishOutcome::Updated { id: "SEED1".to_string() });
    assert_eq!(stub.lock().unwrap().dashboards[0].1["charts"][0]["name"], "lol");
}

#[tokio::test]
async fn test_substring_matches_do_not_block_creation() {
    let (stub, base_url) = spawn_stub(&["Riposte Template Dashboard (old)", "My Riposte Template Dashboard"]).await;

    let outcome = resolver(&base_url, TOKEN, false)
        .resolve(&mut dashboard("Riposte Template Dashboard"), PublishOptions::default())
        .await
        .unwrap();

    assert!(matches!(outcome, PublishOutcome::Created { .. }));
    let state = stub.lock().unwrap();
    assert_eq!(state.searches, vec!["Riposte Template Dashboard".to_string()]);
    assert_eq!(state.dashboards.len(), 3);
}

#[tokio::test]
async fn test_duplicate_names_are_refused() {
    let (stub, base_url) = spawn_stub(&["Shoeadmin Application Dashboard", "Shoeadmin Application Dashboard"]).await;

    let result = resolver(&base_url, TOKEN, true)
        .resolve(&mut dashboard("Shoeadmin Application Dashboard"), PublishOptions::new(ResolutionMode::Force))
        .await;

    match result {
        Err(DashboardError::MultipleExactMatches { ids, .. }) => {
            assert_eq!(ids, vec!["SEED1".to_string(), "SEED2".to_string()]);
        }
        other => panic!("unexpected result: {other:?}"),
    }
    assert_eq!(stub.lock().unwrap().dashboards[0].1["charts"], json!([]));
}

#[tokio::test]
async fn test_bad_token_fails_the_listing() {
    let (stub, base_url) = spawn_stub(&[]).await;

    let result = resolver(&base_url, "wrong", false)
        .resolve(&mut dashboard("foo"), PublishOptions::default())
        .await;

    assert!(matches!(
        result,
        Err(DashboardError::RemoteRead {
            source: RemoteError::Status { status: 401, .. },
            ..
        })
    ));
    assert!(stub.lock().unwrap().dashboards.is_empty());
}

#[tokio::test]
async fn test_rejected_create_surfaces_status_and_body() {
    let (_stub, base_url) = spawn_stub(&[]).await;
    let mut definition = dashboard("reject me");

    let result = resolver(&base_url, TOKEN, false)
        .resolve(&mut definition, PublishOptions::default())
        .await;

    match result {
        Err(DashboardError::RemoteWrite(RemoteError::Status { status, body })) => {
            assert_eq!(status, 400);
            assert_eq!(body, "invalid dashboard");
        }
        other => panic!("unexpected result: {other:?}"),
    }
    assert!(definition.remote_id.is_none());
}

#[tokio::test]
async fn test_dry_run_reads_but_does_not_write() {
    let (stub, base_url) = spawn_stub(&[]).await;
    let mut definition = dashboard("removeme111");

    let outcome = resolver(&base_url, TOKEN, false)
        .resolve(&mut definition, PublishOptions::default().dry_run(true))
        .await
        .unwrap();

    let PublishOutcome::DryRun { action, body } = outcome else {
        panic!("expected a dry run outcome");
    };
    assert_eq!(action, WriteAction::Create);
    assert_eq!(serde_json::from_str::<Value>(&body).unwrap(), definition.to_body());

    let state = stub.lock().unwrap();
    assert_eq!(state.searches.len(), 1);
    assert!(state.dashboards.is_empty());
}
