// Integration tests for `Bridge` using wiremock as a stand-in bridge.

use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use hue_bridge_rs::{Bridge, Error, PairingOutcome, StateUpdate};

// ── Helpers ─────────────────────────────────────────────────────────

async fn setup() -> (MockServer, Bridge) {
    let server = MockServer::start().await;
    let bridge = Bridge::from_base_url(server.uri(), None);
    (server, bridge)
}

async fn setup_paired() -> (MockServer, Bridge) {
    let (server, mut bridge) = setup().await;
    bridge.set_credential("newdeveloper");
    (server, bridge)
}

fn light(name: &str) -> serde_json::Value {
    json!({
        "state": { "on": false, "bri": 254, "reachable": true },
        "type": "Dimmable light",
        "name": name,
        "modelid": "LWB010"
    })
}

fn lights_path(suffix: &str) -> String {
    format!("/api/newdeveloper/lights{suffix}")
}

// ── Pairing tests ───────────────────────────────────────────────────

#[tokio::test]
async fn test_pair_success() {
    let (server, mut bridge) = setup().await;

    Mock::given(method("POST"))
        .and(path("/api"))
        .and(body_json(json!({ "devicetype": "my_hue_app#rasp pi" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "success": { "username": "newdeveloper" } }
        ])))
        .mount(&server)
        .await;

    let outcome = bridge.pair().await.unwrap();

    assert_eq!(
        outcome,
        PairingOutcome::Paired {
            username: "newdeveloper".into()
        }
    );
    assert!(bridge.is_paired());
    assert_eq!(bridge.credential(), Some("newdeveloper"));

    // Both the request and the reply are in the diagnostics history.
    assert_eq!(bridge.history().await.len(), 2);
}

#[tokio::test]
async fn test_pair_link_button_not_pressed() {
    let (server, mut bridge) = setup().await;

    Mock::given(method("POST"))
        .and(path("/api"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "error": {
                "type": 101,
                "address": "/",
                "description": "link button not pressed"
            } }
        ])))
        .mount(&server)
        .await;

    let outcome = bridge.pair().await.unwrap();

    assert_eq!(outcome, PairingOutcome::LinkButtonNotPressed);
    assert!(!bridge.is_paired());
}

#[tokio::test]
async fn test_pair_other_error() {
    let (server, mut bridge) = setup().await;

    Mock::given(method("POST"))
        .and(path("/api"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "error": {
                "type": 7,
                "address": "/api",
                "description": "invalid value"
            } }
        ])))
        .mount(&server)
        .await;

    let result = bridge.pair().await;

    assert!(
        matches!(result, Err(Error::Bridge { kind: 7, .. })),
        "expected Bridge error, got: {result:?}"
    );
    assert!(!bridge.is_paired());
}

#[tokio::test]
async fn test_pair_transport_failure() {
    let (server, mut bridge) = setup().await;

    Mock::given(method("POST"))
        .and(path("/api"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let result = bridge.pair().await;

    assert!(
        matches!(result, Err(Error::Http { .. })),
        "expected Http error, got: {result:?}"
    );
    assert!(!bridge.is_paired());
}

// ── Enumeration tests ───────────────────────────────────────────────

#[tokio::test]
async fn test_refresh_lights_document_order() {
    let (server, mut bridge) = setup_paired().await;

    // Registry keys deliberately out of numeric and lexicographic order;
    // the identifier sequence must follow the document.
    let registry = format!(
        r#"{{"7": {}, "3": {}, "1": {}}}"#,
        light("Desk"),
        light("Couch"),
        light("Hallway")
    );

    Mock::given(method("GET"))
        .and(path(lights_path("")))
        .respond_with(ResponseTemplate::new(200).set_body_raw(registry, "application/json"))
        .mount(&server)
        .await;

    let ids = bridge.refresh_lights().await.unwrap().to_vec();

    assert_eq!(ids, ["7", "3", "1"]);
}

#[tokio::test]
async fn test_refresh_replaces_sequence() {
    let (server, mut bridge) = setup_paired().await;

    Mock::given(method("GET"))
        .and(path(lights_path("")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "1": light("Desk"),
            "2": light("Couch")
        })))
        .mount(&server)
        .await;

    bridge.refresh_lights().await.unwrap();
    bridge.refresh_lights().await.unwrap();

    // A second refresh must not accumulate duplicate identifiers.
    assert_eq!(bridge.lights().len(), 2);
}

#[tokio::test]
async fn test_refresh_failure_keeps_sequence() {
    let (server, mut bridge) = setup_paired().await;

    Mock::given(method("GET"))
        .and(path(lights_path("")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "1": light("Desk")
        })))
        .expect(1)
        .mount(&server)
        .await;

    bridge.refresh_lights().await.unwrap();
    server.reset().await;

    Mock::given(method("GET"))
        .and(path(lights_path("")))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let result = bridge.refresh_lights().await;

    assert!(matches!(result, Err(Error::Http { .. })));
    assert_eq!(bridge.lights(), ["1"]);
}

#[tokio::test]
async fn test_refresh_without_credential() {
    let (_server, mut bridge) = setup().await;

    let result = bridge.refresh_lights().await;

    assert!(matches!(result, Err(Error::NoCredential)));
}

#[tokio::test]
async fn test_refresh_unauthorized() {
    let (server, mut bridge) = setup_paired().await;

    Mock::given(method("GET"))
        .and(path(lights_path("")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "error": {
                "type": 1,
                "address": "/lights",
                "description": "unauthorized user"
            } }
        ])))
        .mount(&server)
        .await;

    let result = bridge.refresh_lights().await;

    assert!(
        matches!(result, Err(Error::Bridge { kind: 1, .. })),
        "expected Bridge error, got: {result:?}"
    );
    assert!(bridge.lights().is_empty());
}

#[tokio::test]
async fn test_get_light() {
    let (server, bridge) = setup_paired().await;

    Mock::given(method("GET"))
        .and(path(lights_path("/1")))
        .respond_with(ResponseTemplate::new(200).set_body_json(light("Desk")))
        .mount(&server)
        .await;

    let info = bridge.get_light("1").await.unwrap();

    assert_eq!(info.name, "Desk");
    assert_eq!(info.state.bri, Some(254));
}

// ── Broadcast tests ─────────────────────────────────────────────────

#[tokio::test]
async fn test_set_all_lights_lazily_populates() {
    let (server, mut bridge) = setup_paired().await;

    Mock::given(method("GET"))
        .and(path(lights_path("")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "1": light("Desk"),
            "2": light("Couch")
        })))
        .mount(&server)
        .await;

    for id in ["1", "2"] {
        Mock::given(method("PUT"))
            .and(path(lights_path(&format!("/{id}/state"))))
            .and(body_json(json!({ "on": true })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                { "success": {} }
            ])))
            .expect(1)
            .mount(&server)
            .await;
    }

    let report = bridge.set_all_lights(true).await.unwrap();

    assert_eq!(report.len(), 2);
    assert!(report.all_succeeded());
    assert_eq!(bridge.lights(), ["1", "2"]);
    assert_eq!(bridge.active(), Some(true));
}

#[tokio::test]
async fn test_set_all_lights_partial_failure() {
    let (server, mut bridge) = setup_paired().await;

    Mock::given(method("GET"))
        .and(path(lights_path("")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "1": light("Desk"),
            "2": light("Couch")
        })))
        .mount(&server)
        .await;

    Mock::given(method("PUT"))
        .and(path(lights_path("/1/state")))
        .and(body_json(json!({ "on": false })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "success": { "/lights/1/state/on": false } }
        ])))
        .mount(&server)
        .await;

    Mock::given(method("PUT"))
        .and(path(lights_path("/2/state")))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    // One failing PUT must not abort the others or fail the call.
    let report = bridge.set_all_lights(false).await.unwrap();

    assert_eq!(report.len(), 2);
    assert!(!report.all_succeeded());
    let failed: Vec<&str> = report.failures().map(|o| o.id.as_str()).collect();
    assert_eq!(failed, ["2"]);
    assert_eq!(bridge.active(), Some(false));
}

#[tokio::test]
async fn test_set_light_rejects_empty_update() {
    let (_server, bridge) = setup_paired().await;

    let result = bridge.set_light("1", &StateUpdate::new()).await;

    assert!(matches!(result, Err(Error::NoAttribute)));
}
