//! Integration tests for the project and location operations.
//!
//! Each test runs the client against a wiremock server and checks the wire
//! contract: method, path, `eq.` filter, identity injection and the shape of
//! the returned records.

use serde_json::{Value, json};
use tourguide_lib::{
    ApiClient, ApiError, ClientConfig, LocationDraft, LocationPatch, LocationTrigger, Position,
    ProjectDraft, ProjectPatch, ProjectReview,
};
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const IDENTITY: &str = "s4877740";

fn client_for(server: &MockServer) -> ApiClient {
    let config = ClientConfig::new(&server.uri(), "test-token", IDENTITY).unwrap();
    ApiClient::new(config).unwrap()
}

fn project_row(id: i64, title: &str) -> Value {
    json!({
        "id": id,
        "title": title,
        "description": "desc",
        "instructions": "walk",
        "initial_clue": null,
        "homescreen_display": "Display Initial Clue",
        "is_published": false,
        "participant_scoring": "Not Scored",
        "username": IDENTITY
    })
}

fn location_row(id: i64, project_id: i64, score_points: i64) -> Value {
    json!({
        "id": id,
        "location_name": format!("Stop {id}"),
        "location_trigger": "Location",
        "location_position": "(-27.492,153.0077)",
        "score_points": score_points,
        "clue": "",
        "location_content": "",
        "photo_url": null,
        "project_id": project_id,
        "username": IDENTITY
    })
}

// =============================================================================
// Lookups
// =============================================================================

#[tokio::test]
async fn get_location_uses_eq_filter_and_returns_sequence() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/location"))
        .and(query_param("id", "eq.42"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 42, "location_name": "X", "location_position": "(1,2)", "project_id": 7}
        ])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let found = client.get_location(42).await.unwrap();

    assert_eq!(found.len(), 1);
    assert_eq!(found[0].id, 42);
    assert_eq!(found[0].location_name, "X");
}

#[tokio::test]
async fn get_location_empty_means_not_found() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/location"))
        .and(query_param("id", "eq.42"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let found = client.get_location(42).await.unwrap();
    assert!(found.is_empty());
}

#[tokio::test]
async fn get_projects_lists_collection() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/project"))
        .and(header("authorization", "Bearer test-token"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!([project_row(1, "One"), project_row(2, "Two")])),
        )
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let projects = client.get_projects().await.unwrap();
    let titles: Vec<&str> = projects.iter().map(|p| p.title.as_str()).collect();
    assert_eq!(titles, vec!["One", "Two"]);
}

#[tokio::test]
async fn get_locations_for_project_filters_server_side() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/location"))
        .and(query_param("project_id", "eq.7"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([location_row(1, 7, 10)])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let locations = client.get_locations_for_project(7).await.unwrap();
    assert_eq!(locations.len(), 1);
    assert_eq!(locations[0].project_id, 7);
}

// =============================================================================
// Writes
// =============================================================================

#[tokio::test]
async fn create_project_overrides_caller_identity() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/project"))
        .and(header("prefer", "return=representation"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!([project_row(5, "Harbour")])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let mut draft = ProjectDraft::new("Harbour");
    draft.username = Some("impostor".to_string());

    let created = client.create_project(&draft).await.unwrap();
    assert_eq!(created[0].id, 5);

    let requests = mock_server.received_requests().await.unwrap();
    let sent: Value = requests[0].body_json().unwrap();
    assert_eq!(sent["username"], json!(IDENTITY));
    assert_eq!(sent["title"], json!("Harbour"));
    assert!(sent.get("id").is_none());
}

#[tokio::test]
async fn update_project_sends_patch_with_identity() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PATCH"))
        .and(path("/project"))
        .and(query_param("id", "eq.7"))
        .and(header("prefer", "return=representation"))
        .and(body_json(json!({"title": "New", "username": IDENTITY})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([project_row(7, "New")])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let patch = ProjectPatch {
        title: Some("New".to_string()),
        ..Default::default()
    };

    let updated = client.update_project(7, &patch).await.unwrap();
    assert_eq!(updated.len(), 1);
    assert_eq!(updated[0].title, "New");
}

#[tokio::test]
async fn update_accepts_bare_object_echo() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PATCH"))
        .and(path("/location"))
        .respond_with(ResponseTemplate::new(200).set_body_json(location_row(3, 7, 25)))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let patch = LocationPatch {
        score_points: Some(25),
        ..Default::default()
    };
    let updated = client.update_location(3, &patch).await.unwrap();
    assert_eq!(updated[0].score_points, 25);
}

#[tokio::test]
async fn create_location_serializes_typed_fields() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/location"))
        .and(body_json(json!({
            "location_name": "Great Court",
            "location_trigger": "QR Code",
            "location_position": "(-27.4975,153.0137)",
            "score_points": 10,
            "clue": "Arches",
            "location_content": "<p>Hi</p>",
            "project_id": 7,
            "username": IDENTITY
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!([location_row(9, 7, 10)])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let mut draft = LocationDraft::new("Great Court", 7);
    draft.location_trigger = LocationTrigger::QrCode;
    draft.location_position = Position::new(-27.4975, 153.0137);
    draft.score_points = 10;
    draft.clue = "Arches".to_string();
    draft.location_content = "<p>Hi</p>".to_string();

    let created = client.create_location(&draft).await.unwrap();
    assert_eq!(created[0].id, 9);
}

#[tokio::test]
async fn write_without_representation_returns_no_records() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PATCH"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let updated = client
        .update_project(7, &ProjectPatch::default())
        .await
        .unwrap();
    assert!(updated.is_empty());
}

#[tokio::test]
async fn delete_by_id() {
    let mock_server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/location"))
        .and(query_param("id", "eq.3"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    client.delete_location(3).await.unwrap();

    let requests = mock_server.received_requests().await.unwrap();
    assert!(requests[0].headers.get("prefer").is_none());
    assert!(requests[0].body.is_empty());
}

// =============================================================================
// Failures
// =============================================================================

#[tokio::test]
async fn delete_rejected_surfaces_http_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/project"))
        .respond_with(
            ResponseTemplate::new(409).set_body_string("violates foreign key constraint"),
        )
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client.delete_project(7).await.unwrap_err();

    assert_eq!(err.status_code(), Some(409));
    assert_eq!(
        err.to_string(),
        "HTTP error! status: 409, message: violates foreign key constraint"
    );
}

#[tokio::test]
async fn record_shape_mismatch_is_parse_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/project"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{"name": "no id"}])))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client.get_projects().await.unwrap_err();
    assert!(matches!(err, ApiError::Parse(_)));
}

// =============================================================================
// Concurrency and review
// =============================================================================

#[tokio::test]
async fn concurrent_list_calls_do_not_interfere() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/project"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!([project_row(7, "Campus")]))
                .set_delay(std::time::Duration::from_millis(50)),
        )
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/location"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            location_row(1, 7, 10),
            location_row(2, 8, 99),
            location_row(3, 7, 5)
        ])))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let (projects, locations) = tokio::join!(client.get_projects(), client.get_locations());
    let projects = projects.unwrap();
    let locations = locations.unwrap();

    assert_eq!(projects.len(), 1);
    assert_eq!(locations.len(), 3);

    let review = ProjectReview::build(projects[0].id, &locations);
    assert_eq!(review.total_score(), 15);
    assert_eq!(review.location_count(), 2);
}

#[tokio::test]
async fn cloned_clients_run_in_spawned_tasks() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/project"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([project_row(1, "A")])))
        .expect(3)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let handles: Vec<_> = (0..3)
        .map(|_| {
            let client = client.clone();
            tokio::spawn(async move { client.get_projects().await })
        })
        .collect();

    for handle in handles {
        let projects = handle.await.unwrap().unwrap();
        assert_eq!(projects[0].title, "A");
    }
}
