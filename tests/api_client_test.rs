/// Tests for the portal REST client against a mock HTTP server
use orbithub_portal::prelude::*;
use serde_json::json;
use wiremock::matchers::{body_partial_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn satellite_records() -> serde_json::Value {
    json!([
        {
            "name_of_satellite": "Amazonia-1",
            "country_operator_owner": "Brazil",
            "operator_owner": "INPE",
            "purpose": "Earth Observation",
            "sustainability_class": "OURO",
            "launch_mass_kg": 637
        },
        {
            "OBJECT_NAME": "CBERS 4A",
            "sustainability_class": "PENDENTE DE CLASSIFICAÇÃO"
        }
    ])
}

fn payload(satellites: Vec<Satellite>) -> SubmissionPayload {
    let mut draft = RequestDraft::default();
    draft.name = "Ana Souza".to_string();
    draft.purpose = "Other".to_string();
    draft.purpose_other = "Fisheries mapping".to_string();
    let mut selection = SelectionSet::new();
    for satellite in &satellites {
        selection.toggle(satellite);
    }
    SubmissionPayload::from_draft(&draft, "Other", Language::En, &selection)
}

#[tokio::test]
async fn test_search_without_criteria_sends_only_limit() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/satellites"))
        .and(query_param("limit", "24"))
        .respond_with(ResponseTemplate::new(200).set_body_json(satellite_records()))
        .expect(1)
        .mount(&server)
        .await;

    let client = PortalApiClient::new(&server.uri()).unwrap();
    let satellites = client.search(&CatalogQuery::default()).await.unwrap();

    assert_eq!(satellites.len(), 2);
    assert_eq!(satellites[0].display_name(), "Amazonia-1");
    assert_eq!(satellites[1].display_name(), "CBERS 4A");
    assert_eq!(satellites[0].extra["launch_mass_kg"], 637);

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests[0].url.query(), Some("limit=24"));
}

#[tokio::test]
async fn test_search_with_criteria() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/satellites"))
        .and(query_param("classification", "PRATA"))
        .and(query_param("purpose", "Fisheries mapping"))
        .and(query_param("delivery", "Batch"))
        .and(query_param("limit", "24"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let client = PortalApiClient::new(&server.uri()).unwrap();
    let query = CatalogQuery::new(
        Some(Classification::Silver),
        "Fisheries mapping",
        Some(Delivery::Batch),
    );
    let satellites = client.search(&query).await.unwrap();

    assert!(satellites.is_empty());
}

#[tokio::test]
async fn test_search_server_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/satellites"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let client = PortalApiClient::new(&server.uri()).unwrap();
    let err = client.search(&CatalogQuery::default()).await.unwrap_err();

    let portal_error = err.downcast_ref::<PortalError>().unwrap();
    assert!(matches!(
        portal_error,
        PortalError::CatalogQueryFailed { status: 500, .. }
    ));
}

#[tokio::test]
async fn test_search_invalid_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/satellites"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .mount(&server)
        .await;

    let client = PortalApiClient::new(&server.uri()).unwrap();
    let result = client.search(&CatalogQuery::default()).await;

    assert!(result.is_err());
}

#[tokio::test]
async fn test_submit_accepted() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/portal/request"))
        .and(body_partial_json(json!({
            "name": "Ana Souza",
            "purpose": "Fisheries mapping",
            "purposeOther": "Fisheries mapping",
            "delivery": "API",
            "classification": null,
            "language": "en",
            "selected_satellites": [{ "name_of_satellite": "Amazonia-1" }]
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({ "id": 42 })))
        .expect(1)
        .mount(&server)
        .await;

    let client = PortalApiClient::new(&server.uri()).unwrap();
    let response = client
        .submit(&payload(vec![Satellite::named("Amazonia-1")]))
        .await
        .unwrap();

    assert_eq!(response, GatewayResponse::Accepted);
}

#[tokio::test]
async fn test_submit_accepted_ignores_non_json_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/portal/request"))
        .respond_with(ResponseTemplate::new(200).set_body_string("queued"))
        .expect(1)
        .mount(&server)
        .await;

    let client = PortalApiClient::new(&server.uri()).unwrap();
    let response = client.submit(&payload(vec![])).await.unwrap();

    assert_eq!(response, GatewayResponse::Accepted);
}

#[tokio::test]
async fn test_submit_rejected_with_json_error() {
    let server = MockServer::start().await;
    let error = json!({ "detail": [{ "loc": ["body", "email"], "msg": "field required" }] });
    Mock::given(method("POST"))
        .and(path("/portal/request"))
        .respond_with(ResponseTemplate::new(422).set_body_json(error.clone()))
        .mount(&server)
        .await;

    let client = PortalApiClient::new(&server.uri()).unwrap();
    let response = client.submit(&payload(vec![])).await.unwrap();

    assert_eq!(
        response,
        GatewayResponse::Rejected {
            status: 422,
            error: Some(error)
        }
    );
}

#[tokio::test]
async fn test_submit_rejected_with_plain_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/portal/request"))
        .respond_with(ResponseTemplate::new(502).set_body_string("Bad Gateway"))
        .mount(&server)
        .await;

    let client = PortalApiClient::new(&server.uri()).unwrap();
    let response = client.submit(&payload(vec![])).await.unwrap();

    assert_eq!(
        response,
        GatewayResponse::Rejected {
            status: 502,
            error: None
        }
    );
}

#[tokio::test]
async fn test_submit_unreachable_server() {
    // Nothing listens on the discard port
    let client = PortalApiClient::new("http://127.0.0.1:9").unwrap();
    let result = client.submit(&payload(vec![])).await;

    assert!(result.is_err());
}

#[tokio::test]
async fn test_health() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/health"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "status": "ok" })))
        .mount(&server)
        .await;

    let client = PortalApiClient::new(&format!("{}/api", server.uri())).unwrap();

    assert_eq!(client.health().await.unwrap(), "ok");
}

#[tokio::test]
async fn test_controller_round_trip_over_http() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/satellites"))
        .respond_with(ResponseTemplate::new(200).set_body_json(satellite_records()))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/portal/request"))
        .and(body_partial_json(json!({
            "selected_satellites": [{ "name_of_satellite": "Amazonia-1", "launch_mass_kg": 637 }]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "ok": true })))
        .expect(1)
        .mount(&server)
        .await;

    let client = PortalApiClient::new(&server.uri()).unwrap();
    let mut form = FormController::new(
        client.clone(),
        client,
        ConsoleNotifier::new(false),
        Language::En,
    );
    form.filter().await.unwrap();
    assert!(form.select_by_name("Amazonia-1"));

    let outcome = form.submit().await;

    assert_eq!(outcome, SubmissionOutcome::Accepted);
    assert!(form.results().is_empty());
}
