//! RandomUserClient against a stand-in random-user API

use serde_json::json;
use userhub_server::{RandomUserClient, SourceError, UserSource};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn client_for(server: &MockServer) -> RandomUserClient {
    RandomUserClient::new(format!("{}/api/", server.uri())).unwrap()
}

#[tokio::test]
async fn sends_results_and_page_parameters() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/"))
        .and(query_param("results", "50"))
        .and(query_param("page", "3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "results": [
                {
                    "login": { "uuid": "u-1" },
                    "name": { "first": "Amy", "last": "Pond" },
                    "email": "amy@example.com",
                    "location": { "city": "Leadworth" }
                },
                { "email": "partial@example.com" }
            ],
            "info": { "seed": "abc", "results": 2, "page": 3 }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let entries = client_for(&server).await.fetch_page(3, 50).await.unwrap().unwrap();

    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].email.as_deref(), Some("amy@example.com"));
    assert!(entries[1].login.is_none());
}

#[tokio::test]
async fn empty_results_are_returned_as_empty_page() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "results": [] })))
        .mount(&server)
        .await;

    let entries = client_for(&server).await.fetch_page(1, 50).await.unwrap();
    assert_eq!(entries, Some(Vec::new()));
}

#[tokio::test]
async fn non_json_body_is_treated_as_exhaustion() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .mount(&server)
        .await;

    let entries = client_for(&server).await.fetch_page(1, 50).await.unwrap();
    assert!(entries.is_none());
}

#[tokio::test]
async fn body_without_results_is_none() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "error": "Uh oh" })))
        .mount(&server)
        .await;

    let entries = client_for(&server).await.fetch_page(1, 50).await.unwrap();
    assert!(entries.is_none());
}

#[tokio::test]
async fn error_status_is_a_source_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let err = client_for(&server).await.fetch_page(2, 50).await.unwrap_err();
    assert!(matches!(err, SourceError::Status { status: 503, page: 2 }));
}

#[tokio::test]
async fn unreachable_source_is_a_transport_error() {
    // nothing listens on port 1
    let client = RandomUserClient::new("http://127.0.0.1:1/api/").unwrap();

    let err = client.fetch_page(1, 50).await.unwrap_err();
    assert!(matches!(err, SourceError::Transport(_)));
}
