//! Runs the HTTP client against a throwaway local server

use std::sync::{Arc, Mutex};

use warp::Filter;
use warp::http::{Method, StatusCode};
use warp::hyper::body::Bytes;
use warp::path::FullPath;

use party_planner::client::Client;
use party_planner::resource::Collection;
use party_planner::traits::RemoteSource;

/// A request, as received by the local server
#[derive(Clone, Debug)]
struct Received {
    method: String,
    path: String,
    content_type: Option<String>,
    body: String,
}

/// Start a server that answers every request with the same status and body.
/// Returns its base URL, and the list of requests it received
fn serve(status: u16, body: &'static str) -> (String, Arc<Mutex<Vec<Received>>>) {
    let status = StatusCode::from_u16(status).unwrap();
    let received = Arc::new(Mutex::new(Vec::new()));
    let log = received.clone();

    let route = warp::method()
        .and(warp::path::full())
        .and(warp::header::optional::<String>("content-type"))
        .and(warp::body::bytes())
        .map(move |method: Method, path: FullPath, content_type: Option<String>, request_body: Bytes| {
            log.lock().unwrap().push(Received {
                method: method.to_string(),
                path: path.as_str().to_string(),
                content_type,
                body: String::from_utf8_lossy(&request_body).to_string(),
            });
            warp::reply::with_status(
                warp::reply::with_header(body, "content-type", "application/json"),
                status,
            )
        });

    let (addr, server) = warp::serve(route).bind_ephemeral(([127, 0, 0, 1], 0));
    tokio::spawn(server);

    (format!("http://{}/api", addr), received)
}

#[tokio::test]
async fn list_records() {
    let _ = env_logger::builder().is_test(true).try_init();

    let (base_url, received) = serve(200, r#"{"success": true, "data": [{"id": 1, "name": "Picnic"}, {"id": 2, "name": "Gala"}]}"#);
    let client = Client::new(&base_url, "/cohort").unwrap();

    let records = client.list(Collection::Events).await.unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[1]["name"], "Gala");

    let received = received.lock().unwrap().clone();
    assert_eq!(received.len(), 1);
    assert_eq!(received[0].method, "GET");
    assert_eq!(received[0].path, "/api/cohort/events");
}

#[tokio::test]
async fn get_a_record() {
    let _ = env_logger::builder().is_test(true).try_init();

    let (base_url, received) = serve(200, r#"{"data": {"id": 7, "name": "Picnic"}}"#);
    let client = Client::new(&base_url, "/cohort").unwrap();

    let record = client.get(Collection::Events, 7).await.unwrap();
    assert_eq!(record["id"], 7);
    assert_eq!(received.lock().unwrap()[0].path, "/api/cohort/events/7");
}

#[tokio::test]
async fn create_a_record() {
    let _ = env_logger::builder().is_test(true).try_init();

    let (base_url, received) = serve(201, r#"{"data": {"id": 8}}"#);
    let client = Client::new(&base_url, "/cohort").unwrap();

    let payload = serde_json::json!({"name": "Picnic", "description": "Food", "date": "2025-06-01T00:00:00.000Z", "location": "Park"});
    client.create(Collection::Events, payload.clone()).await.unwrap();

    let received = received.lock().unwrap().clone();
    assert_eq!(received[0].method, "POST");
    assert_eq!(received[0].path, "/api/cohort/events");
    assert_eq!(received[0].content_type.as_deref(), Some("application/json"));
    let sent: serde_json::Value = serde_json::from_str(&received[0].body).unwrap();
    assert_eq!(sent, payload);
}

#[tokio::test]
async fn delete_a_record() {
    let _ = env_logger::builder().is_test(true).try_init();

    let (base_url, received) = serve(204, "");
    let client = Client::new(&base_url, "/cohort").unwrap();

    client.delete(Collection::Events, 3).await.unwrap();

    let received = received.lock().unwrap().clone();
    assert_eq!(received[0].method, "DELETE");
    assert_eq!(received[0].path, "/api/cohort/events/3");
}

#[tokio::test]
async fn http_errors() {
    let _ = env_logger::builder().is_test(true).try_init();

    let (base_url, received) = serve(404, r#"{"error": "not found"}"#);
    let client = Client::new(&base_url, "/cohort").unwrap();

    assert!(client.list(Collection::Guests).await.is_err());
    assert!(client.get(Collection::Events, 1).await.is_err());
    assert!(client.delete(Collection::Events, 1).await.is_err());
    assert!(client.create(Collection::Events, serde_json::json!({})).await.is_err());

    // A single attempt per call
    assert_eq!(received.lock().unwrap().len(), 4);
}

#[tokio::test]
async fn unexpected_payloads() {
    let _ = env_logger::builder().is_test(true).try_init();

    let (base_url, _) = serve(200, r#"{"items": []}"#);
    let client = Client::new(&base_url, "/cohort").unwrap();
    assert!(client.list(Collection::Rsvps).await.is_err());
}

#[tokio::test]
async fn unreachable_server() {
    let _ = env_logger::builder().is_test(true).try_init();

    // Nothing listens there once the listener is dropped
    let addr = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap()
    };
    let client = Client::new(format!("http://{}/api", addr), "/cohort").unwrap();
    assert!(client.list(Collection::Events).await.is_err());
}
