//! End-to-end tests of the todo REST API over a real TCP listener.

#![allow(clippy::panic)]

use std::sync::Arc;

use reqwest::{Client, Response, StatusCode, header};
use serde_json::{Value, json};

use todo_gateway::api;
use todo_gateway::app_state::AppState;
use todo_gateway::domain::TodoStore;

struct TestServer {
    base: String,
    client: Client,
}

impl TestServer {
    async fn start(store: TodoStore) -> Self {
        let app = api::build_router().with_state(AppState::new(Arc::new(store)));
        let Ok(listener) = tokio::net::TcpListener::bind("127.0.0.1:0").await else {
            panic!("bind failed");
        };
        let Ok(addr) = listener.local_addr() else {
            panic!("no local addr");
        };
        tokio::spawn(async move {
            let _ = axum::serve(listener, app).await;
        });
        Self {
            base: format!("http://{addr}"),
            client: Client::new(),
        }
    }

    async fn seeded() -> Self {
        Self::start(TodoStore::seeded()).await
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base)
    }

    async fn get(&self, path: &str) -> Response {
        let Ok(resp) = self.client.get(self.url(path)).send().await else {
            panic!("GET {path} failed");
        };
        resp
    }

    async fn send_json(&self, method: reqwest::Method, path: &str, body: &Value) -> Response {
        let Ok(resp) = self
            .client
            .request(method.clone(), self.url(path))
            .json(body)
            .send()
            .await
        else {
            panic!("{method} {path} failed");
        };
        resp
    }

    async fn delete(&self, path: &str) -> Response {
        let Ok(resp) = self.client.delete(self.url(path)).send().await else {
            panic!("DELETE {path} failed");
        };
        resp
    }

    async fn list(&self) -> Value {
        body(self.get("/api/todoitem").await).await
    }
}

async fn body(resp: Response) -> Value {
    let Ok(value) = resp.json::<Value>().await else {
        panic!("response body is not JSON");
    };
    value
}

fn seed_list() -> Value {
    json!([
        { "id": 1, "title": "Pick up groceries" },
        { "id": 2, "title": "Finish invoice report" },
    ])
}

#[tokio::test]
async fn list_after_start_returns_seed_records() {
    let server = TestServer::seeded().await;
    let resp = server.get("/api/todoitem").await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body(resp).await, seed_list());
}

#[tokio::test]
async fn unseeded_store_lists_nothing() {
    let server = TestServer::start(TodoStore::new()).await;
    assert_eq!(server.list().await, json!([]));
}

#[tokio::test]
async fn get_existing_item() {
    let server = TestServer::seeded().await;
    let resp = server.get("/api/todoitem/2").await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        body(resp).await,
        json!({ "id": 2, "title": "Finish invoice report" })
    );
}

#[tokio::test]
async fn get_missing_item_returns_null() {
    let server = TestServer::seeded().await;
    let resp = server.get("/api/todoitem/99").await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body(resp).await, Value::Null);
}

#[tokio::test]
async fn get_with_non_integer_id_is_rejected() {
    let server = TestServer::seeded().await;
    let resp = server.get("/api/todoitem/abc").await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn create_echoes_input_and_stores_untitled_record() {
    let server = TestServer::seeded().await;
    let input = json!({ "id": 50, "title": "Water plants" });

    let resp = server
        .send_json(reqwest::Method::POST, "/api/todoitem", &input)
        .await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let location = resp
        .headers()
        .get(header::LOCATION)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    assert_eq!(location.as_deref(), Some("/api/todoitem/3"));
    assert_eq!(body(resp).await, input);

    let stored = body(server.get("/api/todoitem/3").await).await;
    assert_eq!(stored, json!({ "id": 3, "title": null }));
    assert_eq!(body(server.get("/api/todoitem/50").await).await, Value::Null);
}

#[tokio::test]
async fn create_with_empty_object_grows_store() {
    let server = TestServer::seeded().await;
    let resp = server
        .send_json(reqwest::Method::POST, "/api/todoitem", &json!({}))
        .await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let list = server.list().await;
    let Some(items) = list.as_array() else {
        panic!("list is not an array");
    };
    assert_eq!(items.len(), 3);
    assert_eq!(items.last(), Some(&json!({ "id": 3, "title": null })));
}

#[tokio::test]
async fn create_into_empty_store_assigns_id_one() {
    let server = TestServer::start(TodoStore::new()).await;
    let resp = server
        .send_json(reqwest::Method::POST, "/api/todoitem", &json!({}))
        .await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    assert_eq!(server.list().await, json!([{ "id": 1, "title": null }]));
}

#[tokio::test]
async fn put_replaces_item() {
    let server = TestServer::seeded().await;
    let updated = json!({ "id": 1, "title": "Pick up groceries and milk" });

    let resp = server
        .send_json(reqwest::Method::PUT, "/api/todoitem/1", &updated)
        .await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body(resp).await, updated);
    assert_eq!(body(server.get("/api/todoitem/1").await).await, updated);
}

#[tokio::test]
async fn patch_is_a_full_overwrite() {
    let server = TestServer::seeded().await;
    let resp = server
        .send_json(reqwest::Method::PATCH, "/api/todoitem/2", &json!({ "id": 2 }))
        .await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        body(server.get("/api/todoitem/2").await).await,
        json!({ "id": 2, "title": null })
    );
}

#[tokio::test]
async fn mismatch_and_not_found_look_identical() {
    let server = TestServer::seeded().await;

    let mismatch = server
        .send_json(
            reqwest::Method::PUT,
            "/api/todoitem/1",
            &json!({ "id": 2, "title": "x" }),
        )
        .await;
    assert_eq!(mismatch.status(), StatusCode::NOT_FOUND);
    let mismatch_body = body(mismatch).await;

    let missing = server
        .send_json(
            reqwest::Method::PATCH,
            "/api/todoitem/7",
            &json!({ "id": 7, "title": "x" }),
        )
        .await;
    assert_eq!(missing.status(), StatusCode::NOT_FOUND);
    let missing_body = body(missing).await;

    assert_eq!(mismatch_body, missing_body);
    assert_eq!(
        mismatch_body,
        json!({ "error": { "code": 2001, "message": "todo item not found" } })
    );
    assert_eq!(server.list().await, seed_list());
}

#[tokio::test]
async fn delete_removes_item_and_ignores_absent_ids() {
    let server = TestServer::seeded().await;

    let resp = server.delete("/api/todoitem/1").await;
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);
    assert_eq!(body(server.get("/api/todoitem/1").await).await, Value::Null);

    let resp = server.delete("/api/todoitem/1").await;
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);
    let resp = server.delete("/api/todoitem/404").await;
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    assert_eq!(
        server.list().await,
        json!([{ "id": 2, "title": "Finish invoice report" }])
    );
}

#[tokio::test]
async fn health_reports_version() {
    let server = TestServer::seeded().await;
    let resp = server.get("/health").await;
    assert_eq!(resp.status(), StatusCode::OK);
    let health = body(resp).await;
    assert_eq!(health["status"], "healthy");
    assert_eq!(health["version"], env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn openapi_document_lists_todo_routes() {
    let server = TestServer::seeded().await;
    let resp = server.get("/api-docs/openapi.json").await;
    assert_eq!(resp.status(), StatusCode::OK);

    let doc = body(resp).await;
    let paths = &doc["paths"];
    for method in ["get", "post"] {
        assert!(paths["/api/todoitem"][method].is_object(), "missing {method}");
    }
    for method in ["get", "put", "patch", "delete"] {
        assert!(
            paths["/api/todoitem/{id}"][method].is_object(),
            "missing {method}"
        );
    }
    assert!(doc["components"]["schemas"]["Todo"].is_object());
}
