//! End-to-end tests of the admin client against a mocked cluster API.
//!
//! These go through the real `EsRepositoryImpl` transport so request
//! paths, bodies, basic auth and content type are checked on the wire.

use std::time::Duration;

use chrono::{DateTime, Utc};
use serde_json::{json, Map, Value};
use tokio_util::sync::CancellationToken;
use wiremock::matchers::{basic_auth, body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use opensearch_curator::enums::admin_error::AdminError;
use opensearch_curator::model::alias_action::AliasAction;
use opensearch_curator::model::configs::cluster_conn_config::ClusterConnConfig;
use opensearch_curator::model::index_info::IndexInfo;
use opensearch_curator::repository::es_repository::EsRepositoryImpl;
use opensearch_curator::service::index_admin_service::IndexAdminServiceImpl;
use opensearch_curator::traits::service::index_admin_service_trait::IndexAdminService;

const ES_ID: &str = "admin";
const ES_PW: &str = "adminpassword";

fn service_for(server: &MockServer) -> IndexAdminServiceImpl<EsRepositoryImpl> {
    let conn_config: ClusterConnConfig =
        ClusterConnConfig::new(server.uri(), ES_ID.to_string(), ES_PW.to_string(), 5);
    let repo: EsRepositoryImpl = EsRepositoryImpl::new(&conn_config).expect("client should build");
    IndexAdminServiceImpl::new(std::sync::Arc::new(repo))
}

fn cat_row(name: &str, created: DateTime<Utc>) -> Value {
    json!({
        "health": "green",
        "status": "open",
        "index": name,
        "docs.count": "1200",
        "store.size": "5.2mb",
        "creation.date.string": created.to_rfc3339()
    })
}

fn to_settings(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        _ => panic!("expected a JSON object"),
    }
}

async fn mount_listing(server: &MockServer, rows: Vec<Value>) {
    Mock::given(method("GET"))
        .and(path("/_cat/indices"))
        .and(query_param("format", "json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(Value::Array(rows)))
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_list_indices_sends_auth_and_content_type() {
    let server: MockServer = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/_cat/indices"))
        .and(query_param("format", "json"))
        .and(basic_auth(ES_ID, ES_PW))
        .and(header("content-type", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            cat_row("logs-2024.01.01", Utc::now()),
            { "index": "broken", "docs.count": "not-a-number" }
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let indices: Vec<IndexInfo> = service_for(&server)
        .list_indices(&CancellationToken::new())
        .await
        .expect("listing should succeed");

    assert_eq!(indices.len(), 2);
    assert_eq!(indices[0].name(), "logs-2024.01.01");
    assert_eq!(*indices[0].docs_count(), 1200);
    assert_eq!(indices[0].store_size(), "5.2mb");
    assert_eq!(*indices[1].docs_count(), 0);
    assert_eq!(*indices[1].create_time(), DateTime::<Utc>::UNIX_EPOCH);
}

#[tokio::test]
async fn test_delete_indices_bulk_request() {
    let server: MockServer = MockServer::start().await;

    mount_listing(
        &server,
        vec![
            cat_row("logs-a", Utc::now()),
            cat_row("metrics-a", Utc::now()),
            cat_row("logs-b", Utc::now()),
        ],
    )
    .await;

    Mock::given(method("DELETE"))
        .and(path("/logs-a,logs-b"))
        .and(basic_auth(ES_ID, ES_PW))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "acknowledged": true })))
        .expect(1)
        .mount(&server)
        .await;

    service_for(&server)
        .delete_indices(&CancellationToken::new(), "logs-*")
        .await
        .expect("delete should succeed");
}

#[tokio::test]
async fn test_delete_indices_no_match_sends_nothing() {
    let server: MockServer = MockServer::start().await;

    mount_listing(&server, vec![cat_row("logs-a", Utc::now())]).await;

    Mock::given(method("DELETE"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let err: anyhow::Error = service_for(&server)
        .delete_indices(&CancellationToken::new(), "traces-*")
        .await
        .unwrap_err();

    assert!(matches!(
        err.downcast_ref::<AdminError>(),
        Some(AdminError::NoMatch { .. })
    ));
}

#[tokio::test]
async fn test_cluster_error_text_is_surfaced() {
    let server: MockServer = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/logs-current/_rollover"))
        .respond_with(
            ResponseTemplate::new(400)
                .set_body_string(r#"{"error":{"type":"illegal_argument_exception"}}"#),
        )
        .mount(&server)
        .await;

    let err: anyhow::Error = service_for(&server)
        .rollover(
            &CancellationToken::new(),
            "logs-current",
            &to_settings(json!({ "max_age": "7d" })),
        )
        .await
        .unwrap_err();

    assert_eq!(
        err.to_string(),
        r#"failed to rollover index: {"error":{"type":"illegal_argument_exception"}}"#
    );
    assert!(matches!(
        err.downcast_ref::<AdminError>(),
        Some(AdminError::Api { status: 400, .. })
    ));
}

#[tokio::test]
async fn test_cleanup_by_age_deletes_only_old_prefixed_indices() {
    let server: MockServer = MockServer::start().await;
    let forty_days_ago: DateTime<Utc> = Utc::now() - chrono::Duration::days(40);
    let five_days_ago: DateTime<Utc> = Utc::now() - chrono::Duration::days(5);

    mount_listing(
        &server,
        vec![
            cat_row("logs-2023-01-01", forty_days_ago),
            cat_row("logs-2023-02-01", five_days_ago),
            cat_row("other-index", forty_days_ago),
        ],
    )
    .await;

    Mock::given(method("DELETE"))
        .and(path("/logs-2023-01-01"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "acknowledged": true })))
        .expect(1)
        .mount(&server)
        .await;

    service_for(&server)
        .cleanup_by_age(&CancellationToken::new(), "logs-", 30)
        .await
        .expect("cleanup should succeed");
}

#[tokio::test]
async fn test_aliases_and_reindex_bodies() {
    let server: MockServer = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/_aliases"))
        .and(body_json(json!({
            "actions": [
                { "add": { "index": "myindex-2023.01.01", "alias": "myindex-current" } },
                { "remove": { "index": "myindex-2022.12.31", "alias": "myindex-current" } }
            ]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "acknowledged": true })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/_reindex"))
        .and(body_json(json!({
            "source": { "index": "old" },
            "dest": { "index": "new" }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "created": 10 })))
        .expect(1)
        .mount(&server)
        .await;

    let service: IndexAdminServiceImpl<EsRepositoryImpl> = service_for(&server);
    let cancel: CancellationToken = CancellationToken::new();

    service
        .manage_aliases(
            &cancel,
            &[
                AliasAction::add("myindex-2023.01.01", "myindex-current"),
                AliasAction::remove("myindex-2022.12.31", "myindex-current"),
            ],
        )
        .await
        .expect("aliases should succeed");

    service
        .reindex(&cancel, "old", "new", None)
        .await
        .expect("reindex should succeed");
}

#[tokio::test]
async fn test_shrink_full_workflow() {
    let server: MockServer = MockServer::start().await;
    let ack: Value = json!({ "acknowledged": true });

    mount_listing(&server, vec![cat_row("logs-2023.10.01", Utc::now())]).await;

    Mock::given(method("POST"))
        .and(path("/logs-2023.10.01/_close"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&ack))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/logs-2023.10.01/_shrink/logs-2023.10.01-shrink"))
        .and(body_json(json!({
            "settings": {
                "number_of_shards": 1,
                "number_of_replicas": 1,
                "index.blocks.write": true,
                "index.number_of_replicas": 0,
                "index.number_of_shards": 1
            }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(&ack))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/logs-2023.10.01/_open"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&ack))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/logs-2023.10.01-shrink/_open"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&ack))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("PUT"))
        .and(path("/logs-2023.10.01-shrink/_settings"))
        .and(body_json(json!({
            "settings": {
                "index.number_of_replicas": 1,
                "index.blocks.write": null
            }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(&ack))
        .expect(1)
        .mount(&server)
        .await;

    service_for(&server)
        .shrink_index(
            &CancellationToken::new(),
            "logs-2023.10.01",
            "logs-2023.10.01-shrink",
            &to_settings(json!({ "number_of_shards": 1, "number_of_replicas": 1 })),
        )
        .await
        .expect("shrink should succeed");
}

#[tokio::test]
async fn test_shrink_rejected_does_not_reopen_source() {
    let server: MockServer = MockServer::start().await;

    mount_listing(&server, vec![cat_row("src", Utc::now())]).await;

    Mock::given(method("POST"))
        .and(path("/src/_close"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/src/_shrink/dst"))
        .respond_with(ResponseTemplate::new(400).set_body_string("must have a single copy"))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/src/_open"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let err: anyhow::Error = service_for(&server)
        .shrink_index(
            &CancellationToken::new(),
            "src",
            "dst",
            &to_settings(json!({ "number_of_shards": 1, "number_of_replicas": 0 })),
        )
        .await
        .unwrap_err();

    assert_eq!(
        err.to_string(),
        "shrink failed with status 400: must have a single copy"
    );
}

#[tokio::test]
async fn test_cancellation_aborts_in_flight_request() {
    let server: MockServer = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/_cat/indices"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!([]))
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&server)
        .await;

    let cancel: CancellationToken = CancellationToken::new();
    let trigger: CancellationToken = cancel.clone();

    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(100)).await;
        trigger.cancel();
    });

    let err: anyhow::Error = service_for(&server)
        .list_indices(&cancel)
        .await
        .unwrap_err();

    assert!(matches!(
        err.downcast_ref::<AdminError>(),
        Some(AdminError::Cancelled)
    ));
}

#[tokio::test]
async fn test_unreachable_cluster_is_a_transport_error() {
    let conn_config: ClusterConnConfig = ClusterConnConfig::new(
        "http://127.0.0.1:1".to_string(),
        ES_ID.to_string(),
        ES_PW.to_string(),
        2,
    );
    let repo: EsRepositoryImpl = EsRepositoryImpl::new(&conn_config).expect("client should build");
    let service: IndexAdminServiceImpl<EsRepositoryImpl> =
        IndexAdminServiceImpl::new(std::sync::Arc::new(repo));

    let err: anyhow::Error = service
        .open_index(&CancellationToken::new(), "logs-a")
        .await
        .unwrap_err();

    assert!(err.downcast_ref::<AdminError>().is_none());
}

#[test]
fn test_invalid_endpoint_is_rejected() {
    let conn_config: ClusterConnConfig =
        ClusterConnConfig::new("not a url".to_string(), String::new(), String::new(), 5);

    assert!(EsRepositoryImpl::new(&conn_config).is_err());
}
