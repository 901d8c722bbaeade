/// Integration tests for metadata resolution against a mocked directory API
use nlytical_meta_api::config::Config;
use nlytical_meta_api::directory_client::DirectoryClient;
use nlytical_meta_api::resolver::{
    MetadataResolver, SiteDefaults, ERROR_DESCRIPTION, ERROR_TITLE, ROBOTS_INDEX, ROBOTS_NOINDEX,
};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Helper function to create test config
fn create_test_config(directory_api_base_url: String) -> Config {
    Config {
        directory_api_base_url,
        http_timeout_secs: 5,
        ..Config::default()
    }
}

fn create_resolver(base_url: String) -> MetadataResolver {
    let config = create_test_config(base_url);
    let client = DirectoryClient::new(&config).unwrap();
    MetadataResolver::new(client, SiteDefaults::from_config(&config))
}

async fn mock_detail(server: &MockServer, service_id: &str, response: ResponseTemplate) {
    Mock::given(method("POST"))
        .and(path("/api/get-servicedetail"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({ "service_id": service_id })))
        .respond_with(response)
        .expect(1)
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_meta_title_only_uses_default_description_and_image() {
    let mock_server = MockServer::start().await;
    mock_detail(
        &mock_server,
        "abc123",
        ResponseTemplate::new(200)
            .set_body_json(json!({ "serviceDetail": { "meta_title": "Best Coffee" } })),
    )
    .await;

    let resolver = create_resolver(mock_server.uri());
    let meta = resolver.resolve("coffee-shop", "abc123").await;

    assert_eq!(meta.title, "Best Coffee | Nlytical");
    assert_eq!(
        meta.description,
        "Explore the details of coffee-shop with ID abc123."
    );
    assert_eq!(meta.image_url(), resolver.defaults().default_image);
    assert_eq!(meta.robots, ROBOTS_INDEX);
    assert_eq!(meta.canonical_url(), "https://nlyticalapp.com/service/abc123");
}

#[tokio::test]
async fn test_full_detail_is_mapped() {
    let mock_server = MockServer::start().await;
    mock_detail(
        &mock_server,
        "88",
        ResponseTemplate::new(200).set_body_json(json!({
            "status": true,
            "serviceDetail": {
                "meta_title": "Green Garage",
                "meta_description": "Car repairs in town",
                "cover_image": "https://cdn.nlytical.test/covers/88.jpg"
            }
        })),
    )
    .await;

    let meta = create_resolver(mock_server.uri())
        .resolve("green-garage", "88")
        .await;

    assert_eq!(meta.title, "Green Garage | Nlytical");
    assert_eq!(meta.description, "Car repairs in town");
    assert_eq!(meta.image_url(), "https://cdn.nlytical.test/covers/88.jpg");
    assert_eq!(meta.twitter.images[0], "https://cdn.nlytical.test/covers/88.jpg");
}

#[tokio::test]
async fn test_missing_service_detail_falls_back() {
    let mock_server = MockServer::start().await;
    mock_detail(
        &mock_server,
        "404",
        ResponseTemplate::new(200).set_body_json(json!({ "status": false })),
    )
    .await;

    let meta = create_resolver(mock_server.uri())
        .resolve("ghost", "404")
        .await;

    assert_eq!(meta.title, "Service - 404");
    assert_eq!(meta.description, "Explore the details of ghost with ID 404.");
    assert_eq!(meta.robots, ROBOTS_INDEX);
}

#[tokio::test]
async fn test_invalid_cover_image_uses_default() {
    let mock_server = MockServer::start().await;
    mock_detail(
        &mock_server,
        "7",
        ResponseTemplate::new(200).set_body_json(json!({
            "serviceDetail": { "meta_title": "Bakery", "cover_image": "http://[not-an-ip]/c.png" }
        })),
    )
    .await;

    let resolver = create_resolver(mock_server.uri());
    let meta = resolver.resolve("bakery", "7").await;

    assert_eq!(meta.title, "Bakery | Nlytical");
    assert_eq!(meta.image_url(), resolver.defaults().default_image);
}

#[tokio::test]
async fn test_server_error_yields_noindex_metadata() {
    let mock_server = MockServer::start().await;
    mock_detail(
        &mock_server,
        "abc123",
        ResponseTemplate::new(500).set_body_string("Internal Server Error"),
    )
    .await;

    let meta = create_resolver(mock_server.uri())
        .resolve("coffee-shop", "abc123")
        .await;

    assert_eq!(meta.title, ERROR_TITLE);
    assert_eq!(meta.description, ERROR_DESCRIPTION);
    assert_eq!(meta.robots, ROBOTS_NOINDEX);
    assert_eq!(meta.canonical_url(), "https://nlyticalapp.com/service/abc123");
}

#[tokio::test]
async fn test_non_json_body_yields_noindex_metadata() {
    let mock_server = MockServer::start().await;
    mock_detail(
        &mock_server,
        "abc123",
        ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"),
    )
    .await;

    let meta = create_resolver(mock_server.uri())
        .resolve("coffee-shop", "abc123")
        .await;

    assert_eq!(meta.title, "Error");
    assert_eq!(meta.robots, "noindex, nofollow");
}

#[tokio::test]
async fn test_null_body_yields_noindex_metadata() {
    let mock_server = MockServer::start().await;
    mock_detail(
        &mock_server,
        "abc123",
        ResponseTemplate::new(200)
            .insert_header("content-type", "application/json")
            .set_body_string("null"),
    )
    .await;

    let meta = create_resolver(mock_server.uri())
        .resolve("coffee-shop", "abc123")
        .await;

    assert_eq!(meta.title, ERROR_TITLE);
    assert_eq!(meta.description, ERROR_DESCRIPTION);
    assert_eq!(meta.robots, ROBOTS_NOINDEX);
}

#[tokio::test]
async fn test_array_body_falls_back_to_generated_fields() {
    let mock_server = MockServer::start().await;
    mock_detail(
        &mock_server,
        "12",
        ResponseTemplate::new(200).set_body_json(json!([])),
    )
    .await;

    let meta = create_resolver(mock_server.uri())
        .resolve("florist", "12")
        .await;

    assert_eq!(meta.title, "Service - 12");
    assert_eq!(meta.robots, ROBOTS_INDEX);
}

#[tokio::test]
async fn test_whitespace_meta_title_is_kept() {
    let mock_server = MockServer::start().await;
    mock_detail(
        &mock_server,
        "9",
        ResponseTemplate::new(200).set_body_json(json!({
            "serviceDetail": { "meta_title": " ", "meta_description": "  " }
        })),
    )
    .await;

    let meta = create_resolver(mock_server.uri())
        .resolve("kiosk", "9")
        .await;

    assert_eq!(meta.title, "  | Nlytical");
    assert_eq!(meta.description, "  ");
    assert_eq!(meta.robots, ROBOTS_INDEX);
}

#[tokio::test]
async fn test_network_error_yields_noindex_metadata() {
    // Nothing listens on port 1
    let meta = create_resolver("http://127.0.0.1:1".to_string())
        .resolve("coffee-shop", "abc123")
        .await;

    assert_eq!(meta.title, "Error");
    assert_eq!(
        meta.description,
        "An error occurred while fetching the service details."
    );
    assert_eq!(meta.robots, "noindex, nofollow");
    assert!(!meta.image_url().is_empty());
}

#[tokio::test]
async fn test_repeated_resolution_is_stable() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/get-servicedetail"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "serviceDetail": { "meta_title": "Same" } })),
        )
        .expect(2)
        .mount(&mock_server)
        .await;

    let resolver = create_resolver(mock_server.uri());
    let first = resolver.resolve("same", "1").await;
    let second = resolver.resolve("same", "1").await;
    assert_eq!(first, second);
}
