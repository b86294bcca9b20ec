use catalint::mcp::{
    CatalintMcpServer,
    types::{GetConfigParams, GetLocalesParams},
};
use rmcp::handler::server::wrapper::Parameters;
use serde_json::json;

use crate::{McpTestFixture, extract_tool_result_json};

// ============================================================================
// get_config tests
// ============================================================================

#[tokio::test]
async fn test_get_config_defaults() {
    let fixture = McpTestFixture::new().unwrap();
    let server = CatalintMcpServer::new();

    let params = Parameters(GetConfigParams {
        project_root_path: fixture.root(),
    });

    let result = server.get_config(params).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["config"]["messagesRoot"], "./messages");
    assert_eq!(json_result["config"]["signaturesFile"], "./signatures.json");
    assert_eq!(json_result["config"]["primaryLocale"], "en");
    assert_eq!(json_result["config"]["missingLocales"], "skip");
    assert!(json_result["config"]["maxId"].is_null());
    assert_eq!(json_result["fromFile"], false);
}

#[tokio::test]
async fn test_get_config_from_catalintrc() {
    let fixture = McpTestFixture::new().unwrap();

    fixture
        .write_config(&json!({
            "messagesRoot": "lang",
            "primaryLocale": "de",
            "locales": ["de", "en"],
            "maxId": 900,
            "missingLocales": "require"
        }))
        .unwrap();

    let server = CatalintMcpServer::new();

    let params = Parameters(GetConfigParams {
        project_root_path: fixture.root(),
    });

    let result = server.get_config(params).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["fromFile"], true);
    assert_eq!(json_result["config"]["messagesRoot"], "lang");
    assert_eq!(json_result["config"]["primaryLocale"], "de");
    assert_eq!(json_result["config"]["locales"], json!(["de", "en"]));
    assert_eq!(json_result["config"]["maxId"], 900);
    assert_eq!(json_result["config"]["missingLocales"], "require");
}

#[tokio::test]
async fn test_get_config_invalid_file_is_error() {
    let fixture = McpTestFixture::new().unwrap();
    fixture.write_config(&json!({ "maxId": 0 })).unwrap();

    let server = CatalintMcpServer::new();
    let params = Parameters(GetConfigParams {
        project_root_path: fixture.root(),
    });

    assert!(server.get_config(params).await.is_err());
}

// ============================================================================
// get_locales tests
// ============================================================================

#[tokio::test]
async fn test_get_locales_primary_first() {
    let fixture = McpTestFixture::with_catalog(
        vec![
            ("fr", json!({"1": "Salut"})),
            ("en", json!({"1": "Hi", "2": "Bye"})),
            ("de", json!({"1": "Hallo", "2": "Tschüss", "3": null})),
        ],
        json!({}),
    )
    .unwrap();

    let server = CatalintMcpServer::new();
    let params = Parameters(GetLocalesParams {
        project_root_path: fixture.root(),
    });

    let result = server.get_locales(params).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["primaryLocale"], "en");
    let locales = json_result["locales"].as_array().unwrap();
    let names: Vec<&str> = locales
        .iter()
        .map(|l| l["locale"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["en", "de", "fr"]);

    assert_eq!(locales[0]["index"], 0);
    assert_eq!(locales[0]["messageCount"], 2);
    assert_eq!(locales[1]["messageCount"], 3);
    assert!(
        locales[0]["filePath"]
            .as_str()
            .unwrap()
            .ends_with("en.json")
    );
}

#[tokio::test]
async fn test_get_locales_configured_order() {
    let fixture = McpTestFixture::with_catalog(
        vec![
            ("en", json!({"1": "Hi"})),
            ("de", json!({"1": "Hallo"})),
            ("ja", json!({"1": "やあ"})),
        ],
        json!({}),
    )
    .unwrap();
    fixture
        .write_config(&json!({ "locales": ["en", "ko", "de"] }))
        .unwrap();

    let server = CatalintMcpServer::new();
    let params = Parameters(GetLocalesParams {
        project_root_path: fixture.root(),
    });

    let result = server.get_locales(params).await.unwrap();
    let json_result = extract_tool_result_json(&result);
    let locales = json_result["locales"].as_array().unwrap();

    assert_eq!(locales.len(), 4);
    assert_eq!(locales[1]["locale"], "ko");
    assert!(locales[1]["filePath"].is_null());
    assert_eq!(locales[1]["messageCount"], 0);
    // Files outside the configured order are listed without an index
    assert_eq!(locales[3]["locale"], "ja");
    assert!(locales[3]["index"].is_null());
}

#[tokio::test]
async fn test_get_locales_empty_messages_dir() {
    let fixture = McpTestFixture::new().unwrap();
    let server = CatalintMcpServer::new();

    let params = Parameters(GetLocalesParams {
        project_root_path: fixture.root(),
    });

    let result = server.get_locales(params).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    let locales = json_result["locales"].as_array().unwrap();
    assert_eq!(locales.len(), 1);
    assert_eq!(locales[0]["locale"], "en");
    assert!(locales[0]["filePath"].is_null());
}
