use catalint::mcp::{CatalintMcpServer, types::VerifyCatalogParams};
use rmcp::handler::server::wrapper::Parameters;
use serde_json::json;

use crate::{
    McpTestFixture, assert_pagination, extract_tool_result_json, fixture_with_failures,
    fixture_with_many_failures,
};

fn params(fixture: &McpTestFixture, limit: Option<u32>, offset: Option<u32>) -> Parameters<VerifyCatalogParams> {
    Parameters(VerifyCatalogParams {
        project_root_path: fixture.root(),
        limit,
        offset,
    })
}

#[tokio::test]
async fn test_verify_catalog_passes() {
    let fixture = McpTestFixture::with_catalog(
        vec![
            ("en", json!({"5": "Player %d killed %s", "6": "100%% done"})),
            ("de", json!({"5": "Spieler %d erschlug %s"})),
        ],
        json!({"5": ["int", "string"], "6": []}),
    )
    .unwrap();
    let server = CatalintMcpServer::new();

    let result = server.verify_catalog(params(&fixture, None, None)).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["passed"], true);
    assert_eq!(json_result["maxId"], 6);
    assert_eq!(json_result["localeCount"], 2);
    assert_eq!(json_result["totalCount"], 0);
    assert!(json_result["items"].as_array().unwrap().is_empty());
    assert_pagination(&json_result, 0, 50, false);
}

#[tokio::test]
async fn test_verify_catalog_reports_failures() {
    let fixture = fixture_with_failures().unwrap();
    let server = CatalintMcpServer::new();

    let result = server.verify_catalog(params(&fixture, None, None)).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["passed"], false);
    assert_eq!(json_result["totalCount"], 2);
    assert_eq!(json_result["failedIdCount"], 2);

    let items = json_result["items"].as_array().unwrap();
    // Ordered by id, then locale index (en, de, fr)
    assert_eq!(items[0]["id"], 5);
    assert_eq!(items[0]["locale"], "de");
    assert_eq!(items[0]["expected"], "int string");
    assert_eq!(items[0]["found"], "%d %s %s");
    assert_eq!(
        items[0]["reason"],
        "expected 2 parameter(s) but found 3 specifier(s)"
    );
    assert!(items[0]["filePath"].as_str().unwrap().ends_with("de.json"));

    assert_eq!(items[1]["id"], 7);
    assert_eq!(items[1]["locale"], "fr");
    assert_eq!(items[1]["value"], "Ratio %d");
    assert_eq!(items[1]["reason"], "parameter 1 is float but %d expects int");
}

#[tokio::test]
async fn test_verify_catalog_pagination() {
    let fixture = fixture_with_many_failures(7).unwrap();
    let server = CatalintMcpServer::new();

    let first = extract_tool_result_json(
        &server
            .verify_catalog(params(&fixture, Some(5), None))
            .await
            .unwrap(),
    );
    assert_eq!(first["totalCount"], 7);
    assert_eq!(first["items"].as_array().unwrap().len(), 5);
    assert_pagination(&first, 0, 5, true);

    let second = extract_tool_result_json(
        &server
            .verify_catalog(params(&fixture, Some(5), Some(5)))
            .await
            .unwrap(),
    );
    assert_eq!(second["items"].as_array().unwrap().len(), 2);
    assert_eq!(second["items"][0]["id"], 6);
    assert_pagination(&second, 5, 5, false);
}

#[tokio::test]
async fn test_verify_catalog_limit_is_capped() {
    let fixture = fixture_with_many_failures(3).unwrap();
    let server = CatalintMcpServer::new();

    let result = extract_tool_result_json(
        &server
            .verify_catalog(params(&fixture, Some(1000), None))
            .await
            .unwrap(),
    );
    assert_pagination(&result, 0, 100, false);
}

#[tokio::test]
async fn test_verify_catalog_respects_config_policy() {
    let fixture = McpTestFixture::with_catalog(
        vec![
            ("en", json!({"5": "Player %d killed %s"})),
            ("de", json!({})),
        ],
        json!({"5": ["int", "string"]}),
    )
    .unwrap();
    fixture
        .write_config(&json!({ "missingLocales": "require" }))
        .unwrap();
    let server = CatalintMcpServer::new();

    let result = extract_tool_result_json(
        &server
            .verify_catalog(params(&fixture, None, None))
            .await
            .unwrap(),
    );

    assert_eq!(result["totalCount"], 1);
    assert_eq!(
        result["items"][0]["reason"],
        "no string provided but 2 parameter(s) expected"
    );
    assert!(result["items"][0].get("value").is_none());
}

#[tokio::test]
async fn test_verify_catalog_missing_signature_file_is_error() {
    let fixture = McpTestFixture::new().unwrap();
    fixture.write_locale_file("en", &json!({})).unwrap();
    let server = CatalintMcpServer::new();

    assert!(
        server
            .verify_catalog(params(&fixture, None, None))
            .await
            .is_err()
    );
}
