use cls_extended::mcp::{ClsMcpServer, types::GetConfigParams};
use rmcp::handler::server::wrapper::Parameters;
use serde_json::json;

use crate::{McpTestFixture, extract_tool_result_json};

// ============================================================================
// get_config tests
// ============================================================================

#[tokio::test]
async fn test_get_config_defaults() {
    let fixture = McpTestFixture::new().unwrap();
    let server = ClsMcpServer::new();

    let params = Parameters(GetConfigParams {
        project_root_path: fixture.root(),
    });

    let result = server.get_config(params).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["fromFile"], false);
    assert_eq!(json_result["config"]["functionName"], "tw");
    assert_eq!(json_result["config"]["sourcemap"], true);
    assert_eq!(json_result["config"]["enableVariants"], false);
    assert_eq!(json_result["config"]["breakpoints"]["md"], "768px");
    assert!(json_result["config"]["includes"].is_array());
}

#[tokio::test]
async fn test_get_config_from_clsrc() {
    let fixture = McpTestFixture::with_config(&json!({
        "breakpoints": { "tablet": "640px" },
        "enableVariants": true,
        "functionName": "cls"
    }))
    .unwrap();
    let server = ClsMcpServer::new();

    let params = Parameters(GetConfigParams {
        project_root_path: fixture.root(),
    });

    let result = server.get_config(params).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["fromFile"], true);
    assert_eq!(json_result["config"]["functionName"], "cls");
    assert_eq!(json_result["config"]["enableVariants"], true);
    assert_eq!(json_result["config"]["breakpoints"], json!({ "tablet": "640px" }));
}

#[tokio::test]
async fn test_get_config_from_subdirectory() {
    let fixture = McpTestFixture::with_config(&json!({ "sourcemap": false })).unwrap();
    let sub_dir = fixture.root_path().join("src").join("components");
    std::fs::create_dir_all(&sub_dir).unwrap();
    let server = ClsMcpServer::new();

    let params = Parameters(GetConfigParams {
        project_root_path: sub_dir.to_string_lossy().to_string(),
    });

    let result = server.get_config(params).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["fromFile"], true);
    assert_eq!(json_result["config"]["sourcemap"], false);
}

#[tokio::test]
async fn test_get_config_invalid_file_is_error() {
    let fixture = McpTestFixture::with_config(&json!({ "functionName": "not valid" })).unwrap();
    let server = ClsMcpServer::new();

    let params = Parameters(GetConfigParams {
        project_root_path: fixture.root(),
    });

    let error = server.get_config(params).await.unwrap_err();
    assert!(error.message.contains("Failed to load config"));
}
