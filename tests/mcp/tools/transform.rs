use cls_extended::mcp::{ClsMcpServer, types::TransformSourceParams};
use rmcp::handler::server::wrapper::Parameters;
use serde_json::{Value, json};

use crate::{McpTestFixture, extract_tool_result_json};

// ============================================================================
// transform_source tests
// ============================================================================

#[tokio::test]
async fn test_transform_source_rewrites() {
    let server = ClsMcpServer::new();

    let params = Parameters(TransformSourceParams {
        source: r#"<div className={tw("p-4", { md: "p-6 p-8" })} />"#.to_string(),
        id: Some("src/Card.tsx".to_string()),
        project_root_path: None,
    });

    let result = server.transform_source(params).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["changed"], true);
    assert_eq!(
        json_result["code"],
        r#"<div className={"p-4 md:p-6 md:p-8"} />"#
    );
    assert_eq!(json_result["callCount"], 1);
    assert_eq!(json_result["warnings"], json!([]));

    let map: Value = serde_json::from_str(json_result["map"].as_str().unwrap()).unwrap();
    assert_eq!(map["version"], 3);
    assert_eq!(map["sources"], json!(["src/Card.tsx"]));
}

#[tokio::test]
async fn test_transform_source_unchanged() {
    let server = ClsMcpServer::new();
    let source = "export const x = 1;";

    let params = Parameters(TransformSourceParams {
        source: source.to_string(),
        id: None,
        project_root_path: None,
    });

    let result = server.transform_source(params).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["changed"], false);
    assert_eq!(json_result["code"], source);
    assert_eq!(json_result["map"], Value::Null);
}

#[tokio::test]
async fn test_transform_source_unknown_breakpoint_warning() {
    let server = ClsMcpServer::new();

    let params = Parameters(TransformSourceParams {
        source: "const a = 1;\nconst b = tw(\"p-4\", { xxl: \"p-6\" });".to_string(),
        id: Some("a.tsx".to_string()),
        project_root_path: None,
    });

    let result = server.transform_source(params).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["code"], "const a = 1;\nconst b = \"p-4\";");
    let warnings = json_result["warnings"].as_array().unwrap();
    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0]["rule"], "unknown-breakpoint");
    assert_eq!(warnings[0]["message"], "Unknown breakpoint: xxl");
    assert_eq!(warnings[0]["filePath"], "a.tsx");
    assert_eq!(warnings[0]["line"], 2);
    assert_eq!(warnings[0]["col"], 11);
}

#[tokio::test]
async fn test_transform_source_uses_project_config() {
    let fixture = McpTestFixture::with_config(&json!({
        "breakpoints": { "tablet": "640px" },
        "sourcemap": false
    }))
    .unwrap();
    let server = ClsMcpServer::new();

    let params = Parameters(TransformSourceParams {
        source: r#"tw("a", { tablet: "b", md: "c" })"#.to_string(),
        id: None,
        project_root_path: Some(fixture.root()),
    });

    let result = server.transform_source(params).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["code"], r#""a tablet:b""#);
    assert_eq!(json_result["map"], Value::Null);
    assert_eq!(json_result["warnings"][0]["message"], "Unknown breakpoint: md");
}
