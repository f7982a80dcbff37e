use lokey::mcp::types::FormatInsertionParams;
use rmcp::handler::server::wrapper::Parameters;
use serde_json::json;

use crate::{McpTestFixture, extract_tool_result_json, fixture_basic, test_server};

fn params(fixture: &McpTestFixture, file_path: &str, selection: &str) -> FormatInsertionParams {
    FormatInsertionParams {
        project_root_path: fixture.root(),
        file_path: file_path.to_string(),
        selection: selection.to_string(),
    }
}

// ============================================================================
// format_insertion tests
// ============================================================================

#[tokio::test]
async fn test_format_insertion_in_controller() {
    let fixture = fixture_basic().unwrap();
    let server = test_server();

    let result = server
        .format_insertion(Parameters(params(
            &fixture,
            "app/controllers/users_controller.rb",
            "errors.not_found:  Not found",
        )))
        .await
        .unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["snippet"], "I18n.t('errors.not_found')");
    assert_eq!(json_result["cursor"], 26);
}

#[tokio::test]
async fn test_format_insertion_in_view_with_placeholder() {
    let fixture = fixture_basic().unwrap();
    let server = test_server();

    let result = server
        .format_insertion(Parameters(params(
            &fixture,
            "app/views/home/index.html.erb",
            "greetings.welcome:  Welcome, %{name}!",
        )))
        .await
        .unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["snippet"], "t('greetings.welcome', )");
    assert_eq!(json_result["cursor"], 23);
}

#[tokio::test]
async fn test_format_insertion_strips_view_namespace() {
    let fixture = McpTestFixture::with_locales(vec![(
        "users.en.yml",
        "en:\n  users:\n    show:\n      title: Profile\n",
    )])
    .unwrap();
    let server = test_server();

    let result = server
        .format_insertion(Parameters(params(
            &fixture,
            "app/views/users/show.html.erb",
            "users.show.title:  Profile",
        )))
        .await
        .unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["snippet"], "t('title')");
}

#[tokio::test]
async fn test_format_insertion_bare_key_uses_cached_value() {
    let fixture = fixture_basic().unwrap();
    let server = test_server();

    let result = server
        .format_insertion(Parameters(params(
            &fixture,
            "app/helpers/application_helper.rb",
            "greetings.welcome",
        )))
        .await
        .unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["snippet"], "t('greetings.welcome', )");
}

#[tokio::test]
async fn test_format_insertion_respects_config() {
    let fixture = fixture_basic().unwrap();
    fixture
        .write_config(&json!({
            "quoteStyle": "double",
            "namespace": "Namespace"
        }))
        .unwrap();
    let server = test_server();

    let result = server
        .format_insertion(Parameters(params(
            &fixture,
            "lib/tasks/report.rake",
            "greetings.bye:  Goodbye",
        )))
        .await
        .unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["snippet"], "Namespace.t(\"greetings.bye\")");
}

#[tokio::test]
async fn test_format_insertion_empty_selection_is_error() {
    let fixture = fixture_basic().unwrap();
    let server = test_server();

    let result = server
        .format_insertion(Parameters(params(&fixture, "app/models/user.rb", "  ")))
        .await;

    assert!(result.is_err());
}
