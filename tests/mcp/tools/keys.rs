use lokey::mcp::types::{LookupKeysParams, RefreshFileParams, RefreshKeysParams};
use rmcp::handler::server::wrapper::Parameters;

use crate::{
    EN_YML, McpTestFixture, assert_pagination, extract_tool_result_json, fixture_basic,
    fixture_with_broken_file, item_paths, test_server,
};

fn lookup_params(fixture: &McpTestFixture, query: Option<&str>) -> LookupKeysParams {
    LookupKeysParams {
        project_root_path: fixture.root(),
        query: query.map(str::to_string),
        refresh: None,
        limit: None,
        offset: None,
    }
}

fn refresh_file_params(fixture: &McpTestFixture, file_path: &str) -> RefreshFileParams {
    RefreshFileParams {
        project_root_path: fixture.root(),
        file_path: file_path.to_string(),
    }
}

// ============================================================================
// lookup_keys tests
// ============================================================================

#[tokio::test]
async fn test_lookup_scans_on_cache_miss() {
    let fixture = fixture_basic().unwrap();
    let server = test_server();

    let result = server
        .lookup_keys(Parameters(lookup_params(&fixture, None)))
        .await
        .unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["source"], "refreshed");
    assert_eq!(json_result["project"], fixture.project_name());
    assert_eq!(json_result["totalCount"], 3);
    assert_eq!(
        item_paths(&json_result),
        vec!["greetings.welcome", "greetings.bye", "errors.not_found"]
    );

    let welcome = &json_result["items"][0];
    assert_eq!(welcome["value"], "Welcome, %{name}!");
    assert_eq!(welcome["hasInterpolation"], true);
    assert_eq!(welcome["display"], "greetings.welcome:  Welcome, %{name}!");
    assert_eq!(json_result["items"][1]["hasInterpolation"], false);
}

#[tokio::test]
async fn test_lookup_uses_cache_on_second_call() {
    let fixture = fixture_basic().unwrap();
    let server = test_server();

    server
        .lookup_keys(Parameters(lookup_params(&fixture, None)))
        .await
        .unwrap();

    // Changes on disk are not seen until a refresh
    fixture
        .write_locale_file("en.yml", "en:\n  only: One\n")
        .unwrap();

    let result = server
        .lookup_keys(Parameters(lookup_params(&fixture, None)))
        .await
        .unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["source"], "cache");
    assert_eq!(json_result["totalCount"], 3);
}

#[tokio::test]
async fn test_lookup_refresh_flag_rescans() {
    let fixture = fixture_basic().unwrap();
    let server = test_server();

    server
        .lookup_keys(Parameters(lookup_params(&fixture, None)))
        .await
        .unwrap();
    fixture
        .write_locale_file("en.yml", "en:\n  only: One\n")
        .unwrap();

    let mut params = lookup_params(&fixture, None);
    params.refresh = Some(true);
    let result = server.lookup_keys(Parameters(params)).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["source"], "refreshed");
    assert_eq!(item_paths(&json_result), vec!["only"]);
}

#[tokio::test]
async fn test_lookup_query_matches_all_terms() {
    let fixture = fixture_basic().unwrap();
    let server = test_server();

    let result = server
        .lookup_keys(Parameters(lookup_params(&fixture, Some("GREET welcome"))))
        .await
        .unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["totalCount"], 3);
    assert_eq!(json_result["matchCount"], 1);
    assert_eq!(item_paths(&json_result), vec!["greetings.welcome"]);
}

#[tokio::test]
async fn test_lookup_query_matches_values() {
    let fixture = fixture_basic().unwrap();
    let server = test_server();

    let result = server
        .lookup_keys(Parameters(lookup_params(&fixture, Some("goodbye"))))
        .await
        .unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(item_paths(&json_result), vec!["greetings.bye"]);
}

#[tokio::test]
async fn test_lookup_pagination() {
    let fixture = fixture_basic().unwrap();
    let server = test_server();

    let mut params = lookup_params(&fixture, None);
    params.limit = Some(2);
    let result = server.lookup_keys(Parameters(params)).await.unwrap();
    let first_page = extract_tool_result_json(&result);

    assert_pagination(&first_page, 0, 2, true);
    assert_eq!(
        item_paths(&first_page),
        vec!["greetings.welcome", "greetings.bye"]
    );

    let mut params = lookup_params(&fixture, None);
    params.limit = Some(2);
    params.offset = Some(2);
    let result = server.lookup_keys(Parameters(params)).await.unwrap();
    let second_page = extract_tool_result_json(&result);

    assert_pagination(&second_page, 2, 2, false);
    assert_eq!(item_paths(&second_page), vec!["errors.not_found"]);
}

#[tokio::test]
async fn test_lookup_skips_unparsable_file() {
    let fixture = fixture_with_broken_file().unwrap();
    let server = test_server();

    let result = server
        .lookup_keys(Parameters(lookup_params(&fixture, None)))
        .await
        .unwrap();
    let json_result = extract_tool_result_json(&result);

    let warnings = json_result["warnings"].as_array().unwrap();
    assert_eq!(warnings.len(), 1);
    assert!(warnings[0].as_str().unwrap().contains("broken.yml"));
    assert_eq!(json_result["totalCount"], 3);
}

#[tokio::test]
async fn test_lookup_without_locales_dir_is_empty() {
    let fixture = McpTestFixture::new().unwrap();
    let server = test_server();

    let result = server
        .lookup_keys(Parameters(lookup_params(&fixture, None)))
        .await
        .unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["totalCount"], 0);
    assert!(json_result["items"].as_array().unwrap().is_empty());
    assert_pagination(&json_result, 0, 50, false);
}

// ============================================================================
// refresh_keys tests
// ============================================================================

#[tokio::test]
async fn test_refresh_keys_counts() {
    let fixture = McpTestFixture::with_locales(vec![
        ("en.yml", EN_YML),
        ("users.en.yml", "en:\n  users:\n    show:\n      title: Profile\n"),
    ])
    .unwrap();
    let server = test_server();

    let result = server
        .refresh_keys(Parameters(RefreshKeysParams {
            project_root_path: fixture.root(),
        }))
        .await
        .unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["keyCount"], 4);
    assert_eq!(json_result["filesScanned"], 2);
    assert!(json_result["warnings"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_refresh_keys_ignores_non_matching_files() {
    let fixture = fixture_basic().unwrap();
    fixture
        .write_locale_file("README.md", "not a locale file\n")
        .unwrap();
    let server = test_server();

    let result = server
        .refresh_keys(Parameters(RefreshKeysParams {
            project_root_path: fixture.root(),
        }))
        .await
        .unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["filesScanned"], 1);
}

// ============================================================================
// refresh_file tests
// ============================================================================

#[tokio::test]
async fn test_refresh_file_without_cache() {
    let fixture = fixture_basic().unwrap();
    let server = test_server();

    let result = server
        .refresh_file(Parameters(refresh_file_params(
            &fixture,
            "config/locales/en.yml",
        )))
        .await
        .unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["status"], "noCache");
    assert!(json_result.get("fileKeys").is_none());
}

#[tokio::test]
async fn test_refresh_file_updates_namespaces_of_file() {
    let fixture = McpTestFixture::with_locales(vec![
        ("en.yml", EN_YML),
        ("users.en.yml", "en:\n  users:\n    show:\n      title: Profile\n"),
    ])
    .unwrap();
    let server = test_server();

    server
        .refresh_keys(Parameters(RefreshKeysParams {
            project_root_path: fixture.root(),
        }))
        .await
        .unwrap();

    fixture
        .write_locale_file(
            "users.en.yml",
            "en:\n  users:\n    show:\n      title: Your profile\n      edit: Edit\n",
        )
        .unwrap();

    let result = server
        .refresh_file(Parameters(refresh_file_params(
            &fixture,
            "config/locales/users.en.yml",
        )))
        .await
        .unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["status"], "updated");
    assert_eq!(json_result["fileKeys"], 2);
    assert_eq!(json_result["total"], 5);

    let result = server
        .lookup_keys(Parameters(lookup_params(&fixture, Some("users."))))
        .await
        .unwrap();
    let lookup = extract_tool_result_json(&result);

    assert_eq!(lookup["source"], "cache");
    assert_eq!(
        item_paths(&lookup),
        vec!["users.show.title", "users.show.edit"]
    );
    assert_eq!(lookup["items"][0]["value"], "Your profile");
}

#[tokio::test]
async fn test_refresh_file_outside_locales() {
    let fixture = fixture_basic().unwrap();
    fixture
        .write_file("app/views/users/show.html.erb", "<h1></h1>\n")
        .unwrap();
    let server = test_server();

    server
        .refresh_keys(Parameters(RefreshKeysParams {
            project_root_path: fixture.root(),
        }))
        .await
        .unwrap();

    let result = server
        .refresh_file(Parameters(refresh_file_params(
            &fixture,
            "app/views/users/show.html.erb",
        )))
        .await
        .unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["status"], "notTranslationFile");
}

#[tokio::test]
async fn test_refresh_file_parse_failure_keeps_cache() {
    let fixture = fixture_basic().unwrap();
    let server = test_server();

    server
        .refresh_keys(Parameters(RefreshKeysParams {
            project_root_path: fixture.root(),
        }))
        .await
        .unwrap();

    fixture
        .write_locale_file("en.yml", "en:\n  greetings: [unclosed\n")
        .unwrap();

    let result = server
        .refresh_file(Parameters(refresh_file_params(
            &fixture,
            "config/locales/en.yml",
        )))
        .await
        .unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["status"], "parseFailed");
    assert!(json_result["message"].as_str().unwrap().contains("en.yml"));

    let result = server
        .lookup_keys(Parameters(lookup_params(&fixture, None)))
        .await
        .unwrap();
    assert_eq!(extract_tool_result_json(&result)["totalCount"], 3);
}
