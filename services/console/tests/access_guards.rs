mod common;
mod http_helpers;

use axum::http::StatusCode;
use common::{app, read_json};
use http_helpers::get_as;
use tower::ServiceExt;

#[tokio::test]
async fn gestor_is_restricted_from_oscs_but_sees_partnerships() {
    let app = app();

    let response = app
        .clone()
        .oneshot(get_as(Some("GESTOR"), "/v1/views/oscs"))
        .await
        .expect("oscs");
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    let body = read_json(response).await;
    assert_eq!(body["code"], "access_restricted");
    assert_eq!(body["message"], "Acesso Restrito");
    assert_eq!(body["home"], "/");

    let response = app
        .clone()
        .oneshot(get_as(Some("GESTOR"), "/v1/views/partnerships"))
        .await
        .expect("partnerships");
    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json(response).await;
    assert_eq!(
        body["actions"],
        serde_json::json!(["CREATE_PARTNERSHIP", "RELEASE_TRANCHE", "EDIT_WORKPLAN"])
    );

    let body = read_json(
        app.clone()
            .oneshot(get_as(Some("GESTOR"), "/v1/access/check?key=/oscs"))
            .await
            .expect("check"),
    )
    .await;
    assert_eq!(body["allowed"], false);
}

#[tokio::test]
async fn master_reaches_everything() {
    let app = app();

    let response = app
        .clone()
        .oneshot(get_as(Some("MASTER"), "/v1/views/logs"))
        .await
        .expect("logs");
    assert_eq!(response.status(), StatusCode::OK);

    let body = read_json(
        app.clone()
            .oneshot(get_as(Some("MASTER"), "/v1/access/routes"))
            .await
            .expect("routes"),
    )
    .await;
    assert_eq!(body["wildcard"], true);
    assert_eq!(body["routes"], serde_json::json!(["all"]));

    let body = read_json(
        app.clone()
            .oneshot(get_as(Some("MASTER"), "/v1/access/check?key=/logs"))
            .await
            .expect("check"),
    )
    .await;
    assert_eq!(body["allowed"], true);
}

#[tokio::test]
async fn missing_role_is_unauthorized() {
    let response = app()
        .oneshot(get_as(None, "/v1/views/partnerships"))
        .await
        .expect("partnerships");
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(read_json(response).await["code"], "unauthorized");
}

#[tokio::test]
async fn blank_role_is_unauthorized() {
    let response = app()
        .oneshot(get_as(Some("  "), "/v1/access/routes"))
        .await
        .expect("routes");
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn unknown_role_only_reaches_home() {
    let app = app();

    let response = app
        .clone()
        .oneshot(get_as(Some("AUDITOR"), "/v1/views/dashboard"))
        .await
        .expect("dashboard");
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .clone()
        .oneshot(get_as(Some("AUDITOR"), "/v1/views/amendments"))
        .await
        .expect("amendments");
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let body = read_json(
        app.clone()
            .oneshot(get_as(Some("AUDITOR"), "/v1/access/routes"))
            .await
            .expect("routes"),
    )
    .await;
    assert_eq!(body["wildcard"], false);
    assert_eq!(body["routes"], serde_json::json!(["/"]));

    let body = read_json(
        app.clone()
            .oneshot(get_as(Some("AUDITOR"), "/v1/access/navigation"))
            .await
            .expect("navigation"),
    )
    .await;
    let visible: Vec<&str> = body["items"]
        .as_array()
        .expect("items")
        .iter()
        .filter(|item| item["visible"] == true)
        .filter_map(|item| item["path"].as_str())
        .collect();
    assert_eq!(visible, vec!["/"]);
}

#[tokio::test]
async fn navigation_reflects_role_tables() {
    let body = read_json(
        app()
            .oneshot(get_as(Some("SELECTION_COMMISSION"), "/v1/access/navigation"))
            .await
            .expect("navigation"),
    )
    .await;
    let items = body["items"].as_array().expect("items");
    assert_eq!(items.len(), 13);
    let visible: Vec<&str> = items
        .iter()
        .filter(|item| item["visible"] == true)
        .filter_map(|item| item["path"].as_str())
        .collect();
    assert!(visible.contains(&"/chamamento"));
    assert!(visible.contains(&"/pmis"));
    assert!(!visible.contains(&"/partnerships"));
    assert!(!visible.contains(&"/users"));
}

#[tokio::test]
async fn users_listing_requires_manage_users() {
    let app = app();

    let response = app
        .clone()
        .oneshot(get_as(Some("GESTOR"), "/v1/users"))
        .await
        .expect("users");
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let body = read_json(
        app.clone()
            .oneshot(get_as(Some("GESTOR"), "/v1/access/actions/MANAGE_USERS"))
            .await
            .expect("action"),
    )
    .await;
    assert_eq!(body["allowed"], false);

    let response = app
        .clone()
        .oneshot(get_as(Some("MASTER"), "/v1/users"))
        .await
        .expect("users");
    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json(response).await;
    assert_eq!(body["items"].as_array().map(Vec::len), Some(2));
    assert_eq!(body["items"][0]["role_label"], "Gestor da Parceria");

    let body = read_json(
        app.clone()
            .oneshot(get_as(Some("MASTER"), "/v1/users?search=bruno"))
            .await
            .expect("search"),
    )
    .await;
    assert_eq!(body["items"].as_array().map(Vec::len), Some(1));
    assert_eq!(body["items"][0]["id"], "u2");
}

#[tokio::test]
async fn action_checks_follow_capability_table() {
    let app = app();

    let body = read_json(
        app.clone()
            .oneshot(get_as(Some("TECH_FINANCIAL"), "/v1/access/actions/APPROVE_ACCOUNTABILITY"))
            .await
            .expect("approve"),
    )
    .await;
    assert_eq!(body["allowed"], true);

    let body = read_json(
        app.clone()
            .oneshot(get_as(Some("OSC_USER"), "/v1/access/actions/RELEASE_TRANCHE"))
            .await
            .expect("tranche"),
    )
    .await;
    assert_eq!(body["allowed"], false);

    let response = app
        .clone()
        .oneshot(get_as(Some("MASTER"), "/v1/access/actions/DELETE_EVERYTHING"))
        .await
        .expect("unknown");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(read_json(response).await["code"], "not_found");
}

#[tokio::test]
async fn key_checks_validate_input() {
    let app = app();

    let response = app
        .clone()
        .oneshot(get_as(Some("GESTOR"), "/v1/access/check?key="))
        .await
        .expect("empty");
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(read_json(response).await["code"], "validation_error");

    let body = read_json(
        app.clone()
            .oneshot(get_as(Some("GESTOR"), "/v1/access/check?key=VIEW_AMENDMENTS"))
            .await
            .expect("capability key"),
    )
    .await;
    assert_eq!(body["allowed"], true);

    let body = read_json(
        app.clone()
            .oneshot(get_as(Some("GESTOR"), "/v1/access/check?key=/nowhere"))
            .await
            .expect("unknown key"),
    )
    .await;
    assert_eq!(body["allowed"], false);
}
