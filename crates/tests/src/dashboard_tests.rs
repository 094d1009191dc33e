use crate::fixtures::test_app::TestApp;
use serde_json::Value;

async fn dashboard(app: &TestApp, token: &str, query: &str) -> Value {
    let resp = app
        .auth_get(&format!("/api/dashboard{}", query), token)
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status().as_u16(), 200);
    resp.json().await.unwrap()
}

fn titles(json: &Value) -> Vec<&str> {
    json["projects"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["title"].as_str().unwrap())
        .collect()
}

#[tokio::test]
async fn designer_sees_every_organization() {
    let app = TestApp::spawn_degraded().await;
    let session = app.sign_in_designer().await;

    let json = dashboard(&app, &session.access_token, "").await;
    assert_eq!(json["source"], "mock");
    assert_eq!(json["role"], "designer");
    assert_eq!(
        titles(&json),
        vec!["Summer of Hope", "Easter 2024", "Youth Night Refresh"]
    );
    assert_eq!(json["projects"][2]["orgName"], "Elevation City");
    assert!(json["projects"][0]["orgLogo"].as_str().unwrap().starts_with("https://"));
    assert_eq!(json["projects"][0]["statusLabel"], "In Production");
}

#[tokio::test]
async fn client_sees_first_organization_only() {
    let app = TestApp::spawn_degraded().await;
    let session = app.sign_in_client().await;

    let json = dashboard(&app, &session.access_token, "").await;
    assert_eq!(json["role"], "client");
    assert_eq!(titles(&json), vec!["Summer of Hope", "Easter 2024"]);
}

#[tokio::test]
async fn dashboard_filters_combine() {
    let app = TestApp::spawn_degraded().await;
    let session = app.sign_in_designer().await;

    let json = dashboard(&app, &session.access_token, "?q=EASTER").await;
    assert_eq!(titles(&json), vec!["Easter 2024"]);

    let json = dashboard(&app, &session.access_token, "?status=review").await;
    assert_eq!(titles(&json), vec!["Youth Night Refresh"]);

    let json = dashboard(&app, &session.access_token, "?mine=true").await;
    assert_eq!(titles(&json), vec!["Summer of Hope", "Easter 2024"]);

    let json = dashboard(&app, &session.access_token, "?q=hope&status=completed").await;
    assert!(titles(&json).is_empty());
}

#[tokio::test]
async fn mine_flag_accepts_common_spellings() {
    let app = TestApp::spawn_degraded().await;
    let session = app.sign_in_designer().await;

    for query in ["?mine=1", "?mine=TRUE", "?mine=yes"] {
        let json = dashboard(&app, &session.access_token, query).await;
        assert_eq!(titles(&json), vec!["Summer of Hope", "Easter 2024"], "{}", query);
    }
    for query in ["?mine=0", "?mine=false", "?mine="] {
        let json = dashboard(&app, &session.access_token, query).await;
        assert_eq!(titles(&json).len(), 3, "{}", query);
    }

    let resp = app
        .auth_get("/api/dashboard?mine=maybe", &session.access_token)
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status().as_u16(), 400);
}

#[tokio::test]
async fn dashboard_reads_live_store() {
    let app = TestApp::spawn().await;
    let org = app.create_organization("Anchor Church").await;
    app.create_project(org["id"].as_str().unwrap(), "Advent Series")
        .await;
    let session = app.sign_in_designer().await;

    let json = dashboard(&app, &session.access_token, "").await;
    assert_eq!(json["source"], "live");
    assert_eq!(titles(&json), vec!["Advent Series"]);
    assert_eq!(json["projects"][0]["orgName"], "Anchor Church");
}

#[tokio::test]
async fn dashboard_requires_session() {
    let app = TestApp::spawn_degraded().await;

    let resp = app.client.get(app.url("/api/dashboard")).send().await.unwrap();
    assert_eq!(resp.status().as_u16(), 401);
}
