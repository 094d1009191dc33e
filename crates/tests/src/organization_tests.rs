use crate::fixtures::{seed::assert_generated_id, test_app::TestApp};
use serde_json::Value;

#[tokio::test]
async fn create_organization_returns_empty_project_list() {
    let app = TestApp::spawn().await;

    let resp = app
        .client
        .post(app.url("/api/organization"))
        .json(&serde_json::json!({ "name": "Test Church", "logo": "logo.png" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status().as_u16(), 201);

    let json: Value = resp.json().await.unwrap();
    assert_eq!(json["source"], "live");
    let org = &json["organization"];
    assert_generated_id(org["id"].as_str().unwrap(), "org");
    assert_eq!(org["name"], "Test Church");
    assert_eq!(org["logo"], "logo.png");
    assert_eq!(org["plan"], "standard");
    assert!(org["projects"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn empty_store_lists_nothing_authoritatively() {
    let app = TestApp::spawn().await;

    let json = app.list_organizations().await;
    assert_eq!(json["source"], "live");
    assert!(json["organizations"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn organizations_are_listed_by_name() {
    let app = TestApp::spawn().await;
    app.create_organization("Zion Fellowship").await;
    app.create_organization("Anchor Church").await;
    app.create_organization("Mercy Hill").await;

    let json = app.list_organizations().await;
    let names: Vec<&str> = json["organizations"]
        .as_array()
        .unwrap()
        .iter()
        .map(|o| o["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Anchor Church", "Mercy Hill", "Zion Fellowship"]);
}

#[tokio::test]
async fn pro_plan_round_trips() {
    let app = TestApp::spawn().await;

    let resp = app
        .client
        .post(app.url("/api/organization"))
        .json(&serde_json::json!({ "name": "Grace Community", "plan": "pro" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status().as_u16(), 201);
    let json: Value = resp.json().await.unwrap();
    let id = json["organization"]["id"].as_str().unwrap().to_string();

    let resp = app
        .client
        .get(app.url(&format!("/api/organization/{}", id)))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status().as_u16(), 200);
    let json: Value = resp.json().await.unwrap();
    assert_eq!(json["organization"]["plan"], "pro");
}

#[tokio::test]
async fn blank_name_is_rejected() {
    let app = TestApp::spawn().await;

    let resp = app
        .client
        .post(app.url("/api/organization"))
        .json(&serde_json::json!({ "name": "   " }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status().as_u16(), 422);

    let json: Value = resp.json().await.unwrap();
    assert_eq!(json["error"], "validation");
}

#[tokio::test]
async fn unknown_organization_is_not_found() {
    let app = TestApp::spawn().await;

    let resp = app
        .client
        .get(app.url("/api/organization/org_0_missing"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status().as_u16(), 404);
}

#[tokio::test]
async fn organization_includes_its_projects_newest_first() {
    let app = TestApp::spawn().await;
    let org = app.create_organization("Grace Community").await;
    let org_id = org["id"].as_str().unwrap();

    app.create_project(org_id, "First Series").await;
    tokio::time::sleep(std::time::Duration::from_millis(5)).await;
    app.create_project(org_id, "Second Series").await;

    let resp = app
        .client
        .get(app.url(&format!("/api/organization/{}", org_id)))
        .send()
        .await
        .unwrap();
    let json: Value = resp.json().await.unwrap();
    let titles: Vec<&str> = json["organization"]["projects"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["title"].as_str().unwrap())
        .collect();
    assert_eq!(titles, vec!["Second Series", "First Series"]);
}
