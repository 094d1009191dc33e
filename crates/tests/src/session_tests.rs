use crate::fixtures::test_app::TestApp;
use serde_json::Value;

#[tokio::test]
async fn google_sign_in_is_a_designer() {
    let app = TestApp::spawn_degraded().await;

    let session = app.sign_in("google", None).await;
    assert!(!session.access_token.is_empty());
    assert_eq!(session.user["name"], "Alex Johnson");
    assert_eq!(session.user["email"], "alex@kingdomkanvas.com");
    assert_eq!(session.user["role"], "designer");
}

#[tokio::test]
async fn github_sign_in_is_a_designer() {
    let app = TestApp::spawn_degraded().await;

    let session = app.sign_in("github", None).await;
    assert_eq!(session.user["name"], "Mike Ross");
    assert_eq!(session.user["role"], "designer");
}

#[tokio::test]
async fn email_role_follows_domain() {
    let app = TestApp::spawn_degraded().await;

    let designer = app.sign_in("email", Some("Jess@KingdomKanvas.com")).await;
    assert_eq!(designer.user["role"], "designer");
    assert_eq!(designer.user["name"], "Jess");

    let client = app.sign_in("email", Some("dave@gracecommunity.com")).await;
    assert_eq!(client.user["role"], "client");
    assert_eq!(client.user["name"], "Partner User");

    let lookalike = app
        .sign_in("email", Some("someone@kingdomkanvas.com.evil.test"))
        .await;
    assert_eq!(lookalike.user["role"], "client");
}

#[tokio::test]
async fn unknown_provider_falls_back_to_guest() {
    let app = TestApp::spawn_degraded().await;

    let session = app.sign_in("myspace", None).await;
    assert_eq!(session.user["name"], "Guest");
    assert_eq!(session.user["role"], "client");

    let session = app.sign_in("email", None).await;
    assert_eq!(session.user["name"], "Guest");
}

#[tokio::test]
async fn me_returns_bearer_session_user() {
    let app = TestApp::spawn_degraded().await;
    let session = app.sign_in_designer().await;

    let resp = app
        .auth_get("/api/session/me", &session.access_token)
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status().as_u16(), 200);

    let json: Value = resp.json().await.unwrap();
    assert_eq!(json["email"], "alex@kingdomkanvas.com");
    assert_eq!(json["role"], "designer");
}

#[tokio::test]
async fn me_without_session_is_unauthorized() {
    let app = TestApp::spawn_degraded().await;

    let resp = app.client.get(app.url("/api/session/me")).send().await.unwrap();
    assert_eq!(resp.status().as_u16(), 401);

    let resp = app
        .auth_get("/api/session/me", "not-a-token")
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status().as_u16(), 401);
}

#[tokio::test]
async fn cookie_session_survives_until_sign_out() {
    let app = TestApp::spawn_degraded().await;
    let client = reqwest::Client::builder()
        .cookie_store(true)
        .build()
        .unwrap();

    let resp = client
        .post(app.url("/api/session/sign-in"))
        .json(&serde_json::json!({ "provider": "github" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status().as_u16(), 200);

    let resp = client.get(app.url("/api/session/me")).send().await.unwrap();
    assert_eq!(resp.status().as_u16(), 200);
    let json: Value = resp.json().await.unwrap();
    assert_eq!(json["name"], "Mike Ross");

    let resp = client
        .post(app.url("/api/session/sign-out"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status().as_u16(), 204);

    let resp = client.get(app.url("/api/session/me")).send().await.unwrap();
    assert_eq!(resp.status().as_u16(), 401);
}
