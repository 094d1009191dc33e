use kanvas_api::{build_router, state::AppState};
use kanvas_config::{
    AppSettings, DatabaseSettings, JwtSettings, SessionSettings, Settings,
};
use kanvas_db::{StoreHandle, connect, indexes::ensure_schema};
use mongodb::Database;
use std::net::SocketAddr;
use tokio::net::TcpListener;

const DEFAULT_TEST_DB_URL: &str = "mongodb://localhost:27019";

/// A running test application, optionally backed by its own MongoDB database.
pub struct TestApp {
    pub addr: SocketAddr,
    pub base_url: String,
    pub db: Option<Database>,
    pub settings: Settings,
    pub client: reqwest::Client,
}

impl TestApp {
    /// Spawn a test server connected to the test MongoDB.
    ///
    /// Requires a running MongoDB at localhost:27019.
    /// Set KANVAS__DATABASE__URL env var to override the connection string.
    /// Each test gets a unique database name for isolation.
    pub async fn spawn() -> Self {
        let mut settings = test_settings();
        let url = std::env::var("KANVAS__DATABASE__URL")
            .unwrap_or_else(|_| DEFAULT_TEST_DB_URL.to_string());
        settings.database.url = Some(url.clone());
        settings.database.name = format!("kanvas_test_{}", uuid::Uuid::new_v4().simple());

        let db = connect(&url, &settings.database)
            .await
            .expect("Failed to connect to test MongoDB");
        ensure_schema(&db).await.expect("Failed to initialize store");

        Self::start(StoreHandle::Connected(db.clone()), settings, Some(db)).await
    }

    /// Spawn a test server with no database configured.
    pub async fn spawn_degraded() -> Self {
        let settings = test_settings();
        let store = kanvas_db::resolve_store(&settings.database).await;
        Self::start(store, settings, None).await
    }

    /// Spawn a test server after resolving the store from `mutator`-adjusted
    /// settings, exactly as the binary does at startup.
    pub async fn spawn_resolved(mutator: impl FnOnce(&mut Settings)) -> Self {
        let mut settings = test_settings();
        mutator(&mut settings);
        let store = kanvas_db::resolve_store(&settings.database).await;
        Self::start(store, settings, None).await
    }

    async fn start(store: StoreHandle, settings: Settings, db: Option<Database>) -> Self {
        let app = build_router(AppState::new(store, settings.clone()));

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind to random port");
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        let base_url = format!("http://{}", addr);
        let client = reqwest::Client::builder()
            .build()
            .expect("Failed to build HTTP client");

        Self {
            addr,
            base_url,
            db,
            settings,
            client,
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

impl Drop for TestApp {
    fn drop(&mut self) {
        if let Some(db) = self.db.clone() {
            // Best effort cleanup: drop the test database
            tokio::spawn(async move {
                let _ = db.drop().await;
            });
        }
    }
}

pub fn test_settings() -> Settings {
    Settings {
        app: AppSettings {
            host: "127.0.0.1".to_string(),
            port: 0,
            cors_origins: vec![],
        },
        database: DatabaseSettings {
            url: None,
            name: "kanvas_test".to_string(),
            max_pool_size: Some(5),
            min_pool_size: Some(1),
            server_selection_timeout_secs: 2,
        },
        jwt: JwtSettings {
            secret: "test-secret-key-for-jwt-signing-minimum-32-chars".to_string(),
            access_token_ttl_secs: 3600,
            issuer: "kingdom-kanvas".to_string(),
        },
        session: SessionSettings {
            designer_domains: vec!["kingdomkanvas.com".to_string()],
        },
    }
}
