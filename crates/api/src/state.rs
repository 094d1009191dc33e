use kanvas_config::Settings;
use kanvas_db::StoreHandle;
use kanvas_services::{Catalog, SessionService};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub settings: Settings,
    pub catalog: Arc<Catalog>,
    pub sessions: Arc<SessionService>,
}

impl AppState {
    pub fn new(store: StoreHandle, settings: Settings) -> Self {
        let catalog = Arc::new(Catalog::new(store));
        let sessions = Arc::new(SessionService::new(
            settings.jwt.clone(),
            settings.session.clone(),
        ));

        Self {
            settings,
            catalog,
            sessions,
        }
    }
}
