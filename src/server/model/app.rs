use std::sync::Arc;

use sea_orm::DatabaseConnection;
use tokio::sync::RwLock;

use crate::server::admin::site::AdminSite;

/// Shared application state handed to every request handler.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    /// Admin view registry. Views cache their augmented column lists for
    /// the process lifetime, so the registry is shared behind a lock.
    pub admin: Arc<RwLock<AdminSite>>,
}

impl AppState {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            db,
            admin: Arc::new(RwLock::new(AdminSite::setup())),
        }
    }
}
