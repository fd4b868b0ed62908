pub mod read_tracking;

use quill_db::DbPool;

#[derive(Clone)]
pub struct AppState {
    pub db: DbPool,
    pub config: AppConfig,
}

#[derive(Clone, Debug)]
pub struct AppConfig {
    /// Posts shown per listing page.
    pub page_size: u64,
    /// Public URL of this server (e.g., https://blog.example.com).
    pub public_url: Option<String>,
}
