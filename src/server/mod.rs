pub mod handlers;

use crate::{
    config::{Config, DashScopeConfig},
    dashscope::DashScopeClient,
    error::{QigenError, Result},
    history::HistoryManager,
};
use actix_web::{web, App, HttpServer};

/// Shared per-process state: the startup-injected DashScope config (and
/// the client built from it when complete), the history backend, and the
/// env file that `POST /config` writes to.
pub struct AppState {
    pub dashscope: DashScopeConfig,
    pub client: Option<DashScopeClient>,
    pub history: HistoryManager,
    pub env_file: String,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let client = match DashScopeClient::new(config.dashscope.clone()) {
            Ok(client) => Some(client),
            Err(e) => {
                log::warn!("DashScope not configured yet: {}", e);
                None
            }
        };

        Self {
            dashscope: config.dashscope.clone(),
            client,
            history: HistoryManager::new(&config),
            env_file: config.env_file,
        }
    }

    /// The client, or the ConfigError naming the first missing variable.
    pub fn require_client(&self) -> Result<&DashScopeClient> {
        self.client.as_ref().ok_or_else(|| {
            let status = self.dashscope.status();
            let missing = if !status.has_key {
                "DASHSCOPE_API_KEY"
            } else {
                "DASHSCOPE_API_URL"
            };
            QigenError::ConfigError(format!("{} is not set", missing))
        })
    }
}

pub fn app_config(cfg: &mut web::ServiceConfig) {
    cfg.route("/config", web::get().to(handlers::get_config))
        .route("/config", web::post().to(handlers::save_config))
        .route("/generate", web::post().to(handlers::generate))
        .route("/history", web::get().to(handlers::get_history))
        .route("/history", web::delete().to(handlers::clear_history))
        .route("/history/{id}", web::delete().to(handlers::delete_history_entry));
}

pub async fn run(config: Config) -> std::io::Result<()> {
    let port = config.port.unwrap_or(3000);
    let state = web::Data::new(AppState::new(config));

    log::info!("Listening on 0.0.0.0:{}", port);

    HttpServer::new(move || App::new().app_data(state.clone()).configure(app_config))
        .bind(("0.0.0.0", port))?
        .run()
        .await
}
