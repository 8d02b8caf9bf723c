pub mod config;
pub mod modules;
pub mod services;

use crate::config::settings::AppConfig;

#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
}
