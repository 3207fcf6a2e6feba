//! Persisted client settings.
//!
//! Settings live in a single TOML file inside the application directory.
//! Config keys: `theme`, `server_url`.

mod errors;
mod load;
mod save;
mod types;


use crate::app_dirs;

pub use errors::ConfigError;
pub use load::{config_path, load_from_path, load_or_default};
pub use save::{save, save_to_path};
pub use types::{AppConfig, DEFAULT_SERVER_URL, ThemePreference};

/// Default filename used to store the app configuration.
pub const CONFIG_FILE_NAME: &str = "config.toml";

fn map_app_dir_error(error: app_dirs::AppDirError) -> ConfigError {
    match error {
        app_dirs::AppDirError::NoBaseDir => ConfigError::NoConfigDir,
        app_dirs::AppDirError::CreateDir { path, source } => {
            ConfigError::CreateDir { path, source }
        }
    }
}
