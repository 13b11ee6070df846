use std::path::PathBuf;

/// Public endpoint that returns `{ "message": "<image url>", "status": "success" }`
pub const DOG_API_ENDPOINT: &str = "https://dog.ceo/api/breeds/image/random";

/// Runtime configuration for the app
///
/// There is no config file: defaults cover the desktop app and tests
/// override individual fields with the `with_*` builders.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// URL of the random image endpoint
    pub endpoint: String,
    /// SQLite file backing the key-value store
    pub storage_path: PathBuf,
    /// User agent sent with every HTTP request
    pub user_agent: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: DOG_API_ENDPOINT.to_string(),
            storage_path: default_storage_path(),
            user_agent: format!("DoggyApp/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

#[cfg(test)]
impl Config {
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn with_storage_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.storage_path = path.into();
        self
    }
}

/// Get the path where the store database should live
///
/// - Linux: ~/.local/share/doggy-app/doggy_app.db
/// - macOS: ~/Library/Application Support/doggy-app/doggy_app.db
/// - Windows: %APPDATA%\doggy-app\doggy_app.db
fn default_storage_path() -> PathBuf {
    let mut path = dirs::data_dir()
        .or_else(dirs::home_dir)
        .unwrap_or_else(|| PathBuf::from("."));

    path.push("doggy-app");
    path.push("doggy_app.db");
    path
}
