use gloo_storage::Storage;

/// Configuration constants for the application
pub struct Config;

impl Config {
    /// Base URL of the comment API when no override is stored
    pub const DEFAULT_API_BASE_URL: &'static str = "http://127.0.0.1:5000";

    /// Path of the comment listing, relative to the base URL
    pub const COMMENTS_PATH: &'static str = "/";

    /// localStorage key holding an API base URL override
    pub const API_BASE_URL_KEY: &'static str = "api_base_url";

    /// Number of words shown per topic in the word-frequency charts
    pub const TOP_WORDS_PER_TOPIC: usize = 5;

    /// Maximum rows rendered in the comment table
    pub const TABLE_ROW_LIMIT: usize = 200;

    /// Delay before charts re-render after the window stops resizing
    pub const RESIZE_DEBOUNCE_MS: u32 = 150;

    /// Palette cycled through by pie slices
    pub const PIE_COLORS: [&'static str; 4] = ["#0088FE", "#00C49F", "#FFBB28", "#FF8042"];

    /// Returns the API base URL, preferring a value saved in localStorage
    pub fn api_base_url() -> String {
        gloo_storage::LocalStorage::get::<String>(Self::API_BASE_URL_KEY)
            .ok()
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| Self::DEFAULT_API_BASE_URL.to_string())
    }
}
