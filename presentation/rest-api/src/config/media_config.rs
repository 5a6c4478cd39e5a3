use std::env;

/// Configuration for the external media host.
pub struct MediaConfig {
    pub api_key: String,
    pub base_url: String,
    pub folder: String,
}

impl MediaConfig {
    /// Environment variables:
    /// - MEDIA_API_KEY: media-host API key (required)
    /// - MEDIA_BASE_URL: media-host API base URL (required)
    /// - MEDIA_FOLDER: folder assets are uploaded into (default: "catalog")
    pub fn from_env() -> anyhow::Result<Self> {
        let api_key = env::var("MEDIA_API_KEY")?;
        let base_url = env::var("MEDIA_BASE_URL")?;
        let folder = env::var("MEDIA_FOLDER").unwrap_or_else(|_| "catalog".to_string());

        Ok(Self {
            api_key,
            base_url,
            folder,
        })
    }
}
