use reqwest::Client;

/// Shared media-host HTTP client configuration.
pub struct MediaClient {
    pub client: Client,
    pub api_key: String,
    pub base_url: String,
    pub folder: String,
}

impl MediaClient {
    pub fn new(api_key: String, base_url: String, folder: String) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .unwrap_or_default();

        Self {
            client,
            api_key,
            base_url,
            folder,
        }
    }

    /// Builds the authorization header value.
    pub fn auth_header(&self) -> String {
        format!("Bearer {}", self.api_key)
    }

    /// Returns the image upload endpoint URL.
    pub fn upload_url(&self) -> String {
        format!("{}/image/upload", self.base_url)
    }

    /// Returns the image destroy endpoint URL.
    pub fn destroy_url(&self) -> String {
        format!("{}/image/destroy", self.base_url)
    }
}
