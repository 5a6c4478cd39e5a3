use serde::{Deserialize, Serialize};

/// Opaque identifier assigned by the media host.
/// Needed later to request deletion of the hosted asset.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AssetId(String);

impl AssetId {
    /// Creates a new AssetId from any type that can be converted into a String.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the inner string as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for AssetId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for AssetId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for AssetId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// One hosted image: the public URL plus the media-host id required to
/// delete the asset when it is replaced or its product removed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetRef {
    pub id: AssetId,
    pub url: String,
}

impl AssetRef {
    pub fn new(id: impl Into<AssetId>, url: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            url: url.into(),
        }
    }

    /// Derives the asset id from a hosted URL: last path segment with the
    /// file extension stripped.
    ///
    /// Fallback for rows persisted before the id was stored alongside the
    /// URL. Loses any folder prefix the media host may put in its ids, so
    /// prefer the stored id whenever one exists.
    pub fn from_url(url: impl Into<String>) -> Self {
        let url = url.into();
        let segment = url.rsplit('/').next().unwrap_or("");
        let id = segment.split('.').next().unwrap_or("").to_string();
        Self {
            id: AssetId::new(id),
            url,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn should_derive_id_from_hosted_url() {
        let asset = AssetRef::from_url("https://media.example.com/v1/store/abc123xyz.jpg");
        assert_eq!(asset.id.as_str(), "abc123xyz");
        assert_eq!(asset.url, "https://media.example.com/v1/store/abc123xyz.jpg");
    }

    #[test]
    fn should_derive_id_when_url_has_no_extension() {
        let asset = AssetRef::from_url("https://media.example.com/store/abc123xyz");
        assert_eq!(asset.id.as_str(), "abc123xyz");
    }

    #[test]
    fn should_keep_only_first_dot_segment_of_file_name() {
        let asset = AssetRef::from_url("https://media.example.com/store/photo.min.png");
        assert_eq!(asset.id.as_str(), "photo");
    }

    #[test]
    fn should_prefer_stored_id_over_derivation() {
        let asset = AssetRef::new("catalog/abc123xyz", "https://media.example.com/abc123xyz.jpg");
        assert_eq!(asset.id.as_str(), "catalog/abc123xyz");
    }

    #[test]
    fn should_display_asset_id() {
        let id = AssetId::new("abc123");
        assert_eq!(format!("{}", id), "abc123");
    }

    proptest! {
        #[test]
        fn derived_id_matches_file_stem(stem in "[a-zA-Z0-9_-]{1,32}", ext in "[a-z]{2,4}") {
            let asset = AssetRef::from_url(format!("https://media.example.com/store/{stem}.{ext}"));
            prop_assert_eq!(asset.id.as_str(), stem.as_str());
        }
    }
}
