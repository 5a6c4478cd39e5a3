use poem_openapi::types::multipart::Upload;
use uuid::Uuid;

use business::domain::product::services::MediaUpload;

/// Spools a multipart part to a file under the OS temp dir so the media
/// client can upload it by path. The staged file is removed by the use
/// case once the upload succeeds.
pub async fn stage_upload(upload: Upload) -> std::io::Result<MediaUpload> {
    let file_name = upload.file_name().map(|n| n.to_string());
    // Strip any client-supplied path components from the suffix.
    let suffix = file_name
        .as_deref()
        .and_then(|n| n.rsplit(['/', '\\']).next())
        .filter(|n| !n.is_empty())
        .unwrap_or("upload.bin")
        .to_string();

    let path = std::env::temp_dir().join(format!("{}-{}", Uuid::new_v4(), suffix));
    let bytes = upload.into_vec().await?;
    tokio::fs::write(&path, bytes).await?;

    Ok(MediaUpload { path, file_name })
}

/// Removes files already spooled by [`stage_upload`] when a later part
/// fails to stage and the request aborts before reaching a use case.
pub async fn discard_staged(files: &[MediaUpload]) {
    for file in files {
        if let Err(e) = tokio::fs::remove_file(&file.path).await {
            tracing::warn!(
                "Failed to remove staged file {}: {}",
                file.path.display(),
                e
            );
        }
    }
}
