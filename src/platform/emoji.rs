//! `POST /api/v4/emoji`: custom emoji creation.

use async_trait::async_trait;
use reqwest::header::AUTHORIZATION;
use reqwest::multipart::{Form, Part};
use tracing::{debug, instrument};

use super::{EmojiSink, PlatformClient, Principal, UploadError};
use crate::fetch::FetchedAsset;

const EMOJI_PATH: &str = "/api/v4/emoji";

/// Statuses the platform uses to acknowledge a created emoji.
pub const UPLOAD_SUCCESS_STATUSES: [u16; 2] = [200, 201];

/// Picks the upload filename extension from the declared media type.
///
/// Only GIF and JPEG are distinguished; everything else, including a missing
/// type, is sent as `.png`. Media type parameters and case are ignored.
#[must_use]
pub fn extension_for_media_type(media_type: Option<&str>) -> &'static str {
    let essence = media_type
        .and_then(|v| v.split(';').next())
        .map(|v| v.trim().to_ascii_lowercase());

    match essence.as_deref() {
        Some("image/gif") => ".gif",
        Some("image/jpeg") => ".jpg",
        _ => ".png",
    }
}

fn emoji_metadata(name: &str, creator_id: &str) -> String {
    serde_json::json!({ "name": name, "creator_id": creator_id }).to_string()
}

#[async_trait]
impl EmojiSink for PlatformClient {
    #[instrument(skip(self, asset, principal), fields(bytes = asset.bytes.len()))]
    async fn upload(
        &self,
        name: &str,
        asset: FetchedAsset,
        principal: &Principal,
    ) -> Result<(), UploadError> {
        let filename = format!(
            "{name}{}",
            extension_for_media_type(asset.media_type.as_deref())
        );
        let image = Part::bytes(asset.bytes)
            .file_name(filename)
            .mime_str("application/octet-stream")
            .map_err(|source| UploadError::Request {
                name: name.to_string(),
                source,
            })?;
        let form = Form::new()
            .text("emoji", emoji_metadata(name, &principal.id))
            .part("image", image);

        let url = self.server.endpoint(EMOJI_PATH);
        let response = self
            .client
            .inner()
            .post(&url)
            .header(AUTHORIZATION, self.token.bearer())
            .multipart(form)
            .send()
            .await
            .map_err(|e| UploadError::from_reqwest(name, e))?;

        let status = response.status().as_u16();
        if UPLOAD_SUCCESS_STATUSES.contains(&status) {
            debug!(status, "emoji created");
            return Ok(());
        }

        let body = response.text().await.unwrap_or_default();
        Err(UploadError::from_status(name, status, body))
    }
}
