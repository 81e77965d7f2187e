//! User-Agent string shared by every outgoing request.
//!
//! Image CDNs and the platform API both see the same identifying header.

/// Project URL for User-Agent identification (good citizenship; RFC 9308).
const PROJECT_UA_URL: &str = "https://github.com/formatCvt/mattermost-emoji-uploader";

/// Default User-Agent for fetch and platform requests.
#[must_use]
pub(crate) fn default_user_agent() -> String {
    let version = env!("CARGO_PKG_VERSION");
    format!("emoji-importer/{version} (+{PROJECT_UA_URL})")
}
