//! Media locations for sign videos and illustrations.

use crate::record::{SignId, SignRecord};

/// Public bucket holding Signbank gloss videos.
pub const SIGNBANK_MEDIA_URL: &str =
    "https://nzsl-signbank-media-production.s3.amazonaws.com/glossvideo";

/// Relative path of a locally mirrored video.
#[must_use]
pub fn local_video_path(id: SignId, file: &str) -> String {
    format!("video/{id}/{file}")
}

/// Remote URL of a video in the public bucket.
#[must_use]
pub fn remote_video_url(id: SignId, file: &str) -> String {
    format!("{SIGNBANK_MEDIA_URL}/{id}/{file}")
}

/// Relative path of an illustration.
#[must_use]
pub fn image_path(file: &str) -> String {
    format!("image/{file}")
}

/// Where to find the media for one sign.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MediaLinks {
    /// Local video path.
    pub local_video: Option<String>,
    /// Remote video URL.
    pub remote_video: Option<String>,
    /// Illustration path.
    pub image: Option<String>,
}

impl MediaLinks {
    /// Media links for a record. Absent files give `None`.
    #[must_use]
    pub fn for_record(record: &SignRecord) -> Self {
        let id = record.nzsl_id;
        Self {
            local_video: record.video.as_deref().map(|f| local_video_path(id, f)),
            remote_video: record.video.as_deref().map(|f| remote_video_url(id, f)),
            image: record.image.as_deref().map(image_path),
        }
    }
}
