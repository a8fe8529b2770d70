use serde::de::{self, DeserializeOwned, Deserializer};
use serde::{Deserialize, Serialize};

/// Review state of a post.
///
/// Serialized with the labels the stored records carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum PostStatus {
    #[default]
    #[serde(rename = "Pendente")]
    Pending,
    #[serde(rename = "Aprovado")]
    Approved,
    #[serde(rename = "Rejeitado")]
    Rejected,
    #[serde(rename = "Revisar")]
    NeedsRevision,
}

/// Media kind of a post.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PostType {
    #[default]
    Image,
    Video,
}

/// Post entity - a single schedulable social-media content item.
///
/// Deserialization always goes through [`StoredPost`], so every `Post`
/// obtained from text is default-filled and normalized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "StoredPost")]
pub struct Post {
    pub id: String,
    /// Free-text theme, also used as a generation prompt.
    pub topic: String,
    pub caption: String,
    /// Embedded image data URL, or empty.
    pub image_url: String,
    /// ISO `YYYY-MM-DD`, or empty when unscheduled.
    pub scheduled_date: String,
    pub hashtags: Vec<String>,
    pub status: PostStatus,
    pub feedback_comments: String,
    pub post_type: PostType,
    /// Embedded video data URL; always empty for image posts.
    pub uploaded_video_data_url: String,
}

impl Post {
    /// Clear the payload that does not belong to the post's type.
    pub fn normalize(&mut self) {
        if self.post_type == PostType::Image {
            self.uploaded_video_data_url.clear();
        }
    }
}

/// Shape of a post record as found in storage.
///
/// Every field except `id` may be missing. The legacy `videoUrl` field is
/// accepted and dropped.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredPost {
    pub id: String,
    #[serde(default)]
    pub topic: Option<String>,
    #[serde(default)]
    pub caption: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub scheduled_date: Option<String>,
    #[serde(default)]
    pub hashtags: Option<Vec<String>>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub status: Option<PostStatus>,
    #[serde(default)]
    pub feedback_comments: Option<String>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub post_type: Option<PostType>,
    #[serde(default)]
    pub uploaded_video_data_url: Option<String>,
    #[serde(default, rename = "videoUrl")]
    pub legacy_video_url: Option<serde_json::Value>,
}

impl From<StoredPost> for Post {
    fn from(stored: StoredPost) -> Self {
        if stored.legacy_video_url.is_some() {
            tracing::debug!(post_id = %stored.id, "Dropping legacy videoUrl field");
        }

        let mut post = Post {
            id: stored.id,
            topic: stored.topic.unwrap_or_default(),
            caption: stored.caption.unwrap_or_default(),
            image_url: stored.image_url.unwrap_or_default(),
            scheduled_date: stored.scheduled_date.unwrap_or_default(),
            hashtags: stored.hashtags.unwrap_or_default(),
            status: stored.status.unwrap_or_default(),
            feedback_comments: stored.feedback_comments.unwrap_or_default(),
            post_type: stored.post_type.unwrap_or_default(),
            uploaded_video_data_url: stored.uploaded_video_data_url.unwrap_or_default(),
        };
        post.normalize();
        post
    }
}

/// Create/update request from the post editor.
///
/// A missing (or empty) `id` means "create".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PartialPost {
    #[serde(
        deserialize_with = "blank_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub topic: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheduled_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hashtags: Option<Vec<String>>,
    #[serde(
        deserialize_with = "blank_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub status: Option<PostStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feedback_comments: Option<String>,
    #[serde(
        deserialize_with = "blank_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub post_type: Option<PostType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uploaded_video_data_url: Option<String>,
}

impl From<&Post> for PartialPost {
    fn from(post: &Post) -> Self {
        Self {
            id: Some(post.id.clone()),
            topic: Some(post.topic.clone()),
            caption: Some(post.caption.clone()),
            image_url: Some(post.image_url.clone()),
            scheduled_date: Some(post.scheduled_date.clone()),
            hashtags: Some(post.hashtags.clone()),
            status: Some(post.status),
            feedback_comments: Some(post.feedback_comments.clone()),
            post_type: Some(post.post_type),
            uploaded_video_data_url: Some(post.uploaded_video_data_url.clone()),
        }
    }
}

/// Treat `null` and `""` as absent; anything else must parse as `T`.
fn blank_as_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    match Option::<serde_json::Value>::deserialize(deserializer)? {
        None | Some(serde_json::Value::Null) => Ok(None),
        Some(serde_json::Value::String(s)) if s.is_empty() => Ok(None),
        Some(value) => T::deserialize(value).map(Some).map_err(de::Error::custom),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_stored_post_fills_defaults() {
        let post: Post = serde_json::from_value(json!({
            "id": "1717000000000",
            "topic": "Launch",
            "caption": "Hi",
            "scheduledDate": "2024-06-01",
            "hashtags": ["#a"]
        }))
        .unwrap();

        assert_eq!(post.image_url, "");
        assert_eq!(post.status, PostStatus::Pending);
        assert_eq!(post.feedback_comments, "");
        assert_eq!(post.post_type, PostType::Image);
        assert_eq!(post.uploaded_video_data_url, "");
    }

    #[test]
    fn test_blank_status_and_type_fall_back() {
        let post: Post = serde_json::from_value(json!({
            "id": "7",
            "status": "",
            "postType": null,
            "imageUrl": null
        }))
        .unwrap();

        assert_eq!(post.status, PostStatus::Pending);
        assert_eq!(post.post_type, PostType::Image);
        assert_eq!(post.image_url, "");
    }

    #[test]
    fn test_legacy_video_url_is_dropped() {
        let post: Post = serde_json::from_value(json!({
            "id": "1",
            "postType": "video",
            "videoUrl": "https://example.com/old.mp4",
            "uploadedVideoDataUrl": "data:video/mp4;base64,AAAA"
        }))
        .unwrap();

        let json = serde_json::to_value(&post).unwrap();
        assert!(json.get("videoUrl").is_none());
        assert_eq!(post.uploaded_video_data_url, "data:video/mp4;base64,AAAA");
    }

    #[test]
    fn test_image_post_never_keeps_video_payload() {
        let post: Post = serde_json::from_value(json!({
            "id": "1",
            "postType": "image",
            "uploadedVideoDataUrl": "data:video/mp4;base64,AAAA"
        }))
        .unwrap();

        assert_eq!(post.uploaded_video_data_url, "");
    }

    #[test]
    fn test_unknown_status_is_rejected() {
        let result = serde_json::from_value::<Post>(json!({ "id": "1", "status": "Publicado" }));
        assert!(result.is_err());
    }

    #[test]
    fn test_status_labels() {
        assert_eq!(
            serde_json::to_value(PostStatus::NeedsRevision).unwrap(),
            json!("Revisar")
        );
        assert_eq!(
            serde_json::from_value::<PostStatus>(json!("Aprovado")).unwrap(),
            PostStatus::Approved
        );
    }

    #[test]
    fn test_partial_post_treats_empty_id_as_create() {
        let patch: PartialPost =
            serde_json::from_value(json!({ "id": "", "topic": "Launch" })).unwrap();
        assert_eq!(patch.id, None);
        assert_eq!(patch.topic.as_deref(), Some("Launch"));
    }
}
