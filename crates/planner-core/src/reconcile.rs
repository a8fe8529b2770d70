//! Reconciliation of editor requests into full post records.
//!
//! Both functions are pure: they never look at the collection and never
//! touch storage.

use crate::domain::{PartialPost, Post, PostType};

/// Build a brand new post from a create request, default-filling every
/// omitted field. The request's `id`, if any, is ignored.
pub fn create_post(id: String, patch: PartialPost) -> Post {
    let mut post = Post {
        id,
        topic: patch.topic.unwrap_or_default(),
        caption: patch.caption.unwrap_or_default(),
        image_url: patch.image_url.unwrap_or_default(),
        scheduled_date: patch.scheduled_date.unwrap_or_default(),
        hashtags: patch.hashtags.unwrap_or_default(),
        status: patch.status.unwrap_or_default(),
        feedback_comments: patch.feedback_comments.unwrap_or_default(),
        post_type: patch.post_type.unwrap_or_default(),
        uploaded_video_data_url: patch.uploaded_video_data_url.unwrap_or_default(),
    };
    post.normalize();
    post
}

/// Merge an update request over an existing post.
///
/// Text fields override whenever present. Media payloads and feedback only
/// override when non-empty, so an editor that resubmits a blank upload
/// field keeps the stored payload. The id never changes.
pub fn merge_post(existing: &Post, patch: PartialPost) -> Post {
    let post_type = patch.post_type.unwrap_or(existing.post_type);

    let uploaded_video_data_url = match post_type {
        PostType::Video => non_empty(patch.uploaded_video_data_url)
            .unwrap_or_else(|| existing.uploaded_video_data_url.clone()),
        PostType::Image => String::new(),
    };

    let mut post = Post {
        id: existing.id.clone(),
        topic: patch.topic.unwrap_or_else(|| existing.topic.clone()),
        caption: patch.caption.unwrap_or_else(|| existing.caption.clone()),
        image_url: non_empty(patch.image_url).unwrap_or_else(|| existing.image_url.clone()),
        scheduled_date: patch
            .scheduled_date
            .unwrap_or_else(|| existing.scheduled_date.clone()),
        hashtags: patch.hashtags.unwrap_or_else(|| existing.hashtags.clone()),
        status: patch.status.unwrap_or(existing.status),
        feedback_comments: non_empty(patch.feedback_comments)
            .unwrap_or_else(|| existing.feedback_comments.clone()),
        post_type,
        uploaded_video_data_url,
    };
    post.normalize();
    post
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::PostStatus;

    fn launch_request() -> PartialPost {
        PartialPost {
            topic: Some("Launch".to_string()),
            caption: Some("Hi".to_string()),
            scheduled_date: Some("2024-06-01".to_string()),
            hashtags: Some(vec!["#a".to_string()]),
            ..Default::default()
        }
    }

    #[test]
    fn test_create_fills_defaults() {
        let post = create_post("abc".to_string(), launch_request());

        assert_eq!(post.id, "abc");
        assert_eq!(post.topic, "Launch");
        assert_eq!(post.hashtags, vec!["#a".to_string()]);
        assert_eq!(post.status, PostStatus::Pending);
        assert_eq!(post.post_type, PostType::Image);
        assert_eq!(post.image_url, "");
        assert_eq!(post.feedback_comments, "");
        assert_eq!(post.uploaded_video_data_url, "");
    }

    #[test]
    fn test_create_image_drops_video_payload() {
        let request = PartialPost {
            post_type: Some(PostType::Image),
            uploaded_video_data_url: Some("data:video/mp4;base64,AAAA".to_string()),
            ..launch_request()
        };

        let post = create_post("1".to_string(), request);
        assert_eq!(post.uploaded_video_data_url, "");
    }

    #[test]
    fn test_create_video_keeps_payload_or_empty() {
        let with_payload = PartialPost {
            post_type: Some(PostType::Video),
            uploaded_video_data_url: Some("data:video/mp4;base64,AAAA".to_string()),
            ..launch_request()
        };
        let without_payload = PartialPost {
            post_type: Some(PostType::Video),
            ..launch_request()
        };

        assert_eq!(
            create_post("1".to_string(), with_payload).uploaded_video_data_url,
            "data:video/mp4;base64,AAAA"
        );
        assert_eq!(
            create_post("2".to_string(), without_payload).uploaded_video_data_url,
            ""
        );
    }

    #[test]
    fn test_merge_only_touches_present_fields() {
        let existing = create_post("123".to_string(), launch_request());
        let patch = PartialPost {
            id: Some("123".to_string()),
            status: Some(PostStatus::Approved),
            ..Default::default()
        };

        let merged = merge_post(&existing, patch);

        assert_eq!(merged.status, PostStatus::Approved);
        assert_eq!(
            Post {
                status: PostStatus::Pending,
                ..merged
            },
            existing
        );
    }

    #[test]
    fn test_merge_keeps_media_when_patch_is_blank() {
        let mut existing = create_post("1".to_string(), launch_request());
        existing.image_url = "data:image/png;base64,AAAA".to_string();
        existing.feedback_comments = "Trocar a foto".to_string();

        let patch = PartialPost {
            image_url: Some(String::new()),
            feedback_comments: Some(String::new()),
            ..Default::default()
        };

        let merged = merge_post(&existing, patch);
        assert_eq!(merged.image_url, "data:image/png;base64,AAAA");
        assert_eq!(merged.feedback_comments, "Trocar a foto");
    }

    #[test]
    fn test_merge_switching_to_image_clears_video() {
        let existing = create_post(
            "1".to_string(),
            PartialPost {
                post_type: Some(PostType::Video),
                uploaded_video_data_url: Some("data:video/mp4;base64,AAAA".to_string()),
                ..launch_request()
            },
        );

        let merged = merge_post(
            &existing,
            PartialPost {
                post_type: Some(PostType::Image),
                ..Default::default()
            },
        );

        assert_eq!(merged.post_type, PostType::Image);
        assert_eq!(merged.uploaded_video_data_url, "");
    }

    #[test]
    fn test_merge_video_without_type_keeps_payload() {
        let existing = create_post(
            "1".to_string(),
            PartialPost {
                post_type: Some(PostType::Video),
                uploaded_video_data_url: Some("data:video/mp4;base64,AAAA".to_string()),
                ..launch_request()
            },
        );

        let merged = merge_post(
            &existing,
            PartialPost {
                caption: Some("Novo texto".to_string()),
                ..Default::default()
            },
        );

        assert_eq!(merged.post_type, PostType::Video);
        assert_eq!(merged.uploaded_video_data_url, "data:video/mp4;base64,AAAA");
        assert_eq!(merged.caption, "Novo texto");
    }

    #[test]
    fn test_merge_full_resubmit_is_identity() {
        let existing = create_post("1".to_string(), launch_request());
        let merged = merge_post(&existing, PartialPost::from(&existing));
        assert_eq!(merged, existing);
    }
}
