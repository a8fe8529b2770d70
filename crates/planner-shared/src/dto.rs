//! Intents raised by views and modals.

use serde::{Deserialize, Serialize};

use planner_core::domain::{ClientProfile, PartialPost, Post, ViewMode};

/// Every callback a view or modal can fire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "intent", rename_all = "camelCase")]
pub enum PlannerIntent {
    /// Header or empty-state "new post" button.
    AddPost,
    /// Edit button on a grid card or calendar entry.
    Edit { post: Post },
    /// Click on an empty calendar day.
    SelectDate { date: String },
    Delete { id: String },
    /// Click on a post in the feed mockup.
    PostClick { post: Post },
    ViewChange { mode: ViewMode },
    /// Month navigation in the calendar view.
    ShowMonth { year: i32, month: u32 },
    OpenProfileSettings,
    CloseProfileSettings,
    SavePost { post: PartialPost },
    CloseEditor,
    SaveProfile { profile: ClientProfile },
    /// Edit button inside the detail view.
    EditFromDetail { post: Post },
    CloseDetail,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_intent_wire_format() {
        let intent: PlannerIntent = serde_json::from_value(json!({
            "intent": "viewChange",
            "mode": "calendar"
        }))
        .unwrap();
        assert_eq!(
            intent,
            PlannerIntent::ViewChange {
                mode: ViewMode::Calendar
            }
        );

        let intent: PlannerIntent =
            serde_json::from_value(json!({ "intent": "addPost" })).unwrap();
        assert_eq!(intent, PlannerIntent::AddPost);

        let intent: PlannerIntent =
            serde_json::from_value(json!({ "intent": "showMonth", "year": 2024, "month": 6 }))
                .unwrap();
        assert_eq!(intent, PlannerIntent::ShowMonth { year: 2024, month: 6 });
    }

    #[test]
    fn test_save_post_carries_partial_payload() {
        let intent: PlannerIntent = serde_json::from_value(json!({
            "intent": "savePost",
            "post": { "id": "123", "status": "Aprovado" }
        }))
        .unwrap();

        let PlannerIntent::SavePost { post } = intent else {
            panic!("expected savePost");
        };
        assert_eq!(post.id.as_deref(), Some("123"));
        assert_eq!(post.topic, None);
    }

    #[test]
    fn test_edit_intent_normalizes_post() {
        let intent: PlannerIntent = serde_json::from_value(json!({
            "intent": "edit",
            "post": { "id": "1", "videoUrl": "legacy" }
        }))
        .unwrap();

        let PlannerIntent::Edit { post } = intent else {
            panic!("expected edit");
        };
        assert_eq!(post.id, "1");
        assert_eq!(post.caption, "");
    }
}
