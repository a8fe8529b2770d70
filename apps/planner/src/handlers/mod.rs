//! Intent handlers - route each view intent to the planner.

mod modals;
mod posts;

use planner_core::Planner;
use planner_shared::PlannerIntent;

/// Apply one intent to the planner.
pub fn dispatch(planner: &mut Planner, intent: PlannerIntent) {
    match intent {
        PlannerIntent::AddPost => modals::open_editor(planner, None, None),
        PlannerIntent::SelectDate { date } => modals::open_editor(planner, None, Some(date)),
        PlannerIntent::Edit { post } => modals::open_editor(planner, Some(post), None),
        PlannerIntent::CloseEditor => planner.close_editor(),
        PlannerIntent::SavePost { post } => posts::save_post(planner, post),
        PlannerIntent::Delete { id } => posts::delete_post(planner, &id),
        PlannerIntent::PostClick { post } => planner.open_detail(post),
        PlannerIntent::EditFromDetail { post } => planner.edit_from_detail(post),
        PlannerIntent::CloseDetail => planner.close_detail(),
        PlannerIntent::ViewChange { mode } => {
            tracing::debug!(?mode, "View changed");
            planner.select_view(mode);
        }
        PlannerIntent::ShowMonth { year, month } => {
            if !planner.show_month(year, month) {
                tracing::warn!(year, month, "Ignoring invalid calendar month");
            }
        }
        PlannerIntent::OpenProfileSettings => planner.open_profile_settings(),
        PlannerIntent::CloseProfileSettings => planner.close_profile_settings(),
        PlannerIntent::SaveProfile { profile } => planner.save_profile(profile),
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use planner_core::domain::{ClientProfile, PartialPost, PostStatus, ViewMode};
    use planner_infra::{InMemoryStore, JsonPlannerStorage};

    use super::*;

    fn planner() -> Planner {
        Planner::load(Arc::new(JsonPlannerStorage::new(Arc::new(
            InMemoryStore::new(),
        ))))
    }

    #[test]
    fn test_calendar_day_opens_prefilled_editor() {
        let mut planner = planner();
        dispatch(
            &mut planner,
            PlannerIntent::SelectDate {
                date: "2024-06-01".to_string(),
            },
        );

        assert!(planner.editor().is_open);
        assert_eq!(planner.editor().initial_date.as_deref(), Some("2024-06-01"));
        assert!(planner.editor().initial_post.is_none());
    }

    #[test]
    fn test_save_then_review_flow() {
        let mut planner = planner();
        dispatch(&mut planner, PlannerIntent::AddPost);
        dispatch(
            &mut planner,
            PlannerIntent::SavePost {
                post: PartialPost {
                    topic: Some("Launch".to_string()),
                    ..Default::default()
                },
            },
        );
        assert!(!planner.editor().is_open);

        let post = planner.posts()[0].clone();
        dispatch(&mut planner, PlannerIntent::PostClick { post: post.clone() });
        dispatch(
            &mut planner,
            PlannerIntent::SavePost {
                post: PartialPost {
                    id: Some(post.id.clone()),
                    status: Some(PostStatus::NeedsRevision),
                    feedback_comments: Some("Legenda mais curta".to_string()),
                    ..Default::default()
                },
            },
        );

        let detail = planner.detail().unwrap();
        assert_eq!(detail.status, PostStatus::NeedsRevision);
        assert_eq!(detail.feedback_comments, "Legenda mais curta");

        dispatch(&mut planner, PlannerIntent::Delete { id: post.id });
        assert!(planner.detail().is_none());
        assert!(planner.posts().is_empty());
    }

    #[test]
    fn test_show_month_ignores_invalid_month() {
        let mut planner = planner();
        dispatch(&mut planner, PlannerIntent::ShowMonth { year: 2025, month: 2 });
        assert_eq!(planner.calendar_month(), (2025, 2));

        dispatch(&mut planner, PlannerIntent::ShowMonth { year: 2025, month: 13 });
        assert_eq!(planner.calendar_month(), (2025, 2));
    }

    #[test]
    fn test_profile_and_view_intents() {
        let mut planner = planner();
        dispatch(&mut planner, PlannerIntent::ViewChange { mode: ViewMode::Feed });
        dispatch(&mut planner, PlannerIntent::OpenProfileSettings);
        assert!(planner.is_profile_settings_open());

        let profile = ClientProfile {
            username: "ezen".to_string(),
            ..ClientProfile::default()
        };
        dispatch(
            &mut planner,
            PlannerIntent::SaveProfile {
                profile: profile.clone(),
            },
        );

        assert_eq!(planner.view_mode(), ViewMode::Feed);
        assert_eq!(planner.profile(), &profile);
        assert!(!planner.is_profile_settings_open());
    }
}
