//! Snapshots handed to views, and the reply envelope.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use planner_core::Planner;
use planner_core::domain::{ClientProfile, Post, ViewMode};
use planner_core::projection;

/// Props of the post editor modal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditorProps {
    pub is_open: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub initial_post: Option<Post>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub initial_date: Option<String>,
}

/// Props of the profile settings modal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileSettingsProps {
    pub is_open: bool,
    pub current_profile: ClientProfile,
}

/// Props of the post detail modal. Open exactly when `post` is set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetailProps {
    pub is_open: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub post: Option<Post>,
}

/// Props of the calendar view: one month, post ids grouped by ISO day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarProps {
    pub year: i32,
    pub month: u32,
    pub days: BTreeMap<String, Vec<String>>,
}

impl CalendarProps {
    fn for_month(planner: &Planner) -> Self {
        let (year, month) = planner.calendar_month();
        let days = projection::calendar_month(planner.posts(), year, month)
            .into_iter()
            .map(|(date, posts)| {
                let ids = posts.into_iter().map(|p| p.id.clone()).collect();
                (date.format("%Y-%m-%d").to_string(), ids)
            })
            .collect();

        Self { year, month, days }
    }
}

/// Everything the views need to render one frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlannerView {
    pub view_mode: ViewMode,
    pub posts: Vec<Post>,
    pub client_profile: ClientProfile,
    pub shows_empty_state: bool,
    pub renders_view: bool,
    /// Post ids in feed order; only present on the feed view.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feed_order: Option<Vec<String>>,
    /// Only present on the calendar view.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub calendar: Option<CalendarProps>,
    pub editor: EditorProps,
    pub profile_settings: ProfileSettingsProps,
    pub detail: DetailProps,
}

impl From<&Planner> for PlannerView {
    fn from(planner: &Planner) -> Self {
        let editor = planner.editor();
        let feed_order = (planner.view_mode() == ViewMode::Feed).then(|| {
            projection::feed_order(planner.posts())
                .into_iter()
                .map(|p| p.id.clone())
                .collect()
        });
        let calendar = (planner.view_mode() == ViewMode::Calendar)
            .then(|| CalendarProps::for_month(planner));

        Self {
            view_mode: planner.view_mode(),
            posts: planner.posts().to_vec(),
            client_profile: planner.profile().clone(),
            shows_empty_state: planner.shows_empty_state(),
            renders_view: planner.renders_view(),
            feed_order,
            calendar,
            editor: EditorProps {
                is_open: editor.is_open,
                initial_post: editor.initial_post.clone(),
                initial_date: editor.initial_date.clone(),
            },
            profile_settings: ProfileSettingsProps {
                is_open: planner.is_profile_settings_open(),
                current_profile: planner.profile().clone(),
            },
            detail: DetailProps {
                is_open: planner.detail().is_some(),
                post: planner.detail().cloned(),
            },
        }
    }
}

/// Reply envelope written back to the view host.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Reply<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorBody>,
}

impl<T> Reply<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn err(error: ErrorBody) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error),
        }
    }
}

/// A short, human-readable description of a rejected input.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl ErrorBody {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            detail: None,
        }
    }

    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    pub fn bad_request(detail: impl Into<String>) -> Self {
        Self::new("Bad Request").with_detail(detail)
    }
}
