//! Application state controller.
//!
//! [`Planner`] exclusively owns the post collection, the client profile and
//! the view/modal state. Views only read snapshots from it and send intents
//! back. Every mutation of posts or profile is mirrored to the injected
//! [`PlannerStorage`] as a full resave.

use std::sync::Arc;

use chrono::{Datelike, NaiveDate, Utc};
use uuid::Uuid;

use crate::domain::{ClientProfile, PartialPost, Post, ViewMode};
use crate::ports::PlannerStorage;
use crate::reconcile::{create_post, merge_post};

/// Post editor modal state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditorState {
    pub is_open: bool,
    /// Post being edited; `None` in create mode.
    pub initial_post: Option<Post>,
    /// Pre-filled scheduled date in create mode.
    pub initial_date: Option<String>,
}

/// The explicit state container for one planning session.
pub struct Planner {
    storage: Arc<dyn PlannerStorage>,
    posts: Vec<Post>,
    profile: ClientProfile,
    view_mode: ViewMode,
    editor: EditorState,
    profile_settings_open: bool,
    detail: Option<Post>,
    /// First day of the month the calendar view shows.
    calendar_month: NaiveDate,
}

impl Planner {
    /// Initialize from storage. Starts on the grid view with every modal
    /// closed and the calendar on the current month. Nothing is written back.
    pub fn load(storage: Arc<dyn PlannerStorage>) -> Self {
        let posts = storage.load_posts();
        let profile = storage.load_profile(ClientProfile::default());
        let today = Utc::now().date_naive();

        tracing::info!(posts = posts.len(), "Planner state loaded");

        Self {
            storage,
            posts,
            profile,
            view_mode: ViewMode::default(),
            editor: EditorState::default(),
            profile_settings_open: false,
            detail: None,
            calendar_month: today.with_day(1).unwrap_or(today),
        }
    }

    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    pub fn post(&self, id: &str) -> Option<&Post> {
        self.posts.iter().find(|p| p.id == id)
    }

    pub fn profile(&self) -> &ClientProfile {
        &self.profile
    }

    pub fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    pub fn editor(&self) -> &EditorState {
        &self.editor
    }

    pub fn is_profile_settings_open(&self) -> bool {
        self.profile_settings_open
    }

    /// `(year, month)` shown by the calendar view.
    pub fn calendar_month(&self) -> (i32, u32) {
        (self.calendar_month.year(), self.calendar_month.month())
    }

    /// Post currently open in the detail view.
    pub fn detail(&self) -> Option<&Post> {
        self.detail.as_ref()
    }

    /// Create or update a post from an editor request.
    ///
    /// A request whose id matches an existing post is merged into it;
    /// anything else creates a new post with a fresh id appended at the
    /// end. Closes the editor and refreshes the detail snapshot if it shows
    /// the saved post.
    pub fn add_or_update_post(&mut self, request: PartialPost) -> &Post {
        let existing = request
            .id
            .as_deref()
            .and_then(|id| self.posts.iter().position(|p| p.id == id));

        let index = match existing {
            Some(index) => {
                let merged = merge_post(&self.posts[index], request);
                tracing::debug!(post_id = %merged.id, "Post updated");
                self.posts[index] = merged;
                index
            }
            None => {
                if let Some(id) = &request.id {
                    tracing::debug!(requested_id = %id, "Unknown post id; creating a new post");
                }
                let post = create_post(self.next_id(), request);
                tracing::debug!(post_id = %post.id, "Post created");
                self.posts.push(post);
                self.posts.len() - 1
            }
        };

        self.storage.save_posts(&self.posts);
        self.close_editor();

        let saved = &self.posts[index];
        if let Some(detail) = self.detail.as_mut() {
            if detail.id == saved.id {
                *detail = saved.clone();
            }
        }

        saved
    }

    /// Remove a post. Unknown ids are a no-op. Returns whether a post was
    /// removed.
    pub fn delete_post(&mut self, id: &str) -> bool {
        let before = self.posts.len();
        self.posts.retain(|p| p.id != id);
        let removed = self.posts.len() != before;

        if removed {
            tracing::debug!(post_id = %id, "Post deleted");
            self.storage.save_posts(&self.posts);
        }

        if self.detail.as_ref().is_some_and(|p| p.id == id) {
            self.detail = None;
        }

        removed
    }

    pub fn select_view(&mut self, mode: ViewMode) {
        self.view_mode = mode;
    }

    /// Move the calendar to another month. Returns false, leaving the
    /// calendar where it was, for an invalid month.
    pub fn show_month(&mut self, year: i32, month: u32) -> bool {
        match NaiveDate::from_ymd_opt(year, month, 1) {
            Some(first) => {
                self.calendar_month = first;
                true
            }
            None => false,
        }
    }

    /// Open the editor on `post` (update mode) or empty with `date`
    /// pre-filled (create mode). Always closes the detail view.
    pub fn open_editor(&mut self, post: Option<Post>, date: Option<String>) {
        self.editor = EditorState {
            is_open: true,
            initial_post: post,
            initial_date: date,
        };
        self.detail = None;
    }

    pub fn close_editor(&mut self) {
        self.editor = EditorState::default();
    }

    /// Replace whatever the detail view shows.
    pub fn open_detail(&mut self, post: Post) {
        self.detail = Some(post);
    }

    pub fn close_detail(&mut self) {
        self.detail = None;
    }

    /// "Edit" pressed inside the detail view.
    pub fn edit_from_detail(&mut self, post: Post) {
        self.close_detail();
        self.open_editor(Some(post), None);
    }

    pub fn open_profile_settings(&mut self) {
        self.profile_settings_open = true;
    }

    pub fn close_profile_settings(&mut self) {
        self.profile_settings_open = false;
    }

    /// Replace the profile wholesale and close the profile editor.
    pub fn save_profile(&mut self, profile: ClientProfile) {
        self.profile = profile;
        self.storage.save_profile(&self.profile);
        tracing::debug!(username = %self.profile.username, "Client profile saved");
        self.close_profile_settings();
    }

    /// The grid shows its "nothing planned yet" placeholder.
    pub fn shows_empty_state(&self) -> bool {
        self.posts.is_empty() && !self.editor.is_open && self.view_mode == ViewMode::Grid
    }

    /// The active view is rendered at all.
    pub fn renders_view(&self) -> bool {
        !self.posts.is_empty()
            || self.view_mode != ViewMode::Grid
            || self.editor.is_open
            || self.detail.is_some()
    }

    fn next_id(&self) -> String {
        loop {
            let id = Uuid::new_v4().to_string();
            if self.post(&id).is_none() {
                return id;
            }
        }
    }
}
