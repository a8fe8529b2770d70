use planner_core::Planner;
use planner_core::domain::Post;

/// Open the post editor, in update mode when `post` is given.
pub fn open_editor(planner: &mut Planner, post: Option<Post>, date: Option<String>) {
    match &post {
        Some(post) => tracing::debug!(post_id = %post.id, "Editing post"),
        None => tracing::debug!(date = ?date, "Composing new post"),
    }
    planner.open_editor(post, date);
}
