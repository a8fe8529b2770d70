use planner_core::Planner;
use planner_core::domain::PartialPost;

/// Save an editor submission.
pub fn save_post(planner: &mut Planner, request: PartialPost) {
    let saved = planner.add_or_update_post(request);
    tracing::info!(post_id = %saved.id, status = ?saved.status, "Post saved");
}

pub fn delete_post(planner: &mut Planner, id: &str) {
    if planner.delete_post(id) {
        tracing::info!(post_id = %id, "Post deleted");
    } else {
        tracing::debug!(post_id = %id, "Delete ignored, no such post");
    }
}
