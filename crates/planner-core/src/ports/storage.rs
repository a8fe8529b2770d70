use crate::domain::{ClientProfile, Post};

/// Persistence adapter for the two planner records.
///
/// Loads never fail: absent or malformed records degrade to empty/default
/// state. Saves are best-effort and report nothing back.
pub trait PlannerStorage: Send + Sync {
    /// Load the post collection, normalized, or an empty one.
    fn load_posts(&self) -> Vec<Post>;

    /// Load the client profile, keeping `default` if nothing usable is stored.
    fn load_profile(&self, default: ClientProfile) -> ClientProfile;

    /// Persist the whole post collection.
    fn save_posts(&self, posts: &[Post]);

    /// Persist the client profile.
    fn save_profile(&self, profile: &ClientProfile);
}
