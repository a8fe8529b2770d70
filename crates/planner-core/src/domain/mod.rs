//! Domain entities - the core planning objects.

mod post;
mod profile;
mod view;

pub use post::{PartialPost, Post, PostStatus, PostType, StoredPost};
pub use profile::ClientProfile;
pub use view::ViewMode;
