use serde::{Deserialize, Serialize};

/// Which presentation is currently rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    Grid,
    Calendar,
    Feed,
}
