use serde::{Deserialize, Serialize};

pub const DEFAULT_USERNAME: &str = "seu_usuario";
pub const DEFAULT_BIO: &str = "Sua bio incrível aqui!";

/// The display identity shown in feed and preview renderings.
///
/// There is exactly one per session and it is replaced wholesale on save.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientProfile {
    pub username: String,
    pub bio: String,
    /// Embedded image data URL, or empty for no avatar.
    pub profile_image_url: String,
}

impl Default for ClientProfile {
    fn default() -> Self {
        Self {
            username: DEFAULT_USERNAME.to_string(),
            bio: DEFAULT_BIO.to_string(),
            profile_image_url: String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_profile() {
        let profile = ClientProfile::default();
        assert_eq!(profile.username, "seu_usuario");
        assert_eq!(profile.bio, "Sua bio incrível aqui!");
        assert!(profile.profile_image_url.is_empty());
    }

    #[test]
    fn test_profile_uses_camel_case_keys() {
        let json = serde_json::to_value(ClientProfile::default()).unwrap();
        assert!(json.get("profileImageUrl").is_some());
    }
}
