use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ResolutionConfig {
    /// Domains given to `resolve` must be subdomains of this one.
    #[serde(default = "default_parent_domain")]
    pub parent_domain: String,

    /// Record field used by `resolve --field` when no field is named.
    #[serde(default = "default_field")]
    pub default_field: String,
}

impl Default for ResolutionConfig {
    fn default() -> Self {
        Self {
            parent_domain: default_parent_domain(),
            default_field: default_field(),
        }
    }
}

fn default_parent_domain() -> String {
    "notion.stark".to_string()
}

fn default_field() -> String {
    "starknet".to_string()
}
