//! Frontend configuration module
//!
//! Build-time configuration for backend URLs. When no base URL is
//! baked in, request paths stay relative so the dev-server proxy can
//! forward them.

/// Frontend configuration for backend URLs.
#[derive(Debug, Clone)]
pub struct FrontendConfig {
    /// Base URL the REST client prefixes onto request paths; empty
    /// keeps paths relative.
    pub api_base_url: String,
}

impl Default for FrontendConfig {
    fn default() -> Self {
        Self {
            api_base_url: option_env!("EMPORIUM_API_BASE_URL")
                .unwrap_or("")
                .trim_end_matches('/')
                .to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_base_url_has_no_trailing_slash() {
        let config = FrontendConfig::default();
        assert!(!config.api_base_url.ends_with('/'));
    }
}
