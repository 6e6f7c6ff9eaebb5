//! Stub gateway configuration

/// Settings for [`StubGateway`](crate::infrastructure::stub_gateway::StubGateway).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GatewayConfig {
    /// Base URL that minted provider refs are appended to
    pub redirect_base: String,
    /// Prefix of minted provider refs
    pub ref_prefix: String,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            redirect_base: "https://checkout.example.com/session".to_string(),
            ref_prefix: "cs".to_string(),
        }
    }
}

impl GatewayConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_redirect_base(mut self, redirect_base: impl Into<String>) -> Self {
        self.redirect_base = redirect_base.into();
        self
    }

    pub fn with_ref_prefix(mut self, ref_prefix: impl Into<String>) -> Self {
        self.ref_prefix = ref_prefix.into();
        self
    }

    /// Redirect URL for a provider ref, without doubling the slash.
    pub fn redirect_url(&self, provider_ref: &str) -> String {
        format!("{}/{}", self.redirect_base.trim_end_matches('/'), provider_ref)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_redirect_url_trims_trailing_slash() {
        let config = GatewayConfig::new().with_redirect_base("https://pay.test/s/");
        assert_eq!(config.redirect_url("cs_000001"), "https://pay.test/s/cs_000001");
    }

    #[test]
    fn test_defaults() {
        let config = GatewayConfig::default();
        assert_eq!(config.ref_prefix, "cs");
        assert_eq!(
            config.redirect_url("x"),
            "https://checkout.example.com/session/x"
        );
    }
}
