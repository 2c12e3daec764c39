//! Configuration for model listing.

/// Controls how native listing entries become OpenAI model cards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListConfig {
    /// Owner reported for models whose reference has no namespace.
    ///
    /// Default: None (reported as an empty string)
    pub default_owner: Option<String>,

    /// Whether entries with malformed names are dropped from the list.
    ///
    /// When false they are kept with the fallback owner.
    /// Default: false
    pub skip_invalid: bool,
}

impl ListConfig {
    /// Creates a new configuration with defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the owner reported for models without a namespace.
    #[must_use]
    pub fn with_default_owner(mut self, owner: impl Into<String>) -> Self {
        self.default_owner = Some(owner.into());
        self
    }

    /// Enables or disables dropping malformed entries.
    #[must_use]
    pub const fn with_skip_invalid(mut self, skip: bool) -> Self {
        self.skip_invalid = skip;
        self
    }

    /// Returns the owner to report when a reference has no namespace.
    #[must_use]
    pub fn fallback_owner(&self) -> &str {
        self.default_owner.as_deref().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = ListConfig::default();
        assert!(config.default_owner.is_none());
        assert!(!config.skip_invalid);
        assert_eq!(config.fallback_owner(), "");
    }

    #[test]
    fn builder_pattern() {
        let config = ListConfig::new()
            .with_default_owner("library")
            .with_skip_invalid(true);

        assert_eq!(config.default_owner.as_deref(), Some("library"));
        assert!(config.skip_invalid);
        assert_eq!(config.fallback_owner(), "library");
    }
}
