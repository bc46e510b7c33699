//! Selector configuration for the extraction engine
//!
//! The defaults match the layout of the Moonode display page; the builder
//! lets callers repoint the engine at a page with different markup without
//! touching the extraction logic.

/// CSS selectors used to locate prayer data in the fetched page
#[derive(Debug, Clone)]
pub struct SelectorConfig {
    /// Selector for the element grouping one prayer's name and times
    pub prayer_container: String,

    /// Selector for the prayer name, nested within a prayer container
    pub prayer_name: String,

    /// Selector for the adhan time, nested within a prayer container
    pub adhan_time: String,

    /// Selector for the iqama time, nested within a prayer container
    pub iqama_time: String,

    /// Selector for the element grouping one jumuah session
    pub jumuah_container: String,

    /// Selector for the session time, nested within a jumuah container
    pub jumuah_time: String,

    /// Selector for the session language, nested within a jumuah container
    pub jumuah_language: String,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            prayer_container: ".prayer-container".to_string(),
            prayer_name: ".prayer-name".to_string(),
            adhan_time: ".adhan-time".to_string(),
            iqama_time: ".iqama-time".to_string(),
            jumuah_container: ".jumuah-container".to_string(),
            jumuah_time: ".time".to_string(),
            jumuah_language: ".language".to_string(),
        }
    }
}

/// Builder for SelectorConfig
#[derive(Debug, Default)]
pub struct SelectorConfigBuilder {
    config: SelectorConfig,
}

impl SelectorConfigBuilder {
    /// Create a new builder with default selectors
    pub fn new() -> Self {
        Self {
            config: SelectorConfig::default(),
        }
    }

    /// Set the prayer container selector
    pub fn prayer_container(mut self, selector: impl Into<String>) -> Self {
        self.config.prayer_container = selector.into();
        self
    }

    /// Set the nested prayer name selector
    pub fn prayer_name(mut self, selector: impl Into<String>) -> Self {
        self.config.prayer_name = selector.into();
        self
    }

    /// Set the nested adhan time selector
    pub fn adhan_time(mut self, selector: impl Into<String>) -> Self {
        self.config.adhan_time = selector.into();
        self
    }

    /// Set the nested iqama time selector
    pub fn iqama_time(mut self, selector: impl Into<String>) -> Self {
        self.config.iqama_time = selector.into();
        self
    }

    /// Set the jumuah container selector
    pub fn jumuah_container(mut self, selector: impl Into<String>) -> Self {
        self.config.jumuah_container = selector.into();
        self
    }

    /// Set the nested jumuah time selector
    pub fn jumuah_time(mut self, selector: impl Into<String>) -> Self {
        self.config.jumuah_time = selector.into();
        self
    }

    /// Set the nested jumuah language selector
    pub fn jumuah_language(mut self, selector: impl Into<String>) -> Self {
        self.config.jumuah_language = selector.into();
        self
    }

    /// Build the configuration
    pub fn build(self) -> SelectorConfig {
        self.config
    }
}

impl SelectorConfig {
    /// Create a new builder
    pub fn builder() -> SelectorConfigBuilder {
        SelectorConfigBuilder::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_selectors() {
        let config = SelectorConfig::default();
        assert_eq!(config.prayer_container, ".prayer-container");
        assert_eq!(config.jumuah_time, ".time");
    }

    #[test]
    fn test_builder_overrides() {
        let config = SelectorConfig::builder()
            .prayer_container("div.salah")
            .jumuah_language("span.lang")
            .build();

        assert_eq!(config.prayer_container, "div.salah");
        assert_eq!(config.jumuah_language, "span.lang");
        // Untouched fields keep their defaults
        assert_eq!(config.adhan_time, ".adhan-time");
    }
}
