//! Configuration for the content pipeline

use serde::{Deserialize, Serialize};

/// Configuration for the content pipeline
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Blocks requested per paginated fetch
    pub page_size: u32,

    /// Maximum characters of source text interpolated into a prompt.
    /// `None` disables truncation.
    pub prompt_text_cap: Option<usize>,

    /// Whether appends are preceded by a labeled header block
    pub append_header: bool,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            page_size: 100,
            prompt_text_cap: Some(15_000),
            append_header: true,
        }
    }
}

impl PipelineConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.page_size == 0 {
            return Err("page_size must be greater than 0".to_string());
        }
        if self.prompt_text_cap == Some(0) {
            return Err("prompt_text_cap must be greater than 0 when set".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = PipelineConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.page_size, 100);
        assert_eq!(config.prompt_text_cap, Some(15_000));
        assert!(config.append_header);
    }

    #[test]
    fn test_invalid_page_size() {
        let config = PipelineConfig {
            page_size: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_zero_cap() {
        let config = PipelineConfig {
            prompt_text_cap: Some(0),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_uncapped_is_valid() {
        let config = PipelineConfig {
            prompt_text_cap: None,
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }
}
