use serde::{Deserialize, Serialize};

use super::{Millis, ViewError};

/// Timings and thresholds for the whole page. Every field is optional in the
/// JSON form and falls back to the values the page was designed around.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewConfig {
    #[serde(default)]
    pub scroll: ScrollConfig,
    #[serde(default)]
    pub typewriter: TypewriterConfig,
    /// How long a counter takes to reach its target
    #[serde(default = "default_counter_duration")]
    pub counter_duration_ms: Millis,
    /// How long the "message sent" notice stays up
    #[serde(default = "default_contact_display")]
    pub contact_display_ms: Millis,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScrollConfig {
    /// Offset past which the header gets its solid background
    #[serde(default = "default_header_threshold")]
    pub header_threshold: f64,
    /// Offset past which the back-to-top button shows
    #[serde(default = "default_back_to_top_threshold")]
    pub back_to_top_threshold: f64,
    /// Sections activate this many pixels before reaching the top
    #[serde(default = "default_lead_margin")]
    pub lead_margin: f64,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            header_threshold: default_header_threshold(),
            back_to_top_threshold: default_back_to_top_threshold(),
            lead_margin: default_lead_margin(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypewriterConfig {
    #[serde(default = "default_phrases")]
    pub phrases: Vec<String>,
    #[serde(default = "default_type_interval")]
    pub type_interval_ms: Millis,
    #[serde(default = "default_delete_interval")]
    pub delete_interval_ms: Millis,
    #[serde(default = "default_pause")]
    pub pause_ms: Millis,
}

impl Default for TypewriterConfig {
    fn default() -> Self {
        Self {
            phrases: default_phrases(),
            type_interval_ms: default_type_interval(),
            delete_interval_ms: default_delete_interval(),
            pause_ms: default_pause(),
        }
    }
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            scroll: ScrollConfig::default(),
            typewriter: TypewriterConfig::default(),
            counter_duration_ms: default_counter_duration(),
            contact_display_ms: default_contact_display(),
        }
    }
}

impl ViewConfig {
    pub fn from_json(json: &str) -> Result<Self, ViewError> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| ViewError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ViewError> {
        let scroll = &self.scroll;
        for (name, value) in [
            ("header_threshold", scroll.header_threshold),
            ("back_to_top_threshold", scroll.back_to_top_threshold),
            ("lead_margin", scroll.lead_margin),
        ] {
            if !value.is_finite() {
                return Err(ViewError::InvalidConfig(format!("{name} must be finite")));
            }
        }
        let tw = &self.typewriter;
        if tw.phrases.is_empty() {
            return Err(ViewError::NoPhrases);
        }
        if tw.type_interval_ms == 0 || tw.delete_interval_ms == 0 {
            return Err(ViewError::InvalidConfig(
                "typewriter intervals must be non-zero".to_string(),
            ));
        }
        if tw.phrases.iter().all(String::is_empty) {
            return Err(ViewError::InvalidConfig(
                "typewriter phrases are all empty".to_string(),
            ));
        }
        if tw.pause_ms == 0 && tw.phrases.iter().any(String::is_empty) {
            return Err(ViewError::InvalidConfig(
                "an empty typewriter phrase needs a non-zero pause".to_string(),
            ));
        }
        Ok(())
    }
}

fn default_header_threshold() -> f64 {
    50.0
}

fn default_back_to_top_threshold() -> f64 {
    300.0
}

fn default_lead_margin() -> f64 {
    150.0
}

fn default_phrases() -> Vec<String> {
    ["Web Developer", "Full Stack Developer", "Freelancer"]
        .into_iter()
        .map(String::from)
        .collect()
}

fn default_type_interval() -> Millis {
    100
}

fn default_delete_interval() -> Millis {
    50
}

fn default_pause() -> Millis {
    1500
}

fn default_counter_duration() -> Millis {
    2000
}

fn default_contact_display() -> Millis {
    5000
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_json_uses_defaults() {
        let config = ViewConfig::from_json("{}").unwrap();
        assert_eq!(config.scroll.header_threshold, 50.0);
        assert_eq!(config.scroll.back_to_top_threshold, 300.0);
        assert_eq!(config.scroll.lead_margin, 150.0);
        assert_eq!(config.typewriter.phrases.len(), 3);
        assert_eq!(config.typewriter.pause_ms, 1500);
        assert_eq!(config.counter_duration_ms, 2000);
        assert_eq!(config.contact_display_ms, 5000);
        assert_eq!(config, ViewConfig::default());
    }

    #[test]
    fn test_partial_override() {
        let config =
            ViewConfig::from_json(r#"{"scroll": {"lead_margin": 80}, "typewriter": {"phrases": ["Hi"]}}"#)
                .unwrap();
        assert_eq!(config.scroll.lead_margin, 80.0);
        assert_eq!(config.scroll.header_threshold, 50.0);
        assert_eq!(config.typewriter.phrases, vec!["Hi".to_string()]);
        assert_eq!(config.typewriter.type_interval_ms, 100);
    }

    #[test]
    fn test_rejects_bad_config() {
        assert_eq!(
            ViewConfig::from_json(r#"{"typewriter": {"phrases": []}}"#),
            Err(ViewError::NoPhrases)
        );
        assert!(matches!(
            ViewConfig::from_json(r#"{"typewriter": {"delete_interval_ms": 0}}"#),
            Err(ViewError::InvalidConfig(_))
        ));
        assert!(matches!(
            ViewConfig::from_json(r#"{"typewriter": {"phrases": ["", ""]}}"#),
            Err(ViewError::InvalidConfig(_))
        ));
        assert!(matches!(
            ViewConfig::from_json(r#"{"typewriter": {"phrases": [""], "pause_ms": 0}}"#),
            Err(ViewError::InvalidConfig(_))
        ));
        assert!(matches!(
            ViewConfig::from_json(r#"{"typewriter": {"phrases": ["", "x"], "pause_ms": 0}}"#),
            Err(ViewError::InvalidConfig(_))
        ));
        // a zero pause is fine while every phrase has text
        assert!(ViewConfig::from_json(r#"{"typewriter": {"phrases": ["x"], "pause_ms": 0}}"#).is_ok());
        assert!(matches!(
            ViewConfig::from_json("not json"),
            Err(ViewError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_embedded_config_parses() {
        let config = ViewConfig::from_json(include_str!("../../config/view.json")).unwrap();
        assert_eq!(config.typewriter.phrases[0], "Web Developer");
    }
}
