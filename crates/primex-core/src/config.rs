//! Site variants
//!
//! Both page variants are one view parameterised by a [`SiteConfig`].

use crate::anchor::AnchorScroller;
use crate::content;
use crate::mesh::{self, RotatingMesh};
use crate::scroll_spy::{ObserverOptions, SectionObserver, HEADER_OFFSET_PX};
use crate::section::Section;
use crate::slider::{self, SlideRotator};
use crate::{SiteError, SiteResult};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::time::Duration;

/// Rotating visual on the page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HeroVisual {
    /// Portfolio slider beside the about copy; hero uses the floating backdrop
    Slider,
    /// CSS 3D cube in the hero
    RotatingMesh,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AboutPanel {
    Metrics,
    Quotes,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Preset name, also the route segment
    pub name: String,
    pub sections: Vec<Section>,
    pub hero_visual: HeroVisual,
    pub about_panel: AboutPanel,
    #[serde(default)]
    pub observer: ObserverOptions,
    #[serde(default = "default_header_offset")]
    pub header_offset: f64,
    #[serde(default = "default_slide_interval_ms")]
    pub slide_interval_ms: u64,
    #[serde(default = "default_mesh_step")]
    pub mesh_step: f64,
}

fn default_header_offset() -> f64 {
    HEADER_OFFSET_PX
}

fn default_slide_interval_ms() -> u64 {
    slider::DEFAULT_INTERVAL.as_millis() as u64
}

fn default_mesh_step() -> f64 {
    mesh::DEFAULT_STEP
}

impl SiteConfig {
    pub const PRESETS: [&'static str; 2] = ["portfolio", "spatial"];

    /// Metrics and the partner slider.
    pub fn portfolio() -> Self {
        Self {
            name: "portfolio".into(),
            sections: sections(&["home", "services", "about", "mission", "contact"]),
            hero_visual: HeroVisual::Slider,
            about_panel: AboutPanel::Metrics,
            observer: ObserverOptions::default(),
            header_offset: default_header_offset(),
            slide_interval_ms: default_slide_interval_ms(),
            mesh_step: default_mesh_step(),
        }
    }

    /// Rotating cube hero, quotes and a values section.
    pub fn spatial() -> Self {
        Self {
            name: "spatial".into(),
            sections: sections(&["home", "services", "about", "values", "mission", "contact"]),
            hero_visual: HeroVisual::RotatingMesh,
            about_panel: AboutPanel::Quotes,
            ..Self::portfolio()
        }
    }

    pub fn preset(name: &str) -> SiteResult<Self> {
        match name {
            "portfolio" => Ok(Self::portfolio()),
            "spatial" => Ok(Self::spatial()),
            other => Err(SiteError::UnknownVariant(other.to_string())),
        }
    }

    pub fn from_json(json: &str) -> SiteResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> SiteResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> SiteResult<()> {
        if self.sections.is_empty() {
            return Err(SiteError::InvalidConfig("at least one section is required".into()));
        }

        let mut seen = HashSet::new();
        for section in &self.sections {
            if section.id.as_str().is_empty() {
                return Err(SiteError::InvalidConfig("section id must not be empty".into()));
            }
            if !seen.insert(section.id.as_str()) {
                return Err(SiteError::InvalidConfig(format!(
                    "duplicate section: {}",
                    section.id
                )));
            }
            if !(section.threshold > 0.0 && section.threshold <= 1.0) {
                return Err(SiteError::InvalidConfig(format!(
                    "threshold for {} must be in (0, 1], got {}",
                    section.id, section.threshold
                )));
            }
        }

        if self.slide_interval_ms == 0 {
            return Err(SiteError::InvalidConfig("slide interval must be non-zero".into()));
        }
        if !self.header_offset.is_finite() || self.header_offset < 0.0 {
            return Err(SiteError::InvalidConfig(format!(
                "header offset must be a non-negative number, got {}",
                self.header_offset
            )));
        }
        if !self.mesh_step.is_finite() {
            return Err(SiteError::InvalidConfig("mesh step must be finite".into()));
        }
        Ok(())
    }

    pub fn has_section(&self, id: &str) -> bool {
        self.sections.iter().any(|s| s.id == id)
    }

    pub fn section_observer(&self) -> SiteResult<SectionObserver> {
        SectionObserver::new(self.sections.clone(), self.observer.clone())
    }

    pub fn anchor_scroller(&self) -> AnchorScroller {
        AnchorScroller::new(self.header_offset)
    }

    pub fn slide_rotator(&self) -> SiteResult<SlideRotator> {
        SlideRotator::new(
            content::portfolio_slides(),
            Duration::from_millis(self.slide_interval_ms),
        )
    }

    pub fn rotating_mesh(&self) -> RotatingMesh {
        RotatingMesh::new(self.mesh_step)
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self::portfolio()
    }
}

fn sections(ids: &[&str]) -> Vec<Section> {
    ids.iter().map(|id| Section::new(*id)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scroll_spy::TieBreak;

    #[test]
    fn test_presets_validate() {
        for name in SiteConfig::PRESETS {
            let config = SiteConfig::preset(name).unwrap();
            assert_eq!(config.name, name);
            config.validate().unwrap();
        }
    }

    #[test]
    fn test_unknown_preset() {
        assert!(matches!(
            SiteConfig::preset("retro"),
            Err(SiteError::UnknownVariant(name)) if name == "retro"
        ));
    }

    #[test]
    fn test_spatial_has_values_section() {
        assert!(SiteConfig::spatial().has_section("values"));
        assert!(!SiteConfig::portfolio().has_section("values"));
    }

    #[test]
    fn test_duplicate_section_rejected() {
        let mut config = SiteConfig::portfolio();
        config.sections.push(Section::new("about"));
        assert!(matches!(config.validate(), Err(SiteError::InvalidConfig(_))));
    }

    #[test]
    fn test_bad_threshold_rejected() {
        let mut config = SiteConfig::portfolio();
        config.sections[0].threshold = 0.0;
        assert!(config.validate().is_err());
        config.sections[0].threshold = 1.0;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_json_defaults_fill_optional_fields() {
        let json = r#"{
            "name": "custom",
            "sections": [{ "id": "home", "threshold": 0.5 }, { "id": "contact", "threshold": 0.6 }],
            "hero_visual": "rotating_mesh",
            "about_panel": "metrics",
            "observer": { "root_margin": { "top_px": 0.0, "bottom_percent": 0.0 }, "tie_break": "highest_ratio" }
        }"#;
        let config = SiteConfig::from_json(json).unwrap();
        assert_eq!(config.header_offset, 84.0);
        assert_eq!(config.slide_interval_ms, 4000);
        assert_eq!(config.observer.tie_break, TieBreak::HighestRatio);
        assert_eq!(config.hero_visual, HeroVisual::RotatingMesh);
    }

    #[test]
    fn test_json_round_trip_keeps_preset() {
        let config = SiteConfig::spatial();
        let back = SiteConfig::from_json(&config.to_json().unwrap()).unwrap();
        assert_eq!(back, config);
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        assert!(matches!(SiteConfig::from_json("{"), Err(SiteError::Json(_))));
    }
}
