use primex_core::{
    HeroVisual, IntersectionEntry, MobileMenu, RegionLookup, ScrollBehavior, SiteConfig,
    SiteError,
};
use std::collections::HashMap;
use std::time::Duration;

/// Sections laid out top to bottom, 900px apart
struct RenderedPage {
    tops: HashMap<String, f64>,
}

impl RenderedPage {
    fn for_config(config: &SiteConfig) -> Self {
        let tops = config
            .sections
            .iter()
            .enumerate()
            .map(|(i, s)| (s.id.to_string(), i as f64 * 900.0))
            .collect();
        Self { tops }
    }
}

impl RegionLookup for RenderedPage {
    fn region_top(&self, id: &str) -> Option<f64> {
        self.tops.get(id).copied()
    }
}

#[test]
fn nav_link_scroll_and_spy_converge_on_the_same_section() {
    let config = SiteConfig::spatial();
    let page = RenderedPage::for_config(&config);
    let mut spy = config.section_observer().unwrap();
    let scroller = config.anchor_scroller();
    let mut menu = MobileMenu::new();

    assert_eq!(spy.attach(&page).len(), 6);

    menu.toggle();
    let outcome = scroller.activate("#values", &page, &mut menu);
    let request = outcome.scroll.unwrap();
    assert_eq!(request.top, 3.0 * 900.0 - 84.0);
    assert_eq!(request.behavior, ScrollBehavior::Smooth);
    assert!(!menu.is_open());

    spy.observe([IntersectionEntry::new("values", 0.75, true)]);
    assert_eq!(spy.active(), &"values");
}

#[test]
fn portfolio_page_has_no_values_anchor() {
    let config = SiteConfig::portfolio();
    let page = RenderedPage::for_config(&config);
    let mut menu = MobileMenu::new();

    let outcome = config.anchor_scroller().activate("#values", &page, &mut menu);
    assert!(outcome.prevent_default);
    assert!(outcome.scroll.is_none());
}

#[test]
fn slider_cycles_with_simulated_clock() {
    let config = SiteConfig::portfolio();
    assert_eq!(config.hero_visual, HeroVisual::Slider);

    let mut rotator = config.slide_rotator().unwrap();
    assert_eq!(rotator.len(), 3);
    assert_eq!(rotator.tick(Duration::from_millis(3 * 4000)), 3);
    assert_eq!(rotator.current(), 0);

    rotator.select(2).unwrap();
    rotator.tick(Duration::from_millis(4000));
    assert_eq!(rotator.current(), 0);
}

#[test]
fn custom_config_from_json_drives_controllers() {
    let json = r#"{
        "name": "compact",
        "sections": [{ "id": "home" }, { "id": "contact", "threshold": 0.3 }],
        "hero_visual": "rotating_mesh",
        "about_panel": "quotes",
        "header_offset": 60.0,
        "slide_interval_ms": 1000,
        "mesh_step": 0.5
    }"#;
    let config = SiteConfig::from_json(json).unwrap();
    let page = RenderedPage::for_config(&config);

    let mut spy = config.section_observer().unwrap();
    spy.attach(&page);
    spy.observe([IntersectionEntry::new("contact", 0.35, true)]);
    assert_eq!(spy.active(), &"contact");

    let mut menu = MobileMenu::new();
    let outcome = config.anchor_scroller().activate("#contact", &page, &mut menu);
    assert_eq!(outcome.scroll.map(|s| s.top), Some(900.0 - 60.0));

    let mut rotator = config.slide_rotator().unwrap();
    assert_eq!(rotator.tick(Duration::from_millis(2500)), 2);

    let mut mesh = config.rotating_mesh();
    assert!((mesh.on_frame().x.radians() - 0.5).abs() < 1e-12);
}

#[test]
fn invalid_json_config_is_rejected() {
    let json = r#"{
        "name": "broken",
        "sections": [],
        "hero_visual": "slider",
        "about_panel": "metrics"
    }"#;
    assert!(matches!(
        SiteConfig::from_json(json),
        Err(SiteError::InvalidConfig(_))
    ));
}
