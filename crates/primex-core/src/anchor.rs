//! In-page anchor navigation
//!
//! Activating a `#section` link suppresses the browser jump, closes the
//! mobile menu and, when the target exists, asks for a smooth scroll that
//! leaves the fixed header clear of the section top.

use crate::menu::MobileMenu;
use crate::scroll_spy::HEADER_OFFSET_PX;

/// Geometry of named page regions
pub trait RegionLookup {
    /// Top of the region relative to the document, or `None` if the page
    /// has no element with that id.
    fn region_top(&self, id: &str) -> Option<f64>;

    fn contains(&self, id: &str) -> bool {
        self.region_top(id).is_some()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollBehavior {
    Smooth,
    Instant,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollRequest {
    pub top: f64,
    pub behavior: ScrollBehavior,
}

/// What the click handler should do
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnchorOutcome {
    pub prevent_default: bool,
    pub scroll: Option<ScrollRequest>,
}

impl AnchorOutcome {
    fn passthrough() -> Self {
        Self {
            prevent_default: false,
            scroll: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnchorScroller {
    header_offset: f64,
}

impl AnchorScroller {
    pub fn new(header_offset: f64) -> Self {
        Self { header_offset }
    }

    pub fn header_offset(&self) -> f64 {
        self.header_offset
    }

    pub fn activate(
        &self,
        href: &str,
        regions: &impl RegionLookup,
        menu: &mut MobileMenu,
    ) -> AnchorOutcome {
        let Some(target) = href.strip_prefix('#') else {
            return AnchorOutcome::passthrough();
        };

        menu.close();

        let scroll = if target.is_empty() {
            None
        } else {
            regions.region_top(target).map(|top| ScrollRequest {
                top: top - self.header_offset,
                behavior: ScrollBehavior::Smooth,
            })
        };

        if scroll.is_none() {
            tracing::debug!(target, "anchor target not found");
        }

        AnchorOutcome {
            prevent_default: true,
            scroll,
        }
    }
}

impl Default for AnchorScroller {
    fn default() -> Self {
        Self::new(HEADER_OFFSET_PX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    struct Page(HashMap<&'static str, f64>);

    impl RegionLookup for Page {
        fn region_top(&self, id: &str) -> Option<f64> {
            self.0.get(id).copied()
        }
    }

    fn page() -> Page {
        Page(HashMap::from([
            ("home", 0.0),
            ("services", 920.0),
            ("about", 1850.5),
            ("contact", 4200.0),
        ]))
    }

    #[test]
    fn test_existing_target_scrolls_below_header() {
        let scroller = AnchorScroller::default();
        let mut menu = MobileMenu::new();
        for (id, top) in [("home", 0.0), ("services", 920.0), ("about", 1850.5), ("contact", 4200.0)] {
            let outcome = scroller.activate(&format!("#{id}"), &page(), &mut menu);
            assert!(outcome.prevent_default);
            assert_eq!(
                outcome.scroll,
                Some(ScrollRequest {
                    top: top - 84.0,
                    behavior: ScrollBehavior::Smooth
                })
            );
        }
    }

    #[test]
    fn test_missing_target_is_a_no_op() {
        let scroller = AnchorScroller::default();
        let mut menu = MobileMenu::new();
        let outcome = scroller.activate("#values", &page(), &mut menu);
        assert!(outcome.prevent_default);
        assert_eq!(outcome.scroll, None);

        let outcome = scroller.activate("#", &page(), &mut menu);
        assert_eq!(outcome.scroll, None);
    }

    #[test]
    fn test_external_links_pass_through() {
        let scroller = AnchorScroller::default();
        let mut menu = MobileMenu::new();
        menu.toggle();
        let outcome = scroller.activate("https://x.com/primexconsults", &page(), &mut menu);
        assert_eq!(outcome, AnchorOutcome::passthrough());
        assert!(menu.is_open());
    }

    #[test]
    fn test_anchor_closes_open_menu() {
        let scroller = AnchorScroller::default();
        for href in ["#contact", "#does-not-exist"] {
            let mut menu = MobileMenu::new();
            menu.toggle();
            scroller.activate(href, &page(), &mut menu);
            assert!(!menu.is_open(), "{href} left the menu open");
        }
    }

    #[test]
    fn test_custom_offset() {
        let scroller = AnchorScroller::new(0.0);
        let mut menu = MobileMenu::new();
        let outcome = scroller.activate("#services", &page(), &mut menu);
        assert_eq!(outcome.scroll.map(|s| s.top), Some(920.0));
    }
}
