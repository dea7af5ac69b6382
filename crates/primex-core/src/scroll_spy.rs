//! Scroll-spy: which section is currently in view
//!
//! The browser creates one intersection observer per attached section and
//! forwards each callback batch to [`SectionObserver::observe`]. The
//! observer remembers which sections are visible across batches, decides
//! which one is active and publishes changes.

use crate::anchor::RegionLookup;
use crate::observable::{Observable, SubscriptionId};
use crate::section::{Section, SectionId};
use crate::{SiteError, SiteResult};
use serde::{Deserialize, Serialize};

/// Header height the observer root is shrunk by, in CSS pixels
pub const HEADER_OFFSET_PX: f64 = 84.0;

/// Margin applied to the observer root, mirroring CSS `rootMargin`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RootMargin {
    /// Pixels; negative shrinks the root from the top
    pub top_px: f64,
    /// Percent of the viewport height; negative shrinks from the bottom
    pub bottom_percent: f64,
}

impl RootMargin {
    pub fn none() -> Self {
        Self {
            top_px: 0.0,
            bottom_percent: 0.0,
        }
    }

    /// `-84px 0px -50% 0px`
    pub fn to_css(&self) -> String {
        format!("{}px 0px {}% 0px", self.top_px, self.bottom_percent)
    }
}

impl Default for RootMargin {
    fn default() -> Self {
        Self {
            top_px: -HEADER_OFFSET_PX,
            bottom_percent: -50.0,
        }
    }
}

/// Step between the extra ratios reported under [`TieBreak::HighestRatio`]
const RATIO_STEP: f64 = 0.1;

/// How to pick a winner when several sections qualify
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TieBreak {
    /// Last qualifying entry in processing order
    #[default]
    LastWriteWins,
    /// Largest visible ratio among every section still in view; equal
    /// ratios go to the most recently reported section
    HighestRatio,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ObserverOptions {
    pub root_margin: RootMargin,
    pub tie_break: TieBreak,
}

/// One intersection observation
#[derive(Debug, Clone, PartialEq)]
pub struct IntersectionEntry {
    pub section: SectionId,
    pub ratio: f64,
    pub is_intersecting: bool,
}

impl IntersectionEntry {
    pub fn new(section: impl Into<String>, ratio: f64, is_intersecting: bool) -> Self {
        Self {
            section: SectionId::new(section),
            ratio,
            is_intersecting,
        }
    }
}

pub struct SectionObserver {
    sections: Vec<Section>,
    options: ObserverOptions,
    observed: Vec<SectionId>,
    /// Qualifying sections and their last ratio, oldest report first
    visible: Vec<(SectionId, f64)>,
    active: SectionId,
    changes: Observable<SectionId>,
}

impl SectionObserver {
    /// The first section starts out active.
    pub fn new(sections: Vec<Section>, options: ObserverOptions) -> SiteResult<Self> {
        let active = sections
            .first()
            .map(|s| s.id.clone())
            .ok_or_else(|| SiteError::InvalidConfig("no sections to observe".into()))?;

        Ok(Self {
            sections,
            options,
            observed: Vec::new(),
            visible: Vec::new(),
            active,
            changes: Observable::new(),
        })
    }

    /// Start observing every section that has a region on the page.
    ///
    /// Sections without a region are skipped. Returns the ids now observed,
    /// in configuration order.
    pub fn attach(&mut self, regions: &impl RegionLookup) -> &[SectionId] {
        self.observed.clear();
        self.visible.clear();
        for section in &self.sections {
            if regions.contains(section.id.as_str()) {
                self.observed.push(section.id.clone());
            } else {
                tracing::debug!(section = %section.id, "no region for section, skipping");
            }
        }
        &self.observed
    }

    pub fn detach(&mut self) {
        self.observed.clear();
        self.visible.clear();
    }

    pub fn is_observing(&self, id: &SectionId) -> bool {
        self.observed.contains(id)
    }

    pub fn observed(&self) -> &[SectionId] {
        &self.observed
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn options(&self) -> &ObserverOptions {
        &self.options
    }

    pub fn active(&self) -> &SectionId {
        &self.active
    }

    /// Sections currently in view past their threshold, with their last
    /// reported ratio
    pub fn visible(&self) -> &[(SectionId, f64)] {
        &self.visible
    }

    /// Ratios at which the browser should report a section.
    ///
    /// `HighestRatio` compares ratios across sections, so each observer
    /// also reports every 0.1 of ratio above the threshold.
    pub fn thresholds_for(&self, section: &Section) -> Vec<f64> {
        let mut ratios = vec![section.threshold];
        if self.options.tie_break == TieBreak::HighestRatio && section.threshold < 1.0 {
            let mut ratio = section.threshold + RATIO_STEP;
            while ratio < 1.0 - RATIO_STEP / 2.0 {
                ratios.push(ratio);
                ratio += RATIO_STEP;
            }
            ratios.push(1.0);
        }
        ratios
    }

    /// Process one callback batch. Returns the new active section if it
    /// changed.
    pub fn observe<I>(&mut self, entries: I) -> Option<SectionId>
    where
        I: IntoIterator<Item = IntersectionEntry>,
    {
        let mut latest: Option<SectionId> = None;

        for entry in entries {
            if !self.observed.contains(&entry.section) {
                continue;
            }
            let qualifies = self.qualifies(&entry);
            self.visible.retain(|(id, _)| *id != entry.section);
            if qualifies {
                self.visible.push((entry.section.clone(), entry.ratio));
                latest = Some(entry.section);
            }
        }

        let winner = match self.options.tie_break {
            TieBreak::LastWriteWins => latest?,
            TieBreak::HighestRatio => self.most_visible()?,
        };
        if winner == self.active {
            return None;
        }

        tracing::debug!(section = %winner, "section active");
        self.active = winner;
        self.changes.publish(&self.active);
        Some(self.active.clone())
    }

    pub fn subscribe(&mut self, listener: impl FnMut(&SectionId) + 'static) -> SubscriptionId {
        self.changes.subscribe(listener)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.changes.unsubscribe(id)
    }

    fn most_visible(&self) -> Option<SectionId> {
        let mut best: Option<&(SectionId, f64)> = None;
        for candidate in &self.visible {
            if best.map_or(true, |(_, ratio)| candidate.1 >= *ratio) {
                best = Some(candidate);
            }
        }
        best.map(|(id, _)| id.clone())
    }

    fn qualifies(&self, entry: &IntersectionEntry) -> bool {
        if !entry.is_intersecting || !self.observed.contains(&entry.section) {
            return false;
        }
        self.sections
            .iter()
            .find(|s| s.id == entry.section)
            .is_some_and(|s| entry.ratio >= s.threshold)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::collections::HashMap;
    use std::rc::Rc;

    struct Page(HashMap<&'static str, f64>);

    impl RegionLookup for Page {
        fn region_top(&self, id: &str) -> Option<f64> {
            self.0.get(id).copied()
        }
    }

    fn page(ids: &[&'static str]) -> Page {
        Page(ids.iter().enumerate().map(|(i, id)| (*id, i as f64 * 800.0)).collect())
    }

    fn sections(ids: &[&str]) -> Vec<Section> {
        ids.iter().map(|id| Section::new(*id)).collect()
    }

    const IDS: [&str; 5] = ["home", "services", "about", "mission", "contact"];

    fn attached(tie_break: TieBreak) -> SectionObserver {
        let options = ObserverOptions {
            tie_break,
            ..Default::default()
        };
        let mut spy = SectionObserver::new(sections(&IDS), options).unwrap();
        spy.attach(&page(&IDS));
        spy
    }

    #[test]
    fn test_root_margin_css() {
        assert_eq!(RootMargin::default().to_css(), "-84px 0px -50% 0px");
        assert_eq!(RootMargin::none().to_css(), "0px 0px 0% 0px");
    }

    #[test]
    fn test_first_section_starts_active() {
        let spy = attached(TieBreak::LastWriteWins);
        assert_eq!(spy.active(), &"home");
    }

    #[test]
    fn test_crossing_threshold_activates_each_section() {
        let mut spy = attached(TieBreak::LastWriteWins);
        for id in IDS.iter().rev() {
            spy.observe([IntersectionEntry::new(*id, 0.6, true)]);
            assert_eq!(spy.active(), id);
        }
    }

    #[test]
    fn test_below_threshold_or_not_intersecting_is_ignored() {
        let mut spy = attached(TieBreak::LastWriteWins);
        assert_eq!(spy.observe([IntersectionEntry::new("about", 0.59, true)]), None);
        assert_eq!(spy.observe([IntersectionEntry::new("about", 0.9, false)]), None);
        assert_eq!(spy.active(), &"home");
    }

    #[test]
    fn test_last_write_wins_within_batch() {
        let mut spy = attached(TieBreak::LastWriteWins);
        let changed = spy.observe([
            IntersectionEntry::new("about", 0.95, true),
            IntersectionEntry::new("mission", 0.61, true),
        ]);
        assert_eq!(changed, Some(SectionId::new("mission")));
    }

    #[test]
    fn test_highest_ratio_wins_within_batch() {
        let mut spy = attached(TieBreak::HighestRatio);
        spy.observe([
            IntersectionEntry::new("about", 0.95, true),
            IntersectionEntry::new("mission", 0.61, true),
        ]);
        assert_eq!(spy.active(), &"about");

        spy.observe([
            IntersectionEntry::new("about", 0.1, false),
            IntersectionEntry::new("mission", 0.0, false),
            IntersectionEntry::new("services", 0.7, true),
            IntersectionEntry::new("contact", 0.7, true),
        ]);
        assert_eq!(spy.active(), &"contact");
    }

    #[test]
    fn test_highest_ratio_spans_separate_batches() {
        let mut spy = attached(TieBreak::HighestRatio);
        spy.observe([IntersectionEntry::new("about", 0.95, true)]);
        assert_eq!(spy.observe([IntersectionEntry::new("mission", 0.61, true)]), None);
        assert_eq!(spy.active(), &"about");

        // about scrolls below its threshold; mission is the only one left
        let changed = spy.observe([IntersectionEntry::new("about", 0.4, true)]);
        assert_eq!(changed, Some(SectionId::new("mission")));
        assert_eq!(spy.visible().len(), 1);
    }

    #[test]
    fn test_highest_ratio_follows_updated_ratios() {
        let mut spy = attached(TieBreak::HighestRatio);
        spy.observe([IntersectionEntry::new("about", 0.9, true)]);
        spy.observe([IntersectionEntry::new("mission", 0.7, true)]);
        spy.observe([IntersectionEntry::new("about", 0.65, true)]);
        assert_eq!(spy.active(), &"mission");

        // everything leaves: the last active section stays
        spy.observe([IntersectionEntry::new("about", 0.0, false)]);
        spy.observe([IntersectionEntry::new("mission", 0.0, false)]);
        assert!(spy.visible().is_empty());
        assert_eq!(spy.active(), &"mission");
    }

    #[test]
    fn test_last_write_wins_across_batches() {
        let mut spy = attached(TieBreak::LastWriteWins);
        spy.observe([IntersectionEntry::new("about", 0.95, true)]);
        spy.observe([IntersectionEntry::new("mission", 0.61, true)]);
        assert_eq!(spy.active(), &"mission");
    }

    #[test]
    fn test_thresholds_per_tie_break() {
        let section = Section::new("about");
        assert_eq!(attached(TieBreak::LastWriteWins).thresholds_for(&section), vec![0.6]);

        let ratios = attached(TieBreak::HighestRatio).thresholds_for(&section);
        assert_eq!(ratios.len(), 5);
        assert_eq!(ratios[0], 0.6);
        assert_eq!(ratios[ratios.len() - 1], 1.0);
        assert!(ratios.windows(2).all(|w| w[0] < w[1]));

        let full = Section {
            threshold: 1.0,
            ..Section::new("contact")
        };
        assert_eq!(attached(TieBreak::HighestRatio).thresholds_for(&full), vec![1.0]);
    }

    #[test]
    fn test_missing_region_is_skipped() {
        let mut spy = SectionObserver::new(sections(&IDS), ObserverOptions::default()).unwrap();
        let observed = spy.attach(&page(&["home", "about"])).to_vec();
        assert_eq!(observed, vec![SectionId::new("home"), SectionId::new("about")]);

        assert_eq!(spy.observe([IntersectionEntry::new("mission", 1.0, true)]), None);
        assert_eq!(spy.active(), &"home");
    }

    #[test]
    fn test_changes_are_published_once() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut spy = attached(TieBreak::LastWriteWins);
        let sink = Rc::clone(&seen);
        spy.subscribe(move |id| sink.borrow_mut().push(id.to_string()));

        spy.observe([IntersectionEntry::new("services", 0.8, true)]);
        spy.observe([IntersectionEntry::new("services", 0.9, true)]);
        spy.observe([IntersectionEntry::new("home", 0.7, true)]);

        assert_eq!(*seen.borrow(), vec!["services", "home"]);
    }

    #[test]
    fn test_detach_stops_activation() {
        let mut spy = attached(TieBreak::LastWriteWins);
        spy.observe([IntersectionEntry::new("about", 0.9, true)]);
        spy.detach();
        assert!(spy.observed().is_empty());
        assert!(spy.visible().is_empty());
        assert_eq!(spy.observe([IntersectionEntry::new("contact", 1.0, true)]), None);
    }

    #[test]
    fn test_empty_section_list_is_rejected() {
        assert!(SectionObserver::new(Vec::new(), ObserverOptions::default()).is_err());
    }
}
