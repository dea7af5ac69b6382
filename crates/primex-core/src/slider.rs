//! Portfolio slider

use crate::observable::{Observable, SubscriptionId};
use crate::{SiteError, SiteResult};
use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(4000);

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slide {
    pub id: u32,
    /// Asset path under the site root
    pub image: String,
    pub title: String,
    pub description: String,
}

impl Slide {
    pub fn new(id: u32, image: &str, title: &str, description: &str) -> Self {
        Self {
            id,
            image: image.to_string(),
            title: title.to_string(),
            description: description.to_string(),
        }
    }
}

/// An index change, for enter/exit animation.
///
/// The outgoing slide finishes exiting before the incoming one mounts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlideTransition {
    pub outgoing: Option<usize>,
    pub incoming: usize,
}

pub struct SlideRotator {
    slides: Vec<Slide>,
    current: usize,
    interval: Duration,
    /// Time since the last timer firing
    elapsed: Duration,
    transition: SlideTransition,
    changes: Observable<usize>,
}

impl SlideRotator {
    pub fn new(slides: Vec<Slide>, interval: Duration) -> SiteResult<Self> {
        if slides.is_empty() {
            return Err(SiteError::EmptySlides);
        }
        if interval.is_zero() {
            return Err(SiteError::InvalidConfig("slide interval must be non-zero".into()));
        }
        Ok(Self {
            slides,
            current: 0,
            interval,
            elapsed: Duration::ZERO,
            transition: SlideTransition {
                outgoing: None,
                incoming: 0,
            },
            changes: Observable::new(),
        })
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn current_slide(&self) -> &Slide {
        &self.slides[self.current]
    }

    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn transition(&self) -> SlideTransition {
        self.transition
    }

    /// One timer firing.
    pub fn advance(&mut self) -> usize {
        let next = (self.current + 1) % self.slides.len();
        self.set(next);
        self.current
    }

    /// Jump straight to a slide. The timer phase is left alone.
    pub fn select(&mut self, index: usize) -> SiteResult<()> {
        if index >= self.slides.len() {
            return Err(SiteError::SlideOutOfRange {
                index,
                len: self.slides.len(),
            });
        }
        self.set(index);
        Ok(())
    }

    /// Drive the timer from a simulated clock. Returns how many times it
    /// fired.
    pub fn tick(&mut self, elapsed: Duration) -> u32 {
        self.elapsed += elapsed;
        let mut fired = 0;
        while self.elapsed >= self.interval {
            self.elapsed -= self.interval;
            self.advance();
            fired += 1;
        }
        fired
    }

    pub fn subscribe(&mut self, listener: impl FnMut(&usize) + 'static) -> SubscriptionId {
        self.changes.subscribe(listener)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.changes.unsubscribe(id)
    }

    fn set(&mut self, index: usize) {
        if index == self.current {
            return;
        }
        tracing::trace!(from = self.current, to = index, "slide change");
        self.transition = SlideTransition {
            outgoing: Some(self.current),
            incoming: index,
        };
        self.current = index;
        self.changes.publish(&self.current);
    }
}
