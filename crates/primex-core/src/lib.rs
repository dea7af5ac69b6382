//! Primex Business site core
//!
//! Everything the landing page does that is not markup lives here as plain
//! state machines: scroll-spy, anchor scrolling, the portfolio slider, the
//! rotating cube, the mobile menu and the site configuration. The browser
//! layer only feeds events in and renders what comes out.

pub mod anchor;
pub mod config;
pub mod contact;
pub mod content;
pub mod menu;
pub mod mesh;
pub mod observable;
pub mod scroll_spy;
pub mod section;
pub mod slider;

use thiserror::Error;

pub use anchor::{AnchorOutcome, AnchorScroller, RegionLookup, ScrollBehavior, ScrollRequest};
pub use config::{AboutPanel, HeroVisual, SiteConfig};
pub use contact::{ContactForm, ServiceOption};
pub use menu::MobileMenu;
pub use mesh::{Angle, MeshPose, RotatingMesh};
pub use observable::{Observable, SubscriptionId};
pub use scroll_spy::{IntersectionEntry, ObserverOptions, RootMargin, SectionObserver, TieBreak};
pub use section::{Section, SectionId};
pub use slider::{Slide, SlideRotator, SlideTransition};

#[derive(Error, Debug)]
pub enum SiteError {
    #[error("Unknown site variant: {0}")]
    UnknownVariant(String),

    #[error("Slide list is empty")]
    EmptySlides,

    #[error("Slide index {index} out of range for {len} slides")]
    SlideOutOfRange { index: usize, len: usize },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Unknown service: {0}")]
    UnknownService(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type SiteResult<T> = Result<T, SiteError>;
