//! Landing page components

mod anchor;
mod backdrop;
mod cards;
mod contact_form;
mod cube;
mod footer;
mod nav;
mod sections;
mod slider;

pub use anchor::{use_page, AnchorLink, PageContext};
pub use backdrop::AnimatedBackground;
pub use cards::*;
pub use contact_form::ContactFormPanel;
pub use cube::SpinningCube;
pub use footer::Footer;
pub use nav::SiteNav;
pub use sections::*;
pub use slider::PortfolioSlider;
