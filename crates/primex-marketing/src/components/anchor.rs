//! In-page links and the shared page state they drive

use crate::browser::{self, DomRegions};
use leptos::*;
use primex_core::{AnchorScroller, MobileMenu, SectionId};

/// State shared by the nav, section links and the scroll-spy
#[derive(Clone, Copy)]
pub struct PageContext {
    /// Written only by the scroll-spy subscription
    pub active: RwSignal<SectionId>,
    pub menu: RwSignal<MobileMenu>,
    pub scroller: AnchorScroller,
}

impl PageContext {
    pub fn new(first: SectionId, scroller: AnchorScroller) -> Self {
        Self {
            active: create_rw_signal(first),
            menu: create_rw_signal(MobileMenu::new()),
            scroller,
        }
    }

    pub fn is_active(&self, id: &SectionId) -> bool {
        self.active.with(|active| active == id)
    }

    pub fn menu_open(&self) -> bool {
        self.menu.with(|m| m.is_open())
    }

    pub fn toggle_menu(&self) {
        self.menu.update(|m| {
            m.toggle();
        });
    }

    pub fn follow(&self, ev: &ev::MouseEvent, href: &str) {
        let scroller = self.scroller;
        let mut outcome = None;
        self.menu
            .update(|menu| outcome = Some(scroller.activate(href, &DomRegions, menu)));

        let Some(outcome) = outcome else { return };
        if outcome.prevent_default {
            ev.prevent_default();
        }
        if let Some(request) = outcome.scroll {
            browser::scroll_to(request);
        }
    }
}

pub fn use_page() -> PageContext {
    // Every page that renders anchors provides the context first.
    use_context::<PageContext>().unwrap_or_else(|| {
        tracing::warn!("anchor rendered outside a landing page");
        PageContext::new(SectionId::new("home"), AnchorScroller::default())
    })
}

/// `<a href="#...">` that scrolls smoothly below the fixed header
#[component]
pub fn AnchorLink(
    #[prop(into)] href: String,
    #[prop(into, optional)] class: MaybeSignal<String>,
    children: Children,
) -> impl IntoView {
    let page = use_page();
    let target = href.clone();

    view! {
        <a
            href=href
            class=move || class.get()
            on:click=move |ev| page.follow(&ev, &target)
        >
            {children()}
        </a>
    }
}
