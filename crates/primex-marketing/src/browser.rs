//! DOM glue for the core controllers
//!
//! Everything here only runs in the browser: from effects, event handlers
//! or animation callbacks. A missing window, document or element is
//! treated as "skip".

use leptos::*;
use primex_core::{
    IntersectionEntry, RegionLookup, ScrollBehavior, ScrollRequest, SectionId, SectionObserver,
};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

/// Region geometry read from the live document
pub struct DomRegions;

impl RegionLookup for DomRegions {
    fn region_top(&self, id: &str) -> Option<f64> {
        let element = document().get_element_by_id(id)?;
        let scroll_y = window().scroll_y().unwrap_or(0.0);
        Some(element.get_bounding_client_rect().top() + scroll_y)
    }
}

pub fn scroll_to(request: ScrollRequest) {
    let options = web_sys::ScrollToOptions::new();
    options.set_top(request.top);
    options.set_behavior(match request.behavior {
        ScrollBehavior::Smooth => web_sys::ScrollBehavior::Smooth,
        ScrollBehavior::Instant => web_sys::ScrollBehavior::Instant,
    });
    window().scroll_to_with_scroll_to_options(&options);
}

type EntriesCallback = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

/// Live intersection observers for the scroll-spy. Dropping the handle
/// disconnects them.
pub struct SpyHandle {
    observers: Vec<IntersectionObserver>,
    _callback: EntriesCallback,
}

impl Drop for SpyHandle {
    fn drop(&mut self) {
        for observer in &self.observers {
            observer.disconnect();
        }
    }
}

/// Attach one observer per section present in the document.
pub fn observe_sections(spy: StoredValue<SectionObserver>) -> Option<SpyHandle> {
    let callback: EntriesCallback = Closure::new(
        move |entries: js_sys::Array, _observer: IntersectionObserver| {
            let batch: Vec<IntersectionEntry> = entries
                .iter()
                .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
                .map(|entry| IntersectionEntry {
                    section: SectionId::new(entry.target().id()),
                    ratio: entry.intersection_ratio(),
                    is_intersecting: entry.is_intersecting(),
                })
                .collect();
            spy.try_update_value(|spy| spy.observe(batch));
        },
    );

    let targets = spy.try_update_value(|spy| {
        let observed = spy.attach(&DomRegions).to_vec();
        let margin = spy.options().root_margin.to_css();
        observed
            .into_iter()
            .filter_map(|id| {
                let section = spy.sections().iter().find(|s| s.id == id)?;
                let thresholds = spy.thresholds_for(section);
                Some((id, thresholds, margin.clone()))
            })
            .collect::<Vec<_>>()
    })?;

    let mut observers = Vec::with_capacity(targets.len());
    for (id, thresholds, margin) in targets {
        let Some(element) = document().get_element_by_id(id.as_str()) else {
            continue;
        };
        let init = IntersectionObserverInit::new();
        let thresholds: js_sys::Array = thresholds.into_iter().map(JsValue::from_f64).collect();
        init.set_threshold(&thresholds);
        init.set_root_margin(&margin);

        match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init) {
            Ok(observer) => {
                observer.observe(&element);
                observers.push(observer);
            }
            Err(err) => tracing::warn!(section = %id, ?err, "could not create intersection observer"),
        }
    }

    tracing::debug!(count = observers.len(), "scroll-spy attached");
    Some(SpyHandle {
        observers,
        _callback: callback,
    })
}
