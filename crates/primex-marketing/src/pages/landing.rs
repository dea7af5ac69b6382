//! The single landing page, rendered for a site variant

use crate::browser::{self, SpyHandle};
use crate::components::*;
use crate::pages::NotFoundPage;
use leptos::*;
use leptos_router::*;
use primex_core::{HeroVisual, SectionId, SiteConfig, SiteResult};

#[component]
pub fn LandingPage() -> impl IntoView {
    let params = use_params_map();
    let variant = move || params.with(|p| p.get("variant").cloned());

    move || match resolve(variant()) {
        Ok(config) => view! { <Landing config=config/> }.into_view(),
        Err(err) => {
            tracing::debug!(%err, "no such site variant");
            view! { <NotFoundPage message=err.to_string()/> }.into_view()
        }
    }
}

fn resolve(variant: Option<String>) -> SiteResult<SiteConfig> {
    let config = match variant {
        Some(name) => SiteConfig::preset(&name)?,
        None => SiteConfig::default(),
    };
    config.validate()?;
    Ok(config)
}

#[component]
fn Landing(config: SiteConfig) -> impl IntoView {
    let spy = match config.section_observer() {
        Ok(spy) => spy,
        Err(err) => return view! { <NotFoundPage message=err.to_string()/> }.into_view(),
    };

    let page = PageContext::new(spy.active().clone(), config.anchor_scroller());
    provide_context(page);

    let spy = store_value(spy);
    spy.update_value(|spy| {
        spy.subscribe(move |id| page.active.set(id.clone()));
    });

    // Observers attach after the sections are in the document.
    let observers = store_value(None::<SpyHandle>);
    create_effect(move |_| {
        request_animation_frame(move || {
            observers.try_update_value(|handle| *handle = browser::observe_sections(spy));
        });
    });
    on_cleanup(move || {
        observers.try_update_value(|handle| handle.take());
    });

    let ids: Vec<SectionId> = config.sections.iter().map(|s| s.id.clone()).collect();
    let nav_ids = ids.clone();
    let show_values = config.has_section("values");
    let about_panel = config.about_panel;

    let (mesh, slider) = match config.hero_visual {
        HeroVisual::RotatingMesh => (Some(config.rotating_mesh()), None),
        HeroVisual::Slider => match config.slide_rotator() {
            Ok(rotator) => (None, Some(rotator)),
            Err(err) => {
                tracing::warn!(%err, "portfolio slider disabled");
                (None, None)
            }
        },
    };

    view! {
        <div class="min-h-screen font-inter text-gray-100 bg-gradient-to-b from-[#060c18] via-[#01030a] to-[#000000] relative overflow-hidden">
            <SiteNav sections=nav_ids/>
            <main class="pt-6">
                <Hero mesh=mesh/>
                <ServicesSection/>
                <AboutSection panel=about_panel slider=slider/>
                {show_values.then(|| view! { <ValuesSection/> })}
                <MissionSection/>
                <CtaBanner/>
                <ContactSection/>
                <Footer sections=ids/>
            </main>
        </div>
    }
    .into_view()
}

#[cfg(test)]
mod tests {
    use super::*;
    use primex_core::{AboutPanel, SiteError};

    #[test]
    fn test_root_route_serves_portfolio() {
        let config = resolve(None).unwrap();
        assert_eq!(config.name, "portfolio");
        assert_eq!(config.hero_visual, HeroVisual::Slider);
    }

    #[test]
    fn test_named_variant() {
        let config = resolve(Some("spatial".into())).unwrap();
        assert_eq!(config.hero_visual, HeroVisual::RotatingMesh);
        assert_eq!(config.about_panel, AboutPanel::Quotes);
    }

    #[test]
    fn test_unknown_variant() {
        assert!(matches!(
            resolve(Some("pricing".into())),
            Err(SiteError::UnknownVariant(_))
        ));
    }
}
