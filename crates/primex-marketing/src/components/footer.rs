use super::anchor::AnchorLink;
use leptos::*;
use primex_core::content::{CONTACT_EMAIL, COPYRIGHT, TAGLINE};
use primex_core::SectionId;

#[component]
pub fn Footer(sections: Vec<SectionId>) -> impl IntoView {
    view! {
        <footer class="py-10 px-6 bg-black/40 border-t border-white/5">
            <div class="max-w-6xl mx-auto text-center text-gray-400">
                <div class="mb-4">
                    <h3 class="text-white font-semibold">"Primex Business"</h3>
                    <p class="text-sm">{TAGLINE}</p>
                </div>
                <div class="flex justify-center gap-6 mb-4">
                    {sections
                        .into_iter()
                        .filter(|id| id != &"home")
                        .map(|id| view! {
                            <AnchorLink href=id.href() class="hover:text-white">{id.label()}</AnchorLink>
                        })
                        .collect_view()}
                </div>
                <p class="text-sm">{CONTACT_EMAIL}</p>
                <p class="text-xs mt-4">{COPYRIGHT}</p>
            </div>
        </footer>
    }
}
