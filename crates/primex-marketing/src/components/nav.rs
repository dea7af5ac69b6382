//! Fixed header with scroll-spy highlighting

use super::anchor::{use_page, AnchorLink};
use leptos::*;
use primex_core::SectionId;

#[component]
pub fn SiteNav(sections: Vec<SectionId>) -> impl IntoView {
    let page = use_page();
    let mobile_sections = sections.clone();

    view! {
        <header class="fixed w-full top-0 z-50">
            <div class="backdrop-blur-md bg-black/40 border-b border-white/5">
                <nav class="max-w-6xl mx-auto flex items-center justify-between px-6 md:px-8 py-4">
                    // Logo
                    <div class="flex items-center space-x-2">
                        <div class="w-8 h-8 rounded-full bg-gradient-to-r from-cyan-400 to-violet-500"></div>
                        <span class="text-xl font-bold text-white">"Primex Business"</span>
                    </div>

                    // Desktop Nav
                    <ul class="hidden md:flex items-center gap-8">
                        {sections.into_iter().map(|id| {
                            let label = id.label();
                            let href = id.href();
                            let marker = id.clone();
                            view! {
                                <li class="relative">
                                    <AnchorLink
                                        href=href
                                        class=Signal::derive(move || {
                                            if page.is_active(&id) {
                                                "transition-all duration-300 px-1 py-1 text-cyan-300 font-semibold".to_string()
                                            } else {
                                                "transition-all duration-300 px-1 py-1 text-gray-300 hover:text-white".to_string()
                                            }
                                        })
                                    >
                                        {label}
                                    </AnchorLink>
                                    <Show when=move || page.is_active(&marker)>
                                        <span class="absolute left-0 -bottom-2 h-0.5 w-full bg-cyan-400 rounded"></span>
                                    </Show>
                                </li>
                            }
                        }).collect_view()}
                    </ul>

                    <div class="flex items-center gap-4">
                        <AnchorLink href="#contact" class="hidden md:inline-block">
                            <span class="px-4 py-2 rounded-full bg-gradient-to-r from-cyan-400 to-violet-500 text-black font-medium hover:scale-[1.02] transition-transform">
                                "Get Started"
                            </span>
                        </AnchorLink>

                        // Mobile menu button
                        <button
                            class="md:hidden text-gray-300 z-50"
                            aria-label="Toggle mobile menu"
                            on:click=move |_| page.toggle_menu()
                        >
                            <Show
                                when=move || page.menu_open()
                                fallback=|| view! {
                                    <svg class="h-6 w-6" fill="none" viewBox="0 0 24 24" stroke="currentColor">
                                        <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M4 6h16M4 12h16M4 18h16"/>
                                    </svg>
                                }
                            >
                                <svg class="h-6 w-6" fill="none" viewBox="0 0 24 24" stroke="currentColor">
                                    <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M6 18L18 6M6 6l12 12"/>
                                </svg>
                            </Show>
                        </button>
                    </div>
                </nav>
            </div>

            // Mobile menu
            <Show when=move || page.menu_open()>
                <div class="md:hidden fixed top-0 left-0 w-full h-screen backdrop-blur-md bg-black/60 z-40 animate-fade-up">
                    <ul class="flex flex-col items-center justify-center space-y-8 pt-24 pb-8">
                        {mobile_sections.iter().cloned().map(|id| {
                            let label = id.label();
                            let href = id.href();
                            view! {
                                <li>
                                    <AnchorLink
                                        href=href
                                        class=Signal::derive(move || {
                                            if page.is_active(&id) {
                                                "text-2xl font-bold transition-all duration-300 text-cyan-300".to_string()
                                            } else {
                                                "text-2xl font-bold transition-all duration-300 text-gray-300 hover:text-white".to_string()
                                            }
                                        })
                                    >
                                        {label}
                                    </AnchorLink>
                                </li>
                            }
                        }).collect_view()}
                        <li>
                            <AnchorLink href="#contact">
                                <span class="inline-block px-6 py-3 rounded-full bg-gradient-to-r from-cyan-400 to-violet-500 text-black font-semibold mt-4">
                                    "Get Started"
                                </span>
                            </AnchorLink>
                        </li>
                    </ul>
                </div>
            </Show>
        </header>
    }
}
