//! Card components for the landing page

use super::anchor::AnchorLink;
use leptos::*;
use primex_core::content::{Metric, Quote, Service, TechLogo, Value};

#[component]
pub fn ServiceCard(service: Service, index: usize) -> impl IntoView {
    view! {
        <div
            class="relative p-6 rounded-2xl bg-[#041022] border border-white/5 hover:border-cyan-400/50 transition-all hover:scale-[1.02] shadow-[0_12px_50px_rgba(2,6,23,0.6)] group animate-fade-up"
            style=format!("animation-delay: {:.2}s", index as f32 * 0.08)
        >
            <div class="flex items-center gap-4 mb-3">
                <span class=format!("text-2xl transition-colors group-hover:text-white {}", service.accent)>
                    {service.icon}
                </span>
                <h3 class="text-xl font-semibold text-white">{service.title}</h3>
            </div>
            <p class="text-gray-300 text-sm mb-4">{service.description}</p>
            <ul class="list-disc list-inside space-y-1 text-sm text-gray-300 mb-4">
                {service.features.into_iter().map(|feature| view! { <li>{feature}</li> }).collect_view()}
            </ul>
            <AnchorLink href="#contact" class="text-cyan-300 font-medium hover:underline">
                "Learn More"
            </AnchorLink>
        </div>
    }
}

#[component]
pub fn MetricWidget(metric: Metric) -> impl IntoView {
    view! {
        <div
            class="p-6 rounded-xl bg-[#031026] border border-cyan-500/10 shadow-xl hover:border-cyan-500/40 transition-all relative overflow-hidden h-full flex flex-col justify-between animate-fade-up"
            style=format!("animation-delay: {:.1}s", metric.delay)
        >
            <div class="absolute top-0 right-0 w-16 h-16 bg-cyan-400/10 rounded-full blur-2xl opacity-40 transform translate-x-1/2 -translate-y-1/2"></div>
            <p class="text-4xl md:text-5xl font-extrabold text-transparent bg-clip-text bg-gradient-to-r from-cyan-400 to-purple-400 mb-2">
                {metric.stat}
            </p>
            <p class="text-gray-300 text-base font-medium">{metric.description}</p>
        </div>
    }
}

#[component]
pub fn QuoteCard(quote: Quote) -> impl IntoView {
    view! {
        <figure class="p-6 rounded-xl bg-[#031026] border border-cyan-500/10 shadow-xl">
            <blockquote class="text-gray-200 italic mb-4">"\""{quote.text}"\""</blockquote>
            <figcaption>
                <p class="font-semibold text-white">{quote.author}</p>
                <p class="text-sm text-gray-400">{quote.role}</p>
            </figcaption>
        </figure>
    }
}

#[component]
pub fn ValueCard(value: Value) -> impl IntoView {
    view! {
        <div class="p-6 rounded-2xl bg-[#041022] border border-white/5 text-center">
            <div class="text-3xl mb-3">{value.icon}</div>
            <h3 class="text-lg font-semibold text-white mb-2">{value.title}</h3>
            <p class="text-sm text-gray-400">{value.description}</p>
        </div>
    }
}

#[component]
pub fn TechBadge(logo: TechLogo) -> impl IntoView {
    view! {
        <div class="flex flex-col items-center gap-2 p-4 rounded-xl bg-white/5 text-gray-300">
            <span class="text-3xl">{logo.icon}</span>
            <span class="text-sm">{logo.name}</span>
        </div>
    }
}
