//! Landing page sections, top to bottom

use super::anchor::AnchorLink;
use super::backdrop::AnimatedBackground;
use super::cards::*;
use super::contact_form::ContactFormPanel;
use super::cube::SpinningCube;
use super::slider::PortfolioSlider;
use leptos::*;
use primex_core::content::{
    MISSION_PILLARS, MISSION_STATEMENT, METRICS, QUOTES, SERVICES, SOCIAL_LINKS, TECH_LOGOS, VALUES,
};
use primex_core::{AboutPanel, RotatingMesh, SlideRotator};

#[component]
pub fn Hero(mesh: Option<RotatingMesh>) -> impl IntoView {
    let with_image = mesh.is_none();

    view! {
        <section id="home" class="py-28 px-6 md:py-36 relative overflow-hidden">
            <AnimatedBackground with_image=with_image/>
            <div class="relative z-10 max-w-5xl mx-auto flex flex-col items-center text-center space-y-6 animate-fade-up">
                {mesh.map(|mesh| view! { <SpinningCube mesh=mesh/> })}
                <p class="inline-flex items-center gap-3 text-sm text-cyan-300">"✨ Leading Web3 Innovation"</p>
                <h1 class="text-5xl md:text-7xl font-extrabold leading-tight text-white">
                    "Empowering the "
                    <span class="text-transparent bg-clip-text bg-gradient-to-r from-cyan-300 via-indigo-400 to-purple-400">
                        "Future of Web3"
                    </span>
                    " & Blockchain"
                </h1>
                <p class="text-gray-300 max-w-xl">
                    "At Primex Business, we drive collaboration, innovation, and measurable impact across the Web3 ecosystem, "
                    "transforming ideas into production-grade blockchain solutions."
                </p>
                <div class="flex flex-wrap justify-center gap-4">
                    <AnchorLink href="#contact">
                        <span class="inline-block px-5 py-3 rounded-full bg-gradient-to-r from-cyan-400 to-purple-500 text-black font-semibold animate-pulse-scale">
                            "Start Your Web3 Journey →"
                        </span>
                    </AnchorLink>
                    <AnchorLink href="#services">
                        <span class="inline-block px-5 py-3 rounded-full border border-white/10 text-white/90 hover:scale-[1.03] transition-transform">
                            "Explore Services"
                        </span>
                    </AnchorLink>
                </div>
            </div>
        </section>
    }
}

#[component]
pub fn ServicesSection() -> impl IntoView {
    view! {
        <section id="services" class="py-20 px-6 bg-[#020617]">
            <div class="max-w-6xl mx-auto">
                <h2 class="text-3xl md:text-4xl font-bold text-white mb-6">"Our Web3 Services"</h2>
                <p class="text-gray-400 max-w-2xl mb-10">
                    "Comprehensive blockchain solutions designed to drive innovation, collaboration, and measurable impact for your business."
                </p>
                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">
                    {SERVICES.into_iter().enumerate().map(|(index, service)| view! {
                        <ServiceCard service=service index=index/>
                    }).collect_view()}
                </div>
                <div class="text-center mt-10">
                    <AnchorLink href="#services" class="inline-block px-6 py-3 rounded-full text-white/90 border border-white/5 hover:bg-white/5 transition">
                        "Explore All Services"
                    </AnchorLink>
                </div>
            </div>
        </section>
    }
}

#[component]
pub fn AboutSection(panel: AboutPanel, slider: Option<SlideRotator>) -> impl IntoView {
    let left = match panel {
        AboutPanel::Metrics => view! {
            <div class="grid grid-cols-2 gap-4">
                {METRICS.into_iter().map(|metric| view! { <MetricWidget metric=metric/> }).collect_view()}
            </div>
        }
        .into_view(),
        AboutPanel::Quotes => view! {
            <div class="space-y-4">
                {QUOTES.into_iter().map(|quote| view! { <QuoteCard quote=quote/> }).collect_view()}
            </div>
        }
        .into_view(),
    };

    let right = match slider {
        Some(rotator) => view! { <PortfolioSlider rotator=rotator/> }.into_view(),
        None => view! {
            <div class="relative w-full rounded-2xl bg-[#041022] border border-white/5 p-6">
                <h4 class="text-lg font-semibold text-white mb-4">"Our Technology Stack"</h4>
                <div class="grid grid-cols-2 sm:grid-cols-4 gap-4">
                    {TECH_LOGOS.into_iter().map(|logo| view! { <TechBadge logo=logo/> }).collect_view()}
                </div>
            </div>
        }
        .into_view(),
    };

    view! {
        <section id="about" class="py-20 px-6 relative">
            <AnimatedBackground with_image=true/>
            <div class="relative z-10 max-w-6xl mx-auto grid md:grid-cols-2 gap-10 items-center">
                <div>
                    <h2 class="text-3xl font-bold text-white mb-4">"Pioneering the Web3 Revolution"</h2>
                    <p class="text-gray-300 mb-6">
                        "At Primex Business, we're not just building technologies. We architect solutions that create measurable impact, "
                        "combining blockchain expertise with real-world product experience to deliver reliable outcomes."
                    </p>
                    {left}
                    <div class="mt-6">
                        <AnchorLink href="#contact" class="inline-block px-5 py-3 rounded-full bg-gradient-to-r from-cyan-400 to-purple-500 text-black font-semibold">
                            "Partner With Us"
                        </AnchorLink>
                    </div>
                </div>
                <div class="relative min-h-[400px] flex items-center justify-center">
                    {right}
                </div>
            </div>
        </section>
    }
}

#[component]
pub fn ValuesSection() -> impl IntoView {
    view! {
        <section id="values" class="py-20 px-6">
            <div class="max-w-6xl mx-auto">
                <h2 class="text-3xl md:text-4xl font-bold text-white mb-10 text-center">"Our Values"</h2>
                <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-4 gap-6">
                    {VALUES.into_iter().map(|value| view! { <ValueCard value=value/> }).collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
pub fn MissionSection() -> impl IntoView {
    view! {
        <section id="mission" class="py-20 px-6 bg-[#020617]">
            <div class="max-w-6xl mx-auto grid md:grid-cols-2 gap-12 items-center">
                <div class="relative p-8 rounded-2xl bg-[#041022] border border-white/5 shadow-[0_20px_60px_rgba(2,6,23,0.6)]">
                    <div class="flex items-center gap-4 mb-4 text-cyan-400">
                        <div class="w-10 h-10 rounded-full bg-cyan-400/20 flex items-center justify-center">"💡"</div>
                        <h2 class="text-2xl md:text-3xl font-bold text-white">"Our Mission"</h2>
                    </div>
                    <p class="text-gray-300 leading-relaxed text-lg">{MISSION_STATEMENT}</p>
                    <ul class="mt-6 space-y-2 text-gray-300">
                        {MISSION_PILLARS.into_iter().map(|pillar| view! {
                            <li class="flex items-center gap-2">
                                <svg class="w-4 h-4 text-cyan-400" fill="none" stroke="currentColor" viewBox="0 0 24 24">
                                    <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M5 13l4 4L19 7"/>
                                </svg>
                                {pillar}
                            </li>
                        }).collect_view()}
                    </ul>
                </div>
                <div class="relative hidden md:block">
                    <div class="relative w-full aspect-video rounded-3xl overflow-hidden shadow-2xl">
                        <img src="/assets/Blockchain.png" alt="Abstract Web3 illustration" class="w-full h-full object-cover"/>
                        <div class="absolute inset-0 bg-gradient-to-t from-black/80 to-transparent flex items-end p-8">
                            <h3 class="text-white text-lg font-semibold">"Building a Decentralized Future, Together."</h3>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
pub fn CtaBanner() -> impl IntoView {
    view! {
        <div class="w-full bg-gradient-to-r from-cyan-600/10 to-purple-600/10 border-y border-cyan-400/20 py-16 px-6">
            <div class="max-w-4xl mx-auto text-center">
                <h2 class="text-3xl md:text-5xl font-extrabold text-white mb-4 leading-tight">
                    "Ready to "
                    <span class="text-transparent bg-clip-text bg-gradient-to-r from-cyan-300 to-purple-300">"Launch Your Vision"</span>
                    "?"
                </h2>
                <p class="text-gray-300 mb-8 max-w-xl mx-auto">
                    "Our team is ready to provide the expertise needed to navigate the complexities of DeFi and blockchain development."
                </p>
                <AnchorLink href="#contact" class="inline-block">
                    <span class="inline-block px-8 py-3 rounded-full bg-gradient-to-r from-cyan-400 to-violet-500 text-black font-semibold hover:scale-[1.05] transition-transform">
                        "Get a Free Consultation"
                    </span>
                </AnchorLink>
            </div>
        </div>
    }
}

#[component]
pub fn ContactSection() -> impl IntoView {
    view! {
        <section id="contact" class="py-20 px-6">
            <div class="max-w-3xl mx-auto">
                <h2 class="text-3xl font-bold text-white text-center mb-6">"Let's Build Something Revolutionary"</h2>
                <p class="text-gray-400 text-center mb-8">
                    "Reach out to our experts to discuss your project, timelines, and technical requirements."
                </p>
                <ContactFormPanel/>
                <div class="mt-8 flex justify-center space-x-6">
                    {SOCIAL_LINKS.into_iter().map(|link| view! {
                        <a
                            href=link.href
                            target="_blank"
                            rel="noopener noreferrer"
                            aria-label=link.name
                            class="text-2xl text-gray-500 hover:text-cyan-400 transition-colors"
                        >
                            {link.icon}
                        </a>
                    }).collect_view()}
                </div>
            </div>
        </section>
    }
}
