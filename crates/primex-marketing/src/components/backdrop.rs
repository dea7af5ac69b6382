//! Floating hero backdrop

use leptos::*;

#[component]
pub fn AnimatedBackground(#[prop(optional)] with_image: bool) -> impl IntoView {
    view! {
        <div class="absolute inset-0 z-0 overflow-hidden pointer-events-none">
            <Show when=move || with_image>
                <img
                    src="/assets/Crypto.jpg"
                    alt="Floating crypto pattern"
                    class="absolute top-1/2 left-1/2 w-[800px] h-auto object-cover opacity-20 animate-drift"
                />
            </Show>
            <div
                class="absolute top-[10%] left-[5%] w-48 h-48 rounded-full mix-blend-screen filter blur-3xl opacity-50 animate-float-slow"
                style="background: rgba(100, 150, 255, 0.4)"
            ></div>
            <div
                class="absolute bottom-[20%] right-[15%] w-56 h-56 rounded-full mix-blend-screen filter blur-3xl opacity-50 animate-float-slower"
                style="background: rgba(255, 100, 200, 0.4)"
            ></div>
            <div
                class="absolute bottom-[10%] left-[40%] w-24 h-24 rounded-full mix-blend-screen filter blur-3xl opacity-50 animate-float-slow"
                style="background: rgba(100, 255, 200, 0.3)"
            ></div>
        </div>
    }
}
