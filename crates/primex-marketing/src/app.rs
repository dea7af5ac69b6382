//! Main application component

use crate::pages::*;
use leptos::*;
use leptos_meta::*;
use leptos_router::*;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Stylesheet id="leptos" href="/pkg/primex-marketing.css"/>
        <Title text="Primex Business | Web3 & Blockchain Consulting"/>
        <Meta name="description" content="Web3 consulting, smart contract development, DeFi and security audits."/>
        <Router fallback=|| view! { <NotFoundPage/> }.into_view()>
            <Routes>
                <Route path="/" view=LandingPage/>
                <Route path="/:variant" view=LandingPage/>
            </Routes>
        </Router>
    }
}
