use leptos::*;

#[component]
pub fn NotFound(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <div class="min-h-screen flex items-center justify-center bg-[#01030a] text-gray-100 px-6">
            <div class="text-center">
                <h1 class="text-4xl font-bold mb-4">"Page not found"</h1>
                <p class="text-gray-400 mb-8">{message}</p>
                <a href="/" class="px-5 py-3 rounded-full bg-gradient-to-r from-cyan-400 to-violet-500 text-black font-semibold">
                    "Back to Primex Business"
                </a>
            </div>
        </div>
    }
}

/// [`NotFound`] served with a 404 status
#[component]
pub fn NotFoundPage(#[prop(optional, into)] message: Option<String>) -> impl IntoView {
    #[cfg(feature = "ssr")]
    {
        if let Some(response) = use_context::<leptos_axum::ResponseOptions>() {
            response.set_status(axum::http::StatusCode::NOT_FOUND);
        }
    }

    let message = message.unwrap_or_else(|| "There is nothing at this address.".into());
    view! { <NotFound message=message/> }
}
