//! Contact form
//!
//! Collects project details into a [`ContactForm`]. There is no submission
//! endpoint, so sending only keeps the browser from reloading the page.

use leptos::*;
use primex_core::{ContactForm, ServiceOption};

const INPUT_CLASS: &str = "p-3 rounded bg-transparent border border-white/10 text-gray-200 placeholder-gray-500";

#[component]
pub fn ContactFormPanel() -> impl IntoView {
    let form = create_rw_signal(ContactForm::default());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        form.with_untracked(|f| {
            tracing::debug!(service = ?f.service, "contact form has no submission endpoint");
        });
    };

    let on_service = move |ev: leptos::ev::Event| {
        let value = event_target_value(&ev);
        form.update(|f| {
            if let Err(err) = f.select_service(&value) {
                tracing::warn!(%err, "unknown service selected");
            }
        });
    };

    view! {
        <form on:submit=on_submit class="grid grid-cols-1 md:grid-cols-2 gap-4 bg-[#041022] p-8 rounded-2xl border border-white/5">
            <input
                class=INPUT_CLASS
                placeholder="First Name"
                on:input=move |ev| form.update(|f| f.first_name = event_target_value(&ev))
                prop:value=move || form.with(|f| f.first_name.clone())
            />
            <input
                class=INPUT_CLASS
                placeholder="Last Name"
                on:input=move |ev| form.update(|f| f.last_name = event_target_value(&ev))
                prop:value=move || form.with(|f| f.last_name.clone())
            />
            <input
                type="email"
                class=format!("{INPUT_CLASS} md:col-span-2")
                placeholder="Email"
                on:input=move |ev| form.update(|f| f.email = event_target_value(&ev))
                prop:value=move || form.with(|f| f.email.clone())
            />
            <input
                type="tel"
                class=format!("{INPUT_CLASS} md:col-span-2")
                placeholder="Phone (WhatsApp)"
                on:input=move |ev| form.update(|f| f.phone = event_target_value(&ev))
                prop:value=move || form.with(|f| f.phone.clone())
            />
            <input
                class=format!("{INPUT_CLASS} md:col-span-2")
                placeholder="Company"
                on:input=move |ev| form.update(|f| f.company = event_target_value(&ev))
                prop:value=move || form.with(|f| f.company.clone())
            />
            <select
                class="p-3 rounded bg-transparent border border-white/10 text-gray-200 md:col-span-2"
                on:change=on_service
            >
                <option value="" class="text-gray-700">"Select a service"</option>
                {ServiceOption::ALL.into_iter().map(|opt| view! {
                    <option value=opt.slug()>{opt.title()}</option>
                }).collect_view()}
            </select>
            <textarea
                rows="4"
                class=format!("{INPUT_CLASS} md:col-span-2")
                placeholder="Tell us about your project..."
                on:input=move |ev| form.update(|f| f.project = event_target_value(&ev))
                prop:value=move || form.with(|f| f.project.clone())
            ></textarea>
            <button
                type="submit"
                class="md:col-span-2 mt-2 px-6 py-3 rounded-full bg-gradient-to-r from-cyan-400 to-violet-500 text-black font-semibold hover:scale-[1.02] transition-transform"
            >
                "Send Message"
            </button>
        </form>
    }
}
