//! Early-access form component
//!
//! Company / work email / phone inputs plus the submit control and a
//! read-only status line.

use leptos::prelude::*;
use leptos::task::spawn_local;

use super::context::{SignupForm, submit};

/// Early-access capture form
#[component]
pub fn EarlyAccessForm() -> impl IntoView {
    let form = SignupForm::new();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        spawn_local(async move {
            submit(form).await;
        });
    };

    view! {
        <form
            on:submit=on_submit
            class="mx-auto mt-14 w-full max-w-lg rounded-2xl border border-white/10 bg-white/[0.04] p-6 backdrop-blur-md shadow-[0_30px_80px_rgba(0,0,0,0.45)] home-fade-in-up home-delay-1100"
        >
            <div class="grid gap-4">
                <input
                    type="text"
                    placeholder="Company Name"
                    aria-label="Company name"
                    class="h-12 rounded-xl border border-white/10 bg-white/[0.06] px-4 text-white placeholder:text-white/40 outline-none focus:ring-4 focus:ring-emerald-900/30"
                    prop:value=move || form.company.get()
                    on:input=move |ev| form.company.set(event_target_value(&ev))
                />

                <input
                    type="email"
                    placeholder="Work Email"
                    aria-label="Work email"
                    class="h-12 rounded-xl border border-white/10 bg-white/[0.06] px-4 text-white placeholder:text-white/40 outline-none focus:ring-4 focus:ring-emerald-900/30"
                    prop:value=move || form.email.get()
                    on:input=move |ev| form.email.set(event_target_value(&ev))
                />

                <input
                    type="tel"
                    placeholder="Phone Number"
                    aria-label="Phone number"
                    class="h-12 rounded-xl border border-white/10 bg-white/[0.06] px-4 text-white placeholder:text-white/40 outline-none focus:ring-4 focus:ring-emerald-900/30"
                    prop:value=move || form.phone.get()
                    on:input=move |ev| form.set_phone(&event_target_value(&ev))
                />

                <button
                    type="submit"
                    class="h-12 rounded-xl bg-[#043426] font-medium text-white shadow-[0_20px_60px_rgba(6,78,56,0.5)] transition hover:-translate-y-[2px] hover:shadow-[0_25px_80px_rgba(6,78,56,0.6)] disabled:opacity-60 disabled:cursor-not-allowed"
                    disabled=move || form.submitting.get()
                >
                    {move || {
                        if form.submitting.get() {
                            "Submitting..."
                        } else {
                            "Request Early Access"
                        }
                    }}
                </button>

                <div class="text-center text-xs text-white/50">
                    "No spam. Only product updates."
                </div>

                // Status line keeps its height so the card doesn't jump
                <div
                    class="min-h-[18px] text-center text-sm text-white/60"
                    aria-live="polite"
                >
                    {move || form.status.get().to_string()}
                </div>
            </div>
        </form>
    }
}
