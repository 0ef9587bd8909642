//! Not found page component

use leptos::prelude::*;
use leptos_router::components::A;

/// Not found (404) page component
#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="min-h-screen bg-gradient-to-br from-[#021c14] to-[#064E38] text-white flex flex-col items-center justify-center p-4">
            <div class="text-center">
                <h1 class="text-6xl font-semibold mb-4">"404"</h1>

                <h2 class="text-2xl font-medium mb-2">
                    "Page Not Found"
                </h2>

                <p class="text-white/60 mb-8 max-w-md mx-auto">
                    "The page you're looking for doesn't exist or has been moved."
                </p>

                <A
                    href="/"
                    attr:class="inline-block px-6 py-3 bg-[#043426] hover:-translate-y-[2px] text-white font-medium rounded-xl transition"
                >
                    "Back Home"
                </A>
            </div>

            <div class="absolute bottom-8 text-center">
                <p class="text-sm text-white/40">
                    "© 2026 Toro Tech"
                </p>
            </div>
        </div>
    }
}
