//! Coming-soon page
//!
//! Hero section, launch progress indicator, and the early-access capture
//! form. The page is a single screen with no further navigation.

use leptos::prelude::*;
use leptos_meta::{Link, Meta, Title};

use crate::ui::signup::EarlyAccessForm;

/// The single coming-soon page
#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <SeoMeta />

        <div class="relative min-h-screen bg-gradient-to-br from-[#021c14] to-[#064E38] text-white overflow-hidden">
            // Background radial depth
            <div
                class="pointer-events-none absolute inset-0"
                style="background: radial-gradient(1200px 800px at 50% 40%, rgba(0,0,0,0) 40%, rgba(0,0,0,0.55) 100%);"
                aria-hidden="true"
            ></div>

            <div class="mx-auto flex min-h-screen max-w-6xl items-center justify-center px-6 py-16">
                <div class="w-full max-w-3xl text-center">
                    <div class="flex justify-center mb-12 home-fade-in-up">
                        <Logo />
                    </div>

                    <div class="text-sm tracking-[0.35em] text-white/60">
                        "TORO TECH"
                    </div>

                    <h1 class="mt-6 text-5xl font-semibold leading-tight md:text-6xl home-fade-in-up home-delay-200">
                        "Toro is Sharpening" <br /> "its Horns"
                    </h1>

                    <p class="mt-8 text-xl font-medium text-white/85 md:text-2xl home-fade-in-up home-delay-400">
                        "Building the Digital Backbone of Modern Businesses"
                    </p>

                    <p class="mt-4 text-base leading-relaxed text-white/60 md:text-lg home-fade-in-up home-delay-600">
                        "We build custom billing software, ERP systems, mobile apps,
                        web platforms, and branding solutions tailored for serious,
                        growing businesses."
                    </p>

                    <div class="mt-8 text-xs tracking-[0.25em] text-white/70">
                        "CUSTOM ERP · BILLING SYSTEMS · MOBILE APPS · WEBSITES · BRANDING"
                    </div>

                    <div class="mt-10 text-xs tracking-[0.4em] text-emerald-200/80">
                        "LAUNCHING SOON"
                    </div>

                    <LaunchProgress />

                    <EarlyAccessForm />

                    <div class="mt-12 text-sm font-medium tracking-wide text-white/70">
                        "Custom-built systems for serious businesses"
                    </div>
                </div>
            </div>

            <HomeStyles />
        </div>
    }
}

/// SEO meta tags via leptos_meta
#[component]
fn SeoMeta() -> impl IntoView {
    view! {
        <Title text="Toro Tech - Launching Soon" />

        <Meta
            name="description"
            content="Toro Tech builds custom billing software, ERP systems, mobile apps, web platforms, and branding solutions for serious, growing businesses. Launching soon - request early access."
        />
        <Meta name="keywords" content="ERP, billing software, mobile apps, web platforms, branding, custom software" />

        <Meta property="og:type" content="website" />
        <Meta property="og:url" content="https://torotech.in/" />
        <Meta property="og:title" content="Toro Tech - Launching Soon" />
        <Meta property="og:description" content="Building the digital backbone of modern businesses. Request early access." />

        <Link rel="canonical" href="https://torotech.in/" />
    }
}

/// Launch progress bar, fixed at 87%
#[component]
fn LaunchProgress() -> impl IntoView {
    view! {
        <div class="mx-auto mt-4 max-w-md home-fade-in-up home-delay-900">
            <div class="flex justify-between text-xs tracking-[0.25em] text-white/70">
                <span>"87% COMPLETE"</span>
                <span>"IN PROGRESS"</span>
            </div>
            <div class="mt-3 h-1.5 w-full rounded-full bg-white/10 overflow-hidden">
                <div class="h-full w-[87%] bg-emerald-200/70 rounded-full home-progress-fill"></div>
            </div>
        </div>
    }
}

/// Logo mark
#[component]
fn Logo() -> impl IntoView {
    view! {
        <svg
            class="w-[140px] drop-shadow-[0_15px_40px_rgba(0,0,0,0.6)] text-white"
            viewBox="0 0 64 64"
            fill="none"
            stroke="currentColor"
            aria-label="Toro Tech logo"
            role="img"
        >
            // Bull horns
            <path
                stroke-linecap="round"
                stroke-linejoin="round"
                stroke-width="3"
                d="M8 14c0 12 8 20 16 22m32-22c0 12-8 20-16 22"
            />
            // Head
            <path
                stroke-linecap="round"
                stroke-linejoin="round"
                stroke-width="3"
                d="M24 36c0-6 3-10 8-10s8 4 8 10-3 14-8 18c-5-4-8-12-8-18z"
            />
        </svg>
    }
}

/// CSS keyframes for the entrance and progress animations
#[component]
fn HomeStyles() -> impl IntoView {
    view! {
        <style>
            r#"
            @keyframes home-fade-in-up {
                from {
                    opacity: 0;
                    transform: translateY(20px);
                }
                to {
                    opacity: 1;
                    transform: translateY(0);
                }
            }

            .home-fade-in-up {
                animation: home-fade-in-up 0.9s ease-out forwards;
            }

            .home-delay-200 { animation-delay: 0.2s; opacity: 0; }
            .home-delay-400 { animation-delay: 0.4s; opacity: 0; }
            .home-delay-600 { animation-delay: 0.6s; opacity: 0; }
            .home-delay-900 { animation-delay: 0.9s; opacity: 0; }
            .home-delay-1100 { animation-delay: 1.1s; opacity: 0; }

            @keyframes home-progress-fill {
                from { width: 0; }
                to { width: 87%; }
            }

            .home-progress-fill {
                animation: home-progress-fill 1.2s ease-out;
            }
            "#
        </style>
    }
}
