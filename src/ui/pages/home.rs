//! Home page component
//!
//! The landing page:
//! - Navigation bar with brand and static links
//! - Hero section with title, subtitle and a call-to-action button
//! - Feature grid with three cards
//! - Footer with copyright line
//!
//! Everything here is fixed markup. Links point at `#` and the button has
//! no handler.

use leptos::prelude::*;

use crate::core::content::{
    BRAND, COPYRIGHT, CTA_LABEL, FEATURES, FEATURES_HEADING, HERO_SUBTITLE, HERO_TITLE, NAV_LINKS,
};

/// Home page component
#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="min-h-screen flex flex-col">
            <NavBar />

            <main class="flex-grow">
                <Hero />
                <FeatureGrid />
            </main>

            <Footer />
        </div>
    }
}

/// Header with brand label and navigation links
#[component]
fn NavBar() -> impl IntoView {
    view! {
        <header class="bg-gray-900 text-white">
            <nav class="container mx-auto px-6 py-4">
                <div class="flex items-center justify-between">
                    <div class="text-xl font-bold">{BRAND}</div>
                    <div class="flex space-x-6">
                        {NAV_LINKS
                            .into_iter()
                            .map(|label| {
                                view! {
                                    <a href="#" class="hover:text-gray-300">
                                        {label}
                                    </a>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </nav>
        </header>
    }
}

#[component]
fn Hero() -> impl IntoView {
    view! {
        <section class="bg-blue-600 text-white py-20">
            <div class="container mx-auto px-6 text-center">
                <h1 class="text-4xl md:text-6xl font-bold mb-4">{HERO_TITLE}</h1>
                <p class="text-xl mb-8">{HERO_SUBTITLE}</p>
                // Decorative only
                <button
                    type="button"
                    class="bg-white text-blue-600 px-8 py-3 rounded-lg font-semibold hover:bg-gray-100 transition"
                >
                    {CTA_LABEL}
                </button>
            </div>
        </section>
    }
}

/// Section heading plus the three-column card grid
#[component]
fn FeatureGrid() -> impl IntoView {
    view! {
        <section class="py-20">
            <div class="container mx-auto px-6">
                <h2 class="text-3xl font-bold text-center mb-12">{FEATURES_HEADING}</h2>
                <div class="grid md:grid-cols-3 gap-8">
                    {FEATURES
                        .into_iter()
                        .map(|feature| {
                            view! {
                                <FeatureCard
                                    title=feature.title
                                    description=feature.description
                                />
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

/// Feature card component
#[component]
fn FeatureCard(title: &'static str, description: &'static str) -> impl IntoView {
    view! {
        <div class="bg-white p-6 rounded-lg shadow-lg">
            <h3 class="text-xl font-semibold mb-3">{title}</h3>
            <p class="text-gray-600">{description}</p>
        </div>
    }
}

/// Footer component
#[component]
fn Footer() -> impl IntoView {
    view! {
        <footer class="bg-gray-900 text-white py-8">
            <div class="container mx-auto px-6 text-center">
                <p>{COPYRIGHT}</p>
            </div>
        </footer>
    }
}
