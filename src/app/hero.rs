use leptos::prelude::*;

use super::content::{OWNER, SOCIALS};
use super::host::{scroll_to_section, use_view_state};

#[component]
pub fn Hero() -> impl IntoView {
    let text = use_view_state().typewriter_text();

    view! {
        <section
            id="home"
            class="min-h-screen flex items-center justify-center pt-16 lg:pt-20 relative overflow-hidden"
        >
            <FloatingElements />
            <div class="container mx-auto px-4 sm:px-6 lg:px-8 relative z-10">
                <div class="flex-1 text-center lg:text-left">
                    <h1 class="text-3xl sm:text-4xl lg:text-6xl font-bold mb-4 lg:mb-6">
                        "Hi, I'm " <span class="text-purple-400">{OWNER}</span>
                    </h1>
                    <h2 class="text-xl sm:text-2xl lg:text-3xl text-gray-300 mb-6 h-10">
                        <span>{move || text.get()}</span>
                        <span class="animate-pulse text-purple-400">"|"</span>
                    </h2>
                    <p class="text-gray-400 text-lg max-w-xl mb-8 mx-auto lg:mx-0">
                        "Computer Science student specializing in AI and Machine Learning, building clean and engaging experiences for the web."
                    </p>
                    <div class="flex flex-col sm:flex-row gap-4 justify-center lg:justify-start">
                        <button
                            class="px-8 py-3 font-semibold bg-purple-600 rounded-lg hover:bg-purple-700 transition-colors"
                            on:click=move |_| scroll_to_section("projects")
                        >
                            "View My Work →"
                        </button>
                        <button
                            class="px-8 py-3 font-semibold border border-purple-500 rounded-lg hover:bg-purple-500/20 transition-colors"
                            on:click=move |_| scroll_to_section("contact")
                        >
                            "Get In Touch"
                        </button>
                    </div>
                    <div class="flex gap-4 mt-8 justify-center lg:justify-start">
                        {SOCIALS
                            .iter()
                            .map(|s| {
                                view! {
                                    <a
                                        href=s.href
                                        target="_blank"
                                        rel="noopener noreferrer"
                                        aria-label=s.label
                                        class="text-gray-400 hover:text-white text-2xl"
                                    >
                                        <i class=s.icon></i>
                                    </a>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </section>
    }
}

/// Slow-drifting background blobs; purely decorative.
#[component]
fn FloatingElements() -> impl IntoView {
    view! {
        <div class="absolute inset-0 -z-10 pointer-events-none overflow-hidden">
            <div class="absolute top-1/4 left-1/4 w-64 h-64 bg-purple-500/10 rounded-full blur-3xl animate-pulse" />
            <div class="absolute bottom-1/4 right-1/4 w-96 h-96 bg-blue-500/10 rounded-full blur-3xl animate-pulse" />
            <div class="absolute top-1/3 right-1/3 w-6 h-6 bg-blue-500/20 rounded-full blur-sm animate-bounce" />
        </div>
    }
}
