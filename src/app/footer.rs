use chrono::{DateTime, Datelike, Utc};
use leptos::prelude::*;

use super::content::{nav_label, FOOTER_LINKS, OWNER, SERVICES, SOCIALS};
use super::host::{scroll_to_section, scroll_to_top, use_view_state};

fn copyright_year() -> i32 {
    DateTime::parse_from_rfc3339(env!("BUILD_TIME"))
        .map(|t| t.year())
        .unwrap_or_else(|_| Utc::now().year())
}

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="bg-slate-950 border-t border-slate-800 pt-16 pb-8">
            <div class="container mx-auto px-4 sm:px-6 lg:px-8">
                <div class="grid md:grid-cols-3 gap-10 mb-12">
                    <div>
                        <h3 class="text-xl font-bold mb-4">{OWNER}</h3>
                        <p class="text-gray-400 text-sm">
                            "Web developer and AI/ML student building clean, engaging digital experiences."
                        </p>
                        <div class="flex gap-4 mt-4">
                            {SOCIALS
                                .iter()
                                .map(|s| {
                                    view! {
                                        <a
                                            href=s.href
                                            target="_blank"
                                            rel="noopener noreferrer"
                                            aria-label=s.label
                                            class="text-gray-400 hover:text-white text-xl"
                                        >
                                            <i class=s.icon></i>
                                        </a>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                    <div>
                        <h4 class="font-semibold mb-4">"Quick Links"</h4>
                        <ul class="space-y-2">
                            {FOOTER_LINKS
                                .iter()
                                .map(|&id| {
                                    view! {
                                        <li>
                                            <button
                                                class="text-gray-400 hover:text-white text-sm"
                                                on:click=move |_| scroll_to_section(id)
                                            >
                                                {nav_label(id)}
                                            </button>
                                        </li>
                                    }
                                })
                                .collect_view()}
                        </ul>
                    </div>
                    <div>
                        <h4 class="font-semibold mb-4">"Services"</h4>
                        <ul class="space-y-2">
                            {SERVICES
                                .iter()
                                .map(|s| view! { <li class="text-gray-400 text-sm">{s.title}</li> })
                                .collect_view()}
                        </ul>
                    </div>
                </div>
                <p class="text-center text-gray-500 text-sm border-t border-slate-800 pt-8">
                    "© " {copyright_year()} " " {OWNER} ". All rights reserved."
                </p>
            </div>
        </footer>
    }
}

#[component]
pub fn BackToTop() -> impl IntoView {
    let visible = use_view_state().back_to_top_visible();

    view! {
        <Show when=move || visible.get()>
            <button
                class="fixed bottom-8 right-8 z-50 p-3 rounded-full bg-purple-600 shadow-lg hover:bg-purple-700 transition-colors"
                aria-label="Back to top"
                on:click=move |_| scroll_to_top()
            >
                "↑"
            </button>
        </Show>
    }
}
