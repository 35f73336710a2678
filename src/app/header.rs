use leptos::prelude::*;

use super::content::{NAV_SECTIONS, OWNER};
use super::host::{scroll_to_section, use_view_state};

#[component]
pub fn Header() -> impl IntoView {
    let ctx = use_view_state();
    let solid = ctx.header_solid();
    let active = ctx.active_section();
    let (menu_open, set_menu_open) = signal(false);

    let nav_button = move |id: &'static str, label: &'static str, mobile: bool| {
        let class = move || {
            let is_active = active.with(|a| a == id);
            match (mobile, is_active) {
                (false, true) => "relative px-4 py-2 text-sm font-medium rounded-md text-white bg-purple-500/20",
                (false, false) => "relative px-4 py-2 text-sm font-medium rounded-md text-gray-400 hover:text-white",
                (true, true) => "block w-full text-left font-medium py-3 px-4 rounded-md bg-purple-500/20 text-white",
                (true, false) => "block w-full text-left font-medium py-3 px-4 rounded-md text-gray-300",
            }
        };
        view! {
            <button
                class=class
                on:click=move |_| {
                    scroll_to_section(id);
                    set_menu_open.set(false);
                }
            >
                {label}
            </button>
        }
    };

    let first_name = OWNER.split_whitespace().next().unwrap_or(OWNER);

    view! {
        <header class=move || {
            if solid.get() {
                "fixed top-0 left-0 w-full z-50 transition-all duration-300 bg-slate-950/80 backdrop-blur-lg shadow-xl"
            } else {
                "fixed top-0 left-0 w-full z-50 transition-all duration-300 bg-transparent"
            }
        }>
            <div class="container mx-auto px-4 sm:px-6 lg:px-8">
                <nav class="flex items-center justify-between h-16 lg:h-20">
                    <h1 class="text-xl lg:text-2xl font-bold tracking-tight">
                        {first_name} " " <span class="text-purple-400">"SK"</span>
                    </h1>
                    <div class="hidden lg:flex items-center space-x-2">
                        {NAV_SECTIONS
                            .iter()
                            .map(|s| nav_button(s.id, s.label, false))
                            .collect_view()}
                    </div>
                    <button
                        class="lg:hidden p-2 text-gray-300 hover:text-white"
                        aria-label="Toggle menu"
                        on:click=move |_| set_menu_open.update(|open| *open = !*open)
                    >
                        {move || if menu_open.get() { "✕" } else { "☰" }}
                    </button>
                </nav>
                <Show when=move || menu_open.get()>
                    <div class="lg:hidden absolute top-full left-0 w-full bg-slate-900/95 backdrop-blur-lg border-t border-slate-800">
                        <div class="px-4 py-6 space-y-2">
                            {NAV_SECTIONS
                                .iter()
                                .map(|s| nav_button(s.id, s.label, true))
                                .collect_view()}
                        </div>
                    </div>
                </Show>
            </div>
        </header>
    }
}
