use leptos::prelude::*;
use leptos_use::use_window_scroll;

use crate::content::{NAV_ITEMS, SITE_MONOGRAM, SITE_NAME};
use crate::theme::ThemeStore;

/// Fixed top bar: logo, section links, theme toggle, mobile menu.
/// Condenses onto a glass panel once the page is scrolled past 50px.
#[component]
pub fn Navbar(theme: ThemeStore) -> impl IntoView {
    let (_scroll_x, scroll_y) = use_window_scroll();
    let scrolled = Signal::derive(move || scroll_y.get() > 50.0);
    let (menu_open, set_menu_open) = signal(false);

    view! {
        <nav class=move || {
            if scrolled.get() {
                "fixed top-0 left-0 right-0 z-50 transition-all duration-300 glass-panel shadow-lg border-b border-edge py-3"
            } else {
                "fixed top-0 left-0 right-0 z-50 transition-all duration-300 bg-transparent py-5"
            }
        }>
            <div class="max-w-7xl mx-auto px-6">
                <div class="flex items-center justify-between">
                    // Logo
                    <a href="#hero" class="flex items-center gap-3 group" aria-label=SITE_NAME>
                        <span class="w-10 h-10 rounded-full flex items-center justify-center border-2 border-primary font-bold text-primary group-hover:shadow-lg transition-all duration-300">
                            {SITE_MONOGRAM}
                        </span>
                        <span class="text-2xl font-bold text-gradient">{SITE_MONOGRAM}</span>
                    </a>

                    // Desktop nav
                    <div class="hidden md:flex items-center gap-8">
                        {NAV_ITEMS
                            .iter()
                            .map(|item| {
                                view! {
                                    <a
                                        href=item.href
                                        class="relative text-muted hover:text-primary transition-colors font-medium text-sm group"
                                    >
                                        {item.name}
                                        // hover underline
                                        <span class="absolute -bottom-1 left-0 w-0 h-0.5 bg-primary transition-all duration-300 group-hover:w-full"></span>
                                    </a>
                                }
                            })
                            .collect_view()}
                    </div>

                    // Actions
                    <div class="flex items-center gap-4">
                        <ThemeToggle theme />

                        // Mobile menu toggle
                        <button
                            on:click=move |_| set_menu_open.update(|open| *open = !*open)
                            class="md:hidden p-2 text-foreground hover:bg-surface rounded-lg transition-colors"
                            aria-label="Toggle Menu"
                        >
                            <svg class="w-6 h-6" fill="none" stroke="currentColor" viewBox="0 0 24 24">
                                <path
                                    stroke-linecap="round"
                                    stroke-linejoin="round"
                                    stroke-width="2"
                                    d=move || {
                                        if menu_open.get() {
                                            "M6 18L18 6M6 6l12 12"
                                        } else {
                                            "M4 6h16M4 12h16M4 18h16"
                                        }
                                    }
                                />
                            </svg>
                        </button>
                    </div>
                </div>
            </div>

            // Mobile menu dropdown
            <Show when=move || menu_open.get()>
                <div class="md:hidden overflow-hidden border-b border-edge glass-panel">
                    <div class="flex flex-col p-4 space-y-2">
                        {NAV_ITEMS
                            .iter()
                            .map(|item| {
                                view! {
                                    <a
                                        href=item.href
                                        on:click=move |_| set_menu_open.set(false)
                                        class="block px-4 py-3 text-foreground font-medium hover:bg-surface hover:pl-6 rounded-lg transition-all duration-300"
                                    >
                                        {item.name}
                                    </a>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </Show>
        </nav>
    }
}

/// Sun/moon button flipping the shared theme cell.
#[component]
fn ThemeToggle(theme: ThemeStore) -> impl IntoView {
    view! {
        <button
            on:click=move |_| {
                theme.toggle();
            }
            class="relative w-10 h-10 rounded-full flex items-center justify-center transition-colors hover:bg-surface border border-transparent hover:border-edge"
            aria-label="Toggle Theme"
        >
            <Show
                when=move || theme.is_dark()
                fallback=|| {
                    view! {
                        // sun
                        <svg
                            xmlns="http://www.w3.org/2000/svg"
                            width="20"
                            height="20"
                            viewBox="0 0 24 24"
                            fill="none"
                            stroke="currentColor"
                            stroke-width="2"
                            stroke-linecap="round"
                            stroke-linejoin="round"
                            class="text-amber-500"
                        >
                            <circle cx="12" cy="12" r="4" />
                            <path d="M12 2v2" />
                            <path d="M12 20v2" />
                            <path d="m4.93 4.93 1.41 1.41" />
                            <path d="m17.66 17.66 1.41 1.41" />
                            <path d="M2 12h2" />
                            <path d="M20 12h2" />
                            <path d="m6.34 17.66-1.41 1.41" />
                            <path d="m19.07 4.93-1.41 1.41" />
                        </svg>
                    }
                }
            >
                // moon
                <svg
                    xmlns="http://www.w3.org/2000/svg"
                    width="20"
                    height="20"
                    viewBox="0 0 24 24"
                    fill="none"
                    stroke="currentColor"
                    stroke-width="2"
                    stroke-linecap="round"
                    stroke-linejoin="round"
                    class="text-orange-500"
                >
                    <path d="M12 3a6 6 0 0 0 9 9 9 9 0 1 1-9-9Z" />
                </svg>
            </Show>
        </button>
    }
}
