use leptos::prelude::*;

use crate::content::{NAV_ITEMS, SITE_NAME, SOCIAL_LINKS};

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="relative z-10 mt-24 overflow-hidden bg-background">
            // gradient divider
            <div class="h-px w-full divider-glow"></div>

            <div class="mx-auto max-w-6xl px-6 py-12">
                <div class="grid gap-12 md:grid-cols-3 mb-12">
                    // Brand
                    <div>
                        <h3 class="text-xl font-bold text-gradient mb-3">{SITE_NAME}</h3>
                        <p class="text-sm leading-relaxed text-muted max-w-xs">
                            "Full-Stack Developer building scalable, human-centered applications."
                        </p>
                    </div>

                    // Quick links
                    <div>
                        <h4 class="text-sm font-semibold uppercase tracking-wider text-foreground mb-4">
                            "Quick Links"
                        </h4>
                        <ul class="space-y-2">
                            {NAV_ITEMS
                                .iter()
                                .map(|item| {
                                    view! {
                                        <li>
                                            <a
                                                href=item.href
                                                class="text-sm text-muted hover:text-primary transition-colors"
                                            >
                                                {item.name}
                                            </a>
                                        </li>
                                    }
                                })
                                .collect_view()}
                        </ul>
                    </div>

                    // Socials
                    <div>
                        <h4 class="text-sm font-semibold uppercase tracking-wider text-foreground mb-4">
                            "Elsewhere"
                        </h4>
                        <div class="flex gap-3">
                            {SOCIAL_LINKS
                                .iter()
                                .map(|social| {
                                    view! {
                                        <a
                                            href=social.url
                                            target="_blank"
                                            rel="noopener noreferrer"
                                            class="p-3 rounded-xl bg-surface border border-edge text-muted hover:text-primary transition-colors text-lg"
                                            aria-label=social.name
                                        >
                                            <i class=social.icon></i>
                                        </a>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                </div>

                <div class="pt-8 border-t border-edge flex flex-col sm:flex-row items-center justify-between gap-2 text-sm text-muted">
                    <span>{format!("© {} {}. All rights reserved.", env!("BUILD_YEAR"), SITE_NAME)}</span>
                    <span>"Built with Rust & Leptos"</span>
                </div>
            </div>
        </footer>
    }
}
