use leptos::prelude::*;

use crate::content::{SITE_NAME, SOCIAL_LINKS};

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section
            id="hero"
            class="relative min-h-screen w-full flex flex-col items-center justify-center text-center px-4 sm:px-6 lg:px-8 overflow-hidden pb-20 pt-32 bg-background"
        >
            // dotted grid backdrop
            <div class="absolute inset-0 -z-10 overflow-hidden pointer-events-none">
                <div class="absolute inset-0 opacity-10 bg-dot-grid"></div>
                <div class="absolute top-0 -left-20 w-96 h-96 rounded-full blur-[100px] bg-primary/15 animate-pulse-slow"></div>
                <div class="absolute bottom-0 -right-20 w-[500px] h-[500px] rounded-full blur-[120px] bg-accent/10 animate-pulse-slow"></div>
            </div>

            <div class="max-w-5xl mx-auto z-10 w-full relative">
                <div class="space-y-8">
                    // Status badge
                    <div class="flex justify-center">
                        <div class="inline-flex items-center gap-2 py-2 px-4 rounded-full text-sm font-medium backdrop-blur-md border border-edge bg-surface/60 shadow-lg transition-all duration-300 hover:scale-105">
                            <span class="relative flex h-2.5 w-2.5">
                                <span class="animate-ping absolute inline-flex h-full w-full rounded-full opacity-75 bg-green-500"></span>
                                <span class="relative inline-flex rounded-full h-2.5 w-2.5 bg-green-500"></span>
                            </span>
                            <span class="text-muted">"Available for Freelance & Full-time"</span>
                        </div>
                    </div>

                    // Headline
                    <h1 class="text-5xl sm:text-6xl md:text-7xl lg:text-8xl font-bold tracking-tight leading-[1.1] mb-6 text-foreground">
                        <span class="block">"Building digital"</span>
                        // pb-2 fixes gradient clipping
                        <span class="text-gradient block pb-2">"experiences"</span>
                        <span class="block text-4xl sm:text-5xl md:text-6xl lg:text-7xl">
                            "that matter."
                        </span>
                    </h1>

                    // Subtext
                    <p class="text-lg sm:text-xl md:text-2xl max-w-3xl mx-auto leading-relaxed px-4 text-muted">
                        "Hi, I'm "
                        <span class="font-semibold relative inline-block group text-primary">
                            {SITE_NAME}
                            <span class="absolute bottom-0 left-0 w-0 h-0.5 bg-current transition-all duration-300 group-hover:w-full"></span>
                        </span>
                        ". A Full-Stack Developer creating scalable, human-centered applications with modern technologies."
                    </p>

                    // CTA buttons
                    <div class="flex flex-col sm:flex-row items-center justify-center gap-4 pt-6">
                        <a
                            href="#projects"
                            class="btn-primary w-full sm:w-auto min-w-[180px] flex items-center justify-center gap-2"
                        >
                            "View My Work →"
                        </a>
                        <a
                            href="#contact"
                            class="btn-secondary w-full sm:w-auto min-w-[180px] flex items-center justify-center gap-2"
                        >
                            "Contact Me ✉"
                        </a>
                    </div>

                    // Social links
                    <div class="flex items-center justify-center gap-6 pt-8">
                        {SOCIAL_LINKS
                            .iter()
                            .map(|social| {
                                view! {
                                    <a
                                        href=social.url
                                        target="_blank"
                                        rel="noopener noreferrer"
                                        class="p-3 rounded-xl transition-all duration-300 hover:shadow-lg hover:-translate-y-1 bg-surface border border-edge text-muted hover:text-primary text-xl"
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

            // Scroll indicator
            <a
                href="#about"
                class="absolute bottom-10 left-1/2 transform -translate-x-1/2 cursor-pointer z-20 flex flex-col items-center gap-2"
            >
                <span class="text-xs uppercase tracking-widest font-medium text-muted opacity-70">
                    "Scroll"
                </span>
                <span class="relative w-6 h-10 border-2 rounded-full flex justify-center p-1 border-muted opacity-60">
                    <span class="w-1 h-1.5 rounded-full bg-foreground animate-bounce"></span>
                </span>
            </a>
        </section>
    }
}
