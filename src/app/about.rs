use leptos::prelude::*;

use super::components::{AnimatedCounter, SectionHeader};
use crate::content::{ABOUT_HIGHLIGHTS, ABOUT_STATS};

#[component]
pub fn About() -> impl IntoView {
    view! {
        <section id="about" class="section-container relative overflow-hidden bg-background">
            <div class="max-w-5xl mx-auto relative z-10">
                <SectionHeader badge="The Backend Perspective" title="Technical" highlight="Core" />

                // Main content card
                <div class="group relative p-8 md:p-12 rounded-3xl mb-12 overflow-hidden bg-surface border border-edge">
                    <div class="absolute inset-0 opacity-0 group-hover:opacity-100 transition-opacity duration-500 pointer-events-none card-sheen"></div>

                    <div class="relative z-10">
                        <div class="space-y-6 mb-12 text-center max-w-3xl mx-auto">
                            <p class="text-lg leading-relaxed text-muted">
                                "I am a " <span class="text-primary font-semibold">"Backend Engineer"</span>
                                " dedicated to building robust, production-grade systems. My expertise lies in architecting the core logic and data structures that power modern applications, with a specialized focus on the MERN stack."
                            </p>
                            <p class="text-lg leading-relaxed text-muted">
                                "I take full responsibility for the "
                                <span class="text-primary font-semibold">"Backend Lifecycle"</span>
                                " — from initial schema design and API documentation to implementing secure JWT authentication protocols and performance-tuning Node.js services."
                            </p>
                        </div>

                        // Highlights grid
                        <div class="grid md:grid-cols-3 gap-6">
                            {ABOUT_HIGHLIGHTS
                                .iter()
                                .map(|highlight| {
                                    view! {
                                        <div class="p-6 rounded-xl transition-all duration-300 text-center md:text-left bg-surface/60 border border-edge hover:-translate-y-1">
                                            <div class="mb-4 inline-block p-3 rounded-lg bg-primary/10 text-primary text-2xl">
                                                {highlight.icon}
                                            </div>
                                            <h4 class="font-bold mb-2 text-lg text-foreground">
                                                {highlight.title}
                                            </h4>
                                            <p class="text-sm leading-relaxed text-muted">
                                                {highlight.description}
                                            </p>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                </div>

                // Stats grid
                <div class="grid grid-cols-1 md:grid-cols-3 gap-6">
                    {ABOUT_STATS
                        .iter()
                        .map(|stat| {
                            view! {
                                <div class="group/stat relative p-8 rounded-2xl text-center transition-all duration-300 overflow-hidden bg-surface border border-edge hover:-translate-y-2">
                                    <div class="text-5xl font-bold text-gradient mb-3">
                                        <AnimatedCounter target=stat.target suffix=stat.suffix />
                                    </div>
                                    <div class="text-sm font-medium uppercase tracking-wider text-muted">
                                        {stat.label}
                                    </div>
                                    <div class="absolute bottom-0 left-0 right-0 h-1 origin-left scale-x-0 group-hover/stat:scale-x-100 transition-transform duration-300 accent-line"></div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>

                // Call to action
                <div class="mt-12 text-center">
                    <p class="mb-6 text-lg text-muted">"Want to know more about my work?"</p>
                    <div class="flex flex-col sm:flex-row gap-4 justify-center">
                        <a href="#projects" class="btn-primary flex items-center justify-center gap-2">
                            "View Projects 🚀"
                        </a>
                        <a href="#skills" class="btn-secondary flex items-center justify-center gap-2">
                            "Explore Skills"
                        </a>
                    </div>
                </div>
            </div>
        </section>
    }
}
