use leptos::prelude::*;

use super::components::{AnimatedCounter, SectionHeader};
use crate::content::{ACHIEVEMENTS, ADDITIONAL_STATS};

#[component]
pub fn Achievements() -> impl IntoView {
    view! {
        <section
            id="achievements"
            class="section-container relative overflow-hidden bg-background"
        >
            <div class="relative z-10 max-w-7xl mx-auto">
                <SectionHeader
                    badge="Measurable Impact"
                    title="Key"
                    highlight="Achievements"
                    subtitle="Quantifiable results from real-world projects"
                />

                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-6">
                    {ACHIEVEMENTS
                        .iter()
                        .map(|achievement| {
                            view! {
                                <div class="group relative p-8 rounded-2xl text-center transition-all duration-300 overflow-hidden bg-surface border border-edge hover:-translate-y-2">
                                    <div class="absolute inset-0 opacity-0 group-hover:opacity-100 transition-opacity duration-500 pointer-events-none card-sheen"></div>

                                    <div class="relative z-10">
                                        <div class="w-14 h-14 mx-auto mb-4 rounded-xl flex items-center justify-center bg-primary/10 border border-edge text-2xl">
                                            {achievement.icon}
                                        </div>

                                        <div class="mb-3 text-5xl md:text-6xl font-bold text-gradient">
                                            <AnimatedCounter
                                                target=achievement.target
                                                suffix=achievement.suffix
                                            />
                                        </div>

                                        <h3 class="text-lg font-semibold mb-3 min-h-[3.5rem] flex items-center justify-center text-foreground">
                                            {achievement.label}
                                        </h3>

                                        <div class="h-px mb-4 mx-auto w-12 group-hover:w-full transition-all duration-500 divider-glow"></div>

                                        <p class="text-sm leading-relaxed text-muted">
                                            {achievement.description}
                                        </p>
                                    </div>

                                    <div class="absolute bottom-0 left-0 right-0 h-1 origin-left scale-x-0 group-hover:scale-x-100 transition-transform duration-500 accent-line"></div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>

                // Additional stats bar
                <div class="mt-16 max-w-4xl mx-auto">
                    <div class="p-8 rounded-2xl relative overflow-hidden bg-surface border border-edge">
                        <div class="absolute inset-0 opacity-5 bg-dot-grid"></div>
                        <div class="relative z-10 grid grid-cols-2 md:grid-cols-4 gap-8 text-center">
                            {ADDITIONAL_STATS
                                .iter()
                                .map(|stat| {
                                    view! {
                                        <div class="group/stat hover:scale-105 transition-transform duration-300">
                                            <div class="text-3xl font-bold mb-2 text-primary">
                                                {stat.value}
                                            </div>
                                            <div class="text-sm font-medium text-muted">{stat.label}</div>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                </div>

                // Call to action
                <div class="mt-12 text-center">
                    <p class="mb-6 text-muted">"Want to see how I achieved these results?"</p>
                    <a href="#projects" class="btn-primary inline-flex items-center gap-2">
                        "View Case Studies →"
                    </a>
                </div>
            </div>
        </section>
    }
}
