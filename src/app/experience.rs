use leptos::prelude::*;

use super::components::{SectionHeader, TechTag};
use crate::content::EXPERIENCES;

#[component]
pub fn Experience() -> impl IntoView {
    view! {
        <section id="experience" class="section-container relative z-10 bg-background">
            <div class="max-w-4xl mx-auto relative z-10">
                <SectionHeader
                    badge="Career Journey"
                    title="Work"
                    highlight="Experience"
                    subtitle="Where I've built, shipped and maintained production software"
                />

                <div class="relative border-l-2 border-edge pl-8 space-y-12">
                    {EXPERIENCES
                        .iter()
                        .map(|entry| {
                            view! {
                                <div class="relative">
                                    // timeline dot
                                    <span class=if entry.current {
                                        "absolute -left-[2.45rem] top-1.5 w-4 h-4 rounded-full bg-primary ring-4 ring-primary/20"
                                    } else {
                                        "absolute -left-[2.45rem] top-1.5 w-4 h-4 rounded-full bg-muted"
                                    }></span>

                                    <div class="p-6 md:p-8 rounded-2xl bg-surface border border-edge hover:border-primary/30 transition-all duration-300">
                                        <div class="flex flex-col md:flex-row md:items-start md:justify-between gap-2 mb-4">
                                            <div>
                                                <h3 class="text-xl font-bold text-foreground">
                                                    {entry.role}
                                                </h3>
                                                <p class="font-medium text-primary">{entry.company}</p>
                                                <p class="text-sm text-muted">"📍 " {entry.location}</p>
                                            </div>
                                            <div class="shrink-0 text-sm">
                                                <span class=if entry.current {
                                                    "px-3 py-1 rounded-full bg-green-500/10 text-green-500 font-medium"
                                                } else {
                                                    "px-3 py-1 rounded-full bg-edge text-muted font-medium"
                                                }>{entry.period}</span>
                                            </div>
                                        </div>

                                        <ul class="space-y-2 mb-6">
                                            {entry
                                                .achievements
                                                .iter()
                                                .map(|achievement| {
                                                    view! {
                                                        <li class="flex items-start gap-2 text-muted leading-relaxed">
                                                            <span class="mt-1 text-primary">"▹"</span>
                                                            <span>{*achievement}</span>
                                                        </li>
                                                    }
                                                })
                                                .collect_view()}
                                        </ul>

                                        <div class="flex flex-wrap gap-2">
                                            {entry
                                                .tech_stack
                                                .iter()
                                                .map(|tech| view! { <TechTag label=*tech /> })
                                                .collect_view()}
                                        </div>
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
