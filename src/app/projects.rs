use leptos::prelude::*;

use super::components::{SectionHeader, TechTag};
use crate::content::PROJECTS;

#[component]
pub fn Projects() -> impl IntoView {
    view! {
        <section id="projects" class="section-container relative z-10 overflow-hidden bg-background">
            <div class="max-w-6xl mx-auto relative z-10">
                <SectionHeader
                    badge="Selected Work"
                    title="Featured"
                    highlight="Projects"
                    subtitle="Production-ready applications demonstrating full-stack development"
                />

                <div class="space-y-8">
                    {PROJECTS
                        .iter()
                        .map(|project| {
                            view! {
                                <div class="group relative p-8 rounded-3xl overflow-hidden bg-surface border border-edge hover:border-primary/30 transition-all duration-300">
                                    <div class="absolute inset-0 opacity-0 group-hover:opacity-100 transition-opacity duration-500 pointer-events-none card-sheen"></div>

                                    <div class="relative z-10 flex flex-col lg:flex-row lg:items-start gap-6">
                                        <div class="shrink-0 w-14 h-14 rounded-xl flex items-center justify-center bg-primary/10 border border-edge text-2xl">
                                            {project.icon}
                                        </div>

                                        <div class="flex-1">
                                            <p class="text-sm font-medium text-primary mb-1">
                                                {project.category}
                                            </p>
                                            <h3 class="text-2xl font-bold mb-3 text-foreground">
                                                {project.title}
                                            </h3>
                                            <p class="leading-relaxed text-muted mb-4 max-w-3xl">
                                                {project.description}
                                            </p>

                                            <div class="flex flex-wrap gap-2 mb-4">
                                                {project
                                                    .tech
                                                    .iter()
                                                    .map(|tech| view! { <TechTag label=*tech /> })
                                                    .collect_view()}
                                            </div>

                                            <div class="grid grid-cols-3 gap-4 max-w-md mb-4">
                                                {project
                                                    .metrics
                                                    .iter()
                                                    .map(|metric| {
                                                        view! {
                                                            <div class="text-center p-2 rounded-lg bg-surface/60 border border-edge">
                                                                <div class="font-bold text-sm text-foreground">
                                                                    {metric.value}
                                                                </div>
                                                                <div class="text-xs text-muted">{metric.label}</div>
                                                            </div>
                                                        }
                                                    })
                                                    .collect_view()}
                                            </div>

                                            <div class="flex items-center gap-4">
                                                {project
                                                    .github
                                                    .map(|url| {
                                                        view! {
                                                            <a
                                                                href=url
                                                                target="_blank"
                                                                rel="noopener noreferrer"
                                                                class="inline-flex items-center gap-2 text-muted hover:text-primary transition-colors"
                                                                aria-label="Project source on GitHub"
                                                            >
                                                                <i class="devicon-github-plain"></i>
                                                                "Source"
                                                            </a>
                                                        }
                                                    })}
                                                {project
                                                    .live
                                                    .map(|url| {
                                                        view! {
                                                            <a
                                                                href=url
                                                                target="_blank"
                                                                rel="noopener noreferrer"
                                                                class="inline-flex items-center gap-2 text-muted hover:text-primary transition-colors"
                                                            >
                                                                "Live ↗"
                                                            </a>
                                                        }
                                                    })}
                                            </div>
                                        </div>
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>

                // More on GitHub
                <div class="mt-12 text-center">
                    <a
                        href="https://github.com/devangumrane"
                        target="_blank"
                        rel="noopener noreferrer"
                        class="btn-secondary inline-flex items-center gap-2"
                    >
                        "More on GitHub"
                        <i class="devicon-github-plain"></i>
                    </a>
                </div>
            </div>
        </section>
    }
}
