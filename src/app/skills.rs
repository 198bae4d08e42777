use leptos::prelude::*;

use super::components::SectionHeader;
use crate::content::{PHILOSOPHY_ITEMS, SKILL_CATEGORIES};

/// Skill categories as expandable cards; the open card shows proficiency bars.
#[component]
pub fn Skills() -> impl IntoView {
    let (selected, set_selected) = signal(None::<usize>);

    view! {
        <section id="skills" class="section-container relative z-10 overflow-hidden bg-background">
            <div class="max-w-6xl mx-auto relative z-10">
                <SectionHeader
                    badge="Technical Arsenal"
                    title="Skills &"
                    highlight="Expertise"
                    subtitle="The tools and technologies I use to bring backend systems to life"
                />

                <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-6 mb-16">
                    {SKILL_CATEGORIES
                        .iter()
                        .enumerate()
                        .map(|(index, category)| {
                            let is_open = Signal::derive(move || selected.get() == Some(index));
                            view! {
                                <div
                                    class=move || {
                                        if is_open.get() {
                                            "p-6 rounded-2xl cursor-pointer transition-all duration-300 bg-surface border border-primary/40 shadow-lg"
                                        } else {
                                            "p-6 rounded-2xl cursor-pointer transition-all duration-300 bg-surface border border-edge hover:border-primary/30 hover:-translate-y-1"
                                        }
                                    }
                                    on:click=move |_| {
                                        set_selected
                                            .update(|sel| {
                                                *sel = if *sel == Some(index) { None } else { Some(index) };
                                            })
                                    }
                                >
                                    <div class="flex items-center gap-3 mb-3">
                                        <span class="p-3 rounded-lg bg-primary/10 text-xl">
                                            {category.icon}
                                        </span>
                                        <div>
                                            <h3 class="font-bold text-lg text-foreground">
                                                {category.title}
                                            </h3>
                                            <p class="text-sm text-muted">{category.description}</p>
                                        </div>
                                    </div>

                                    <Show when=move || is_open.get()>
                                        <div class="mt-4 space-y-3">
                                            {category
                                                .items
                                                .iter()
                                                .map(|skill| {
                                                    view! {
                                                        <div>
                                                            <div class="flex justify-between text-sm mb-1">
                                                                <span class="text-foreground">{skill.name}</span>
                                                                <span class="text-muted">
                                                                    {format!("{}%", skill.level)}
                                                                </span>
                                                            </div>
                                                            <div class="h-1.5 rounded-full bg-edge overflow-hidden">
                                                                <div
                                                                    class="h-full rounded-full accent-line transition-all duration-500"
                                                                    style=format!("width: {}%", skill.level)
                                                                ></div>
                                                            </div>
                                                        </div>
                                                    }
                                                })
                                                .collect_view()}
                                        </div>
                                    </Show>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>

                // Engineering philosophy
                <div class="grid md:grid-cols-3 gap-6">
                    {PHILOSOPHY_ITEMS
                        .iter()
                        .map(|item| {
                            view! {
                                <div class="p-6 rounded-xl text-center bg-surface/60 border border-edge">
                                    <div class="text-2xl mb-3">{item.icon}</div>
                                    <h4 class="font-bold mb-2 text-foreground">{item.title}</h4>
                                    <p class="text-sm leading-relaxed text-muted">
                                        {item.description}
                                    </p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
