use leptos::prelude::*;

use super::components::SectionHeader;
use crate::content::EDUCATION;

#[component]
pub fn Education() -> impl IntoView {
    view! {
        <section id="education" class="section-container relative z-10 overflow-hidden bg-background">
            <div class="max-w-4xl mx-auto relative z-10">
                <SectionHeader
                    badge="Academic Background"
                    title="My"
                    highlight="Education"
                />

                <div class="space-y-8">
                    {EDUCATION
                        .iter()
                        .map(|entry| {
                            view! {
                                <div class="p-8 rounded-2xl bg-surface border border-edge">
                                    <div class="flex flex-col md:flex-row md:items-start md:justify-between gap-4 mb-6">
                                        <div>
                                            <div class="inline-block p-3 rounded-xl bg-primary/10 text-2xl mb-4">
                                                "🎓"
                                            </div>
                                            <h3 class="text-xl font-bold text-foreground">
                                                {entry.degree}
                                            </h3>
                                            <p class="font-medium text-primary">{entry.university}</p>
                                            <p class="text-sm text-muted">"📍 " {entry.location}</p>
                                        </div>
                                        <div class="shrink-0 text-right text-sm">
                                            <div class="font-bold text-foreground">{entry.period}</div>
                                            <div class="text-muted">"GPA: " {entry.gpa}</div>
                                        </div>
                                    </div>

                                    <h4 class="text-sm font-medium uppercase tracking-wider text-muted mb-3">
                                        "Relevant Coursework"
                                    </h4>
                                    <div class="flex flex-wrap gap-2">
                                        {entry
                                            .courses
                                            .iter()
                                            .map(|course| {
                                                view! {
                                                    <span class="rounded-md px-3 py-1.5 bg-surface/60 border border-edge text-sm text-muted">
                                                        {*course}
                                                    </span>
                                                }
                                            })
                                            .collect_view()}
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
