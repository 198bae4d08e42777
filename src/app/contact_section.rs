use leptos::prelude::*;
use leptos_use::{use_timeout_fn, UseTimeoutFnReturn};

use super::components::SectionHeader;
use crate::contact::{ContactMessage, SubmitStatus, SENT_RESET_MS, SUBMIT_DELAY_MS};
use crate::content::{CONTACT_EMAIL, CONTACT_LOCATION, SOCIAL_LINKS};

/// Contact info cards plus the simulated-submission form. The "network call"
/// is a fixed delay; the payload is logged and goes nowhere.
#[component]
pub fn ContactSection() -> impl IntoView {
    let (form, set_form) = signal(ContactMessage::default());
    let (status, set_status) = signal(SubmitStatus::default());

    let UseTimeoutFnReturn {
        start: start_reset, ..
    } = use_timeout_fn(
        move |_: ()| set_status.update(|s| *s = s.reset()),
        SENT_RESET_MS,
    );

    let UseTimeoutFnReturn {
        start: start_send, ..
    } = use_timeout_fn(
        move |message: ContactMessage| {
            match serde_json::to_string(&message) {
                Ok(payload) => log::info!("simulated contact submission: {payload}"),
                Err(err) => log::warn!("could not serialize contact payload: {err}"),
            }
            set_status.update(|s| *s = s.resolve());
            set_form.set(ContactMessage::default());
            start_reset(());
        },
        SUBMIT_DELAY_MS,
    );

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let message = form.get_untracked();
        if status.get_untracked().is_sending() || !message.is_valid() {
            return;
        }
        set_status.update(|s| *s = s.begin());
        start_send(message);
    };

    view! {
        <section id="contact" class="section-container relative z-10 overflow-hidden bg-background">
            <div class="max-w-5xl mx-auto">
                <SectionHeader
                    badge="Get in Touch"
                    title="Let's"
                    highlight="Connect"
                    subtitle="Whether you have a project in mind or just want to say hi, my inbox is always open."
                />

                <div class="grid md:grid-cols-2 gap-12 items-start">
                    // Contact info
                    <div class="space-y-6">
                        <ContactCard
                            icon="📧"
                            title="Email"
                            value=CONTACT_EMAIL
                            href=Some("mailto:devangumrane8888@gmail.com")
                        />
                        <ContactCard
                            icon="💼"
                            title="LinkedIn"
                            value="Connect on LinkedIn"
                            href=SOCIAL_LINKS.iter().find(|s| s.name == "LinkedIn").map(|s| s.url)
                        />
                        <ContactCard
                            icon="🐙"
                            title="GitHub"
                            value="Follow on GitHub"
                            href=SOCIAL_LINKS.iter().find(|s| s.name == "GitHub").map(|s| s.url)
                        />
                        <ContactCard icon="📍" title="Location" value=CONTACT_LOCATION href=None />
                    </div>

                    // Form
                    <div class="p-8 rounded-3xl relative overflow-hidden bg-surface border border-edge shadow-lg">
                        <div class="absolute top-0 right-0 w-32 h-32 rounded-bl-full blur-2xl opacity-20 pointer-events-none bg-primary"></div>

                        <form on:submit=on_submit class="space-y-6 relative z-10">
                            <div class="space-y-2">
                                <label for="contact_name" class="text-sm font-medium ml-1 text-muted">
                                    "Name"
                                </label>
                                <input
                                    id="contact_name"
                                    type="text"
                                    required
                                    placeholder="John Doe"
                                    prop:value=move || form.get().name
                                    on:input=move |ev| {
                                        set_form.update(|f| f.name = event_target_value(&ev))
                                    }
                                    class="w-full px-4 py-3 rounded-xl outline-none transition-all duration-300 focus:ring-2 focus:ring-primary bg-surface/60 border border-edge text-foreground placeholder-muted"
                                />
                            </div>
                            <div class="space-y-2">
                                <label for="contact_email" class="text-sm font-medium ml-1 text-muted">
                                    "Email"
                                </label>
                                <input
                                    id="contact_email"
                                    type="email"
                                    required
                                    placeholder="john@example.com"
                                    prop:value=move || form.get().email
                                    on:input=move |ev| {
                                        set_form.update(|f| f.email = event_target_value(&ev))
                                    }
                                    class="w-full px-4 py-3 rounded-xl outline-none transition-all duration-300 focus:ring-2 focus:ring-primary bg-surface/60 border border-edge text-foreground placeholder-muted"
                                />
                            </div>
                            <div class="space-y-2">
                                <label for="contact_message" class="text-sm font-medium ml-1 text-muted">
                                    "Message"
                                </label>
                                <textarea
                                    id="contact_message"
                                    required
                                    rows="4"
                                    placeholder="Tell me about your project..."
                                    prop:value=move || form.get().message
                                    on:input=move |ev| {
                                        set_form.update(|f| f.message = event_target_value(&ev))
                                    }
                                    class="w-full px-4 py-3 rounded-xl outline-none transition-all duration-300 focus:ring-2 focus:ring-primary resize-none bg-surface/60 border border-edge text-foreground placeholder-muted"
                                ></textarea>
                            </div>

                            <button
                                type="submit"
                                disabled=move || status.get().is_sending()
                                class=move || {
                                    if status.get().is_sent() {
                                        "w-full py-4 rounded-xl font-bold flex items-center justify-center gap-2 transition-all duration-300 bg-green-500 text-white shadow-lg"
                                    } else {
                                        "w-full py-4 rounded-xl font-bold flex items-center justify-center gap-2 transition-all duration-300 bg-primary text-white shadow-lg disabled:opacity-70 disabled:cursor-not-allowed"
                                    }
                                }
                            >
                                {move || match status.get() {
                                    SubmitStatus::Sending => {
                                        view! {
                                            <svg
                                                class="animate-spin h-5 w-5 text-white"
                                                xmlns="http://www.w3.org/2000/svg"
                                                fill="none"
                                                viewBox="0 0 24 24"
                                            >
                                                <circle
                                                    class="opacity-25"
                                                    cx="12"
                                                    cy="12"
                                                    r="10"
                                                    stroke="currentColor"
                                                    stroke-width="4"
                                                ></circle>
                                                <path
                                                    class="opacity-75"
                                                    fill="currentColor"
                                                    d="M4 12a8 8 0 018-8V0C5.373 0 0 5.373 0 12h4zm2 5.291A7.962 7.962 0 014 12H0c0 3.042 1.135 5.824 3 7.938l3-2.647z"
                                                ></path>
                                            </svg>
                                        }
                                            .into_any()
                                    }
                                    SubmitStatus::Sent => {
                                        view! { <span>"Message Sent! ✈"</span> }.into_any()
                                    }
                                    SubmitStatus::Idle => {
                                        view! { <span>"Send Message ✈"</span> }.into_any()
                                    }
                                }}
                            </button>
                        </form>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn ContactCard(
    icon: &'static str,
    title: &'static str,
    value: &'static str,
    href: Option<&'static str>,
) -> impl IntoView {
    let card = move || {
        view! {
            <div class="flex items-center gap-4 p-4 rounded-xl transition-all duration-300 group bg-surface border border-edge hover:translate-x-1">
                <div class="w-12 h-12 rounded-lg flex items-center justify-center transition-colors duration-300 bg-primary/10 text-xl group-hover:bg-primary">
                    {icon}
                </div>
                <div>
                    <h4 class="text-sm font-medium text-muted">{title}</h4>
                    <p class="font-semibold text-foreground">{value}</p>
                </div>
            </div>
        }
    };

    match href {
        Some(url) => leptos::either::Either::Left(view! {
            <a href=url target="_blank" rel="noopener noreferrer" class="block">
                {card()}
            </a>
        }),
        None => leptos::either::Either::Right(card()),
    }
}
