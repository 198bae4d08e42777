use leptos::{html, prelude::*};
use leptos_use::utils::Pausable;
use leptos_use::{
    use_element_visibility, use_raf_fn_with_options, UseRafFnCallbackArgs, UseRafFnOptions,
};

use crate::counter::{display_text, CounterAnimation, CounterPhase, DEFAULT_DURATION_MS};

/// Counts up from 0 to `target` the first time the element scrolls into view.
///
/// Sampling happens on animation frames and suspends with the frame scheduler;
/// unmounting the component stops the ticks. Later visibility changes are
/// ignored by the idle/running/complete machine.
#[component]
pub fn AnimatedCounter(
    target: u32,
    /// appended verbatim after the current value, e.g. ".8%" or "+"
    #[prop(default = "")]
    suffix: &'static str,
    #[prop(default = DEFAULT_DURATION_MS)] duration_ms: f64,
) -> impl IntoView {
    let el = NodeRef::<html::Span>::new();
    let (value, set_value) = signal(0u32);
    let (done, set_done) = signal(false);
    let anim = StoredValue::new(CounterAnimation::new(target, duration_ms));
    // timestamp of the first sampled frame, the animation's time origin
    let start_ts = StoredValue::new(None::<f64>);

    let Pausable { pause, resume, .. } = use_raf_fn_with_options(
        move |args: UseRafFnCallbackArgs| {
            let start = match start_ts.get_value() {
                Some(ts) => ts,
                None => {
                    start_ts.set_value(Some(args.timestamp));
                    args.timestamp
                }
            };
            let sampled = anim
                .try_update_value(|a| a.value_at(args.timestamp - start))
                .unwrap_or(target);
            set_value.set(sampled);
            if anim.with_value(|a| a.is_complete()) {
                set_done.set(true);
            }
        },
        UseRafFnOptions::default().immediate(false),
    );

    let visible = use_element_visibility(el);
    Effect::new(move |_| {
        if visible.get() && anim.with_value(|a| a.phase() == CounterPhase::Idle) {
            anim.update_value(|a| {
                a.start();
            });
            resume();
        }
    });
    Effect::new(move |_| {
        if done.get() {
            pause();
        }
    });

    view! { <span node_ref=el>{move || display_text(value.get(), suffix)}</span> }
}

/// Centered section heading: pill badge, title with a gradient highlight,
/// optional subtitle.
#[component]
pub fn SectionHeader(
    badge: &'static str,
    title: &'static str,
    highlight: &'static str,
    #[prop(optional)] subtitle: Option<&'static str>,
) -> impl IntoView {
    view! {
        <div class="text-center mb-16">
            <span class="inline-block px-4 py-1.5 mb-4 text-sm font-medium rounded-full bg-primary/10 text-primary border border-edge">
                {badge}
            </span>
            <h2 class="text-4xl md:text-5xl lg:text-6xl font-bold mb-4 text-foreground">
                {title} " " <span class="text-gradient">{highlight}</span>
            </h2>
            {subtitle
                .map(|s| {
                    view! { <p class="text-lg max-w-2xl mx-auto text-muted">{s}</p> }
                })}
        </div>
    }
}

/// Small rounded tag used for tech stacks.
#[component]
pub fn TechTag(label: &'static str) -> impl IntoView {
    view! {
        <span class="rounded-md px-2 py-1 bg-primary/10 text-primary border border-edge text-sm">
            {label}
        </span>
    }
}
