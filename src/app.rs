mod about;
mod achievements;
mod components;
mod contact_section;
mod education;
mod experience;
mod footer;
mod hero;
mod navbar;
mod projects;
mod skills;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::theme::{Theme, ThemeStore};

use about::About;
use achievements::Achievements;
use contact_section::ContactSection;
use education::Education;
use experience::Experience;
use footer::Footer;
use hero::Hero;
use navbar::Navbar;
use projects::Projects;
use skills::Skills;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="light dark" />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link
                    rel="stylesheet"
                    href="https://cdn.jsdelivr.net/gh/devicons/devicon@latest/devicon.min.css"
                />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="font-sans">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    // The one theme cell for the whole page, handed to consumers as a prop.
    let theme = ThemeStore::new(Theme::default());

    view! {
        // sets the document title
        <Title formatter=|title| format!("Rudrankur Indurkar - {title}") />

        <ThemeManager store=theme />

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=path!("/") view=move || view! { <HomePage theme /> } />
            </Routes>
        </Router>
    }
}

/// Resolves the initial theme once per page load and mirrors every change to
/// the document root and to local storage. Renders nothing.
#[component]
fn ThemeManager(store: ThemeStore) -> impl IntoView {
    #[cfg(feature = "hydrate")]
    {
        use codee::string::{FromToStringCodec, OptionCodec};
        use leptos_use::storage::use_local_storage;
        use leptos_use::use_preferred_dark;

        use crate::theme::THEME_STORAGE_KEY;

        let (stored, set_stored, _) =
            use_local_storage::<Option<Theme>, OptionCodec<FromToStringCodec>>(THEME_STORAGE_KEY);
        let prefers_dark = use_preferred_dark();

        // Initialization: persisted value, else OS preference, else light.
        store.set(Theme::resolve(
            stored.get_untracked(),
            prefers_dark.get_untracked(),
        ));

        // Reflect every change (including the initial resolution) outward.
        Effect::new(move |_| {
            let theme = store.get();
            set_stored.set(Some(theme));
            sync_document_class(theme);
            log::info!("theme set to {theme}");
        });
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = store;
}

/// Tag the visual root with the `dark` marker class. Failures (no document
/// element, detached DOM) are ignored; the page simply keeps its current look.
#[cfg(feature = "hydrate")]
fn sync_document_class(theme: Theme) {
    if let Some(root) = document().document_element() {
        let classes = root.class_list();
        let result = if theme.is_dark() {
            classes.add_1("dark")
        } else {
            classes.remove_1("dark")
        };
        if result.is_err() {
            log::warn!("could not update root theme class");
        }
    }
}

#[component]
fn HomePage(theme: ThemeStore) -> impl IntoView {
    view! {
        <Title text="Portfolio" />
        <div class="relative min-h-screen bg-background text-foreground font-sans overflow-x-hidden selection:bg-primary selection:text-white">
            // Background gradients
            <div class="fixed inset-0 z-0 pointer-events-none">
                <div class="absolute top-[-10%] left-[-10%] w-[40%] h-[40%] bg-primary/10 rounded-full blur-[120px]"></div>
                <div class="absolute bottom-[-10%] right-[-10%] w-[40%] h-[40%] bg-accent/10 rounded-full blur-[120px]"></div>
            </div>

            <Navbar theme />

            <main class="relative z-10 flex flex-col items-center w-full">
                <Hero />
                <About />
                <Skills />
                <Experience />
                <Projects />
                <Education />
                <Achievements />
                <ContactSection />
            </main>

            <Footer />
        </div>
    }
}
