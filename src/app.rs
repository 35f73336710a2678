mod contact;
mod content;
mod footer;
mod header;
mod hero;
mod host;
mod sections;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use contact::Contact;
use footer::{BackToTop, Footer};
use header::Header;
use hero::Hero;
use host::provide_view_state;
use sections::{About, Certifications, Education, Experience, Freelancing, Projects, Skills};

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark" />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="bg-slate-950 text-white">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    view! {
        <Title formatter=|title| format!("{title} | {}", content::OWNER) />
        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=path!("/") view=Portfolio />
            </Routes>
        </Router>
    }
}

/// The whole single-page portfolio.
#[component]
fn Portfolio() -> impl IntoView {
    provide_view_state();

    view! {
        <Title text="Portfolio" />
        <main class="min-h-screen overflow-x-hidden relative">
            <Header />
            <Hero />
            <About />
            <Skills />
            <Projects />
            <Education />
            <Experience />
            <Certifications />
            <Freelancing />
            <Contact />
            <Footer />
            <BackToTop />
        </main>
    }
}
