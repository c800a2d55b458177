mod about;
mod blog;
mod embed;
mod grid;
mod homepage;
mod image;
mod nav;
mod projects;
mod text_reveal;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use about::AboutPage;
use blog::{BlogLanding, BlogPage};
use homepage::HomePage;
use nav::{Footer, Navbar};
use projects::ProjectPage;

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
                <meta name="description" content="Mark Schulist's blog and projects" />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link rel="stylesheet" id="leptos" href="/pkg/mark-site.css" />
                <link
                    rel="stylesheet"
                    href="https://cdn.jsdelivr.net/gh/devicons/devicon@latest/devicon.min.css"
                />
                <MetaTags />
            </head>
            <body class="bg-zinc-900 text-white min-h-screen flex flex-col">
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
        <Title formatter=|title| format!("{title} | Mark Schulist") />

        <Router>
            <Navbar />
            <main class="flex-grow w-full">
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route path=path!("/") view=HomePage />
                    <Route path=path!("/about") view=AboutPage />
                    <Route path=path!("/blog") view=BlogLanding />
                    <Route path=path!("/blog/:slug") view=BlogPage />
                    <Route path=path!("/projects/:slug") view=ProjectPage />
                </Routes>
            </main>
            <Footer />
        </Router>
    }
}

/// Rendered for unknown paths and unknown slugs.
#[component]
pub fn NotFound() -> impl IntoView {
    #[cfg(feature = "ssr")]
    if let Some(resp) = use_context::<leptos_axum::ResponseOptions>() {
        resp.set_status(http::StatusCode::NOT_FOUND);
    }

    view! {
        <Title text="Not Found" />
        <div class="flex flex-col items-center justify-center py-32 gap-4">
            <h1 class="text-4xl">"Page not found."</h1>
            <a href="/" class="underline hover:text-blue-500 transition-colors duration-200">
                "Back home"
            </a>
        </div>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use leptos_meta::ServerMetaContext;
    use leptos_router::location::RequestUrl;

    use super::*;
    use crate::content::{post_cards, project_cards, PostBody, NAV_LINKS, POSTS};

    const NOT_FOUND: &str = "Page not found.";

    fn render_path(path: &str) -> String {
        Owner::new().with(|| {
            provide_context(RequestUrl::new(path));
            let (meta, _) = ServerMetaContext::new();
            provide_context(meta);
            view! { <App /> }.to_html()
        })
    }

    #[test]
    fn test_every_card_href_routes_to_a_page() {
        let hrefs = post_cards()
            .into_iter()
            .chain(project_cards())
            .map(|card| card.href)
            .chain(NAV_LINKS.iter().map(|link| link.href));
        for href in hrefs {
            let html = render_path(href);
            assert!(!html.contains(NOT_FOUND), "{href} rendered the not-found page");
        }
    }

    #[test]
    fn test_embedded_posts_render_their_frame() {
        for post in POSTS {
            if let PostBody::Embedded(doc) = post.body {
                let html = render_path(post.card.href);
                assert!(html.contains(&doc.frame_id()), "{}", post.slug);
            }
        }
    }

    #[test]
    fn test_unknown_paths_render_not_found() {
        for path in ["/blog/nope", "/projects/nope", "/nope"] {
            assert!(render_path(path).contains(NOT_FOUND), "{path}");
        }
    }
}
