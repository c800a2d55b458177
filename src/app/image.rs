use leptos::{either::Either, prelude::*};

use crate::content::is_allowed_image;

/// An `<img>` restricted to the configured image hosts.
///
/// Refused sources keep their box so the surrounding layout doesn't move.
#[component]
pub fn RemoteImage(
    #[prop(into)] src: String,
    #[prop(optional, into)] alt: String,
    width: u32,
    #[prop(optional)] height: Option<u32>,
    #[prop(optional, into)] class: String,
) -> impl IntoView {
    if is_allowed_image(&src) {
        Either::Left(view! {
            <img
                src=src
                alt=alt
                width=width.to_string()
                height=height.map(|h| h.to_string())
                loading="lazy"
                class=class
            />
        })
    } else {
        log::warn!("refusing image from disallowed host: {}", src);
        Either::Right(view! {
            <div
                role="img"
                aria-label=alt
                class=class
                style=format!("width: {}px; max-width: 100%;", width)
            ></div>
        })
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;

    fn render(src: &str) -> String {
        let src = src.to_string();
        Owner::new().with(|| view! { <RemoteImage src alt="x" width=300 /> }.to_html())
    }

    #[test]
    fn test_allowed_image_renders_img() {
        let html = render("https://imgs.xkcd.com/comics/eclipse_coolness.png");
        assert!(html.contains("<img"));
        assert!(html.contains("eclipse_coolness.png"));
    }

    #[test]
    fn test_refused_image_keeps_box() {
        let html = render("https://example.com/cat.png");
        assert!(!html.contains("<img"));
        assert!(html.contains("width: 300px"));
    }
}
