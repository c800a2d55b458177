use leptos::{ev, html, prelude::*};
use leptos_use::{use_event_listener, use_window};
use wasm_bindgen::JsValue;

use crate::embed::{is_blank_src, EmbeddedPost, LoadState, ResizeMessage};

/// Shows an externally hosted document in an iframe sized to its content.
///
/// A skeleton covers the frame until the frame's `load` event fires; both stay
/// mounted and swap by opacity. Nothing retries, so a document that never
/// loads leaves the skeleton up.
#[component]
pub fn EmbeddedDocument(post: EmbeddedPost) -> impl IntoView {
    let url = post.url();
    let frame_id = post.frame_id();
    let frame = NodeRef::<html::Iframe>::new();
    let (state, set_state) = signal(LoadState::default());
    let (height, set_height) = signal(post.min_height);
    let (mounted, set_mounted) = signal(false);

    // src is only set once hydrated, otherwise the frame can finish loading
    // before the load handler exists
    Effect::new(move |_| set_mounted(true));

    let on_load = move |_| {
        let Some(el) = frame.get_untracked() else {
            return;
        };
        let src = el.src();
        // the initial about:blank document of a frame mounted without src
        if is_blank_src(&src) {
            return;
        }
        if set_state.try_update(|s| s.frame_loaded(&src)).unwrap_or(false) {
            log::debug!("embedded document {} loaded", post.path);
        }
        // the child only starts reporting its size after this handshake
        let Some(child) = el.content_window() else {
            return;
        };
        if let Err(e) = child.post_message(&JsValue::from_str(&post.init_message()), "*") {
            log::warn!("couldn't start resizing {}: {:?}", post.path, e);
        }
    };

    let listen_id = frame_id.clone();
    let _ = use_event_listener(use_window(), ev::message, move |ev| {
        let Some(data) = ev.data().as_string() else {
            return;
        };
        let Some(msg) = ResizeMessage::parse(&data) else {
            return;
        };
        if msg.frame_id == listen_id && msg.is_resize() {
            set_height(post.clamp_height(msg.height));
        }
    });

    let is_loading = move || state.with(LoadState::is_loading);

    view! {
        <div class="relative w-full">
            <div
                aria-hidden=move || (!is_loading()).to_string()
                class=move || {
                    format!(
                        "absolute inset-x-0 top-0 p-10 space-y-4 pointer-events-none transition-opacity duration-500 {}",
                        if is_loading() { "opacity-100" } else { "opacity-0" },
                    )
                }
            >
                <div class="loading-skeleton h-10 rounded w-1/2 mx-auto"></div>
                <div class="loading-skeleton h-6 rounded"></div>
                <div class="loading-skeleton h-6 rounded w-3/4"></div>
                <div class="loading-skeleton h-64 rounded"></div>
                <div class="loading-skeleton h-6 rounded w-4/5"></div>
            </div>
            <iframe
                id=frame_id
                node_ref=frame
                src=move || mounted.get().then(|| url.clone())
                title=post.path
                on:load=on_load
                class=move || {
                    format!(
                        "border-0 transition-opacity duration-500 {}",
                        if is_loading() { "opacity-0" } else { "opacity-100" },
                    )
                }
                style=move || format!("width: 1px; min-width: 100%; height: {}px;", height.get())
            ></iframe>
        </div>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;

    fn render(post: EmbeddedPost) -> String {
        Owner::new().with(|| view! { <EmbeddedDocument post /> }.to_html())
    }

    #[test]
    fn test_renders_placeholder_over_hidden_frame() {
        let post = EmbeddedPost::remote("blogs/perch/bird-classifier.html");
        let html = render(post);
        assert!(html.contains("id=\"embed-blogs-perch-bird-classifier-html\""));
        assert!(html.contains("height: 1500px"));

        let skeleton = html.find("loading-skeleton").unwrap();
        let frame = html.find("<iframe").unwrap();
        assert!(skeleton < frame);
        assert!(html[..skeleton].contains("opacity-100"));
        assert!(html[frame..].contains("opacity-0"));
    }

    #[test]
    fn test_frame_source_waits_for_hydration() {
        let html = render(EmbeddedPost::local("/julia.html"));
        assert!(!html.contains(" src="));
        assert!(html.contains("id=\"embed-julia-html\""));
        assert!(html.contains("height: 2000px"));
        assert!(!html.contains("scrolling"));
    }
}
