use leptos::{html, prelude::*};
use leptos_use::use_element_visibility;

use crate::reveal::{split_words, RevealSchedule};

/// Fades `words` in one at a time the first time the block scrolls into view.
#[component]
pub fn TextReveal(#[prop(into)] words: String, #[prop(optional, into)] class: String) -> impl IntoView {
    let schedule = RevealSchedule::default();
    let root = NodeRef::<html::Div>::new();
    let is_visible = use_element_visibility(root);
    let (revealed, set_revealed) = signal(false);
    let words = split_words(&words)
        .into_iter()
        .map(|w| format!("{} ", w))
        .collect::<Vec<_>>();
    let count = words.len();

    // one way: once revealed, leaving the viewport doesn't hide the words again
    Effect::new(move |_| {
        if is_visible.get() && !revealed.get_untracked() {
            log::debug!("revealing {} words over {}s", count, schedule.total(count));
            set_revealed(true);
        }
    });

    let spans = words
        .into_iter()
        .enumerate()
        .map(|(i, word)| {
            view! {
                <span
                    style=schedule.transition_style(i)
                    class=move || if revealed.get() { "text-white opacity-100" } else { "text-white opacity-0" }
                >
                    {word}
                </span>
            }
        })
        .collect_view();

    view! {
        <div node_ref=root class=format!("font-bold {}", class)>
            <div class="mt-4">
                <div class="text-white text-6xl leading-snug tracking-wide">{spans}</div>
            </div>
        </div>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;

    fn render(words: &str) -> String {
        let words = words.to_string();
        Owner::new().with(|| view! { <TextReveal words /> }.to_html())
    }

    #[test]
    fn test_one_hidden_span_per_word() {
        let html = render("Hi, I'm Mark");
        assert_eq!(html.matches("<span").count(), 3);
        assert_eq!(html.matches("opacity-0").count(), 3);
        assert!(!html.contains("opacity-100"));
    }

    #[test]
    fn test_spans_are_staggered_left_to_right() {
        let html = render("Check out my blog!");
        let first = html.find("transition-delay: 0s").unwrap();
        let second = html.find("transition-delay: 0.2s").unwrap();
        let last = html.find("transition-delay: 0.6s").unwrap();
        assert!(first < second && second < last);
        assert!(html.find("Check").unwrap() < html.find("blog!").unwrap());
    }

    #[test]
    fn test_no_words_no_spans() {
        let html = render("");
        assert_eq!(html.matches("<span").count(), 0);
    }
}
