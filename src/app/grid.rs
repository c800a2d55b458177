use leptos::{either::Either, prelude::*};

use super::image::RemoteImage;
use crate::content::ContentCard;

/// Column count of a [`CardGrid`] on medium screens and up.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Columns {
    One,
    #[default]
    Two,
    Three,
}

impl Columns {
    fn class(self) -> &'static str {
        // spelled out so tailwind picks the classes up
        match self {
            Columns::One => "md:grid-cols-1",
            Columns::Two => "md:grid-cols-2",
            Columns::Three => "md:grid-cols-3",
        }
    }
}

/// Responsive grid of clickable tiles, in the order given.
#[component]
pub fn CardGrid(cards: Vec<ContentCard>, #[prop(optional)] columns: Columns) -> impl IntoView {
    let class = format!(
        "grid grid-cols-1 {} gap-x-10 gap-y-20 items-center p-10 max-w-7xl mx-auto",
        columns.class()
    );
    view! {
        <div class=class>
            {cards
                .into_iter()
                .map(|card| {
                    view! {
                        <a href=card.href class="h-full content-start cursor-pointer">
                            <CardTile card />
                        </a>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
fn CardTile(card: ContentCard) -> impl IntoView {
    let class = format!(
        "row-span-1 rounded-xl group/bento hover:shadow-xl transition duration-200 p-4 border border-white/[0.2] justify-between flex flex-col space-y-4 {}",
        card.class
    );
    view! {
        <div class=class>
            <CardHeader image=card.image width=card.image_width />
            <div class="group-hover/bento:translate-x-2 transition duration-200">
                <div class="font-bold text-neutral-200 mb-2 mt-2">{card.title}</div>
                <div class="font-normal text-neutral-300 text-xs">{card.description}</div>
            </div>
        </div>
    }
}

#[component]
fn CardHeader(image: Option<&'static str>, width: u32) -> impl IntoView {
    view! {
        <div class="flex h-full min-h-24 items-center justify-start">
            {match image {
                Some(src) => {
                    Either::Left(
                        view! {
                            <RemoteImage src width class="rounded-lg max-h-full max-w-full" />
                        },
                    )
                }
                None => Either::Right(()),
            }}
        </div>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use crate::content::{post_cards, project_cards};

    fn render(cards: Vec<ContentCard>) -> String {
        Owner::new().with(|| view! { <CardGrid cards /> }.to_html())
    }

    #[test]
    fn test_grid_preserves_order() {
        let cards = post_cards();
        let html = render(cards.clone());
        let positions = cards
            .iter()
            .map(|c| html.find(c.href).expect("every card should be linked"))
            .collect::<Vec<_>>();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_grid_renders_every_field() {
        let cards = project_cards();
        let html = render(cards.clone());
        for card in &cards {
            assert!(html.contains(card.title));
            assert!(html.contains(card.description));
        }
        assert!(html.contains("md:grid-cols-2"));
    }

    #[test]
    fn test_empty_grid() {
        let html = render(Vec::new());
        assert!(!html.contains("<a"));
    }

    #[test]
    fn test_columns_class() {
        assert_eq!(Columns::One.class(), "md:grid-cols-1");
        assert_eq!(Columns::default().class(), "md:grid-cols-2");
        assert_eq!(Columns::Three.class(), "md:grid-cols-3");
    }
}
