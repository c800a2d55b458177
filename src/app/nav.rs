use leptos::{either::Either, prelude::*};
use leptos_router::components::A;

use crate::content::{NAV_LINKS, SOCIAL_LINKS};

#[component]
pub fn Navbar() -> impl IntoView {
    view! {
        <nav class="flex justify-center items-center p-4">
            <ul class="flex">
                {NAV_LINKS
                    .iter()
                    .map(|link| {
                        view! {
                            <li class="p-4">
                                <A
                                    href=link.href
                                    attr:class="hover:text-blue-500 transition-colors duration-200"
                                >
                                    {link.label}
                                </A>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </nav>
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="bg-gray-800 text-white text-center p-4 w-full">
            <div class="flex justify-center items-center overflow-visible">
                {SOCIAL_LINKS
                    .iter()
                    .map(|link| {
                        view! {
                            <a
                                href=link.href
                                target="_blank"
                                rel="noopener noreferrer"
                                aria-label=link.label
                                class="mx-2 text-2xl transform transition-transform duration-100 hover:scale-125"
                            >
                                {match link.icon {
                                    Some(icon) => Either::Left(view! { <i class=icon></i> }),
                                    None => {
                                        Either::Right(
                                            view! { <span class="text-base">{link.label}</span> },
                                        )
                                    }
                                }}
                            </a>
                        }
                    })
                    .collect_view()}
                <div class="mx-2">"© 2024 Mark Schulist"</div>
            </div>
        </footer>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;

    #[test]
    fn test_footer_links_out() {
        let html = Owner::new().with(|| view! { <Footer /> }.to_html());
        assert_eq!(html.matches("target=\"_blank\"").count(), 3);
        for link in SOCIAL_LINKS {
            let start = html.find(link.href).expect("link rendered");
            let anchor = &html[start..start + html[start..].find("</a>").unwrap()];
            let body = &anchor[anchor.find('>').unwrap() + 1..];
            let text = body
                .split('<')
                .map(|part| part.split_once('>').map_or(part, |(_, t)| t))
                .collect::<String>();
            assert!(
                body.contains("devicon-") || !text.trim().is_empty(),
                "{} renders nothing visible",
                link.label
            );
        }
    }
}
