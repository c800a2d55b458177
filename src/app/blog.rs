use leptos::{either::EitherOf3, prelude::*};
use leptos_meta::Title;
use leptos_router::hooks::use_params_map;

use super::{embed::EmbeddedDocument, grid::CardGrid, image::RemoteImage, NotFound};
use crate::content::{find_post, post_cards, NativePost, PostBody, CONTENT_ORIGIN};

#[component]
pub fn BlogLanding() -> impl IntoView {
    view! {
        <Title text="Blog" />
        <CardGrid cards=post_cards() />
    }
}

#[component]
pub fn BlogPage() -> impl IntoView {
    let params = use_params_map();
    let slug = move || params.get().get("slug").unwrap_or_default();

    move || match find_post(&slug()) {
        Ok(post) => match post.body {
            PostBody::Embedded(doc) => EitherOf3::A(view! {
                <Title text=post.card.title />
                <EmbeddedDocument post=doc />
            }),
            PostBody::Native(NativePost::Eclipse) => EitherOf3::B(view! {
                <Title text=post.card.title />
                <EclipsePost />
            }),
        },
        Err(e) => {
            log::debug!("{}", e);
            EitherOf3::C(view! { <NotFound /> })
        }
    }
}

#[component]
fn EclipsePost() -> impl IntoView {
    let photo = |name: &str| format!("{}blogs/eclipse/{}", CONTENT_ORIGIN, name);
    let xkcds = [
        "https://imgs.xkcd.com/comics/eclipse_coolness.png",
        "https://imgs.xkcd.com/comics/eclipse_clouds.png",
        "https://imgs.xkcd.com/comics/types_of_eclipse_photo.png",
    ];
    view! {
        <div class="flex flex-col gap-4 mx-[5vw] md:mx-[10vw] my-2 flex-wrap">
            <h1 class="text-4xl self-center">"The Total Solar Eclipse"</h1>
            <h2 class="text-2xl self-center">"April 8, 2024"</h2>
            <a href=photo("eclipse_all.jpg") class="cursor-default">
                <RemoteImage
                    src=photo("eclipse_all.jpg")
                    alt="Eclipse"
                    width=4000
                    height=800
                    class="rounded-lg max-w-full h-auto"
                />
            </a>
            <div class="flex flex-col md:flex-row gap-4 w-full justify-items-stretch">
                {["brighter_eclipse.jpg", "darker_eclipse.jpg"]
                    .into_iter()
                    .map(|name| {
                        view! {
                            <div class="flex-grow">
                                <a href=photo(name) class="cursor-default">
                                    <RemoteImage
                                        src=photo(name)
                                        alt="Eclipse"
                                        width=600
                                        height=400
                                        class="rounded-lg min-w-full h-auto"
                                    />
                                </a>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
            <div class="text-lg">
                "Totality is unlike anything. Words cannot describe the insanity that occurs when the moon entirely blocks the sun. Leading up totality, the sky begins to slowly darken, the wind picks up, and the temperature drops a few degrees. At 99%, excitment resonates throughout everyone standing nearby, awaiting totality. And then BAM! The last sliver of light dissappears, and the sky turns dark. The corona, the sun's outer atmosphere, becomes visible. Other planets and stars appear, and there's the most beautiful sunset in every direction. Pictures only capture a fraction of the true beauty of totality. Looking up at the sky, you see what can only be described as a black hole surrounded by a ring of light. Looking through binoculars, you witness the bright pink and orange solar flares, unlike anything you've ever seen before. You're staring at the sun!! Just as you've taken in the magnificance of the corona, the sun peaks out from behind the moon, and the sky rapidly brightens. It's all over. But you're left with a memory that you will certainly never forget."
            </div>
            <div class="text-lg">
                "I went to see the solar eclipse in Carbondale, IL. We went to Southern Illnois University, where thousands of people gathered to witness the eclipse. Carbondale was in the path of totality for the last eclipse in 2017, meaning it had 2 eclipses in 7 years, absolutely insane!"
            </div>
            <div class="text-lg">
                "As for the photos, I took them with my Nikon D500, a 500mm f5.6 PF, and a 1.4x teleconveter. I had a solar filter on the lens, and I used a remote shutter release. The shutter release ended up serving two purposes: reducing camera shake and allowing me to enjoy the eclipse without worrying (too much) about my camera."
            </div>
            <div class="flex-col lg:flex-row flex gap-4 justify-center">
                {xkcds
                    .into_iter()
                    .map(|src| {
                        view! {
                            <div class="flex flex-grow justify-center">
                                <RemoteImage
                                    src
                                    width=600
                                    height=500
                                    class="self-center rounded-lg max-w-full h-auto"
                                />
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
            <div class="text-lg self-center mb-4">
                "Of course, I can't forget the most important part, the XKCDs!"
            </div>
        </div>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;

    #[test]
    fn test_eclipse_post_renders_all_images() {
        let html = Owner::new().with(|| view! { <EclipsePost /> }.to_html());
        assert_eq!(html.matches("<img").count(), 6);
        assert!(html.contains("eclipse_all.jpg"));
    }
}
