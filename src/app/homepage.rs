use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;

use super::text_reveal::TextReveal;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Title text="Home" />
        <div class="flex justify-evenly items-center h-[80vh]">
            <div class="flex-col flex items-center">
                <A href="/about">
                    <TextReveal
                        words="Hi, I'm Mark"
                        class="text-8xl transform transition-transform duration-100 hover:scale-110"
                    />
                </A>
            </div>
        </div>
        <div class="flex justify-center items-center p-4">
            <A href="/blog">
                <TextReveal
                    words="Check out my blog!"
                    class="transform transition-transform duration-100 hover:scale-110"
                />
            </A>
        </div>
    }
}
