use leptos::{
    either::{Either, EitherOf3},
    prelude::*,
};
use leptos_meta::Title;
use leptos_router::hooks::use_params_map;

use super::{image::RemoteImage, NotFound};
use crate::content::{find_project, ProjectPage as Page, CONTENT_ORIGIN};

const PAGE_CLASS: &str = "flex flex-col gap-4 mx-[5vw] md:mx-[15vw] my-2";
const HEADING_LINK_CLASS: &str =
    "text-4xl self-center p-4 transform transition-transform duration-100 hover:scale-110";
const REPO_LINK_CLASS: &str =
    "underline text-lg transform transition-transform duration-100 hover:scale-110 self-start";
const SIDE_IMAGE_CLASS: &str = "rounded-lg mx-4 self-center justify-self-center h-auto";

fn asset(path: &str) -> String {
    format!("{}{}", CONTENT_ORIGIN, path)
}

#[component]
pub fn ProjectPage() -> impl IntoView {
    let params = use_params_map();
    let slug = move || params.get().get("slug").unwrap_or_default();

    move || match find_project(&slug()) {
        Ok(project) => {
            let body = match project.page {
                Page::CourseWatch => EitherOf3::A(view! { <CourseWatch /> }),
                Page::EbirdCbc => EitherOf3::B(view! { <EbirdCbc /> }),
                Page::WashuBuildings => EitherOf3::C(view! { <WashuBuildings /> }),
            };
            Either::Left(view! {
                <Title text=project.card.title />
                {body}
            })
        }
        Err(e) => {
            log::debug!("{}", e);
            Either::Right(view! { <NotFound /> })
        }
    }
}

#[component]
fn CourseWatch() -> impl IntoView {
    view! {
        <div class=PAGE_CLASS>
            <a class=HEADING_LINK_CLASS href="https://wustlwatch.courses/" target="_blank">
                "WashU Course Watch"
            </a>
            <h2 class="text-3xl py-4">"What it is"</h2>
            <div class="grid grid-cols-1 lg:grid-cols-2 gap-4">
                <p class="text-lg">
                    "WashU's course registration system is, well, frustrating. It (usually) doesn't crash because they spread out registration times, but the website looks like it was written decades in the past. There is a lack of CSS and the website is not mobile-friendly. But all of this would be acceptable if, and only if, you didn't have to spend hours refreshing the page to get into a class. Most courses have waitlists, and I have no problem with those courses. It's the courses that don't have waitlists that sparked the idea for this project. And for some (fantastic) reason, almost all of the intro STEM courses don't have waitlists."
                    <br />
                    <br />
                    "The principle of our app is simple: you enter the course you want to \"watch\" and our app will text you when a spot opens up. It's pretty simple, which is why we decided to build it for our hackathon (Hack WashU 2023)."
                </p>
                <RemoteImage
                    src=asset("webstac.png")
                    alt="Webstac, our 'fantastic' system"
                    width=500
                    class=SIDE_IMAGE_CLASS
                />
            </div>
            <h2 class="text-3xl py-4">"How it works"</h2>
            <p class="text-lg">
                "The app uses a React frontend and a NodeJS backend. The frontend is hosted on Google Firebase and the backend is hosted on Google Cloud. We're using a Firestore database to store the courses that users want to watch. Looking back, we probably should have used NextJS because Google Cloud Functions take some time to start up from a cold start. We're using Textbelt to send text messages as they have a very nice API. We're also using a cron job to check the course status every minute during course registration time."
            </p>
            <a
                href="https://github.com/mschulist/washu-course-alerts"
                class=REPO_LINK_CLASS
                target="_blank"
            >
                "Here's the GitHub repo in case you're interested."
            </a>
        </div>
    }
}

#[component]
fn EbirdCbc() -> impl IntoView {
    view! {
        <div class=PAGE_CLASS>
            <a class=HEADING_LINK_CLASS href="https://github.com/ddkapan/eBirdCBC" target="_blank">
                "eBirdCBC"
            </a>
            <h2 class="text-3xl py-4">"What it is"</h2>
            <div class="grid grid-cols-1 lg:grid-cols-2 gap-4">
                <p class="text-lg">
                    "As an avid birder, I have participated in the Christmas Bird Count (CBC) for the 7 years. We always use "
                    <a href="https://ebird.org" target="_blank" class="underline">
                        "eBird"
                    </a>
                    " to collect our data, which makes data collection effortless, but the process of compiling the data is a pain. Once we've downloaded the data from eBird, we spend hours figuring out which counts were overlapping. Because we are counting the same birds, some of the checklists will have counted the same birds, and we need to combine those sightings (like a hawk flying over seen by two different groups). This process takes forever and is very error-prone. So, I decided to build an app that would make this process much more seamless."
                    <br />
                    <br />
                    "The principle of our app is simple: you enter the eBird trip report of the count and the app collects the data (and tracks!) from those checklists and displays them on a map. Then, you can go through each species and see the checklists that reported that species. If you think the same birds were seen on multiple checklists, you can combine those checklists and the app will take the max from the merged lists. Once you've gone through all the species, you can download the data in a nice csv. You can also export the database file if you want to share the session in the app with others."
                </p>
                <RemoteImage
                    src=asset("ebirdcbc.png")
                    alt="eBird CBC"
                    width=600
                    class=SIDE_IMAGE_CLASS
                />
            </div>
            <h2 class="text-3xl py-4">"How it works"</h2>
            <p class="text-lg">
                "This app is built with Electron (I know, I know...) and React. This is by far the most complex app I've built, for two reasons: 1.) This was my first time using React, so I had very little knowledge of the importance of splitting up components (just look at the GitHub repo...) and 2.) there are a lot of moving parts, from gather the data from eBird to calculating the max of the merged lists."
                <br />
                <br />
                "The frontend uses Leaflet to display the map, which is a fantastic library and was the easiest part of the app to implement. I used a library called "
                <a href="https://github.com/louischatriot/nedb" target="_blank" class="underline">
                    "nedb"
                </a>
                " as the database, which is a simple database that uses a MongoDB-like API but is much more lightweight. It stores the data in a .db file on your computer, which is nice because you can share the session with other people by sending them the .db file. The backend is built with Node.js and runs on the user's computer as a child process of the Electron app."
                <br />
                <br />
                "The most interesting part of the app is how I get the data from eBird. There is an eBird API, but it does not allow you to get the tracks from the checklists because those are restricted to the user who submitted the checklist. I get around this by scraping the tracks from eBird using Puppeteer. When you enter the eBird trip report, the app opens a headless browser to find the checklists on the trip report. Then, it opens a new browser window and prompts the user to log into eBird. Once they've logged in, Puppeteer goes to each checklist and scrapes the tracks from the checklist. In eBird the tracks are stored as lists of coordinates, which my app downloads and stores in the database."
            </p>
        </div>
    }
}

#[component]
fn WashuBuildings() -> impl IntoView {
    view! {
        <div class=PAGE_CLASS>
            <a class=HEADING_LINK_CLASS href="https://washucampusview.com" target="_blank">
                "WashU Campus View"
            </a>
            <div class="grid grid-cols-1 lg:grid-cols-2 gap-4">
                <p class="text-lg">
                    "For this year's hackathon (Oct. 2024), we decided to build an interactive map of the WashU campus. The main motivation for this project came from my internship at SeerAI, where we used a library called DeckGL to display data on maps."
                    <br />
                    <br />
                    "DeckGL is a WebGL-powered framework for visual exploratory data analysis of large datasets. By using the GPU, DeckGL is SUPER fast and can render thousands of points on a map (in 3D as well!). Although we didn't push DeckGL to its limits, its ability to render the entire campus in 3D (along with the Campus Circulator routes) is impressive."
                    <br />
                    <br />
                    "Besides an excuse to use a cool WebGL-enabled library, this project also attempted to solve a big problem many of us have faced: finding the location of printers on campus. For some reason, there is no central location of every printer on campus. So, we decided to build one. Because we don't know the location of every printer, the app is crowd-sourced so that users can the edit buildings' information on the website. Besides printers, we also have a few other facts about each building such as whether it has blackboards, food, and study rooms. We also have a chat on each building so that users can post messages about the building."
                </p>
                <RemoteImage
                    src=asset("hackathon_2024/olin-campus-view.png")
                    alt="campus-view"
                    width=500
                    class=SIDE_IMAGE_CLASS
                />
            </div>
            <h2 class="text-3xl py-4">"How it works"</h2>
            <div class="grid grid-cols-1 lg:grid-cols-2 gap-4">
                <p class="text-lg">
                    "The building data comes from "
                    <a href="https://osmbuildings.org/" class="underline" target="_blank">
                        "OSM buildings"
                    </a>
                    " and were wrangled into a nice format using GeoPandas. This step included restricting the data to just buildings within the WashU campus and making sure that the building names were correct. After the data was cleaned, I wrote a script that would convert it to a \"nice\" format that could be easily imported into the Supabase database using their Python API. It would be nice if the data came from WashU directly, but I could not find a dataset that included the new buildings on campus."
                    <br />
                    <br />
                    "The app is built with NextJS and uses Supabase as the database. We decided on Supabase because I wanted to try it out and had heard good things about it. Also, one of the judges was obsessed with Supabase last year, so we thought it couldn't hurt our chances of winning by using it (it may have helped considering we won the master category)."
                    <br />
                    <br />
                    "We used DaisyUI as the component library, which was suggested to me by a friend right before the hackathon. It essentially just extends tailwind and makes the default HTML components look a LOT better. I'm a big fan of tailwind, so using DaisyUI didn't take much additional effort. After using DaisyUI, I can confirm that I am a big fan of it. I will definitely use it in future projects (like this one)."
                    <br />
                    <br />
                    "The app is hosted on Vercel and uses the Vercel serverless functions to interact with the Supabase database."
                    <br />
                    <br />
                    "I learned a lot from this project. This was the first project where I felt like the code did not evolve into spaghetti. I attribute this to the fact that we created far more React components than we did in the past (which is a good thing). I also learned a lot about Supabase and how to use it. It's a fantastic tool and will be sure to use it in future projects. It's super easy to set up and also very fast. "
                    <a
                        href="https://github.com/mschulist/washu-buildings"
                        class=REPO_LINK_CLASS
                        target="_blank"
                    >
                        "Here's the GitHub repo in case you're interested."
                    </a>
                </p>
                <div class="flex flex-col justify-evenly">
                    <RemoteImage
                        src=asset("hackathon_2024/washu-buildings.png")
                        alt="campus-view-2"
                        width=500
                        class="rounded-lg m-4 self-center justify-self-center h-auto"
                    />
                    <RemoteImage
                        src=asset("hackathon_2024/buildings-printers.png")
                        alt="campus-view-3"
                        width=500
                        class="rounded-lg m-4 self-center justify-self-center h-auto"
                    />
                </div>
            </div>
        </div>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;

    #[test]
    fn test_project_pages_render() {
        let pages = Owner::new().with(|| {
            [
                view! { <CourseWatch /> }.to_html(),
                view! { <EbirdCbc /> }.to_html(),
                view! { <WashuBuildings /> }.to_html(),
            ]
        });
        assert!(pages[0].contains("wustlwatch.courses"));
        assert!(pages[1].contains("ebirdcbc.png"));
        assert_eq!(pages[2].matches("<img").count(), 3);
    }
}
