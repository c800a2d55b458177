use http::Uri;
use thiserror::Error;

use crate::embed::EmbeddedPost;

/// Object storage bucket serving blog documents and most images.
pub const CONTENT_ORIGIN: &str = "https://f005.backblazeb2.com/file/mark-schulist/";

/// Hosts the image component is willing to load from.
pub const IMAGE_HOSTS: &[&str] = &["f005.backblazeb2.com", "julialang.org", "imgs.xkcd.com"];

pub const RESUME_URL: &str =
    "https://f005.backblazeb2.com/file/mark-schulist/Mark_Schulist_Resume.pdf";

const TILE_ZINC: &str = "bg-gradient-to-r from-cyan-950 to-zinc-800 h-full";
const TILE_STONE: &str = "bg-gradient-to-r from-cyan-950 to-stone-800 h-full";
const TILE_PROJECT: &str = "bg-gradient-to-r from-cyan-950 to-zinc-800 h-full justify-end";

/// One tile in a card grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContentCard {
    pub title: &'static str,
    pub description: &'static str,
    pub image: Option<&'static str>,
    /// Rendered width of the header image in pixels.
    pub image_width: u32,
    pub href: &'static str,
    pub class: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PostBody {
    Embedded(EmbeddedPost),
    /// Authored as components rather than fetched.
    Native(NativePost),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NativePost {
    Eclipse,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlogPost {
    pub slug: &'static str,
    pub card: ContentCard,
    pub body: PostBody,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    pub slug: &'static str,
    pub card: ContentCard,
    pub page: ProjectPage,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectPage {
    CourseWatch,
    EbirdCbc,
    WashuBuildings,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub href: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SocialLink {
    pub href: &'static str,
    pub label: &'static str,
    /// devicon class; links without one show their label instead.
    pub icon: Option<&'static str>,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContentError {
    #[error("no blog post named '{0}'")]
    PostNotFound(String),
    #[error("no project named '{0}'")]
    ProjectNotFound(String),
}

pub const NAV_LINKS: &[NavLink] = &[
    NavLink {
        href: "/",
        label: "Home",
    },
    NavLink {
        href: "/blog",
        label: "Blog",
    },
    NavLink {
        href: "/about",
        label: "About",
    },
];

pub const SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink {
        href: "https://linkedin.com/in/mark-schulist-65090a286",
        label: "LinkedIn Profile",
        icon: Some("devicon-linkedin-plain"),
    },
    SocialLink {
        href: "https://github.com/mschulist",
        label: "GitHub Profile",
        icon: Some("devicon-github-plain"),
    },
    SocialLink {
        href: "mailto:mschulist2@gmail.com",
        label: "Email",
        icon: None,
    },
];

pub const POSTS: &[BlogPost] = &[
    BlogPost {
        slug: "metropolis",
        card: ContentCard {
            title: "The Metropolis Algorithm",
            description: "Starting to understand MCMC",
            image: Some(
                "https://f005.backblazeb2.com/file/mark-schulist/blogs/metropolis/metropolis_clip.gif",
            ),
            image_width: 400,
            href: "/blog/metropolis",
            class: TILE_ZINC,
        },
        body: PostBody::Embedded(EmbeddedPost::remote("blogs/metropolis/metropolis.html")),
    },
    BlogPost {
        slug: "typst",
        card: ContentCard {
            title: "Typst",
            description: "Why I love Typst",
            image: Some(
                "https://f005.backblazeb2.com/file/mark-schulist/blogs/typst/typst_comp.gif",
            ),
            image_width: 800,
            href: "/blog/typst",
            class: TILE_ZINC,
        },
        body: PostBody::Embedded(EmbeddedPost::remote("blogs/typst/typst.html")),
    },
    BlogPost {
        slug: "julia",
        card: ContentCard {
            title: "Exploring Julia",
            description: "A better way to do data science?",
            image: Some("https://julialang.org/assets/infra/logo.svg"),
            image_width: 350,
            href: "/blog/julia",
            class: TILE_STONE,
        },
        body: PostBody::Embedded(EmbeddedPost::remote("blogs/julia/julia.html")),
    },
    BlogPost {
        slug: "gradient",
        card: ContentCard {
            title: "Understanding the Gradient",
            description: "An exploration of minimizing function using gradient descent",
            image: Some("https://f005.backblazeb2.com/file/mark-schulist/blogs/gradient/gradient.gif"),
            image_width: 400,
            href: "/blog/gradient",
            class: TILE_ZINC,
        },
        body: PostBody::Embedded(EmbeddedPost::remote("blogs/gradient/gradients.html")),
    },
    BlogPost {
        slug: "neural-network",
        card: ContentCard {
            title: "Neural Networks",
            description: "Understanding neural networks with Pytorch",
            image: Some(
                "https://f005.backblazeb2.com/file/mark-schulist/blogs/neural_network/nn.png",
            ),
            image_width: 350,
            href: "/blog/neural-network",
            class: TILE_STONE,
        },
        body: PostBody::Embedded(EmbeddedPost::remote("blogs/neural_network/neural_network.html")),
    },
    BlogPost {
        slug: "cnn",
        card: ContentCard {
            title: "Convolutional Neural Networks",
            description: "Moving beyond fully connected layers",
            image: Some("https://f005.backblazeb2.com/file/mark-schulist/blogs/cnn/cnn.png"),
            image_width: 600,
            href: "/blog/cnn",
            class: TILE_ZINC,
        },
        body: PostBody::Embedded(EmbeddedPost::remote("blogs/cnn/cnn.html")),
    },
    BlogPost {
        slug: "perch",
        card: ContentCard {
            title: "Perch",
            description: "Classifying bird songs",
            image: None,
            image_width: 0,
            href: "/blog/perch",
            class: TILE_STONE,
        },
        body: PostBody::Embedded(EmbeddedPost::remote("blogs/perch/bird-classifier.html")),
    },
    BlogPost {
        slug: "eclipse",
        card: ContentCard {
            title: "The Total Solar Eclipse",
            description: "April 8, 2024",
            image: Some(
                "https://f005.backblazeb2.com/file/mark-schulist/blogs/eclipse/eclipse_all.jpg",
            ),
            image_width: 600,
            href: "/blog/eclipse",
            class: TILE_ZINC,
        },
        body: PostBody::Native(NativePost::Eclipse),
    },
];

pub const PROJECTS: &[Project] = &[
    Project {
        slug: "course-watch",
        card: ContentCard {
            title: "WashU Course Watch",
            description: "A website to help WashU students sign up for classes",
            image: Some("https://f005.backblazeb2.com/file/mark-schulist/course_washu.gif"),
            image_width: 400,
            href: "/projects/course-watch",
            class: TILE_PROJECT,
        },
        page: ProjectPage::CourseWatch,
    },
    Project {
        slug: "ebird-cbc",
        card: ContentCard {
            title: "eBird CBC",
            description:
                "A website to help Christmas Bird Count compilers compile CBC data from eBird",
            image: Some("https://f005.backblazeb2.com/file/mark-schulist/ebirdcbc.png"),
            image_width: 325,
            href: "/projects/ebird-cbc",
            class: TILE_PROJECT,
        },
        page: ProjectPage::EbirdCbc,
    },
    Project {
        slug: "washu-buildings",
        card: ContentCard {
            title: "WashU Campus View",
            description: "An interactive 3D map of the WashU campus and its printers",
            image: Some(
                "https://f005.backblazeb2.com/file/mark-schulist/hackathon_2024/olin-campus-view.png",
            ),
            image_width: 400,
            href: "/projects/washu-buildings",
            class: TILE_PROJECT,
        },
        page: ProjectPage::WashuBuildings,
    },
];

pub fn post_cards() -> Vec<ContentCard> {
    POSTS.iter().map(|p| p.card).collect()
}

pub fn project_cards() -> Vec<ContentCard> {
    PROJECTS.iter().map(|p| p.card).collect()
}

pub fn find_post(slug: &str) -> Result<&'static BlogPost, ContentError> {
    POSTS
        .iter()
        .find(|p| p.slug == slug)
        .ok_or_else(|| ContentError::PostNotFound(slug.to_string()))
}

pub fn find_project(slug: &str) -> Result<&'static Project, ContentError> {
    PROJECTS
        .iter()
        .find(|p| p.slug == slug)
        .ok_or_else(|| ContentError::ProjectNotFound(slug.to_string()))
}

/// Whether an image source may be rendered.
///
/// Site-relative paths are always allowed; absolute sources must be https
/// and hosted on one of [`IMAGE_HOSTS`].
pub fn is_allowed_image(src: &str) -> bool {
    if src.starts_with('/') && !src.starts_with("//") {
        return true;
    }
    let uri = match src.parse::<Uri>() {
        Ok(uri) => uri,
        Err(_) => return false,
    };
    if uri.scheme_str() != Some("https") {
        return false;
    }
    uri.host()
        .map(|host| IMAGE_HOSTS.contains(&host))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_post_card_routes_to_its_post() {
        for post in POSTS {
            let slug = post
                .card
                .href
                .strip_prefix("/blog/")
                .expect("post cards should link under /blog/");
            let found = find_post(slug).expect("post card href should resolve");
            assert_eq!(found.slug, post.slug);
        }
    }

    #[test]
    fn test_every_project_card_routes_to_its_project() {
        for project in PROJECTS {
            let slug = project
                .card
                .href
                .strip_prefix("/projects/")
                .expect("project cards should link under /projects/");
            let found = find_project(slug).expect("project card href should resolve");
            assert_eq!(found.slug, project.slug);
        }
    }

    #[test]
    fn test_slugs_are_unique() {
        let mut slugs = POSTS.iter().map(|p| p.slug).collect::<Vec<_>>();
        slugs.sort();
        slugs.dedup();
        assert_eq!(slugs.len(), POSTS.len());

        let mut slugs = PROJECTS.iter().map(|p| p.slug).collect::<Vec<_>>();
        slugs.sort();
        slugs.dedup();
        assert_eq!(slugs.len(), PROJECTS.len());
    }

    #[test]
    fn test_unknown_slugs() {
        assert_eq!(
            find_post("nope"),
            Err(ContentError::PostNotFound("nope".to_string()))
        );
        assert_eq!(
            find_project("").unwrap_err().to_string(),
            "no project named ''"
        );
    }

    #[test]
    fn test_cards_keep_registry_order() {
        let titles = post_cards().iter().map(|c| c.title).collect::<Vec<_>>();
        let expected = POSTS.iter().map(|p| p.card.title).collect::<Vec<_>>();
        assert_eq!(titles, expected);
        assert_eq!(project_cards()[0].title, "WashU Course Watch");
    }

    #[test]
    fn test_registry_images_are_allowed() {
        for card in post_cards().into_iter().chain(project_cards()) {
            if let Some(src) = card.image {
                assert!(is_allowed_image(src), "{src} should be allowed");
            }
        }
    }

    #[test]
    fn test_image_allow_list() {
        assert!(is_allowed_image("/favicon.ico"));
        assert!(is_allowed_image("https://imgs.xkcd.com/comics/eclipse_clouds.png"));
        assert!(!is_allowed_image("http://f005.backblazeb2.com/file/x.png"));
        assert!(!is_allowed_image("https://example.com/cat.png"));
        assert!(!is_allowed_image("//example.com/cat.png"));
        assert!(!is_allowed_image("not a url"));
    }

    #[test]
    fn test_embedded_documents_are_reachable() {
        let public = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("public");
        for post in POSTS {
            let PostBody::Embedded(doc) = post.body else {
                continue;
            };
            match doc.path.strip_prefix('/') {
                Some(local) => assert!(
                    public.join(local).is_file(),
                    "{} is not shipped under public/",
                    doc.path
                ),
                None => assert!(doc.url().starts_with(CONTENT_ORIGIN)),
            }
        }
    }

    #[test]
    fn test_nav_links_are_top_level_routes() {
        let hrefs = NAV_LINKS.iter().map(|l| l.href).collect::<Vec<_>>();
        assert_eq!(hrefs, vec!["/", "/blog", "/about"]);
        assert_eq!(SOCIAL_LINKS.len(), 3);
        assert!(SOCIAL_LINKS[2].href.starts_with("mailto:"));
    }
}
