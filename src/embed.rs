use crate::content::CONTENT_ORIGIN;

/// Prefix shared by every iframe-resizer message, in both directions.
pub const RESIZER_MSG_ID: &str = "[iFrameSizer]";

const REMOTE_MIN_HEIGHT: u32 = 1500;
const LOCAL_MIN_HEIGHT: u32 = 2000;

/// A document displayed inside a resizing iframe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmbeddedPost {
    pub path: &'static str,
    pub min_height: u32,
}

impl EmbeddedPost {
    /// A document stored under [`CONTENT_ORIGIN`].
    pub const fn remote(path: &'static str) -> Self {
        Self {
            path,
            min_height: REMOTE_MIN_HEIGHT,
        }
    }

    /// A document served from the site's own `public/` directory.
    pub const fn local(path: &'static str) -> Self {
        Self {
            path,
            min_height: LOCAL_MIN_HEIGHT,
        }
    }

    pub fn url(&self) -> String {
        if self.path.starts_with('/') {
            self.path.to_string()
        } else {
            format!("{}{}", CONTENT_ORIGIN, self.path)
        }
    }

    /// Element id of the iframe, also the id iframe-resizer echoes back.
    pub fn frame_id(&self) -> String {
        let slug = self
            .path
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() { c } else { '-' })
            .collect::<String>();
        let slug = slug
            .split('-')
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join("-");
        format!("embed-{}", slug)
    }

    /// Handshake posted to the child window once the frame has loaded.
    ///
    /// Field order follows the iframe-resizer parent: body margin, size
    /// width, log, interval, public methods, auto resize, body margin,
    /// height method, background, padding, tolerance, in-page links,
    /// resize from, width method, mouse events.
    pub fn init_message(&self) -> String {
        format!(
            "{}{}:8:false:false:32:true:true:null:bodyOffset:null:null:0:false:parent:scroll:true",
            RESIZER_MSG_ID,
            self.frame_id()
        )
    }

    pub fn clamp_height(&self, height: u32) -> u32 {
        height.max(self.min_height)
    }
}

/// Loading flag for one mounted embedded document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadState {
    loading: bool,
}

impl Default for LoadState {
    fn default() -> Self {
        Self { loading: true }
    }
}

impl LoadState {
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Marks the document as loaded. Returns `true` only on the call that
    /// actually ended the loading phase.
    pub fn finish(&mut self) -> bool {
        let was_loading = self.loading;
        self.loading = false;
        was_loading
    }

    /// Handles a frame `load` event. A frame mounted without a source fires
    /// one for its initial `about:blank` document; that load is ignored.
    pub fn frame_loaded(&mut self, frame_src: &str) -> bool {
        !is_blank_src(frame_src) && self.finish()
    }
}

/// Whether a frame's `src` names no real document yet.
pub fn is_blank_src(src: &str) -> bool {
    let src = src.trim();
    src.is_empty() || src.eq_ignore_ascii_case("about:blank")
}

/// A size report sent by the iframe-resizer child script.
#[derive(Debug, Clone, PartialEq)]
pub struct ResizeMessage {
    pub frame_id: String,
    pub height: u32,
    pub width: u32,
    pub kind: String,
}

impl ResizeMessage {
    pub fn parse(data: &str) -> Option<Self> {
        let body = data.strip_prefix(RESIZER_MSG_ID)?;
        let mut parts = body.splitn(5, ':');
        let frame_id = parts.next().filter(|s| !s.is_empty())?.to_string();
        let height = parse_dimension(parts.next()?)?;
        let width = parse_dimension(parts.next()?)?;
        let kind = parts.next()?.to_string();
        Some(Self {
            frame_id,
            height,
            width,
            kind,
        })
    }

    /// Whether this message reports a new content size.
    pub fn is_resize(&self) -> bool {
        !matches!(
            self.kind.as_str(),
            "close" | "message" | "scrollTo" | "scrollToOffset" | "pageInfo" | "inPageLink"
        )
    }
}

fn parse_dimension(s: &str) -> Option<u32> {
    let v = s.trim().parse::<f64>().ok()?;
    if v.is_finite() && v >= 0.0 {
        Some(v.round() as u32)
    } else {
        None
    }
}
