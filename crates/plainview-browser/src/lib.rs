//! Document pipeline: locator parsing, loading, markup stripping and
//! grid layout.
//!
//! [`Browser`] ties the stages together: a locator string goes through
//! [`Url::parse`], [`loader::fetch`], [`lexer::strip`] and
//! [`layout::layout_with`], and the resulting display list is kept along
//! with a scroll offset for whatever display shell draws it.

pub mod config;
pub mod layout;
pub mod lexer;
pub mod loader;
pub mod scroll;
pub mod url;

#[cfg(test)]
pub(crate) mod test_utils;

// -----------------------------------------------------------------------
// Public re-exports
// -----------------------------------------------------------------------

pub use config::BrowserConfig;
pub use layout::{GridMetrics, PositionEntry};
pub use loader::{HttpResponse, fetch};
pub use scroll::ScrollState;
pub use url::{HttpTarget, Scheme, Url};

use plainview_net::tls::TlsProvider;
use plainview_types::error::Result;

// -----------------------------------------------------------------------
// Browser
// -----------------------------------------------------------------------

/// One open document and its viewport.
pub struct Browser {
    pub config: BrowserConfig,

    /// TLS for `https` locators. Without one they fail to load.
    tls: Option<Box<dyn TlsProvider>>,

    /// Laid-out glyphs of the current document, in page coordinates.
    display_list: Vec<PositionEntry>,

    scroll: ScrollState,

    current_url: Option<Url>,
}

impl Browser {
    pub fn new(config: BrowserConfig) -> Self {
        let scroll = config.scroll_state();
        Self {
            config,
            tls: None,
            display_list: Vec::new(),
            scroll,
            current_url: None,
        }
    }

    pub fn set_tls_provider(&mut self, provider: Box<dyn TlsProvider>) {
        self.tls = Some(provider);
    }

    /// Fetch, strip and lay out the document at `raw_url`.
    ///
    /// On success the display list is replaced and the view returns to the
    /// top. On failure nothing changes and the error is returned as-is.
    pub fn load(&mut self, raw_url: &str) -> Result<()> {
        let url = Url::parse(raw_url)?;
        let body = loader::fetch(&url, self.tls.as_deref(), &self.config.user_agent)?;
        let text = lexer::strip(&body);
        let display_list = layout::layout_with(&text, &self.config.grid_metrics());

        log::info!(
            "loaded {url}: {} bytes, {} glyphs",
            body.len(),
            display_list.len()
        );

        self.display_list = display_list;
        self.scroll = self.config.scroll_state();
        self.current_url = Some(url);
        Ok(())
    }

    /// Load the configured home locator.
    pub fn load_home(&mut self) -> Result<()> {
        let home = self.config.home_url.clone();
        self.load(&home)
    }

    pub fn display_list(&self) -> &[PositionEntry] {
        &self.display_list
    }

    /// Entries inside the viewport, with `y` translated to viewport space.
    pub fn visible_entries(&self) -> impl Iterator<Item = PositionEntry> + '_ {
        let vstep = self.config.vstep;
        self.display_list
            .iter()
            .filter(move |entry| self.scroll.is_visible(entry, vstep))
            .map(move |entry| PositionEntry {
                y: self.scroll.to_viewport(entry.y),
                ..*entry
            })
    }

    pub fn scroll_down(&mut self) {
        self.scroll.scroll_down();
    }

    pub fn scroll_up(&mut self) {
        self.scroll.scroll_up();
    }

    /// Height of the laid-out document in pixels.
    pub fn content_height(&self) -> i32 {
        layout::content_height(&self.display_list, self.config.vstep)
    }

    pub fn scroll(&self) -> &ScrollState {
        &self.scroll
    }

    pub fn scroll_mut(&mut self) -> &mut ScrollState {
        &mut self.scroll
    }

    pub fn current_url(&self) -> Option<&Url> {
        self.current_url.as_ref()
    }
}

// -----------------------------------------------------------------------
// Tests
// -----------------------------------------------------------------------
