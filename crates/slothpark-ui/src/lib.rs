//! Terminal rendering for Sloth Park.
//!
//! # Modules
//!
//! - [`page`]: the scrollable marketing page (header, content, footer)
//! - [`chat`]: the mascot chat overlay drawn on top of the page
//! - [`theme`]: colors shared by both

pub mod chat;
pub mod page;
pub mod theme;

pub use chat::{render_chat_panel, ChatView};
pub use page::{page_lines, render_page, PageView};
pub use theme::Theme;

use ratatui::Frame;
use slothpark_chat::ChatPanel;
use slothpark_site::SiteContent;

/// Per-frame view state owned by the event loop.
#[derive(Debug, Default)]
pub struct Views {
    pub page: PageView,
    pub chat: ChatView,
}

/// Draw the whole screen: the page, then the chat panel if it is open.
pub fn draw(
    frame: &mut Frame,
    site: &SiteContent,
    panel: &ChatPanel,
    views: &mut Views,
    theme: &Theme,
) {
    let area = frame.area();
    render_page(frame, area, site, &mut views.page, theme);
    if panel.is_open() {
        render_chat_panel(frame, area, panel, &mut views.chat, theme);
    }
}
