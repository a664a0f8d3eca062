//! Application state for the terminal UI.
//!
//! The event loop owns one `App`; key actions and reveal ticks are applied
//! to it one at a time, then the screen is redrawn.

use ratatui::Frame;

use slothpark_chat::{ChatError, ChatPanel, RevealId, TickOutcome};
use slothpark_site::SiteContent;
use slothpark_ui::{Theme, Views};

use crate::keys::Action;

const SCROLL_STEP: u16 = 1;

pub struct App {
    site: SiteContent,
    panel: ChatPanel,
    views: Views,
    theme: Theme,
    should_quit: bool,
}

impl App {
    pub fn new(site: SiteContent, panel: ChatPanel) -> Self {
        Self {
            site,
            panel,
            views: Views::default(),
            theme: Theme::default(),
            should_quit: false,
        }
    }

    pub fn panel(&self) -> &ChatPanel {
        &self.panel
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Apply one visitor action.
    pub fn apply(&mut self, action: Action) {
        match action {
            Action::Quit => self.should_quit = true,
            Action::ToggleChat => self.panel.toggle(),
            Action::OpenChat => self.panel.open(),
            Action::CloseChat => self.panel.close(),
            Action::ScrollUp => self.views.page.scroll_up(SCROLL_STEP),
            Action::ScrollDown => self.views.page.scroll_down(SCROLL_STEP),
            Action::PageUp => self.views.page.page_up(),
            Action::PageDown => self.views.page.page_down(),
            Action::Home => self.views.page.home(),
            Action::End => self.views.page.end(),
            Action::ChatScrollUp => self.views.chat.scroll_up(SCROLL_STEP),
            Action::ChatScrollDown => self.views.chat.scroll_down(SCROLL_STEP),
            Action::Insert(ch) => {
                self.panel.insert_char(ch);
            }
            Action::Backspace => {
                self.panel.backspace();
            }
            Action::Submit => self.submit(),
        }
    }

    pub fn on_tick(&mut self, id: RevealId) -> TickOutcome {
        self.panel.on_tick(id)
    }

    pub fn draw(&mut self, frame: &mut Frame) {
        if self.panel.take_scroll_request() {
            self.views.chat.follow_tail();
        }
        slothpark_ui::draw(frame, &self.site, &self.panel, &mut self.views, &self.theme);
    }

    fn submit(&mut self) {
        match self.panel.submit() {
            Ok(category) => tracing::debug!(%category, "Message sent"),
            Err(ChatError::EmptyMessage) => {}
            Err(e) => tracing::debug!(error = %e, "Submit rejected"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;
    use slothpark_chat::{RevealHandle, Sender, TickSource};
    use slothpark_core::ChatConfig;
    use std::time::Duration;

    struct NoTicks;

    impl TickSource for NoTicks {
        fn start(&self, id: RevealId, _period: Duration) -> RevealHandle {
            RevealHandle::new(id, || {})
        }
    }

    fn app() -> App {
        App::new(
            SiteContent::sloth_park(),
            ChatPanel::new(ChatConfig::default(), NoTicks),
        )
    }

    fn finish_reveal(app: &mut App) {
        while let Some(id) = app.panel().active_reveal() {
            app.on_tick(id);
        }
    }

    fn type_text(app: &mut App, text: &str) {
        for ch in text.chars() {
            app.apply(Action::Insert(ch));
        }
    }

    // =========================================================================
    // Actions
    // =========================================================================

    #[test]
    fn test_quit() {
        let mut app = app();
        assert!(!app.should_quit());
        app.apply(Action::Quit);
        assert!(app.should_quit());
    }

    #[test]
    fn test_toggle_opens_and_closes() {
        let mut app = app();
        app.apply(Action::ToggleChat);
        assert!(app.panel().is_open());
        assert!(app.panel().is_revealing());
        app.apply(Action::ToggleChat);
        assert!(!app.panel().is_open());
        assert!(!app.panel().is_revealing());
    }

    #[test]
    fn test_typed_question_gets_reply() {
        let mut app = app();
        app.apply(Action::OpenChat);
        finish_reveal(&mut app);

        type_text(&mut app, "how much are tickets?");
        app.apply(Action::Submit);

        let messages = app.panel().messages();
        assert_eq!(messages.len(), 3);
        assert_eq!(messages[1].sender, Sender::User);
        assert_eq!(messages[1].text, "how much are tickets?");
        assert!(messages[2].revealing);

        finish_reveal(&mut app);
        assert!(!app.panel().messages()[2].revealing);
    }

    #[test]
    fn test_typing_ignored_while_revealing() {
        let mut app = app();
        app.apply(Action::OpenChat);
        type_text(&mut app, "hello");
        assert_eq!(app.panel().input(), "");

        finish_reveal(&mut app);
        type_text(&mut app, "helo");
        app.apply(Action::Backspace);
        assert_eq!(app.panel().input(), "hel");
    }

    #[test]
    fn test_blank_submit_is_noop() {
        let mut app = app();
        app.apply(Action::OpenChat);
        finish_reveal(&mut app);
        type_text(&mut app, "   ");
        app.apply(Action::Submit);
        assert_eq!(app.panel().messages().len(), 1);
    }

    #[test]
    fn test_page_scrolling_after_draw() {
        let mut app = app();
        let mut terminal = Terminal::new(TestBackend::new(80, 16)).unwrap();
        terminal.draw(|f| app.draw(f)).unwrap();

        app.apply(Action::ScrollDown);
        assert_eq!(app.views.page.offset(), 1);
        app.apply(Action::End);
        let end = app.views.page.offset();
        assert!(end > 1);
        app.apply(Action::PageUp);
        assert!(app.views.page.offset() < end);
        app.apply(Action::Home);
        assert_eq!(app.views.page.offset(), 0);
    }

    #[test]
    fn test_draw_follows_new_text() {
        let mut app = app();
        app.apply(Action::OpenChat);
        finish_reveal(&mut app);
        app.apply(Action::ChatScrollUp);
        assert!(!app.views.chat.is_following());

        type_text(&mut app, "tell me a fact");
        app.apply(Action::Submit);
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|f| app.draw(f)).unwrap();
        assert!(app.views.chat.is_following());
    }
}
