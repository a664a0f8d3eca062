//! Chat overlay: title bar, transcript, input line and typing status.

use ratatui::layout::{Alignment, Constraint, Direction, Layout, Position, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

use slothpark_chat::{ChatPanel, Message, Sender};

use crate::theme::Theme;

const PANEL_MAX_WIDTH: u16 = 52;
const PANEL_TOP: u16 = 3;

/// Transcript scroll state. Follows the newest text unless the visitor
/// scrolls up.
#[derive(Debug, Clone)]
pub struct ChatView {
    offset: u16,
    max_offset: u16,
    follow: bool,
}

impl Default for ChatView {
    fn default() -> Self {
        Self {
            offset: 0,
            max_offset: 0,
            follow: true,
        }
    }
}

impl ChatView {
    pub fn offset(&self) -> u16 {
        self.offset
    }

    pub fn is_following(&self) -> bool {
        self.follow
    }

    /// Pin the transcript to its last line on the next render.
    pub fn follow_tail(&mut self) {
        self.follow = true;
    }

    pub fn scroll_up(&mut self, lines: u16) {
        self.offset = self.offset.saturating_sub(lines);
        self.follow = false;
    }

    pub fn scroll_down(&mut self, lines: u16) {
        self.offset = self.offset.saturating_add(lines).min(self.max_offset);
        if self.offset == self.max_offset {
            self.follow = true;
        }
    }

    fn fit(&mut self, content_lines: usize, viewport: u16) {
        let content = u16::try_from(content_lines).unwrap_or(u16::MAX);
        self.max_offset = content.saturating_sub(viewport);
        self.offset = if self.follow {
            self.max_offset
        } else {
            self.offset.min(self.max_offset)
        };
    }
}

/// Where the overlay goes: top-right, below the header.
pub fn panel_area(area: Rect) -> Rect {
    let width = PANEL_MAX_WIDTH.min(area.width.saturating_sub(2)).max(area.width.min(20));
    let top = area.y + PANEL_TOP.min(area.height / 4);
    let height = (area.height * 8 / 10)
        .max(10)
        .min(area.bottom().saturating_sub(top));
    let x = area.right().saturating_sub(width + 1).max(area.x);
    Rect::new(x, top, width, height)
}

fn message_lines(message: &Message, theme: &Theme) -> Vec<Line<'static>> {
    let line = match message.sender {
        Sender::User => Line::from(Span::styled(format!(" {} ", message.text), theme.user_bubble))
            .alignment(Alignment::Right),
        Sender::Bot => {
            let mut spans = vec![Span::styled(format!(" {}", message.text), theme.bot_bubble)];
            if message.revealing {
                spans.push(Span::styled("...", theme.typing));
            }
            spans.push(Span::styled(" ", theme.bot_bubble));
            Line::from(spans)
        }
    };
    vec![line, Line::default()]
}

/// Draw the chat overlay on top of whatever is already in `area`.
pub fn render_chat_panel(
    frame: &mut Frame,
    area: Rect,
    panel: &ChatPanel,
    view: &mut ChatView,
    theme: &Theme,
) {
    let rect = panel_area(area);
    frame.render_widget(Clear, rect);

    let config = panel.config();
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.panel_border)
        .title(Line::from(Span::styled(
            format!(" 🦥 {} ", config.mascot_name),
            theme.panel_title,
        )))
        .title_top(Line::from(" [Esc] close ").right_aligned());
    let inner = block.inner(rect);
    frame.render_widget(block, rect);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),    // Transcript
            Constraint::Length(3), // Input
            Constraint::Length(1), // Status
        ])
        .split(inner);

    // Transcript
    let lines: Vec<Line> = panel
        .messages()
        .iter()
        .flat_map(|m| message_lines(m, theme))
        .collect();
    let transcript = Paragraph::new(lines).wrap(Wrap { trim: false });
    view.fit(transcript.line_count(chunks[0].width), chunks[0].height);
    frame.render_widget(transcript.scroll((view.offset, 0)), chunks[0]);

    // Input
    let hint_style = if panel.can_send() {
        theme.emphasis
    } else {
        theme.muted
    };
    let input_block = Block::default()
        .borders(Borders::ALL)
        .title_top(Line::from(Span::styled(" [Enter] send ", hint_style)).right_aligned());
    let input_inner = input_block.inner(chunks[1]);
    let visible_width = usize::from(input_inner.width.saturating_sub(1));

    let input_line = if panel.input().is_empty() {
        Line::from(Span::styled(config.placeholder.clone(), theme.muted))
    } else {
        let chars: Vec<char> = panel.input().chars().collect();
        let start = chars.len().saturating_sub(visible_width);
        let style = if panel.is_revealing() {
            theme.input_disabled
        } else {
            theme.input
        };
        Line::from(Span::styled(chars[start..].iter().collect::<String>(), style))
    };
    frame.render_widget(Paragraph::new(input_line).block(input_block), chunks[1]);

    if !panel.is_revealing() {
        let typed = panel.input().chars().count().min(visible_width) as u16;
        frame.set_cursor_position(Position::new(input_inner.x + typed, input_inner.y));
    }

    // Status
    if let Some(status) = panel.status_line() {
        frame.render_widget(Paragraph::new(Span::styled(status, theme.typing)), chunks[2]);
    }
}
