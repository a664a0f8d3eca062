//! The marketing page: header bar, scrollable content, footer.

use ratatui::layout::{Alignment, Constraint, Direction, Layout, Margin, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Padding, Paragraph, Wrap};
use ratatui::Frame;

use slothpark_site::SiteContent;

use crate::theme::Theme;

const HEADER_HEIGHT: u16 = 3;
const FOOTER_HEIGHT: u16 = 4;

/// Scroll position of the page body.
#[derive(Debug, Default, Clone)]
pub struct PageView {
    offset: u16,
    max_offset: u16,
    viewport: u16,
}

impl PageView {
    pub fn offset(&self) -> u16 {
        self.offset
    }

    pub fn scroll_up(&mut self, lines: u16) {
        self.offset = self.offset.saturating_sub(lines);
    }

    pub fn scroll_down(&mut self, lines: u16) {
        self.offset = self.offset.saturating_add(lines).min(self.max_offset);
    }

    pub fn page_up(&mut self) {
        self.scroll_up(self.viewport.max(1));
    }

    pub fn page_down(&mut self) {
        self.scroll_down(self.viewport.max(1));
    }

    pub fn home(&mut self) {
        self.offset = 0;
    }

    pub fn end(&mut self) {
        self.offset = self.max_offset;
    }

    // Called by the renderer once the content height is known.
    fn fit(&mut self, content_lines: usize, viewport: u16) {
        self.viewport = viewport;
        let content = u16::try_from(content_lines).unwrap_or(u16::MAX);
        self.max_offset = content.saturating_sub(viewport);
        self.offset = self.offset.min(self.max_offset);
    }
}

/// Page body as styled lines, before wrapping.
pub fn page_lines(site: &SiteContent, theme: &Theme) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(vec![
            Span::styled(site.welcome.heading, theme.heading),
            Span::raw("   "),
            Span::styled(format!("[{}]", site.header.logo.alt), theme.muted),
        ]),
        Line::default(),
        Line::styled(site.welcome.body, theme.body),
        Line::default(),
        Line::styled(site.tours_heading, theme.subheading),
        Line::default(),
    ];

    for tour in &site.tours {
        lines.push(Line::styled(format!("▸ {}", tour.name), theme.card_title));
        lines.push(Line::styled(format!("  {}", tour.description), theme.body));
        lines.push(Line::styled(
            format!("  Duration: {}", tour.duration),
            theme.emphasis,
        ));
        lines.push(Line::default());
    }

    let info = &site.visitor_info;
    lines.push(Line::styled(info.heading, theme.subheading));
    lines.push(Line::default());
    lines.push(Line::styled(info.hours.title, theme.card_title));
    lines.extend(info.hours.lines.iter().map(|l| Line::raw(format!("  {}", l))));
    lines.push(Line::default());
    lines.push(Line::styled(info.admission.title, theme.card_title));
    lines.extend(
        info.admission
            .prices
            .iter()
            .map(|l| Line::raw(format!("  {}", l))),
    );
    lines.push(Line::styled(format!("  {}", info.admission.note), theme.muted));
    lines.push(Line::default());

    lines.push(Line::from(vec![
        Span::styled(format!("[{}] ", site.header.logo.alt), theme.muted),
        Span::styled(site.operator.heading, theme.heading),
    ]));
    lines.push(Line::styled(site.operator.body, theme.body));
    lines
}

/// Draw the page into `area`, clamping the scroll offset to the content.
pub fn render_page(
    frame: &mut Frame,
    area: Rect,
    site: &SiteContent,
    view: &mut PageView,
    theme: &Theme,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Min(1),
            Constraint::Length(FOOTER_HEIGHT),
        ])
        .split(area);

    render_header(frame, chunks[0], site, theme);

    let inner = chunks[1].inner(Margin::new(2, 0));
    let body = Paragraph::new(page_lines(site, theme)).wrap(Wrap { trim: false });
    view.fit(body.line_count(inner.width), inner.height);
    frame.render_widget(body.scroll((view.offset, 0)), inner);

    render_footer(frame, chunks[2], site, theme);
}

fn render_header(frame: &mut Frame, area: Rect, site: &SiteContent, theme: &Theme) {
    let block = Block::default().borders(Borders::BOTTOM).style(theme.header);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let button_text = format!("[Tab] {} ", site.header.chat_button);
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(button_text.chars().count() as u16),
        ])
        .split(inner);

    let title = Paragraph::new(Line::from(vec![
        Span::raw(format!(" [{}]  ", site.header.logo.alt)),
        Span::raw(format!("{} {}", site.header.emblem, site.header.title)),
    ]))
    .style(theme.header);
    let button = Paragraph::new(button_text)
        .style(theme.header)
        .alignment(Alignment::Right);

    frame.render_widget(title, columns[0]);
    frame.render_widget(button, columns[1]);
}

fn render_footer(frame: &mut Frame, area: Rect, site: &SiteContent, theme: &Theme) {
    let footer = &site.footer;
    let left = Paragraph::new(vec![
        Line::from(Span::styled(footer.copyright, theme.emphasis)),
        Line::raw(footer.address),
    ]);
    let right = Paragraph::new(vec![
        Line::raw(format!("Contact: {}", footer.email)),
        Line::raw(format!("Phone: {}", footer.phone)),
    ])
    .alignment(Alignment::Right);

    let block = Block::default()
        .borders(Borders::TOP)
        .padding(Padding::horizontal(1))
        .style(theme.footer);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(inner);
    frame.render_widget(left, columns[0]);
    frame.render_widget(right, columns[1]);
}
