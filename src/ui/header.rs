use crate::ui::store::AuthStatus;
use crate::ui::theme::{GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, STATUS_BUSY, STATUS_OK};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

pub struct Header<'a> {
    status: &'a AuthStatus,
    pending: usize,
}

impl<'a> Header<'a> {
    pub fn new(status: &'a AuthStatus, pending: usize) -> Self {
        Self { status, pending }
    }

    pub fn widget(&self) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);

        let session = match self.status {
            AuthStatus::SignedOut => "signed out".to_string(),
            AuthStatus::SignedIn { uid } => format!("signed in as {}", uid),
        };
        let (marker, marker_style) = if self.pending > 0 {
            (format!("working ({})", self.pending), Style::default().fg(STATUS_BUSY))
        } else {
            ("idle".to_string(), Style::default().fg(STATUS_OK))
        };

        let line = Line::from(vec![
            Span::styled("  ", text_style),
            Span::styled("yac", text_style),
            Span::styled("  │  ", separator_style),
            Span::styled(session, text_style),
            Span::styled("  │  ", separator_style),
            Span::styled(marker, marker_style),
        ]);

        Paragraph::new(line).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
