use crate::ui::app::App;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::{centered_rect, layout_regions};
use crate::ui::signup::{Focus, Screen};
use crate::ui::store::{FormField, UserStore};
use crate::ui::theme::{ACCENT, ACTIVE_HIGHLIGHT, GLOBAL_BORDER, HEADER_TEXT, STATUS_ERROR, STATUS_OK};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;
use serde_json::Value;

const FORM_WIDTH: u16 = 60;
const VALUE_WIDTH: usize = 32;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);

    frame.render_widget(Header::new(&app.store().status, app.pending()).widget(), header);
    frame.render_widget(Clear, body);
    match app.screen() {
        Screen::SignUp => draw_form(frame, app, body),
        Screen::SignedIn => draw_signed_in(frame, app.store(), body),
    }
    frame.render_widget(Footer::new(app.screen()).widget(footer), footer);
}

fn draw_form(frame: &mut Frame<'_>, app: &App, body: Rect) {
    let store = app.store();
    let mut lines = Vec::with_capacity(Focus::ORDER.len() + 3);

    for focus in Focus::ORDER {
        let focused = app.focus() == focus;
        let style = if focused {
            Style::default()
                .fg(ACCENT)
                .bg(ACTIVE_HIGHLIGHT)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(HEADER_TEXT)
        };
        let marker = if focused { "› " } else { "  " };

        let line = match focus.field() {
            Some(FormField::Terms) => Line::from(Span::styled(
                format!(
                    "{}[{}] {}",
                    marker,
                    if store.form.terms { "x" } else { " " },
                    FormField::Terms.label()
                ),
                style,
            )),
            Some(field) => Line::from(vec![
                Span::styled(format!("{}{:<16}", marker, field.label()), style),
                Span::styled(field_text(store, field), style),
            ]),
            None => Line::from(Span::styled(format!("{}[ Sign Up ]", marker), style)),
        };
        lines.push(line);
    }

    lines.push(Line::from(""));
    if let Some(error) = &store.last_error {
        lines.push(Line::from(Span::styled(
            error.clone(),
            Style::default().fg(STATUS_ERROR),
        )));
    }

    let height = lines.len() as u16 + 2;
    let rect = centered_rect(FORM_WIDTH, height, body);
    let paragraph = Paragraph::new(lines).wrap(Wrap { trim: false }).block(
        Block::default()
            .title(" Sign up ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(GLOBAL_BORDER)),
    );
    frame.render_widget(paragraph, rect);
}

/// Display text for a field. The password is masked.
fn field_text(store: &UserStore, field: FormField) -> String {
    let value = store.form.value(field);
    let shown = match field {
        FormField::Password => "•".repeat(value.chars().count()),
        _ => value,
    };
    // Keep the cursor end visible.
    let skip = shown.chars().count().saturating_sub(VALUE_WIDTH);
    shown.chars().skip(skip).collect()
}

fn draw_signed_in(frame: &mut Frame<'_>, store: &UserStore, body: Rect) {
    let user = store.user.as_ref();
    let name = user
        .and_then(|user| user.get("username"))
        .and_then(Value::as_str)
        .unwrap_or("friend");

    let mut lines = vec![
        Line::from(Span::styled(
            format!("Welcome, {}!", name),
            Style::default().fg(STATUS_OK).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];
    if let Some(uid) = store.user_uid() {
        lines.push(Line::from(format!("User id: {}", uid)));
    }
    if let Some(email) = user.and_then(|user| user.get("email")).and_then(Value::as_str) {
        lines.push(Line::from(format!("Email:   {}", email)));
    }
    if !store.chat.is_empty() {
        lines.push(Line::from(format!("Chat snapshots: {}", store.chat.len())));
    }
    if store.last_posted.is_some() {
        lines.push(Line::from("Last message delivered"));
    }
    if let Some(error) = &store.last_error {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            error.clone(),
            Style::default().fg(STATUS_ERROR),
        )));
    }

    let height = lines.len() as u16 + 2;
    let rect = centered_rect(FORM_WIDTH, height, body);
    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .title(" Chat room ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(GLOBAL_BORDER)),
    );
    frame.render_widget(paragraph, rect);
}
