use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Borders, List, ListItem, Paragraph, Wrap};

use super::app::{Field, MessageType, Outcome, StatusMessage};
use super::layout::AppLayout;
use crate::history::HistoryEntry;

const ACCENT: Color = Color::Rgb(16, 185, 129); // Emerald
const MUTED: Color = Color::Rgb(113, 113, 122);
const BRIGHT: Color = Color::Rgb(250, 250, 250);
const ERROR: Color = Color::Rgb(239, 68, 68);
const BAR_BG: Color = Color::Rgb(24, 24, 27);

/// Everything the renderer needs from the app, borrowed for one frame
pub struct RenderState<'a> {
    pub focus: Field,
    pub category: &'a str,
    pub value_input: &'a str,
    pub from_unit: &'a str,
    pub to_unit: &'a str,
    pub outcome: Option<&'a Outcome>,
    pub converting: bool,
    pub history_open: bool,
    pub history_entries: &'a [HistoryEntry],
    pub history_scroll: usize,
    pub status_message: Option<&'a StatusMessage>,
}

/// Render the entire UI
pub fn render_ui(frame: &mut Frame, state: &RenderState) {
    let layout = AppLayout::new(frame.area(), state.history_open);

    render_form(frame, layout.form_area, state);
    render_result(frame, layout.result_area, state);
    if let Some(history_area) = layout.history_area {
        render_history(frame, history_area, state);
    }
    render_status_bar(frame, layout.status_area, state);
}

fn field_line<'a>(label: &'a str, value: String, focused: bool) -> Line<'a> {
    let value_style = if focused {
        Style::default().fg(BRIGHT).bg(ACCENT).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(BRIGHT)
    };

    Line::from(vec![
        Span::styled(format!("{:<10}", label), Style::default().fg(MUTED)),
        Span::styled(if focused { format!("◀ {} ▶", value) } else { value }, value_style),
    ])
}

fn render_form(frame: &mut Frame, area: Rect, state: &RenderState) {
    // The value line shows a cursor while focused; selectors show arrows
    let value_display = if state.focus == Field::Value {
        format!("{}_", state.value_input)
    } else if state.value_input.is_empty() {
        "0".to_string()
    } else {
        state.value_input.to_string()
    };
    let value_line = Line::from(vec![
        Span::styled(format!("{:<10}", "Value"), Style::default().fg(MUTED)),
        Span::styled(
            value_display,
            if state.focus == Field::Value {
                Style::default().fg(BRIGHT).bg(ACCENT).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(BRIGHT)
            },
        ),
    ]);

    let lines = vec![
        field_line("Category", state.category.to_string(), state.focus == Field::Category),
        value_line,
        field_line("From", state.from_unit.to_string(), state.focus == Field::FromUnit),
        field_line("To", state.to_unit.to_string(), state.focus == Field::ToUnit),
    ];

    let paragraph = Paragraph::new(Text::from(lines)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(MUTED))
            .title(" Instant Unit Converter "),
    );

    frame.render_widget(paragraph, area);
}

fn render_result(frame: &mut Frame, area: Rect, state: &RenderState) {
    let content = if state.converting {
        Text::from(Line::from(Span::styled(
            "Converting… please wait",
            Style::default().fg(MUTED).add_modifier(Modifier::ITALIC),
        )))
    } else {
        match state.outcome {
            Some(Outcome::Success { text, fact }) => Text::from(vec![
                Line::from(Span::styled(
                    text.as_str(),
                    Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
                )),
                Line::from(""),
                Line::from(Span::styled(*fact, Style::default().fg(MUTED))),
            ]),
            Some(Outcome::Failure { message }) => Text::from(Line::from(Span::styled(
                message.as_str(),
                Style::default().fg(ERROR),
            ))),
            None => Text::from(Line::from(Span::styled(
                "Pick a category and units, type a value, press Enter",
                Style::default().fg(MUTED),
            ))),
        }
    };

    let paragraph = Paragraph::new(content)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(MUTED))
                .title(" Result "),
        )
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, area);
}

fn render_history(frame: &mut Frame, area: Rect, state: &RenderState) {
    let title = format!(" History ({}) ", state.history_entries.len());

    if state.history_entries.is_empty() {
        let paragraph = Paragraph::new(Text::from(Span::styled(
            "No history found",
            Style::default().fg(MUTED),
        )))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(MUTED))
                .title(title),
        );
        frame.render_widget(paragraph, area);
        return;
    }

    let items: Vec<ListItem> = state
        .history_entries
        .iter()
        .skip(state.history_scroll)
        .map(|entry| {
            let content = format!("{}  {}", entry.timestamp, entry.description);
            ListItem::new(content).style(Style::default().fg(BRIGHT))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(MUTED))
            .title(title),
    );

    frame.render_widget(list, area);
}

fn render_status_bar(frame: &mut Frame, area: Rect, state: &RenderState) {
    let (status_text, style) = if let Some(message) = state.status_message {
        let fg = match message.message_type {
            MessageType::Success => ACCENT,
            MessageType::Error => ERROR,
        };
        (format!(" {} ", message.text), Style::default().fg(fg).bg(BAR_BG))
    } else {
        let mut parts = vec![
            "Tab: field".to_string(),
            "↑/↓: change".to_string(),
            "Enter: convert".to_string(),
        ];
        if state.history_open {
            parts.push("PgUp/PgDn: scroll".to_string());
            parts.push("Ctrl+S: export".to_string());
            parts.push("Ctrl+Y: copy CSV".to_string());
            parts.push("Ctrl+X: clear".to_string());
            parts.push("Esc: close".to_string());
        } else {
            parts.push("Ctrl+H: history".to_string());
        }
        parts.push("Ctrl+C: quit".to_string());
        (format!(" {} ", parts.join(" | ")), Style::default().fg(BRIGHT).bg(BAR_BG))
    };

    let paragraph = Paragraph::new(status_text).style(style);
    frame.render_widget(paragraph, area);
}
