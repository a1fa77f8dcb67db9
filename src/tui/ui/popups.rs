use crate::showdown::Verdict;
use crate::tui::app::AppState;
use ratatui::prelude::*;
use ratatui::widgets::*;

use super::layout::{centered_rect, inner};

pub(super) fn draw_help(f: &mut Frame) {
    let area = centered_rect(60, 70, f.area());
    let block = Block::default().title("Help").borders(Borders::ALL);
    let bold = Style::default().add_modifier(Modifier::BOLD);
    let lines = vec![
        Line::from(Span::styled("Slots:", bold)),
        Line::from("- Tab / Shift-Tab: next / previous slot"),
        Line::from("- 1-5: jump to a slot in the active hand"),
        Line::from("- Backspace / Delete: clear slot"),
        Line::from(""),
        Line::from(Span::styled("Deck:", bold)),
        Line::from("- Arrows: move cursor"),
        Line::from("- Enter / Space: place card"),
        Line::from(""),
        Line::from(Span::styled("Hands:", bold)),
        Line::from("- R: randomize active hand"),
        Line::from("- X: reset active hand"),
        Line::from("- N: rename active player"),
        Line::from("- E: evaluate"),
        Line::from("- Q: quit"),
        Line::from(""),
        Line::from("Close help: ? or Esc"),
    ];
    let para = Paragraph::new(lines).wrap(Wrap { trim: true });
    f.render_widget(Clear, area);
    f.render_widget(block, area);
    f.render_widget(para, inner(area));
}

pub(super) fn draw_verdict(f: &mut Frame, verdict: &Verdict) {
    let area = centered_rect(70, 40, f.area());
    let headline = if verdict.is_tie() {
        "It's a Tie!".to_string()
    } else {
        format!("{} Wins!", verdict.winner)
    };
    let category = verdict.category().map(|c| c.title()).unwrap_or("Unknown");
    let mut lines = vec![
        Line::from(Span::styled(headline, Style::default().add_modifier(Modifier::BOLD))),
        Line::from(""),
        Line::from(format!("Category: {category}")),
        Line::from(format!("Hand: {}", verdict.hand)),
    ];
    if !verdict.hand_eval.is_empty() {
        lines.push(Line::from(verdict.hand_eval.clone()));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Press any key to continue",
        Style::default().add_modifier(Modifier::DIM),
    )));
    let border = if verdict.is_tie() { Color::Yellow } else { Color::Green };
    let block = Block::default()
        .title("Verdict")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border));
    let para = Paragraph::new(lines).alignment(Alignment::Center).wrap(Wrap { trim: true });
    f.render_widget(Clear, area);
    f.render_widget(block, area);
    f.render_widget(para, inner(area));
}

pub(super) fn draw_name_entry(f: &mut Frame, app: &AppState) {
    let area = centered_rect(50, 25, f.area());
    let current = app.name_entry_text().unwrap_or("");
    let lines = vec![
        Line::from(format!("Name: {current}_")),
        Line::from(""),
        Line::from(format!("Up to {} characters", AppState::NAME_MAX_LEN)),
        Line::from("Enter save, Esc cancel"),
    ];
    let title = format!("Player {}", app.slot.hand + 1);
    let block = Block::default().title(title).borders(Borders::ALL);
    let para = Paragraph::new(lines).alignment(Alignment::Center);
    f.render_widget(Clear, area);
    f.render_widget(block, area);
    f.render_widget(para, inner(area));
}
