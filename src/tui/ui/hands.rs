use crate::cards::{Card, Rank, Suit};
use crate::hand::PokerHand;
use crate::tui::app::{AppState, HandDraft, HAND_SIZE};
use ratatui::prelude::*;
use ratatui::widgets::*;

use super::layout::{columns, inner};

pub(super) fn draw_board(f: &mut Frame, app: &AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // header
            Constraint::Length(7), // player 1
            Constraint::Length(7), // player 2
            Constraint::Min(6),    // picker
            Constraint::Length(4), // status bar
        ])
        .split(f.area());

    let ready = if app.is_ready() { "ready: press E to evaluate" } else { "fill all ten slots" };
    let header = Paragraph::new(Line::from(format!(
        "{} vs {}  ({ready})",
        app.hands[0].player, app.hands[1].player
    )))
    .block(Block::default().title("poker-showdown").borders(Borders::ALL));
    f.render_widget(header, chunks[0]);

    for (idx, area) in [chunks[1], chunks[2]].into_iter().enumerate() {
        draw_hand(f, area, app, idx);
    }
    draw_picker(f, chunks[3], app);
    draw_status(f, chunks[4], app);
}

fn draw_hand(f: &mut Frame, area: Rect, app: &AppState, idx: usize) {
    let draft = &app.hands[idx];
    let active = app.slot.hand == idx;
    let mut title = format!("P{} {}", idx + 1, draft.player);
    if let Some(summary) = preview(draft) {
        title.push_str(&format!(" [{summary}]"));
    }
    let mut block = Block::default().title(title).borders(Borders::ALL);
    if active {
        block = block.border_style(Style::default().fg(Color::Cyan));
    }
    f.render_widget(block, area);

    let slots = columns(inner(area), HAND_SIZE as u16);
    for (i, slot_area) in slots.into_iter().enumerate() {
        let border = (active && app.slot.card == i).then_some(Color::Yellow);
        render_card_widget(f, slot_area, draft.cards[i], border);
    }
}

/// Category title of a fully placed hand.
fn preview(draft: &HandDraft) -> Option<String> {
    if !draft.is_complete() {
        return None;
    }
    let cards: Vec<Card> = draft.placed().collect();
    PokerHand::from_cards(draft.player.clone(), &cards).ok().map(|h| h.category().to_string())
}

fn draw_picker(f: &mut Frame, area: Rect, app: &AppState) {
    let block = Block::default().title("Deck").borders(Borders::ALL);
    f.render_widget(block, area);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(Suit::ALL.iter().map(|_| Constraint::Length(1)).collect::<Vec<_>>())
        .split(inner(area));

    let cursor = app.cursor_card();
    for (row_area, suit) in rows.iter().zip(Suit::ALL) {
        let mut spans: Vec<Span> = Vec::with_capacity(Rank::ALL.len());
        for rank in Rank::ALL {
            let card = Card::new(rank, suit);
            let (_, mut style) = suit_glyph_and_style(suit);
            if app.is_used_elsewhere(card) {
                style = Style::default().fg(Color::DarkGray).add_modifier(Modifier::DIM);
            }
            if card == cursor {
                style = style.add_modifier(Modifier::REVERSED | Modifier::BOLD);
            }
            spans.push(Span::styled(format!("{:>4}", short_card(card)), style));
        }
        f.render_widget(Paragraph::new(Line::from(spans)), *row_area);
    }
}

fn draw_status(f: &mut Frame, area: Rect, app: &AppState) {
    f.render_widget(Block::default().borders(Borders::ALL).title("Status"), area);
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(inner(area));

    let mut left = vec![Line::from(format!(
        "Slot: P{} card {}   Cursor: {}",
        app.slot.hand + 1,
        app.slot.card + 1,
        app.cursor_card()
    ))];
    if let Some(err) = app.error() {
        left.push(Line::from(Span::styled(
            format!("Error: {err}"),
            Style::default().fg(Color::Red),
        )));
    }
    let right =
        vec![Line::from("Enter place • R random • E evaluate"), Line::from("? help • Q quit")];
    f.render_widget(Paragraph::new(left).wrap(Wrap { trim: true }), cols[0]);
    f.render_widget(
        Paragraph::new(right).wrap(Wrap { trim: true }).alignment(Alignment::Right),
        cols[1],
    );
}

fn suit_glyph_and_style(s: Suit) -> (char, Style) {
    match s {
        Suit::Hearts => ('♥', Style::default().fg(Color::Red)),
        Suit::Diamonds => ('♦', Style::default().fg(Color::Red)),
        Suit::Spades => ('♠', Style::default().fg(Color::White)),
        Suit::Clubs => ('♣', Style::default().fg(Color::White)),
    }
}

fn short_card(c: Card) -> String {
    let (glyph, _) = suit_glyph_and_style(c.suit());
    format!("{}{}", c.rank().symbol(), glyph)
}

fn render_card_widget(f: &mut Frame, area: Rect, card: Option<Card>, border: Option<Color>) {
    let mut block = Block::default().borders(Borders::ALL).title_alignment(Alignment::Center);
    if let Some(color) = border {
        block = block.border_style(Style::default().fg(color));
    }
    let inner = inner(area);
    f.render_widget(block, area);
    let content = match card {
        Some(c) => {
            let (_, style) = suit_glyph_and_style(c.suit());
            Line::from(Span::styled(short_card(c), style))
        }
        None => Line::from("[  ]"),
    };
    f.render_widget(Paragraph::new(content).alignment(Alignment::Center), inner);
}
