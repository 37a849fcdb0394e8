use std::io::stdout;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use folio_core::model::{ProjectStore, QueryState};
use folio_core::views::render_cards;
use folio_protocol::{CardList, CardView, ThemeMode, ThemeToken};
use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

/// Chip row shown above the card list; first entry is the sentinel.
const CHIPS: [&str; 4] = ["all", "frontend", "ai", "production"];

fn theme_to_color(token: ThemeToken, mode: ThemeMode) -> Color {
    match mode {
        ThemeMode::Dark => match token {
            ThemeToken::Background => Color::Black,
            ThemeToken::Surface => Color::Rgb(24, 24, 37),
            ThemeToken::Border => Color::DarkGray,
            ThemeToken::TextPrimary => Color::White,
            ThemeToken::TextSecondary => Color::Gray,
            ThemeToken::TextMuted => Color::DarkGray,
            ThemeToken::CardBackground => Color::Rgb(30, 30, 46),
            ThemeToken::CardBorder => Color::Rgb(69, 71, 90),
            ThemeToken::CategoryBadge => Color::Rgb(137, 180, 250),
            ThemeToken::ChipBackground => Color::Rgb(49, 50, 68),
            ThemeToken::ChipActive => Color::Rgb(137, 180, 250),
            ThemeToken::ChipText => Color::White,
            ThemeToken::TagBackground => Color::Rgb(49, 50, 68),
            ThemeToken::TagText => Color::Rgb(186, 194, 222),
            ThemeToken::LinkText => Color::Rgb(137, 180, 250),
            ThemeToken::SearchBorder => Color::Rgb(137, 180, 250),
            ThemeToken::ToastText => Color::Rgb(249, 226, 175),
        },
        ThemeMode::Light => match token {
            ThemeToken::Background => Color::White,
            ThemeToken::Surface => Color::Rgb(245, 245, 248),
            ThemeToken::Border => Color::Rgb(210, 210, 220),
            ThemeToken::TextPrimary => Color::Black,
            ThemeToken::TextSecondary => Color::Rgb(80, 80, 100),
            ThemeToken::TextMuted => Color::Rgb(120, 120, 130),
            ThemeToken::CardBackground => Color::Rgb(250, 250, 252),
            ThemeToken::CardBorder => Color::Rgb(210, 210, 220),
            ThemeToken::CategoryBadge => Color::Rgb(50, 110, 220),
            ThemeToken::ChipBackground => Color::Rgb(230, 230, 235),
            ThemeToken::ChipActive => Color::Rgb(50, 110, 220),
            ThemeToken::ChipText => Color::Black,
            ThemeToken::TagBackground => Color::Rgb(235, 235, 240),
            ThemeToken::TagText => Color::Rgb(80, 80, 100),
            ThemeToken::LinkText => Color::Rgb(50, 110, 220),
            ThemeToken::SearchBorder => Color::Rgb(50, 110, 220),
            ThemeToken::ToastText => Color::Rgb(150, 100, 10),
        },
    }
}

/// Interactive preview loop: type to search, Tab cycles the category
/// chips, Ctrl-T flips the theme, Esc quits. Every keystroke mutates the
/// query state and re-renders synchronously, exactly like the page.
pub fn run_tui(store: &ProjectStore, mut state: QueryState) -> Result<()> {
    enable_raw_mode()?;
    let mut out = stdout();
    execute!(out, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(out);
    let mut terminal = Terminal::new(backend)?;

    let mut theme = ThemeMode::default();
    let mut chip_index = CHIPS
        .iter()
        .position(|c| *c == state.filter.key())
        .unwrap_or(0);

    loop {
        let list = render_cards(store, &state);

        terminal.draw(|frame| {
            let [header, search, chips, body] = Layout::vertical([
                Constraint::Length(1),
                Constraint::Length(3),
                Constraint::Length(1),
                Constraint::Min(0),
            ])
            .areas(frame.area());

            let header_line = Paragraph::new(format!(
                " folio — {} of {} projects | Tab filter | Ctrl-T theme | Esc quit ",
                list.len(),
                store.len()
            ))
            .style(
                Style::default()
                    .fg(theme_to_color(ThemeToken::TextPrimary, theme))
                    .bg(theme_to_color(ThemeToken::Surface, theme)),
            );
            frame.render_widget(header_line, header);

            let search_box = Paragraph::new(state.query.as_str()).block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Search projects ")
                    .border_style(Style::default().fg(theme_to_color(ThemeToken::SearchBorder, theme))),
            );
            frame.render_widget(search_box, search);

            let mut chip_spans: Vec<Span> = Vec::with_capacity(CHIPS.len() * 2);
            for (i, chip) in CHIPS.iter().enumerate() {
                let style = if i == chip_index {
                    Style::default()
                        .fg(theme_to_color(ThemeToken::Background, theme))
                        .bg(theme_to_color(ThemeToken::ChipActive, theme))
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default()
                        .fg(theme_to_color(ThemeToken::ChipText, theme))
                        .bg(theme_to_color(ThemeToken::ChipBackground, theme))
                };
                chip_spans.push(Span::styled(format!(" {chip} "), style));
                chip_spans.push(Span::raw(" "));
            }
            frame.render_widget(Paragraph::new(Line::from(chip_spans)), chips);

            let lines = match &list {
                CardList::Empty(empty) => vec![
                    Line::default(),
                    Line::styled(
                        format!("  {}  [{}]", empty.title, empty.badge),
                        Style::default()
                            .fg(theme_to_color(ThemeToken::TextPrimary, theme))
                            .add_modifier(Modifier::BOLD),
                    ),
                    Line::styled(
                        format!("  {}", empty.hint),
                        Style::default().fg(theme_to_color(ThemeToken::TextMuted, theme)),
                    ),
                ],
                CardList::Cards { cards } => {
                    cards.iter().flat_map(|card| card_lines(card, theme)).collect()
                }
            };

            let body_widget = Paragraph::new(lines)
                .wrap(Wrap { trim: false })
                .style(Style::default().bg(theme_to_color(ThemeToken::Background, theme)));
            frame.render_widget(body_widget, body);
        })?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            match key.code {
                KeyCode::Esc => break,
                KeyCode::Tab => {
                    chip_index = (chip_index + 1) % CHIPS.len();
                    state.set_filter(CHIPS[chip_index]);
                }
                KeyCode::Char('t') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    theme = theme.toggle();
                }
                KeyCode::Backspace => {
                    let mut query = state.query.clone();
                    query.pop();
                    state.set_query(Some(&query));
                }
                KeyCode::Char(c) => {
                    let mut query = state.query.clone();
                    query.push(c);
                    state.set_query(Some(&query));
                }
                _ => {}
            }
        }
    }

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    Ok(())
}

fn card_lines(card: &CardView, theme: ThemeMode) -> Vec<Line<'static>> {
    let mut lines = vec![Line::default()];

    lines.push(Line::from(vec![
        Span::styled(
            format!("  {}", card.title),
            Style::default()
                .fg(theme_to_color(ThemeToken::TextPrimary, theme))
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("  [{}]", card.category_label),
            Style::default().fg(theme_to_color(ThemeToken::CategoryBadge, theme)),
        ),
    ]));

    lines.push(Line::styled(
        format!("  {}", card.description),
        Style::default().fg(theme_to_color(ThemeToken::TextSecondary, theme)),
    ));

    if !card.links.is_empty() {
        let mut spans = vec![Span::raw("  ")];
        for link in &card.links {
            spans.push(Span::styled(
                format!("{} <{}>  ", link.label, link.url),
                Style::default().fg(theme_to_color(ThemeToken::LinkText, theme)),
            ));
        }
        lines.push(Line::from(spans));
    }

    if !card.tags.is_empty() {
        let mut spans = vec![Span::raw("  ")];
        for tag in &card.tags {
            spans.push(Span::styled(
                format!(" {tag} "),
                Style::default()
                    .fg(theme_to_color(ThemeToken::TagText, theme))
                    .bg(theme_to_color(ThemeToken::TagBackground, theme)),
            ));
            spans.push(Span::raw(" "));
        }
        lines.push(Line::from(spans));
    }

    lines
}
