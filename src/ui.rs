//! Terminal UI rendering.
//!
//! All drawing logic lives here, separated from application state ([`App`])
//! and input handling ([`crate::input`]).
//!
//! * The layout is a four-row split: page heading, the card strip,
//!   the previous/next controls, and a one-line status bar.
//! * The strip shows the fully visible window in equal columns, flanked by
//!   narrow dimmed columns for the neighbouring side items.
//! * [`ratatui`] is the TUI framework; see its docs for widget details.

use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::app::{App, LoadState};
use crate::carousel::Carousel;

const PLACEHOLDER: &str = "No articles available";
const LOADING: &str = "Loading articles...";

/// Draw the complete UI for one frame.
pub fn draw(app: &App, frame: &mut Frame) {
    let [header_area, strip_area, nav_area, status_area] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(3),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(frame.area());

    draw_header(frame, header_area);
    match app.load_state {
        LoadState::Loading => draw_notice(frame, strip_area, LOADING),
        LoadState::Ready if app.carousel.is_empty() => draw_notice(frame, strip_area, PLACEHOLDER),
        LoadState::Ready => draw_strip(&app.carousel, frame, strip_area),
    }
    draw_nav(&app.carousel, frame, nav_area);
    draw_status_bar(app, frame, status_area);
}

fn draw_header(frame: &mut Frame, area: Rect) {
    let heading = Paragraph::new(vec![
        Line::from(Span::styled("What is the", Style::default().fg(Color::Gray))),
        Line::from(Span::styled(
            "Speciality Of Us?",
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        )),
    ])
    .alignment(Alignment::Center);
    frame.render_widget(heading, area);
}

fn draw_notice(frame: &mut Frame, area: Rect, text: &str) {
    let notice = Paragraph::new(text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray))
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(notice, area);
}

/// Render the visible window plus one side item on each edge.
fn draw_strip(carousel: &Carousel, frame: &mut Frame, area: Rect) {
    let window = carousel.window();
    let side_width = (area.width / 10).max(3);

    let mut constraints = vec![Constraint::Length(side_width)];
    constraints.extend(window.clone().map(|_| Constraint::Fill(1)));
    constraints.push(Constraint::Length(side_width));

    let columns = Layout::horizontal(constraints).spacing(1).split(area);

    if let Some(prev) = window.start.checked_sub(1) {
        draw_card(carousel, prev, frame, columns[0]);
    }
    for (slot, index) in window.clone().enumerate() {
        draw_card(carousel, index, frame, columns[slot + 1]);
    }
    if window.end < carousel.len() {
        draw_card(carousel, window.end, frame, columns[columns.len() - 1]);
    }
}

fn draw_card(carousel: &Carousel, index: usize, frame: &mut Frame, area: Rect) {
    let Some(article) = carousel.items().get(index) else {
        return;
    };
    let side = carousel.is_side_item(index);
    let title = carousel.title(index).unwrap_or_default();

    let (border_style, title_style) = if side {
        let dim = Style::default().fg(Color::DarkGray).add_modifier(Modifier::DIM);
        (dim, dim)
    } else {
        (
            Style::default().fg(Color::Cyan),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        )
    };

    let mut lines = vec![Line::from(Span::styled(title, title_style))];
    if !side {
        lines.push(Line::raw(""));
        lines.push(Line::from(Span::styled(
            carousel.description(index).unwrap_or_default(),
            Style::default().fg(Color::Gray),
        )));
        lines.push(Line::raw(""));
        lines.push(Line::from(vec![
            Span::styled("img ", Style::default().fg(Color::Magenta)),
            Span::styled(article.image_host().to_string(), Style::default().fg(Color::DarkGray)),
        ]));
        if let Some(published) = article.published {
            lines.push(Line::from(Span::styled(
                published.format("%Y-%m-%d %H:%M").to_string(),
                Style::default().fg(Color::DarkGray),
            )));
        }
        lines.push(Line::from(Span::styled(
            article.link.clone(),
            Style::default().fg(Color::Blue).add_modifier(Modifier::UNDERLINED),
        )));
    }

    let mut block = Block::default().borders(Borders::ALL).border_style(border_style);
    if let (false, Some(name)) = (side, article.source_name.as_deref()) {
        block = block.title(format!(" {name} "));
    }

    let card = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: true });
    frame.render_widget(card, area);
}

fn nav_style(enabled: bool) -> Style {
    if enabled {
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}

/// Previous / next controls, dimmed at either bound.
fn draw_nav(carousel: &Carousel, frame: &mut Frame, area: Rect) {
    let nav = Paragraph::new(Line::from(vec![
        Span::styled(" ← ", nav_style(carousel.can_retreat())),
        Span::raw("   "),
        Span::styled(" → ", nav_style(carousel.can_advance())),
    ]))
    .alignment(Alignment::Center);
    frame.render_widget(nav, area);
}

/// Render the bottom status bar.
fn draw_status_bar(app: &App, frame: &mut Frame, area: Rect) {
    let carousel = &app.carousel;
    let window = carousel.window();
    let position = if carousel.is_empty() {
        "no cards".to_string()
    } else {
        format!("cards {}-{} of {}", window.start + 1, window.end, carousel.len())
    };

    let status = Paragraph::new(Line::from(vec![
        Span::raw(" "),
        Span::styled(&app.status, Style::default().fg(Color::Yellow)),
        Span::raw("  "),
        Span::styled(
            format!("{} articles", carousel.len()),
            Style::default().fg(Color::Green),
        ),
        Span::raw("  "),
        Span::raw(position),
        Span::raw("  "),
        Span::styled(
            format!("offset {}px", carousel.offset()),
            Style::default().fg(Color::DarkGray),
        ),
        Span::raw("  q: quit  h/l: browse  r/R: refresh"),
    ]));
    frame.render_widget(status, area);
}
