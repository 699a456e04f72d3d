//! The UI renders the application state into a sidebar, content pane and
//! search line.
//!
//! Rendering is a pure function of state: the active pair, the search
//! highlights and the cursor are all expressed as styles on the widgets.
//! Nothing here mutates activation or highlighting.

use crate::app_state::{AppState, Focus};
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

/// Colors derived from the persisted display preference.
struct Palette {
    active: Color,
    highlight: Color,
    chrome: Color,
}

fn palette(dark_mode: bool) -> Palette {
    if dark_mode {
        Palette {
            active: Color::Cyan,
            highlight: Color::Rgb(40, 60, 100),
            chrome: Color::DarkGray,
        }
    } else {
        Palette {
            active: Color::Blue,
            highlight: Color::Rgb(210, 225, 250),
            chrome: Color::Gray,
        }
    }
}

/// Renders the full frame from current application state.
pub fn draw(f: &mut Frame, app: &AppState) {
    let colors = palette(app.dark_mode);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(3),
            Constraint::Length(3),
        ])
        .split(f.area());

    let panes = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(32), Constraint::Min(0)])
        .split(rows[0]);

    draw_sidebar(f, app, &colors, panes[0]);
    draw_content(f, app, panes[1]);
    draw_search(f, app, rows[1]);
    draw_help(f, app, &colors, rows[2]);
}

fn draw_sidebar(
    f: &mut Frame,
    app: &AppState,
    colors: &Palette,
    area: ratatui::layout::Rect,
) {
    let items: Vec<ListItem> = app
        .registry
        .controls
        .iter()
        .enumerate()
        .map(|(index, control)| {
            let indent = "  ".repeat(control.level.saturating_sub(1));
            let line = Line::from(vec![
                Span::raw(indent),
                Span::raw(control.label.clone()),
            ]);

            let mut style = Style::default();
            if control.highlighted {
                style = style.bg(colors.highlight);
            }
            if control.active {
                style = style.fg(colors.active).add_modifier(Modifier::BOLD);
            }
            if index == app.cursor && app.focus == Focus::Sidebar {
                style = style.add_modifier(Modifier::REVERSED);
            }

            ListItem::new(line).style(style)
        })
        .collect();

    let title = format!("Sections ({})", app.registry.len());
    let list = List::new(items).block(Block::default().borders(Borders::ALL).title(title));
    f.render_widget(list, area);
}

fn draw_content(f: &mut Frame, app: &AppState, area: ratatui::layout::Rect) {
    let (title, body) = match app.registry.active_section() {
        Some(section) => (
            format!("{} [{}]", section.title, section.id),
            section.body.text_content(),
        ),
        None => (
            "No active section".to_string(),
            "Select a section with Enter, or search with /".to_string(),
        ),
    };

    let content = Paragraph::new(body)
        .block(Block::default().borders(Borders::ALL).title(title))
        .scroll((app.content_scroll, 0))
        .wrap(ratatui::widgets::Wrap { trim: false });
    f.render_widget(content, area);
}

fn draw_search(f: &mut Frame, app: &AppState, area: ratatui::layout::Rect) {
    let query = if app.focus == Focus::Search {
        format!("/{}_", app.query_buffer)
    } else if app.query_buffer.is_empty() {
        String::new()
    } else {
        format!("/{}", app.query_buffer)
    };

    let search =
        Paragraph::new(query).block(Block::default().borders(Borders::ALL).title("Search"));
    f.render_widget(search, area);
}

fn draw_help(f: &mut Frame, app: &AppState, colors: &Palette, area: ratatui::layout::Rect) {
    let text = if let Some(ref message) = app.message {
        message.clone()
    } else if app.focus == Focus::Search {
        "Type to search | Esc: Leave search".to_string()
    } else {
        "Up/Down: Navigate | Enter: Open | /: Search | PgUp/PgDn: Scroll | t: Theme | q: Quit"
            .to_string()
    };

    let help = Paragraph::new(text)
        .style(Style::default().fg(colors.chrome))
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, area);
}
