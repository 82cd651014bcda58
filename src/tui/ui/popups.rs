//! Help overlay

use crate::keybindings::KeybindingMode;
use crate::tui::app::App;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

use super::util::popup_area;

/// Render the help popup listing the Normal mode bindings by category
pub fn render_help_popup(frame: &mut Frame, app: &App, area: Rect) {
    // Min 40 cols for readability, min 10 rows for usable scroll area
    let popup_area = popup_area(area, 60, 80, 40, 10);
    frame.render_widget(Clear, popup_area);

    let paragraph = Paragraph::new(help_lines(app))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan))
                .title(" Help "),
        )
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, popup_area);
}

fn help_lines(app: &App) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    let mut category = "";

    for (action, keys) in app.keybindings().help_entries(KeybindingMode::Normal) {
        if action.category() != category {
            if !lines.is_empty() {
                lines.push(Line::default());
            }
            category = action.category();
            lines.push(Line::from(Span::styled(
                category,
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )));
        }
        lines.push(Line::from(vec![
            Span::styled(
                format!("  {:<14}", keys.join(", ")),
                Style::default().fg(Color::Cyan),
            ),
            Span::raw(action.description()),
        ]));
    }

    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        "Press ? or Esc to close",
        Style::default().fg(Color::DarkGray),
    )));
    lines
}
