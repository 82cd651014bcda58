mod layout;
mod popups;
mod util;

use layout::{DynamicLayout, Section};

use crate::tui::app::App;
use crate::tui::view::{MarkerKind, OutlineRow};
use popups::render_help_popup;
use ratatui::Frame;
use ratatui::layout::{Constraint, Margin, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{
    Block, Borders, List, ListItem, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState,
};
use util::truncate_to_width;

pub fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();

    let main_layout = DynamicLayout::vertical(area)
        .section(Section::Main, Constraint::Min(0))
        .section(Section::Status, Constraint::Length(1))
        .build();

    if let Some(main) = main_layout.get(Section::Main) {
        let panes = DynamicLayout::horizontal(main)
            .section_if(
                app.show_outline,
                Section::Outline,
                Constraint::Percentage(app.outline_width),
            )
            .section(Section::Content, Constraint::Min(0))
            .build();

        if let Some(outline) = panes.get(Section::Outline) {
            render_outline(frame, app, outline);
        }
        if let Some(content) = panes.get(Section::Content) {
            render_content(frame, app, content);
        }
    }

    if let Some(status) = main_layout.get(Section::Status) {
        render_status_bar(frame, app, status);
    }

    if app.show_help() {
        render_help_popup(frame, app, area);
    }
}

fn outline_item(row: &OutlineRow, active: bool, width: usize) -> ListItem<'static> {
    let indent = "  ".repeat(row.depth);
    let text = truncate_to_width(&format!("{}{}", indent, row.text), width);

    let mut style = Style::default();
    if row.bold {
        style = style.add_modifier(Modifier::BOLD);
    }
    if active {
        style = style.fg(Color::Black).bg(Color::Cyan);
    }
    ListItem::new(Line::from(Span::styled(text, style)))
}

fn render_outline(frame: &mut Frame, app: &mut App, area: Rect) {
    let active_class = app.anchor.options().active_class.clone();
    // Borders plus the highlight symbol
    let width = area.width.saturating_sub(4) as usize;

    let items: Vec<ListItem> = app
        .view
        .rows()
        .iter()
        .map(|row| {
            let active = app
                .view
                .is_marked(MarkerKind::Outline, &row.id, &active_class);
            outline_item(row, active, width)
        })
        .collect();
    let count = items.len();

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan))
                .title(" Outline "),
        )
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_symbol("► ");

    frame.render_stateful_widget(list, area, &mut app.outline_state);

    let mut scrollbar_state = ScrollbarState::new(count).position(app.selected().unwrap_or(0));
    render_scrollbar(frame, area, &mut scrollbar_state);
}

fn render_content(frame: &mut Frame, app: &mut App, area: Rect) {
    let inner_height = area.height.saturating_sub(2) as usize;
    app.view.set_viewport_rows(inner_height);

    let head_class = app.anchor.options().head_class.clone();
    let highlighted = if head_class.is_empty() {
        None
    } else {
        app.view.marked_heading_line(&head_class)
    };
    let heading_lines: Vec<usize> = app.view.rows().iter().map(|r| r.line).collect();

    let start = app.view.scroll_row();
    let lines: Vec<Line> = app
        .view
        .lines()
        .iter()
        .enumerate()
        .skip(start)
        .take(inner_height)
        .map(|(number, text)| {
            let style = if Some(number) == highlighted {
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else if heading_lines.contains(&number) {
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            Line::from(Span::styled(text.clone(), style))
        })
        .collect();

    let title = format!(" {} ", app.filename);
    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(title),
    );
    frame.render_widget(paragraph, area);

    let mut scrollbar_state = ScrollbarState::new(app.view.lines().len()).position(start);
    render_scrollbar(frame, area, &mut scrollbar_state);
}

fn render_scrollbar(frame: &mut Frame, area: Rect, state: &mut ScrollbarState) {
    let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
        .begin_symbol(Some("↑"))
        .end_symbol(Some("↓"))
        .style(Style::default().fg(Color::DarkGray));

    frame.render_stateful_widget(
        scrollbar,
        area.inner(Margin {
            vertical: 1,
            horizontal: 0,
        }),
        state,
    );
}

fn status_text(app: &App) -> String {
    let position = app.view.scroll_row() + 1;
    let total = app.view.lines().len().max(1);

    match app.anchor.active_entry() {
        Some(entry) => format!(
            " {} • {} → {} • line {}/{} • ?:help ",
            app.filename,
            entry.text,
            app.anchor.href(&entry.id),
            position,
            total
        ),
        None => format!(
            " {} • no active heading • line {}/{} • ?:help ",
            app.filename, position, total
        ),
    }
}

fn render_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    if let Some(ref msg) = app.status_message {
        let status = Paragraph::new(msg.clone()).style(
            Style::default()
                .bg(Color::Rgb(0, 80, 120))
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        );
        frame.render_widget(status, area);
        return;
    }

    let text = truncate_to_width(&status_text(app), area.width as usize);
    let status = Paragraph::new(text).style(Style::default().bg(Color::DarkGray).fg(Color::White));
    frame.render_widget(status, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::keybindings::Action;
    use crate::parser::parse_markdown;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;
    use std::path::PathBuf;
    use std::time::Instant;

    fn app() -> App {
        let mut md = String::from("# Guide\n");
        md.push_str(&"intro\n".repeat(9));
        md.push_str("## Install\n");
        md.push_str(&"step\n".repeat(30));
        let mut config = Config::default();
        config.ui.smooth_scroll_ms = 0;
        App::new(parse_markdown(&md), PathBuf::from("guide.md"), &config).unwrap()
    }

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        let buffer = terminal.backend().buffer();
        buffer
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect::<String>()
    }

    #[test]
    fn test_status_text_shows_active_fragment() {
        let mut app = app();
        assert!(status_text(&app).contains("Guide → #heading-1"));

        app.handle_action(Action::Bottom);
        app.tick(Instant::now());
        assert!(status_text(&app).contains("Install → #heading-2"));
    }

    #[test]
    fn test_render_outline_and_content() {
        let mut app = app();
        let mut terminal = Terminal::new(TestBackend::new(80, 20)).unwrap();
        terminal.draw(|frame| render(frame, &mut app)).unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains("Outline"));
        assert!(text.contains("Install"));
        assert!(text.contains("guide.md"));
        assert_eq!(app.view.viewport_rows(), 17);
    }

    #[test]
    fn test_render_without_outline() {
        let mut app = app();
        app.handle_action(Action::ToggleOutline);
        let mut terminal = Terminal::new(TestBackend::new(80, 20)).unwrap();
        terminal.draw(|frame| render(frame, &mut app)).unwrap();

        assert!(!buffer_text(&terminal).contains("Outline"));
    }

    #[test]
    fn test_render_help() {
        let mut app = app();
        app.handle_action(Action::ToggleHelp);
        let mut terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();
        terminal.draw(|frame| render(frame, &mut app)).unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains("Help"));
        assert!(text.contains("Application"));
    }
}
