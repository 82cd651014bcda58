//! Layout and text helpers for rendering

use ratatui::layout::{Constraint, Flex, Layout, Rect};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// A rectangle centered in `area`, sized as a percentage of it but never
/// smaller than `min_width` x `min_height` (clamped to the parent).
pub fn popup_area(
    area: Rect,
    percent_x: u16,
    percent_y: u16,
    min_width: u16,
    min_height: u16,
) -> Rect {
    let width = (area.width * percent_x / 100).max(min_width).min(area.width);
    let height = (area.height * percent_y / 100)
        .max(min_height)
        .min(area.height);

    let vertical = Layout::vertical([Constraint::Length(height)]).flex(Flex::Center);
    let horizontal = Layout::horizontal([Constraint::Length(width)]).flex(Flex::Center);
    let [area] = vertical.areas(area);
    let [area] = horizontal.areas(area);
    area
}

/// Cut `text` to fit `max_width` display columns, ending in `…` when cut.
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w + 1 > max_width {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_popup_area_centered() {
        let area = Rect::new(0, 0, 100, 50);
        let popup = popup_area(area, 50, 50, 10, 5);
        assert_eq!(popup.width, 50);
        assert_eq!(popup.height, 25);
        assert_eq!(popup.x, 25);
    }

    #[test]
    fn test_popup_area_respects_minimum() {
        let area = Rect::new(0, 0, 60, 20);
        let popup = popup_area(area, 10, 10, 40, 10);
        assert_eq!(popup.width, 40);
        assert_eq!(popup.height, 10);

        let tiny = popup_area(Rect::new(0, 0, 20, 5), 70, 80, 40, 10);
        assert_eq!(tiny.width, 20);
        assert_eq!(tiny.height, 5);
    }

    #[test]
    fn test_truncate_to_width() {
        assert_eq!(truncate_to_width("Install", 10), "Install");
        assert_eq!(truncate_to_width("Installation", 8), "Install…");
        assert_eq!(truncate_to_width("日本語の見出し", 7), "日本語…");
        assert_eq!(truncate_to_width("abc", 0), "");
    }
}
