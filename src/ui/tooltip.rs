//! Floating tooltip popup for chart data points
//!
//! Renders a small bordered popup anchored to the mouse cursor while it rests
//! on a data point. Shows the visitor count and the month, one per line.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, Borders, Clear, Widget};

use super::theme::{COLOR_BORDER, COLOR_DIM, COLOR_TITLE};

/// Clearance kept between the tooltip and either side of the screen.
const EDGE_MARGIN: u16 = 10;

/// Widest the content column may get; longer lines are clipped with `...`.
const MAX_CONTENT_WIDTH: u16 = 30;

/// One column of padding inside the border on both sides.
const SIDE_PADDING: u16 = 1;

/// Render a floating tooltip near the anchor point.
///
/// Horizontally centered on the anchor, shifted to keep `EDGE_MARGIN`
/// columns clear on both sides. Sits above the anchor row; flips below it
/// when the top of the screen is too close.
pub fn render_tooltip(buf: &mut Buffer, lines: &[String], anchor_x: u16, anchor_y: u16) {
    if lines.is_empty() {
        return;
    }

    let area = tooltip_rect(lines, anchor_x, anchor_y, buf.area).intersection(buf.area);
    if area.width < 3 || area.height < 3 {
        return;
    }

    Clear.render(area, buf);
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(COLOR_BORDER))
        .style(Style::default().bg(Color::Black))
        .render(area, buf);

    // First line carries the value, the rest are context lines.
    let max_chars = usize::from(area.width.saturating_sub(2 + 2 * SIDE_PADDING));
    for (row, line) in lines.iter().enumerate() {
        let y = area.y + 1 + row as u16;
        if y + 1 >= area.y + area.height {
            break;
        }
        let color = if row == 0 { COLOR_TITLE } else { COLOR_DIM };
        buf.set_string(
            area.x + 1 + SIDE_PADDING,
            y,
            clip(line, max_chars),
            Style::default().fg(color).bg(Color::Black),
        );
    }
}

/// Where the popup goes: sized to the widest line, centered on the anchor
/// within the margins, above the anchor unless that would clip the top.
fn tooltip_rect(lines: &[String], anchor_x: u16, anchor_y: u16, screen: Rect) -> Rect {
    let widest = lines.iter().map(|l| l.chars().count()).max().unwrap_or(0);
    let width = (widest as u16).min(MAX_CONTENT_WIDTH) + 2 * SIDE_PADDING + 2;
    let height = lines.len() as u16 + 2;

    let min_x = screen.x + EDGE_MARGIN;
    let max_x = (screen.x + screen.width)
        .saturating_sub(EDGE_MARGIN + width)
        .max(min_x);
    let x = anchor_x.saturating_sub(width / 2).clamp(min_x, max_x);

    let y = if anchor_y >= screen.y + height {
        anchor_y - height
    } else {
        (anchor_y + 1).min(screen.y + screen.height.saturating_sub(height))
    };

    Rect::new(x, y, width, height)
}

fn clip(line: &str, max_chars: usize) -> String {
    if line.chars().count() <= max_chars {
        return line.to_string();
    }
    let kept: String = line.chars().take(max_chars.saturating_sub(3)).collect();
    format!("{kept}...")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point_lines() -> Vec<String> {
        vec!["1850 bezoekers".to_string(), "dec 2025".to_string()]
    }

    fn find_symbol(buf: &Buffer, symbol: &str) -> Option<(u16, u16)> {
        let area = buf.area;
        for y in area.y..area.y + area.height {
            for x in area.x..area.x + area.width {
                if let Some(cell) = buf.cell((x, y)) {
                    if cell.symbol() == symbol {
                        return Some((x, y));
                    }
                }
            }
        }
        None
    }

    #[test]
    fn test_rect_sizes_to_the_widest_line() {
        let rect = tooltip_rect(&point_lines(), 50, 20, Rect::new(0, 0, 100, 50));

        // "1850 bezoekers" is 14 chars, plus padding and border on each side.
        assert_eq!(rect.width, 14 + 2 + 2);
        // Two content rows between the borders.
        assert_eq!(rect.height, 4);
    }

    #[test]
    fn test_rect_width_is_clamped() {
        let lines = vec!["x".repeat(80)];
        let rect = tooltip_rect(&lines, 50, 20, Rect::new(0, 0, 100, 50));

        assert_eq!(rect.width, MAX_CONTENT_WIDTH + 2 + 2);
    }

    #[test]
    fn test_rect_sits_above_and_centered() {
        let rect = tooltip_rect(&point_lines(), 50, 20, Rect::new(0, 0, 100, 50));

        assert_eq!(rect.y, 16);
        assert_eq!(rect.x, 41);
    }

    #[test]
    fn test_rect_keeps_the_left_margin() {
        let rect = tooltip_rect(&point_lines(), 3, 20, Rect::new(0, 0, 100, 50));

        assert_eq!(rect.x, EDGE_MARGIN);
    }

    #[test]
    fn test_rect_keeps_the_right_margin() {
        let rect = tooltip_rect(&point_lines(), 97, 20, Rect::new(0, 0, 100, 50));

        // Rightmost allowed column: 100 - 10 - 18 = 72.
        assert_eq!(rect.x, 72);
        assert!(rect.x + rect.width + EDGE_MARGIN <= 100);
    }

    #[test]
    fn test_rect_flips_below_near_the_top() {
        let rect = tooltip_rect(&point_lines(), 50, 2, Rect::new(0, 0, 100, 50));

        assert_eq!(rect.y, 3);
    }

    #[test]
    fn test_rect_on_a_narrow_screen_hugs_the_left_margin() {
        // Too narrow for both margins; the left one wins.
        let rect = tooltip_rect(&point_lines(), 15, 10, Rect::new(0, 0, 30, 20));

        assert_eq!(rect.x, EDGE_MARGIN);
    }

    #[test]
    fn test_render_draws_border_box() {
        let mut buf = Buffer::empty(Rect::new(0, 0, 80, 24));
        render_tooltip(&mut buf, &point_lines(), 40, 12);

        let (x, y) = find_symbol(&buf, "\u{250C}").expect("top-left corner not found");
        let rect = tooltip_rect(&point_lines(), 40, 12, Rect::new(0, 0, 80, 24));
        let x2 = x + rect.width - 1;
        let y2 = y + rect.height - 1;
        assert_eq!(buf.cell((x2, y)).unwrap().symbol(), "\u{2510}");
        assert_eq!(buf.cell((x, y2)).unwrap().symbol(), "\u{2514}");
        assert_eq!(buf.cell((x2, y2)).unwrap().symbol(), "\u{2518}");
    }

    #[test]
    fn test_render_shows_both_lines() {
        let mut buf = Buffer::empty(Rect::new(0, 0, 80, 24));
        render_tooltip(&mut buf, &point_lines(), 40, 12);

        // "b" from bezoekers on the first content row, "d" from dec below it.
        let b = find_symbol(&buf, "b").expect("value line not rendered");
        let d = find_symbol(&buf, "d").expect("date line not rendered");
        assert_eq!(d.1, b.1 + 1);
    }

    #[test]
    fn test_render_sits_above_anchor() {
        let mut buf = Buffer::empty(Rect::new(0, 0, 80, 24));
        render_tooltip(&mut buf, &point_lines(), 40, 15);

        let (_, y) = find_symbol(&buf, "\u{250C}").expect("corner not found");
        assert!(y < 15, "tooltip should sit above the anchor, found y={}", y);
    }

    #[test]
    fn test_render_flips_below_near_top() {
        let mut buf = Buffer::empty(Rect::new(0, 0, 80, 24));
        render_tooltip(&mut buf, &point_lines(), 40, 1);

        let (_, y) = find_symbol(&buf, "\u{250C}").expect("corner not found");
        assert!(y > 1, "tooltip should flip below the anchor near the top");
    }

    #[test]
    fn test_render_empty_lines_is_noop() {
        let mut buf = Buffer::empty(Rect::new(0, 0, 80, 24));
        render_tooltip(&mut buf, &[], 40, 12);

        assert!(find_symbol(&buf, "\u{250C}").is_none());
    }

    #[test]
    fn test_long_lines_get_an_ellipsis() {
        assert_eq!(clip("precies passend", 15), "precies passend");
        assert_eq!(clip("een veel te lange regel", 10), "een vee...");
    }
}
