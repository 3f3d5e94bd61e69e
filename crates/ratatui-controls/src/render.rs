use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use unicode_width::UnicodeWidthStr;

/// Renders `s` centered in `area`, on the vertically middle row.
pub fn render_str_centered(area: Rect, buf: &mut Buffer, s: &str, style: Style) {
    if area.width == 0 || area.height == 0 {
        return;
    }
    let w = UnicodeWidthStr::width(s).min(area.width as usize);
    let x = area.x + ((area.width as usize - w) / 2) as u16;
    let y = area.y + area.height / 2;
    buf.set_stringn(x, y, s, area.width as usize, style);
}
