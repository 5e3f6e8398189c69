use ratatui::{buffer::Buffer, layout::Rect, widgets::Widget};

/// Render a widget into an off-screen buffer and return its text, one line
/// per row with trailing blanks removed. Styling is dropped.
pub fn render_to_string(widget: impl Widget, width: u16, height: u16) -> String {
    let area = Rect::new(0, 0, width, height);
    let mut buf = Buffer::empty(area);
    widget.render(area, &mut buf);

    let mut lines: Vec<String> = buf
        .content
        .chunks(area.width.max(1) as usize)
        .map(|row| {
            row.iter()
                .map(|cell| cell.symbol())
                .collect::<String>()
                .trim_end()
                .to_string()
        })
        .collect();

    while lines.last().is_some_and(|l| l.is_empty()) {
        lines.pop();
    }

    lines.join("\n")
}
