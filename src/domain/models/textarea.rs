use ratatui::style::Color;
use ratatui::style::Style;
use ratatui::widgets::block::Title;
use ratatui::widgets::Block;
use ratatui::widgets::BorderType;
use ratatui::widgets::Borders;
use ratatui::widgets::Padding;

pub struct TextArea {}

impl<'a> TextArea {
    pub fn new(title: &'static str) -> tui_textarea::TextArea<'a> {
        let mut textarea = tui_textarea::TextArea::default();
        textarea.set_block(TextArea::block(title, false));
        textarea.set_cursor_line_style(Style::default());

        return textarea;
    }

    pub fn with_text(title: &'static str, text: &str) -> tui_textarea::TextArea<'a> {
        let mut textarea = tui_textarea::TextArea::new(vec![text.to_string()]);
        textarea.set_block(TextArea::block(title, false));
        textarea.set_cursor_line_style(Style::default());
        textarea.move_cursor(tui_textarea::CursorMove::End);

        return textarea;
    }

    pub fn block<T>(title: T, focused: bool) -> Block<'a>
    where
        T: Into<Title<'a>>,
    {
        let mut block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Double)
            .title(title)
            .padding(Padding::new(1, 1, 0, 0));

        if focused {
            block = block.border_style(Style::default().fg(Color::LightBlue));
        }

        return block;
    }

    /// Single line text content of a textarea.
    pub fn text(textarea: &tui_textarea::TextArea) -> String {
        return textarea.lines().join("");
    }
}
