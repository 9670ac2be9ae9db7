use crate::domain::content::{CODE_SAMPLE, CODE_SAMPLE_TITLE};
use crate::presentation::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Text},
    widgets::{Block, BorderType, Paragraph, Widget},
};

pub struct CodeSample<'a> {
    theme: &'a Theme,
}

impl<'a> CodeSample<'a> {
    #[must_use]
    pub const fn new(theme: &'a Theme) -> Self {
        Self { theme }
    }

    /// Rows needed to show the whole snippet.
    #[must_use]
    pub fn height() -> u16 {
        u16::try_from(CODE_SAMPLE.lines().count())
            .unwrap_or(u16::MAX)
            .saturating_add(2)
    }
}

impl Widget for CodeSample<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .title(format!(" {CODE_SAMPLE_TITLE} "))
            .style(self.theme.code_style);

        let text: Text = CODE_SAMPLE.lines().map(Line::raw).collect();

        Paragraph::new(text).block(block).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::ui::utils::buffer_to_string;

    #[test]
    fn test_height_fits_snippet() {
        assert_eq!(
            usize::from(CodeSample::height()),
            CODE_SAMPLE.lines().count() + 2
        );
    }

    #[test]
    fn test_renders_federation_config() {
        let theme = Theme::default();
        let area = Rect::new(0, 0, 80, CodeSample::height());
        let mut buf = Buffer::empty(area);

        CodeSample::new(&theme).render(area, &mut buf);

        let rendered = buffer_to_string(&buf);
        assert!(rendered.contains("new ModuleFederationPlugin({"));
        assert!(rendered.contains("import('cartApp/ShoppingCart')"));
    }
}
