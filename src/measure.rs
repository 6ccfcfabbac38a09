use unicode_width::UnicodeWidthStr;

/// Box geometry for the ASCII renderer, in terminal columns.
pub struct TextMetrics {
    /// Width the header rule is padded to.
    pub header_width: usize,
    /// Width of the footer rule.
    pub footer_width: usize,
}

impl Default for TextMetrics {
    fn default() -> Self {
        Self {
            header_width: 30,
            footer_width: 40,
        }
    }
}

impl TextMetrics {
    pub fn text_width(&self, text: &str) -> usize {
        UnicodeWidthStr::width(text)
    }

    /// Number of rule characters needed after a header label.
    pub fn header_fill(&self, label: &str) -> usize {
        self.header_width.saturating_sub(self.text_width(label))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascii_width() {
        let m = TextMetrics::default();
        assert_eq!(m.text_width("users"), 5);
    }

    #[test]
    fn test_unicode_width() {
        let m = TextMetrics::default();
        // 全角文字は幅2
        assert_eq!(m.text_width("ユーザー"), 8);
    }

    #[test]
    fn test_header_fill() {
        let m = TextMetrics::default();
        assert_eq!(m.header_fill("users"), 25);
        assert_eq!(m.header_fill(&"x".repeat(40)), 0);
    }
}
