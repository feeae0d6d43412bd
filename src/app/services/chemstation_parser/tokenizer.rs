//! Line tokenization and routing
//!
//! Every input line is split on the configured delimiter with each token
//! trimmed. Routing only depends on whether the header block has ended.

/// One delimiter-split input line
#[derive(Debug, Clone, PartialEq)]
pub struct RawLine {
    number: usize,
    tokens: Vec<String>,
}

impl RawLine {
    /// Split a line into trimmed tokens
    ///
    /// `number` is the 1-based position of the line in the file.
    pub fn split(line: &str, delimiter: char, number: usize) -> Self {
        let tokens = line
            .split(delimiter)
            .map(|token| token.trim().to_string())
            .collect();
        Self { number, tokens }
    }

    /// 1-based line number
    pub fn number(&self) -> usize {
        self.number
    }

    /// True when every token is empty
    pub fn is_blank(&self) -> bool {
        self.tokens.iter().all(|token| token.is_empty())
    }

    pub fn first(&self) -> &str {
        self.get(0).unwrap_or("")
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.tokens.get(index).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }
}

/// Parser a line is handed to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineRoute {
    Header,
    Body,
}

/// Choose the parser for the next line
pub fn classify(header_ended: bool) -> LineRoute {
    if header_ended {
        LineRoute::Body
    } else {
        LineRoute::Header
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_trims_tokens() {
        let line = RawLine::split(" 1 , Analyte A ,2.50 ", ',', 3);
        assert_eq!(line.tokens(), &["1", "Analyte A", "2.50"]);
        assert_eq!(line.number(), 3);
        assert_eq!(line.first(), "1");
        assert_eq!(line.get(5), None);
    }

    #[test]
    fn test_blank_detection() {
        assert!(RawLine::split("", ',', 1).is_blank());
        assert!(RawLine::split("   ", ',', 1).is_blank());
        assert!(RawLine::split(" , ,\t,", ',', 1).is_blank());
        assert!(!RawLine::split(",,x,", ',', 1).is_blank());
    }

    #[test]
    fn test_other_delimiters() {
        let line = RawLine::split("a;b ; c", ';', 1);
        assert_eq!(line.tokens(), &["a", "b", "c"]);

        let line = RawLine::split("a\tb,c", '\t', 1);
        assert_eq!(line.tokens(), &["a", "b,c"]);
    }

    #[test]
    fn test_classify() {
        assert_eq!(classify(false), LineRoute::Header);
        assert_eq!(classify(true), LineRoute::Body);
    }
}
