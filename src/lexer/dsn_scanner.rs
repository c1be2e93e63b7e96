use super::quote::{strip_directives, QuoteStyle};
use super::token::{Token, TokenKind};
use crate::error::{Error, Result};

/// Scanner for DSN files
///
/// Preprocesses the text (quote directive detection and removal, escaped
/// quote removal, lowercasing) and then splits it on parentheses and
/// whitespace, keeping quoted regions intact inside their atom.
pub struct DsnScanner {
    /// Preprocessed source as character vector
    source: Vec<char>,
    /// Active quote character for this file
    quote: QuoteStyle,
    /// Accumulated tokens
    tokens: Vec<Token>,
    /// Atom currently being built
    atom: String,
    /// Line the current atom started on
    atom_line: usize,
    /// Current position in source
    current: usize,
    /// Current line number (1-indexed)
    line: usize,
}

impl DsnScanner {
    /// Creates a new scanner from raw file text
    pub fn new(text: &str) -> Self {
        let quote = QuoteStyle::detect(text);
        let source = strip_directives(text).to_lowercase();

        DsnScanner {
            source: source.chars().collect(),
            quote,
            tokens: Vec::new(),
            atom: String::new(),
            atom_line: 1,
            current: 0,
            line: 1,
        }
    }

    /// Quote character detected for this file
    pub fn quote(&self) -> QuoteStyle {
        self.quote
    }

    /// Scans all tokens and returns them in file order
    pub fn scan_tokens(&mut self) -> Result<Vec<Token>> {
        let quote = self.quote.as_char();

        while !self.is_at_end() {
            let c = self.advance();

            if c == quote {
                self.scan_quoted(c)?;
            } else if c == '(' || c == ')' {
                self.finish_atom();
                let kind = if c == '(' {
                    TokenKind::LeftParen
                } else {
                    TokenKind::RightParen
                };
                self.tokens.push(Token::new(kind, self.line));
            } else if is_separator(c) {
                self.finish_atom();
                if c == '\n' {
                    self.line += 1;
                }
            } else {
                self.push_char(c);
            }
        }

        self.finish_atom();
        Ok(std::mem::take(&mut self.tokens))
    }

    /// Copy a quoted region verbatim into the current atom.
    /// The opening quote has already been consumed.
    fn scan_quoted(&mut self, quote: char) -> Result<()> {
        let opened_on = self.line;
        self.push_char(quote);

        loop {
            if self.is_at_end() {
                return Err(Error::UnterminatedQuote { line: opened_on });
            }
            let c = self.advance();
            if c == '\n' {
                self.line += 1;
            }
            self.atom.push(c);
            if c == quote {
                return Ok(());
            }
        }
    }

    fn push_char(&mut self, c: char) {
        if self.atom.is_empty() {
            self.atom_line = self.line;
        }
        self.atom.push(c);
    }

    fn finish_atom(&mut self) {
        if !self.atom.is_empty() {
            let text = std::mem::take(&mut self.atom);
            self.tokens.push(Token::atom(text, self.atom_line));
        }
    }

    fn is_at_end(&self) -> bool {
        self.current >= self.source.len()
    }

    fn advance(&mut self) -> char {
        let c = self.source[self.current];
        self.current += 1;
        c
    }
}

/// Whitespace that ends an atom.
///
/// Includes the ASCII file, group, record and unit separators
/// (U+001C..=U+001F), which `char::is_whitespace` leaves out.
fn is_separator(c: char) -> bool {
    c.is_whitespace() || ('\x1c'..='\x1f').contains(&c)
}

/// Tokenize one file's text
pub fn tokenize(text: &str) -> Result<Vec<Token>> {
    DsnScanner::new(text).scan_tokens()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(source: &str) -> Vec<String> {
        tokenize(source)
            .unwrap()
            .iter()
            .map(|t| t.text().to_string())
            .collect()
    }

    #[test]
    fn test_simple_sexpr() {
        let tokens = tokenize("(pcb (structure (layer top)))").unwrap();

        assert_eq!(tokens.len(), 10);
        assert_eq!(tokens[0].kind, TokenKind::LeftParen);
        assert_eq!(tokens[1].kind, TokenKind::Atom("pcb".to_string()));
        assert_eq!(tokens[6].kind, TokenKind::Atom("top".to_string()));
        assert_eq!(tokens[9].kind, TokenKind::RightParen);
    }

    #[test]
    fn test_lowercases_everything() {
        assert_eq!(texts("(PCB (Structure FOO))"), ["(", "pcb", "(", "structure", "foo", ")", ")"]);
    }

    #[test]
    fn test_quoted_region_is_one_atom() {
        assert_eq!(texts(r#"(net "a b(c")"#), ["(", "net", r#""a b(c""#, ")"]);
    }

    #[test]
    fn test_quoted_region_keeps_content_verbatim() {
        assert_eq!(texts(r#"(net "Foo  )Bar")"#), ["(", "net", r#""foo  )bar""#, ")"]);
    }

    #[test]
    fn test_quote_abutting_bare_text() {
        assert_eq!(texts(r#"(pin ab"c d"e f)"#), ["(", "pin", r#"ab"c d"e"#, "f", ")"]);
    }

    #[test]
    fn test_single_quote_directive() {
        let source = "(pcb (parser (string_quote ')) (net 'a b' \"x y\"))";
        assert_eq!(
            texts(source),
            ["(", "pcb", "(", "parser", ")", "(", "net", "'a b'", "\"x", "y\"", ")", ")"]
        );
    }

    #[test]
    fn test_dollar_directive() {
        let mut scanner = DsnScanner::new("(pcb (string_quote $) (net $a (b)$))");
        assert_eq!(scanner.quote(), QuoteStyle::Dollar);
        let tokens = scanner.scan_tokens().unwrap();
        assert_eq!(tokens[4].kind, TokenKind::Atom("$a (b)$".to_string()));
    }

    #[test]
    fn test_escaped_quotes_removed() {
        assert_eq!(texts(r#"(net "a\"b c")"#), ["(", "net", r#""ab c""#, ")"]);
    }

    #[test]
    fn test_unterminated_quote() {
        let err = tokenize("(pcb\n(net \"abc))\n").unwrap_err();
        assert_eq!(err, Error::UnterminatedQuote { line: 2 });
    }

    #[test]
    fn test_line_numbers() {
        let tokens = tokenize("(pcb\n  (net\n \"a\nb\" x))").unwrap();
        assert_eq!(tokens[0].line, 1);
        assert_eq!(tokens[3].line, 2);
        assert_eq!(tokens[4].line, 3);
        assert_eq!(tokens[5].line, 4);
    }

    #[test]
    fn test_ascii_separators_split_atoms() {
        assert_eq!(texts("(net\x1f)"), ["(", "net", ")"]);
        assert_eq!(texts("(pcb\x1cnet\x1dtop\x1e)"), ["(", "pcb", "net", "top", ")"]);
        assert_eq!(texts("(net \"a\x1fb\")"), ["(", "net", "\"a\x1fb\"", ")"]);
    }

    #[test]
    fn test_empty_input() {
        assert!(tokenize("").unwrap().is_empty());
        assert!(tokenize(" \n\t ").unwrap().is_empty());
    }
}
