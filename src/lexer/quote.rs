//! String quote directives
//!
//! A DSN file may declare its quote character with `(string_quote ")`,
//! `(string_quote ')` or `(string_quote $)`. The directive is metadata and is
//! stripped before tokenizing.

/// Literal directive text for each supported quote character
const DIRECTIVES: [(&str, char); 3] = [
    ("(string_quote \")", '"'),
    ("(string_quote ')", '\''),
    ("(string_quote $)", '$'),
];

/// Escaped quote sequence removed from every file.
///
/// Always the double quote, whichever quote character the file declares.
const ESCAPED_QUOTE: &str = "\\\"";

/// The quote character in effect for one file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QuoteStyle {
    /// `"`
    #[default]
    Double,
    /// `'`
    Single,
    /// `$`
    Dollar,
}

impl QuoteStyle {
    /// Detect the quote character declared by `text`.
    ///
    /// When several directives are present the last one in the order
    /// `"`, `'`, `$` wins. Matching is case-sensitive.
    pub fn detect(text: &str) -> Self {
        DIRECTIVES
            .iter()
            .filter(|(directive, _)| text.contains(directive))
            .map(|(_, c)| Self::from_char(*c))
            .last()
            .flatten()
            .unwrap_or_default()
    }

    /// Map a quote character to its style
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '"' => Some(QuoteStyle::Double),
            '\'' => Some(QuoteStyle::Single),
            '$' => Some(QuoteStyle::Dollar),
            _ => None,
        }
    }

    /// The delimiter character
    pub fn as_char(self) -> char {
        match self {
            QuoteStyle::Double => '"',
            QuoteStyle::Single => '\'',
            QuoteStyle::Dollar => '$',
        }
    }
}

/// Remove all quote directives and escaped double quotes from `text`.
pub fn strip_directives(text: &str) -> String {
    let mut out = text.to_string();
    for (directive, _) in DIRECTIVES.iter() {
        out = out.replace(directive, "");
    }
    out.replace(ESCAPED_QUOTE, "")
}
