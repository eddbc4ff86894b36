//! Two-phase text reader: whitespace tokens for the header, then whole lines
//! for the grid rows.

/// Token separators: Unicode whitespace minus the no-break spaces and NEL,
/// plus the ASCII information separators U+001C..=U+001F.
pub fn is_separator(c: char) -> bool {
    match c {
        '\u{1c}'..='\u{1f}' => true,
        '\u{85}' | '\u{a0}' | '\u{2007}' | '\u{202f}' => false,
        _ => c.is_whitespace(),
    }
}

/// Forward-only cursor over a document.
///
/// Line terminators are `\n`, `\r\n` and a lone `\r`. Tokens are maximal runs
/// of non-separator characters; reading a token skips any separators before
/// it, line breaks included.
#[derive(Debug)]
pub struct TextCursor<'a> {
    text: &'a str,
    pos: usize,
}

impl<'a> TextCursor<'a> {
    pub const fn new(text: &'a str) -> Self {
        Self { text, pos: 0 }
    }

    fn remaining(&self) -> &'a str {
        &self.text[self.pos..]
    }

    /// Consume the next separator-delimited token.
    ///
    /// Leaves the cursor in place and returns `None` when only separators are left.
    pub fn next_token(&mut self) -> Option<&'a str> {
        let rest = self.remaining();
        let start = rest.find(|c: char| !is_separator(c))?;
        let token = &rest[start..];
        let len = token.find(is_separator).unwrap_or(token.len());
        self.pos += start + len;
        Some(&token[..len])
    }

    /// Consume the rest of the current line and its terminator.
    ///
    /// The returned slice excludes the terminator. At end of input this is `""`.
    pub fn rest_of_line(&mut self) -> &'a str {
        let rest = self.remaining();
        if let Some(end) = rest.find(['\n', '\r']) {
            let terminator = if rest[end..].starts_with("\r\n") { 2 } else { 1 };
            self.pos += end + terminator;
            &rest[..end]
        } else {
            self.pos = self.text.len();
            rest
        }
    }

    /// Consume the next full line, or `None` once the input is exhausted.
    pub fn next_line(&mut self) -> Option<&'a str> {
        if self.pos >= self.text.len() {
            return None;
        }
        Some(self.rest_of_line())
    }

    /// Whether any non-separator character is left.
    pub fn has_token(&self) -> bool {
        self.remaining().chars().any(|c| !is_separator(c))
    }
}
