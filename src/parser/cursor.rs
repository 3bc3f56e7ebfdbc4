/// Forward-only cursor over the whitespace-separated tokens of a line.
///
/// The token slice is never mutated; skipping a token only moves the cursor.
#[derive(Debug, Clone)]
pub struct TokenCursor<'a> {
    tokens: &'a [&'a str],
    pos: usize,
}

impl<'a> TokenCursor<'a> {
    /// Create a cursor positioned at the first token.
    pub fn new(tokens: &'a [&'a str]) -> Self {
        TokenCursor { tokens, pos: 0 }
    }

    /// Look at the current token without consuming it.
    #[inline]
    pub fn peek(&self) -> Option<&'a str> {
        self.tokens.get(self.pos).copied()
    }

    /// Consume and return the current token.
    pub fn advance(&mut self) -> Option<&'a str> {
        let token = self.peek()?;
        self.pos += 1;
        Some(token)
    }

    /// Consume the current token only if it equals `keyword`.
    pub fn advance_if(&mut self, keyword: &str) -> bool {
        if self.peek() == Some(keyword) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    /// Consume the current token, or fail with `missing` when the line has
    /// run out of tokens.
    pub fn expect<E>(&mut self, missing: E) -> Result<&'a str, E> {
        self.advance().ok_or(missing)
    }

    /// Consume tokens up to the first occurrence of `stop`.
    ///
    /// The stop token and everything after it are consumed and discarded.
    pub fn take_until(&mut self, stop: &str) -> Vec<&'a str> {
        let mut taken = Vec::new();
        while let Some(token) = self.advance() {
            if token == stop {
                self.pos = self.tokens.len();
                break;
            }
            taken.push(token);
        }
        taken
    }
}
