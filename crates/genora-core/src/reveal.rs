//! Typing-effect reveal of long text results.
//!
//! Purely cosmetic: front ends step through the prefixes of the final text
//! on a timer. Dropping the iterator cancels the reveal.

/// Lazy sequence of prefixes of `text`, from empty to complete.
///
/// Prefixes always end on a `char` boundary.
///
/// ```rust
/// use genora_core::Reveal;
///
/// let frames: Vec<&str> = Reveal::new("héy").collect();
/// assert_eq!(frames, vec!["", "h", "hé", "héy"]);
/// ```
#[derive(Debug, Clone)]
pub struct Reveal<'a> {
    text: &'a str,
    /// Byte offset of the next prefix end, `None` once exhausted.
    next_end: Option<usize>,
}

impl<'a> Reveal<'a> {
    pub fn new(text: &'a str) -> Self {
        Self {
            text,
            next_end: Some(0),
        }
    }

    /// Start over from the empty prefix.
    pub fn restart(&mut self) {
        self.next_end = Some(0);
    }

    /// The full text being revealed.
    pub fn text(&self) -> &'a str {
        self.text
    }
}

impl<'a> Iterator for Reveal<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        let end = self.next_end?;
        let prefix = &self.text[..end];

        self.next_end = self.text[end..]
            .chars()
            .next()
            .map(|c| end + c.len_utf8());

        Some(prefix)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.next_end {
            Some(end) => {
                let remaining = self.text[end..].chars().count() + 1;
                (remaining, Some(remaining))
            }
            None => (0, Some(0)),
        }
    }
}

impl ExactSizeIterator for Reveal<'_> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reveal_prefixes() {
        let frames: Vec<&str> = Reveal::new("abc").collect();
        assert_eq!(frames, vec!["", "a", "ab", "abc"]);
    }

    #[test]
    fn test_reveal_empty() {
        let frames: Vec<&str> = Reveal::new("").collect();
        assert_eq!(frames, vec![""]);
    }

    #[test]
    fn test_reveal_restart() {
        let mut reveal = Reveal::new("ab");
        assert_eq!(reveal.len(), 3);
        reveal.next();
        reveal.next();
        assert_eq!(reveal.len(), 1);
        reveal.restart();
        assert_eq!(reveal.next(), Some(""));
    }

    #[test]
    fn test_reveal_multibyte() {
        let last = Reveal::new("日本").last();
        assert_eq!(last, Some("日本"));
        assert_eq!(Reveal::new("日本").count(), 3);
    }
}
