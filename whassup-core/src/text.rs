//! Message body filtering.

use std::borrow::Cow;
use std::ops::RangeInclusive;

/// The BMP "Private Use Area" block. WhatsApp stores its own emoji glyphs here.
const PRIVATE_USE_AREA: RangeInclusive<char> = '\u{E000}'..='\u{F8FF}';

pub fn is_private_use(c: char) -> bool {
    PRIVATE_USE_AREA.contains(&c)
}

/// Removes every Private Use Area codepoint, keeping all others in order.
/// Borrows the input when nothing needs removing.
pub fn filter_private_use(text: &str) -> Cow<'_, str> {
    if text.chars().any(is_private_use) {
        Cow::Owned(text.chars().filter(|c| !is_private_use(*c)).collect())
    } else {
        Cow::Borrowed(text)
    }
}
