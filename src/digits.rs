use std::borrow::Cow;

/// Map a Persian (U+06F0..) or Arabic-Indic (U+0660..) digit to its Latin form.
fn latin_digit(c: char) -> Option<char> {
    let offset = match c {
        '\u{06F0}'..='\u{06F9}' => c as u32 - 0x06F0,
        '\u{0660}'..='\u{0669}' => c as u32 - 0x0660,
        _ => return None,
    };
    char::from_digit(offset, 10)
}

/// Replace every Persian/Arabic-Indic digit with its Latin equivalent.
///
/// Borrows the input unchanged when there is nothing to replace.
pub fn normalize_digits(text: &str) -> Cow<'_, str> {
    if !text.chars().any(|c| latin_digit(c).is_some()) {
        return Cow::Borrowed(text);
    }
    Cow::Owned(text.chars().map(|c| latin_digit(c).unwrap_or(c)).collect())
}
