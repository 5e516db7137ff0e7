/// Split a suggestion into the part matching what was typed and the rest
///
/// The split is positional: the first `typed.chars().count()` characters of
/// `phrase` are emphasized whether or not they equal the typed text.
pub fn split_emphasis<'a>(phrase: &'a str, typed: &str) -> (&'a str, &'a str) {
    let typed_len = typed.chars().count();
    let split_at = phrase
        .char_indices()
        .nth(typed_len)
        .map(|(i, _)| i)
        .unwrap_or(phrase.len());
    phrase.split_at(split_at)
}
