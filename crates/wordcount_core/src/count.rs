/// Count the words in `text`, where a word is a maximal run of
/// non-whitespace characters.
///
/// Whitespace is whatever `char::is_whitespace` accepts (the Unicode
/// `White_Space` property), so tabs, newlines and separators such as NO-BREAK
/// SPACE delimit words just like plain spaces. Consecutive separators
/// collapse into a single boundary, and leading or trailing whitespace adds
/// nothing: an empty or whitespace-only input counts 0. Total, no side
/// effects.
pub fn count_words(text: &str) -> usize {
    text.split_whitespace().count()
}

#[cfg(test)]
mod tests {
    use super::count_words;

    #[test]
    fn empty_input_counts_zero() {
        assert_eq!(count_words(""), 0);
    }

    #[test]
    fn whitespace_only_counts_zero() {
        assert_eq!(count_words("   "), 0);
        assert_eq!(count_words(" \t\r\n "), 0);
    }

    #[test]
    fn single_word_counts_one() {
        assert_eq!(count_words("hello"), 1);
    }

    #[test]
    fn consecutive_separators_collapse() {
        assert_eq!(count_words("hello world"), 2);
        assert_eq!(count_words("hello   world  "), 2);
        assert_eq!(count_words("\thello\n\nworld"), 2);
    }
}
