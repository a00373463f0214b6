// Dictionary alphabet and word normalization
//
// The dictionary alphabet is the 26 ASCII lowercase letters. Every word that
// enters or queries a dictionary is lowercased first; anything that is not a
// letter of the alphabet afterwards (digits, punctuation, accented letters)
// is skipped and consumes no trie depth. "a1b" therefore behaves like "ab".

/// Number of letters in the dictionary alphabet ('a'..='z').
pub const ALPHABET_SIZE: usize = 26;

/// Return the slot index (0..26) of a lowercase alphabet letter.
///
/// Returns `None` for every character outside `'a'..='z'`, including
/// uppercase letters: callers lowercase before indexing.
#[inline]
pub fn letter_index(c: char) -> Option<usize> {
    if c.is_ascii_lowercase() {
        Some(c as usize - 'a' as usize)
    } else {
        None
    }
}

/// Return the letter stored in the given slot.
///
/// # Panics
///
/// Panics if `index >= ALPHABET_SIZE`.
#[inline]
pub fn letter_at(index: usize) -> char {
    assert!(index < ALPHABET_SIZE, "letter index out of range: {index}");
    (b'a' + index as u8) as char
}

/// Iterate over the alphabet slots of a word after lowercasing it.
///
/// Characters that do not lowercase to `'a'..='z'` are skipped.
pub fn letter_indices(word: &str) -> impl Iterator<Item = usize> + '_ {
    word.chars()
        .flat_map(char::to_lowercase)
        .filter_map(letter_index)
}

/// Normalize a word to the form stored in the dictionary: lowercase letters
/// of the alphabet only.
///
/// The result may be empty when the input has no letters at all.
pub fn normalize_word(word: &str) -> String {
    letter_indices(word).map(letter_at).collect()
}
