//! Brute-force counting of words with a fixed first and last letter.

use thiserror::Error;

/// Upper bound on the number of words a single count may enumerate.
pub const MAX_ENUMERATION: u64 = 10_000_000;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SequenceError {
    #[error("alphabet must not be empty")]
    EmptyAlphabet,
    #[error("alphabet contains '{0}' more than once")]
    DuplicateLetter(char),
    #[error("length must be at least 2, got {0}")]
    TooShort(usize),
    #[error("letter '{0}' is not in the alphabet")]
    LetterNotInAlphabet(char),
    #[error("enumeration exceeds {MAX_ENUMERATION} words")]
    TooLarge,
}

/// Count words of `length` letters over `alphabet` that start with `first`
/// and end with `last`, by enumerating every word.
pub fn count_sequences(
    alphabet: &str,
    length: usize,
    first: char,
    last: char,
) -> Result<u64, SequenceError> {
    let letters = letters(alphabet)?;
    if length < 2 {
        return Err(SequenceError::TooShort(length));
    }
    for letter in [first, last] {
        if !letters.contains(&letter) {
            return Err(SequenceError::LetterNotInAlphabet(letter));
        }
    }
    let exponent = u32::try_from(length).map_err(|_| SequenceError::TooLarge)?;
    let total = (letters.len() as u64)
        .checked_pow(exponent)
        .filter(|total| *total <= MAX_ENUMERATION)
        .ok_or(SequenceError::TooLarge)?;

    // Odometer over letter indices; the rightmost position turns fastest.
    let mut indices = vec![0usize; length];
    let mut count = 0;
    for _ in 0..total {
        if letters[indices[0]] == first && letters[indices[length - 1]] == last {
            count += 1;
        }
        for position in indices.iter_mut().rev() {
            *position += 1;
            if *position < letters.len() {
                break;
            }
            *position = 0;
        }
    }
    Ok(count)
}

fn letters(alphabet: &str) -> Result<Vec<char>, SequenceError> {
    let mut letters: Vec<char> = Vec::new();
    for letter in alphabet.chars() {
        if letters.contains(&letter) {
            return Err(SequenceError::DuplicateLetter(letter));
        }
        letters.push(letter);
    }
    if letters.is_empty() {
        return Err(SequenceError::EmptyAlphabet);
    }
    Ok(letters)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_six_letter_words_from_p_to_k() {
        assert_eq!(count_sequences("KATEP", 6, 'P', 'K'), Ok(625));
    }

    #[test]
    fn two_letter_words_have_one_match() {
        assert_eq!(count_sequences("AB", 2, 'A', 'B'), Ok(1));
    }

    #[test]
    fn same_first_and_last_letter() {
        assert_eq!(count_sequences("XYZ", 3, 'X', 'X'), Ok(3));
    }

    #[test]
    fn matches_closed_form_for_small_inputs() {
        for length in 2..=6 {
            let expected = 4u64.pow(length as u32 - 2);
            assert_eq!(count_sequences("ABCD", length, 'C', 'A'), Ok(expected));
        }
    }

    #[test]
    fn rejects_invalid_inputs() {
        assert_eq!(count_sequences("", 3, 'A', 'A'), Err(SequenceError::EmptyAlphabet));
        assert_eq!(
            count_sequences("ABA", 3, 'A', 'B'),
            Err(SequenceError::DuplicateLetter('A'))
        );
        assert_eq!(count_sequences("AB", 1, 'A', 'B'), Err(SequenceError::TooShort(1)));
        assert_eq!(
            count_sequences("AB", 3, 'A', 'Q'),
            Err(SequenceError::LetterNotInAlphabet('Q'))
        );
        assert_eq!(count_sequences("ABCDEFGHIJ", 8, 'A', 'B'), Err(SequenceError::TooLarge));
    }
}
