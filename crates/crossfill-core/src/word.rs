//! Candidate words and word lists.

use std::{collections::BTreeSet, str::FromStr};

/// Errors returned when a string cannot be used as a [`Word`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum WordError {
    /// The word has no letters.
    #[display("word is empty")]
    Empty,
    /// The word contains a character outside ASCII.
    #[display("word contains non-ASCII character {ch:?}")]
    NonAscii {
        /// The offending character.
        ch: char,
    },
    /// The word contains whitespace or a control character.
    #[display("word contains invalid character {ch:?}")]
    InvalidCharacter {
        /// The offending character.
        ch: char,
    },
}

/// A candidate word for a slot.
///
/// Words are normalized to ASCII uppercase, so letter offsets and character
/// offsets coincide and [`Word::letter`] is a constant-time lookup.
/// Ordering is lexicographic.
///
/// # Examples
///
/// ```
/// use crossfill_core::Word;
///
/// let word = Word::new("cat")?;
/// assert_eq!(word.as_str(), "CAT");
/// assert_eq!(word.length(), 3);
/// assert_eq!(word.letter(1), 'A');
/// # Ok::<(), crossfill_core::WordError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, derive_more::Display)]
pub struct Word(String);

impl Word {
    /// Creates a word, normalizing it to uppercase.
    ///
    /// # Errors
    ///
    /// Returns [`WordError`] if the input is empty or contains anything other
    /// than printable ASCII characters.
    pub fn new(s: impl AsRef<str>) -> Result<Self, WordError> {
        let s = s.as_ref();
        if s.is_empty() {
            return Err(WordError::Empty);
        }
        if let Some(ch) = s.chars().find(|ch| !ch.is_ascii_graphic()) {
            return Err(if ch.is_ascii() {
                WordError::InvalidCharacter { ch }
            } else {
                WordError::NonAscii { ch }
            });
        }
        Ok(Self(s.to_ascii_uppercase()))
    }

    /// Returns the word as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the number of letters.
    #[must_use]
    pub fn length(&self) -> usize {
        self.0.len()
    }

    /// Returns the letter at offset `i`.
    ///
    /// # Panics
    ///
    /// Panics if `i` is not less than the word length.
    #[must_use]
    pub fn letter(&self, i: usize) -> char {
        char::from(self.0.as_bytes()[i])
    }

    /// Returns the letter at offset `i`, or `None` past the end of the word.
    #[must_use]
    pub fn letter_at(&self, i: usize) -> Option<char> {
        self.0.as_bytes().get(i).copied().map(char::from)
    }
}

impl FromStr for Word {
    type Err = WordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<&str> for Word {
    type Error = WordError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl AsRef<str> for Word {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Errors returned when parsing a word list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum WordListError {
    /// A line could not be parsed as a word.
    #[display("invalid word on line {line}: {source}")]
    InvalidWord {
        /// 1-based line number.
        line: usize,
        /// The underlying word error.
        source: WordError,
    },
    /// The list contains no words.
    #[display("word list is empty")]
    Empty,
}

/// A deduplicated, lexicographically ordered list of candidate words.
///
/// The textual format is one word per line. Surrounding whitespace is trimmed
/// and blank lines are skipped.
///
/// # Examples
///
/// ```
/// use crossfill_core::WordList;
///
/// let words: WordList = "dog\ncat\n\nDOG\n".parse()?;
/// assert_eq!(words.len(), 2);
/// let all: Vec<_> = words.iter().map(|w| w.as_str()).collect();
/// assert_eq!(all, ["CAT", "DOG"]);
/// # Ok::<(), crossfill_core::WordListError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordList {
    words: BTreeSet<Word>,
}

impl WordList {
    /// Creates an empty word list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a word. Returns `true` if it was not already present.
    pub fn insert(&mut self, word: Word) -> bool {
        self.words.insert(word)
    }

    /// Returns `true` if the list contains `word`.
    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.words.contains(word)
    }

    /// Returns the number of distinct words.
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns `true` if the list has no words.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Returns an iterator over the words in lexicographic order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &Word> {
        self.words.iter()
    }

    /// Returns the underlying ordered set.
    #[must_use]
    pub fn as_set(&self) -> &BTreeSet<Word> {
        &self.words
    }
}

impl FromIterator<Word> for WordList {
    fn from_iter<T: IntoIterator<Item = Word>>(iter: T) -> Self {
        Self {
            words: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a WordList {
    type Item = &'a Word;
    type IntoIter = std::collections::btree_set::Iter<'a, Word>;

    fn into_iter(self) -> Self::IntoIter {
        self.words.iter()
    }
}

impl FromStr for WordList {
    type Err = WordListError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut words = BTreeSet::new();
        for (i, line) in s.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            let word =
                Word::new(line).map_err(|source| WordListError::InvalidWord { line: i + 1, source })?;
            words.insert(word);
        }
        if words.is_empty() {
            return Err(WordListError::Empty);
        }
        Ok(Self { words })
    }
}
