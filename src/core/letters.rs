//! Letter set representation
//!
//! A `LetterSet` is a 26-bit mask over the uppercase ASCII alphabet. Union,
//! difference and subset checks are single integer operations, and iteration
//! always runs in alphabetical order regardless of insertion order.

use std::fmt;

/// A set of uppercase ASCII letters stored as a bitmask
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct LetterSet(u32);

impl LetterSet {
    /// The empty set
    pub const EMPTY: Self = Self(0);

    /// Build a set from uppercase ASCII bytes, ignoring anything outside `A..=Z`
    ///
    /// # Examples
    /// ```
    /// use letter_boxed::core::LetterSet;
    ///
    /// let set = LetterSet::from_ascii(b"LEAK");
    /// assert_eq!(set.len(), 4);
    /// assert!(set.contains(b'K'));
    /// ```
    #[must_use]
    pub const fn from_ascii(bytes: &[u8]) -> Self {
        let mut bits = 0u32;
        let mut i = 0;
        while i < bytes.len() {
            let b = bytes[i];
            if b.is_ascii_uppercase() {
                bits |= 1 << (b - b'A');
            }
            i += 1;
        }
        Self(bits)
    }

    /// Raw bitmask (bit 0 = `A`)
    #[inline]
    #[must_use]
    pub const fn bits(self) -> u32 {
        self.0
    }

    /// Add a letter; non-uppercase bytes are ignored
    #[inline]
    pub fn insert(&mut self, letter: u8) {
        if letter.is_ascii_uppercase() {
            self.0 |= 1 << (letter - b'A');
        }
    }

    #[inline]
    #[must_use]
    pub const fn contains(self, letter: u8) -> bool {
        letter.is_ascii_uppercase() && self.0 & (1 << (letter - b'A')) != 0
    }

    #[inline]
    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    /// Letters in `self` that are not in `other`
    #[inline]
    #[must_use]
    pub const fn difference(self, other: Self) -> Self {
        Self(self.0 & !other.0)
    }

    #[inline]
    #[must_use]
    pub const fn is_subset(self, other: Self) -> bool {
        self.0 & !other.0 == 0
    }

    #[inline]
    #[must_use]
    pub const fn is_superset(self, other: Self) -> bool {
        other.is_subset(self)
    }

    #[inline]
    #[must_use]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Iterate letters in alphabetical order
    pub fn iter(self) -> impl Iterator<Item = u8> {
        (0..26u8)
            .filter(move |&i| self.0 & (1 << i) != 0)
            .map(|i| b'A' + i)
    }
}

impl FromIterator<u8> for LetterSet {
    fn from_iter<I: IntoIterator<Item = u8>>(iter: I) -> Self {
        let mut set = Self::EMPTY;
        for letter in iter {
            set.insert(letter);
        }
        set
    }
}

impl fmt::Display for LetterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for letter in self.iter() {
            write!(f, "{}", char::from(letter))?;
        }
        Ok(())
    }
}
