//! Letter Boxed puzzle
//!
//! Four sides of letters. A validated `Puzzle` guarantees every letter is an
//! uppercase ASCII letter that appears on exactly one side.

use super::LetterSet;
use std::fmt;
use std::str::FromStr;

/// Number of sides on a Letter Boxed square
pub const SIDE_COUNT: usize = 4;

/// A validated, immutable Letter Boxed puzzle
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Puzzle {
    sides: Vec<String>,
    side_sets: [LetterSet; SIDE_COUNT],
    letters: LetterSet,
    /// Side index for each letter A..Z
    side_of: [Option<u8>; 26],
}

/// Error type for invalid puzzles
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PuzzleError {
    WrongSideCount(usize),
    EmptySide(usize),
    InvalidCharacter { side: usize, ch: char },
    DuplicateLetter(char),
}

impl fmt::Display for PuzzleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WrongSideCount(n) => {
                write!(f, "Puzzle must have exactly {SIDE_COUNT} sides, got {n}")
            }
            Self::EmptySide(i) => write!(f, "Side {} must have at least one letter", i + 1),
            Self::InvalidCharacter { side, ch } => write!(
                f,
                "Side {} contains '{ch}'; sides must only contain letters (A-Z)",
                side + 1
            ),
            Self::DuplicateLetter(ch) => write!(
                f,
                "Letter '{ch}' appears more than once; letters must be unique across the sides"
            ),
        }
    }
}

impl std::error::Error for PuzzleError {}

impl Puzzle {
    /// Create a puzzle from its four sides
    ///
    /// Letters are normalized to uppercase.
    ///
    /// # Errors
    /// Returns `PuzzleError` if:
    /// - There are not exactly four sides
    /// - A side is empty
    /// - A side contains anything other than A-Z
    /// - A letter appears more than once across the puzzle
    ///
    /// # Examples
    /// ```
    /// use letter_boxed::core::Puzzle;
    ///
    /// let puzzle = Puzzle::new(&["lei", "xys", "cuv", "kot"]).unwrap();
    /// assert_eq!(puzzle.letters().len(), 12);
    ///
    /// assert!(Puzzle::new(&["LEI", "XYS", "CUV"]).is_err());
    /// assert!(Puzzle::new(&["LEI", "XYS", "CUV", "KOL"]).is_err());
    /// ```
    pub fn new<S: AsRef<str>>(sides: &[S]) -> Result<Self, PuzzleError> {
        if sides.len() != SIDE_COUNT {
            return Err(PuzzleError::WrongSideCount(sides.len()));
        }

        let sides: Vec<String> = sides
            .iter()
            .map(|side| side.as_ref().trim().to_uppercase())
            .collect();

        let mut side_sets = [LetterSet::EMPTY; SIDE_COUNT];
        let mut letters = LetterSet::EMPTY;
        let mut side_of = [None; 26];

        for (index, side) in sides.iter().enumerate() {
            if side.is_empty() {
                return Err(PuzzleError::EmptySide(index));
            }

            for ch in side.chars() {
                if !ch.is_ascii_uppercase() {
                    return Err(PuzzleError::InvalidCharacter { side: index, ch });
                }

                let letter = ch as u8;
                if letters.contains(letter) {
                    return Err(PuzzleError::DuplicateLetter(ch));
                }

                letters.insert(letter);
                side_sets[index].insert(letter);
                side_of[usize::from(letter - b'A')] = Some(index as u8);
            }
        }

        Ok(Self {
            sides,
            side_sets,
            letters,
            side_of,
        })
    }

    /// The sides as uppercase strings, in input order
    #[must_use]
    pub fn sides(&self) -> &[String] {
        &self.sides
    }

    /// Letters of a single side
    ///
    /// # Panics
    /// Panics if `index >= 4`
    #[must_use]
    pub const fn side_letters(&self, index: usize) -> LetterSet {
        self.side_sets[index]
    }

    /// All letters in the puzzle: the target a solution must cover
    #[inline]
    #[must_use]
    pub const fn letters(&self) -> LetterSet {
        self.letters
    }

    /// Index of the side holding `letter`, if it is in the puzzle
    #[inline]
    #[must_use]
    pub fn side_of(&self, letter: u8) -> Option<usize> {
        if !letter.is_ascii_uppercase() {
            return None;
        }
        self.side_of[usize::from(letter - b'A')].map(usize::from)
    }

    /// Whether `second` may directly follow `first` inside a word
    ///
    /// Two letters from the same side may never be adjacent, which also rules
    /// out doubled letters. Letters outside the puzzle are not judged here.
    #[inline]
    #[must_use]
    pub fn allows_pair(&self, first: u8, second: u8) -> bool {
        match (self.side_of(first), self.side_of(second)) {
            (Some(a), Some(b)) => a != b,
            _ => true,
        }
    }
}

impl FromStr for Puzzle {
    type Err = PuzzleError;

    /// Parse sides separated by whitespace, commas or `|`, e.g. `"LEI XYS CUV KOT"`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let sides: Vec<&str> = s
            .split(|c: char| c.is_whitespace() || c == ',' || c == '|')
            .filter(|part| !part.is_empty())
            .collect();
        Self::new(&sides)
    }
}

impl fmt::Display for Puzzle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.sides.join(" | "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn puzzle_creation_valid() {
        let puzzle = Puzzle::new(&["LEI", "XYS", "CUV", "KOT"]).unwrap();
        assert_eq!(puzzle.sides(), &["LEI", "XYS", "CUV", "KOT"]);
        assert_eq!(puzzle.letters(), LetterSet::from_ascii(b"LEIXYSCUVKOT"));
        assert_eq!(puzzle.side_letters(2), LetterSet::from_ascii(b"CUV"));
    }

    #[test]
    fn puzzle_creation_normalizes_case() {
        let puzzle = Puzzle::new(&["lei", "Xys", "cuV", " kot "]).unwrap();
        assert_eq!(puzzle.sides(), &["LEI", "XYS", "CUV", "KOT"]);
    }

    #[test]
    fn puzzle_sides_may_differ_in_length() {
        let puzzle = Puzzle::new(&["AB", "C", "DEFG", "H"]).unwrap();
        assert_eq!(puzzle.letters().len(), 8);
    }

    #[test]
    fn puzzle_wrong_side_count() {
        assert_eq!(
            Puzzle::new(&["LEI", "XYS", "CUV"]),
            Err(PuzzleError::WrongSideCount(3))
        );
        assert_eq!(
            Puzzle::new(&["LE", "XY", "CU", "KO", "TS"]),
            Err(PuzzleError::WrongSideCount(5))
        );
    }

    #[test]
    fn puzzle_empty_side() {
        assert_eq!(
            Puzzle::new(&["LEI", "", "CUV", "KOT"]),
            Err(PuzzleError::EmptySide(1))
        );
    }

    #[test]
    fn puzzle_invalid_character() {
        assert_eq!(
            Puzzle::new(&["LEI", "XYS", "C2V", "KOT"]),
            Err(PuzzleError::InvalidCharacter { side: 2, ch: '2' })
        );
    }

    #[test]
    fn puzzle_duplicate_letter() {
        assert_eq!(
            Puzzle::new(&["LEI", "XYS", "CUV", "KOL"]),
            Err(PuzzleError::DuplicateLetter('L'))
        );
        assert_eq!(
            Puzzle::new(&["LEE", "XYS", "CUV", "KOT"]),
            Err(PuzzleError::DuplicateLetter('E'))
        );
    }

    #[test]
    fn side_of_letter() {
        let puzzle = Puzzle::new(&["LEI", "XYS", "CUV", "KOT"]).unwrap();
        assert_eq!(puzzle.side_of(b'L'), Some(0));
        assert_eq!(puzzle.side_of(b'S'), Some(1));
        assert_eq!(puzzle.side_of(b'T'), Some(3));
        assert_eq!(puzzle.side_of(b'A'), None);
        assert_eq!(puzzle.side_of(b'l'), None);
    }

    #[test]
    fn allows_pair_rejects_same_side() {
        let puzzle = Puzzle::new(&["LEI", "XYS", "CUV", "KOT"]).unwrap();
        assert!(!puzzle.allows_pair(b'L', b'E'));
        assert!(!puzzle.allows_pair(b'E', b'L'));
        assert!(!puzzle.allows_pair(b'T', b'O'));
        assert!(puzzle.allows_pair(b'L', b'O'));
        assert!(puzzle.allows_pair(b'K', b'I'));
    }

    #[test]
    fn allows_pair_rejects_doubled_letter() {
        let puzzle = Puzzle::new(&["LEI", "XYS", "CUV", "KOT"]).unwrap();
        assert!(!puzzle.allows_pair(b'L', b'L'));
    }

    #[test]
    fn parse_from_str() {
        let puzzle: Puzzle = "lei xys cuv kot".parse().unwrap();
        assert_eq!(puzzle.sides(), &["LEI", "XYS", "CUV", "KOT"]);

        let puzzle: Puzzle = "WNT,LVE | KYO,ARH".parse().unwrap();
        assert_eq!(puzzle.sides(), &["WNT", "LVE", "KYO", "ARH"]);

        assert!("LEI XYS".parse::<Puzzle>().is_err());
    }

    #[test]
    fn puzzle_display() {
        let puzzle = Puzzle::new(&["LEI", "XYS", "CUV", "KOT"]).unwrap();
        assert_eq!(puzzle.to_string(), "LEI | XYS | CUV | KOT");
    }
}
