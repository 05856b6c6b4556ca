//! The character classes a password can be composed from.

static LOWERCASE: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
static UPPERCASE: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
static DIGITS: &[u8] = b"0123456789";
static SPECIAL: &[u8] = b"!@#$%^&*()-_=+[]{}|;:,.<>?";

/// A named set of ASCII characters that can contribute to a password.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharacterClass {
    Lowercase,
    Uppercase,
    Digits,
    Special,
}

impl CharacterClass {
    /// Every character belonging to this class.
    pub fn alphabet(self) -> &'static [u8] {
        match self {
            CharacterClass::Lowercase => LOWERCASE,
            CharacterClass::Uppercase => UPPERCASE,
            CharacterClass::Digits => DIGITS,
            CharacterClass::Special => SPECIAL,
        }
    }

    pub fn contains(self, ch: char) -> bool {
        ch.is_ascii() && self.alphabet().contains(&(ch as u8))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alphabets_are_disjoint() {
        let classes = [
            CharacterClass::Lowercase,
            CharacterClass::Uppercase,
            CharacterClass::Digits,
            CharacterClass::Special,
        ];
        for (i, a) in classes.iter().enumerate() {
            for b in &classes[i + 1..] {
                for &ch in a.alphabet() {
                    assert!(
                        !b.contains(ch as char),
                        "{:?} and {:?} share the character {:?}",
                        a,
                        b,
                        ch as char
                    );
                }
            }
        }
    }

    #[test]
    fn contains_matches_alphabet() {
        assert!(CharacterClass::Lowercase.contains('q'));
        assert!(CharacterClass::Uppercase.contains('Q'));
        assert!(CharacterClass::Digits.contains('7'));
        assert!(CharacterClass::Special.contains('#'));
        assert!(!CharacterClass::Special.contains('q'));
        assert!(!CharacterClass::Digits.contains('é'));
    }
}
