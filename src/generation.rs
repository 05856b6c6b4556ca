//! Utilities for generating passwords.

use rand::seq::SliceRandom;
use rand::{CryptoRng, Rng};

use crate::charset::CharacterClass;
use crate::{InvalidConfigError, InvalidConfigRepr, Password};

/// Composition rules for a generated password.
///
/// Lowercase letters are always part of the alphabet; the other classes are
/// opt-in. Every enabled optional class is guaranteed at least one character
/// in the result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationConfig {
    pub length: usize,
    pub include_upper: bool,
    pub include_digits: bool,
    pub include_special: bool,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        GenerationConfig {
            length: 12,
            include_upper: true,
            include_digits: true,
            include_special: true,
        }
    }
}

impl GenerationConfig {
    /// The optional classes which are enabled, and therefore must each have
    /// at least one character in the result.
    fn required_classes(&self) -> Vec<CharacterClass> {
        let mut classes = Vec::new();
        if self.include_upper {
            classes.push(CharacterClass::Uppercase);
        }
        if self.include_digits {
            classes.push(CharacterClass::Digits);
        }
        if self.include_special {
            classes.push(CharacterClass::Special);
        }
        classes
    }

    /// The union of the alphabets of all enabled classes. Never empty, since
    /// lowercase is always included.
    fn alphabet(&self) -> Vec<u8> {
        let mut alphabet = Vec::new();
        alphabet.extend_from_slice(CharacterClass::Lowercase.alphabet());
        for class in self.required_classes() {
            alphabet.extend_from_slice(class.alphabet());
        }
        alphabet
    }

    fn validate(&self) -> Result<(), InvalidConfigError> {
        if self.length == 0 {
            return Err(InvalidConfigRepr::ZeroLength.into());
        }
        let required = self.required_classes().len();
        if self.length < required {
            return Err(InvalidConfigRepr::LengthTooShort {
                length: self.length,
                required,
            }
            .into());
        }
        Ok(())
    }
}

/// Generate a password of exactly `config.length` characters satisfying
/// `config`'s composition rules.
///
/// These are ugly, hard to remember passwords, but perfect if you're just
/// copying them into a credential store.
///
/// The result is built in three steps: draw every character uniformly from
/// the enabled alphabet, overwrite one reserved slot per enabled optional
/// class with a member of that class, then shuffle so the reserved slots
/// don't end up at predictable positions. The config is validated before any
/// randomness is consumed.
///
/// Note that `rand`'s underlying uniform sampler does the right thing to
/// prevent bias: if it can't generate a value that is within the given range
/// (or really, a multiple of the range), it re-samples.
pub fn generate<R>(config: &GenerationConfig, rng: &mut R) -> Result<Password, InvalidConfigError>
where
    R: Rng + CryptoRng,
{
    config.validate()?;
    let alphabet = config.alphabet();
    let mut password = draw_base(rng, &alphabet, config.length);
    patch_required(rng, &mut password, &config.required_classes());
    password.shuffle(rng);
    Ok(Password::from(
        password.iter().map(|&b| b as char).collect::<String>(),
    ))
}

/// Draw `len` characters independently and uniformly from `alphabet`.
fn draw_base<R>(rng: &mut R, alphabet: &[u8], len: usize) -> Vec<u8>
where
    R: Rng + CryptoRng,
{
    let mut base = Vec::with_capacity(len);
    for _ in 0..len {
        // The alphabet always contains at least the lowercase letters.
        base.push(*alphabet.choose(rng).unwrap());
    }
    base
}

/// Overwrite slot `i` of `password` with a random member of `classes[i]`, so
/// every required class ends up represented. The slots are distinct, so a
/// later class never clobbers an earlier one; `validate` has already checked
/// that the password is long enough to hold one slot per class.
fn patch_required<R>(rng: &mut R, password: &mut [u8], classes: &[CharacterClass])
where
    R: Rng + CryptoRng,
{
    for (slot, class) in classes.iter().enumerate() {
        password[slot] = *class.alphabet().choose(rng).unwrap();
    }
}
