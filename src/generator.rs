//! Suggested password generator.

use rand::Rng;
use rand::seq::{IndexedRandom, SliceRandom};

use crate::mode::{Mode, ModePolicy};

pub const UPPERCASE: &[char] = &[
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M', 'N', 'O', 'P', 'Q', 'R', 'S',
    'T', 'U', 'V', 'W', 'X', 'Y', 'Z',
];

pub const LOWERCASE: &[char] = &[
    'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i', 'j', 'k', 'l', 'm', 'n', 'o', 'p', 'q', 'r', 's',
    't', 'u', 'v', 'w', 'x', 'y', 'z',
];

pub const DIGITS: &[char] = &['0', '1', '2', '3', '4', '5', '6', '7', '8', '9'];

pub const SPECIALS: &[char] = &[
    '!', '@', '#', '$', '%', '^', '&', '*', '(', ')', '_', '+', '-', '=', '[', ']', '{', '}', '|',
    ';', ':', ',', '.', '<', '>', '?',
];

/// Redraws allowed per position before falling back to a deterministic pick.
pub const MAX_REDRAWS: usize = 64;

/// Shuffles tried before keeping the unshuffled sequence.
pub const MAX_SHUFFLES: usize = 32;

const MAX_RUN: usize = 3;

/// Generates a suggestion for `mode` using the thread-local RNG.
pub fn generate_password(mode: Mode) -> String {
    generate_password_with(&mut rand::rng(), mode)
}

/// Generates a suggestion for `mode` from the given RNG.
///
/// The result always has the mode's suggestion length, contains at least one
/// uppercase letter, one lowercase letter and one digit, and never holds three
/// identical characters in a row. Special characters are guaranteed in
/// business mode only: in personal mode the alphabet and the seeded special
/// character are each included on an independent draw.
pub fn generate_password_with<R: Rng + ?Sized>(rng: &mut R, mode: Mode) -> String {
    let policy = mode.policy();

    let mut alphabet: Vec<char> = [UPPERCASE, LOWERCASE, DIGITS].concat();
    if include_special(rng, &policy) {
        alphabet.extend_from_slice(SPECIALS);
    }

    let mut password: Vec<char> = Vec::with_capacity(policy.suggestion_length);
    for class in [UPPERCASE, LOWERCASE, DIGITS] {
        password.extend(class.choose(rng));
    }
    if include_special(rng, &policy) {
        password.extend(SPECIALS.choose(rng));
    }

    while password.len() < policy.suggestion_length {
        let c = draw_next(rng, &alphabet, &password);
        password.push(c);
    }

    shuffle_without_runs(rng, password).into_iter().collect()
}

fn include_special<R: Rng + ?Sized>(rng: &mut R, policy: &ModePolicy) -> bool {
    policy.requires_special || rng.random_bool(policy.special_chance)
}

/// Whether appending `c` would complete a run of identical characters.
fn completes_run(password: &[char], c: char) -> bool {
    let tail = MAX_RUN - 1;
    password.len() >= tail && password[password.len() - tail..].iter().all(|&p| p == c)
}

fn draw_next<R: Rng + ?Sized>(rng: &mut R, alphabet: &[char], password: &[char]) -> char {
    for _ in 0..MAX_REDRAWS {
        if let Some(&c) = alphabet.choose(rng) {
            if !completes_run(password, c) {
                return c;
            }
        }
    }

    #[cfg(feature = "tracing")]
    tracing::warn!("redraw limit reached, picking first non-repeating character");

    // The alphabet always holds more than one distinct character.
    alphabet
        .iter()
        .copied()
        .find(|&c| !completes_run(password, c))
        .unwrap_or('a')
}

fn has_run(password: &[char]) -> bool {
    password
        .windows(MAX_RUN)
        .any(|w| w.iter().all(|&c| c == w[0]))
}

/// Fisher-Yates shuffle, retried while the permutation holds a run.
/// The input has no run, so it is kept if every attempt fails.
fn shuffle_without_runs<R: Rng + ?Sized>(rng: &mut R, password: Vec<char>) -> Vec<char> {
    let mut shuffled = password.clone();
    for _ in 0..MAX_SHUFFLES {
        shuffled.shuffle(rng);
        if !has_run(&shuffled) {
            return shuffled;
        }
    }

    #[cfg(feature = "tracing")]
    tracing::warn!("shuffle limit reached, keeping generation order");

    password
}
