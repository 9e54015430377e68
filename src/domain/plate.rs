use serde::{Deserialize, Serialize};
use std::fmt;

/// A vehicle license plate as handed over by the extraction service.
///
/// No format validation happens at construction; the rules only ever
/// inspect characters and digits. An empty plate means extraction failed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Plate(String);

impl Plate {
    pub fn new(raw: impl Into<String>) -> Self {
        Plate(raw.into())
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The last `n` characters of the plate (the whole plate if shorter).
    pub fn suffix(&self, n: usize) -> &str {
        if n == 0 {
            return "";
        }
        match self.0.char_indices().rev().nth(n - 1) {
            Some((i, _)) => &self.0[i..],
            None => &self.0,
        }
    }

    /// Whether the plate contains any alphabetic character.
    pub fn has_alpha(&self) -> bool {
        self.0.chars().any(|c| c.is_alphabetic())
    }

    /// Extract the plate's digits, order preserved.
    pub fn digits(&self) -> DigitSequence {
        DigitSequence(
            self.0
                .chars()
                .filter_map(|c| c.to_digit(10).map(|d| d as u8))
                .collect(),
        )
    }
}

impl fmt::Display for Plate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Plate {
    fn from(s: &str) -> Self {
        Plate::new(s)
    }
}

/// The numeric characters of a plate, in plate order.
///
/// Ephemeral: recomputed per evaluation, never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DigitSequence(Vec<u8>);

impl DigitSequence {
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Sum of all digits.
    pub fn sum(&self) -> u32 {
        self.0.iter().map(|&d| u32::from(d)).sum()
    }

    /// The last two digits rendered as a two-character string, one character
    /// per digit ("05", never "5"). None when fewer than two digits exist.
    pub fn last_two(&self) -> Option<String> {
        match self.0.as_slice() {
            [.., a, b] => Some(format!("{a}{b}")),
            _ => None,
        }
    }
}
