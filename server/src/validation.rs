//! Length-checked strings for request payloads.
//!
//! Bounds are counted in Unicode scalar values, not bytes, so a 100-character
//! title written in Hangul is accepted just like one written in ASCII.

use std::ops::Deref;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A to-do title: 1 to 100 characters.
pub type TodoTitle = BoundedString<1, 100>;

/// A to-do description: at most 100 characters.
pub type TodoDescription = BoundedString<0, 100>;

/// A [`String`] newtype that guarantees its length is within `MIN..=MAX`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(try_from = "String", into = "String")]
pub struct BoundedString<const MIN: usize, const MAX: usize>(String);

impl<const MIN: usize, const MAX: usize> BoundedString<MIN, MAX> {
    /// Consumes the [`BoundedString`], returning the wrapped [`String`].
    pub fn into_inner(self) -> String {
        self.0
    }
}

/// An error constructing a [`BoundedString`].
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum BoundedStringError<const MIN: usize, const MAX: usize> {
    /// The length was less than the [`BoundedString`]'s `MIN`.
    #[error("invalid length {0}, expected at least {MIN}")]
    TooShort(usize),

    /// The length was greater than the [`BoundedString`]'s `MAX`.
    #[error("invalid length {0}, expected at most {MAX}")]
    TooLong(usize),
}

impl<const MIN: usize, const MAX: usize> TryFrom<String> for BoundedString<MIN, MAX> {
    type Error = BoundedStringError<MIN, MAX>;

    fn try_from(string: String) -> Result<Self, Self::Error> {
        let len = string.chars().count();
        if len < MIN {
            Err(BoundedStringError::TooShort(len))
        } else if len > MAX {
            Err(BoundedStringError::TooLong(len))
        } else {
            Ok(Self(string))
        }
    }
}

impl<const MIN: usize, const MAX: usize> From<BoundedString<MIN, MAX>> for String {
    fn from(bounded: BoundedString<MIN, MAX>) -> Self {
        bounded.0
    }
}

impl<const MIN: usize, const MAX: usize> Deref for BoundedString<MIN, MAX> {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
