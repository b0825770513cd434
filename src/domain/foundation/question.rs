//! Question number value object (1-based, bounded by the bank size).

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// Number of interview questions each condition carries.
pub const QUESTION_BANK_SIZE: usize = 4;

/// Position of a question within a condition's bank, counted from 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuestionNumber(u8);

impl QuestionNumber {
    /// The first question of a bank.
    pub const FIRST: Self = Self(1);

    /// The last question of a bank.
    pub const LAST: Self = Self(QUESTION_BANK_SIZE as u8);

    /// Creates a QuestionNumber, returning error if outside the bank.
    pub fn try_new(value: u8) -> Result<Self, ValidationError> {
        if value < 1 || value as usize > QUESTION_BANK_SIZE {
            return Err(ValidationError::out_of_range(
                "question_number",
                1,
                QUESTION_BANK_SIZE as i32,
                value as i32,
            ));
        }
        Ok(Self(value))
    }

    /// Returns the 1-based number.
    pub fn value(&self) -> u8 {
        self.0
    }

    /// Returns the 0-based offset for bank indexing.
    pub fn zero_based(&self) -> usize {
        (self.0 - 1) as usize
    }

    /// The next question of the bank, or None past the last.
    pub fn next(&self) -> Option<Self> {
        if (self.0 as usize) < QUESTION_BANK_SIZE {
            Some(Self(self.0 + 1))
        } else {
            None
        }
    }

    /// True for the final question of the bank.
    pub fn is_last(&self) -> bool {
        self.0 as usize == QUESTION_BANK_SIZE
    }
}

impl Default for QuestionNumber {
    fn default() -> Self {
        Self::FIRST
    }
}

impl fmt::Display for QuestionNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
