//! # Input Parsing
//!
//! Whitespace separated tokens read from standard input. Line breaks carry
//! no meaning.

use std::str::SplitWhitespace;

use glam::{DVec2, DVec3};

use crate::error::InputError;

/// Cursor over the whitespace separated tokens of an input text.
#[derive(Debug, Clone)]
pub struct Tokens<'a> {
    inner: SplitWhitespace<'a>,
}

impl<'a> Tokens<'a> {
    /// Tokenizes `text`.
    pub fn new(text: &'a str) -> Self {
        Self {
            inner: text.split_whitespace(),
        }
    }

    fn token(&mut self, expected: &'static str) -> Result<&'a str, InputError> {
        self.inner.next().ok_or(InputError::UnexpectedEnd { expected })
    }

    /// Reads a real number.
    pub fn number(&mut self, expected: &'static str) -> Result<f64, InputError> {
        let token = self.token(expected)?;
        token.parse().map_err(|_| InputError::InvalidNumber {
            token: token.to_string(),
        })
    }

    /// Reads a non-negative integer count.
    pub fn count(&mut self, expected: &'static str) -> Result<usize, InputError> {
        let token = self.token(expected)?;
        token.parse().map_err(|_| InputError::InvalidCount {
            token: token.to_string(),
        })
    }

    /// Reads `x y z`.
    pub fn point(&mut self) -> Result<DVec3, InputError> {
        Ok(DVec3::new(
            self.number("x coordinate")?,
            self.number("y coordinate")?,
            self.number("z coordinate")?,
        ))
    }

    /// Reads a count followed by that many points.
    pub fn counted_points(&mut self, expected: &'static str) -> Result<Vec<DVec3>, InputError> {
        let count = self.count(expected)?;
        (0..count).map(|_| self.point()).collect()
    }

    /// Reads `x y` pairs until the input ends.
    pub fn sites(&mut self) -> Result<Vec<DVec2>, InputError> {
        let mut sites = Vec::new();
        while let Some(token) = self.inner.next() {
            let x = token.parse().map_err(|_| InputError::InvalidNumber {
                token: token.to_string(),
            })?;
            let y = self.number("y coordinate")?;
            sites.push(DVec2::new(x, y));
        }
        Ok(sites)
    }
}
