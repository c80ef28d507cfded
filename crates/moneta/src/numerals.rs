// -------------------------------------------------------------------------------------------------
//  Copyright (C) 2015-2026 Nautech Systems Pty Ltd. All rights reserved.
//  https://nautechsystems.io
//
//  Licensed under the GNU Lesser General Public License Version 3.0 (the "License");
//  You may not use this file except in compliance with the License.
//  You may obtain a copy of the License at https://www.gnu.org/licenses/lgpl-3.0.en.html
//
//  Unless required by applicable law or agreed to in writing, software
//  distributed under the License is distributed on an "AS IS" BASIS,
//  WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
//  See the License for the specific language governing permissions and
//  limitations under the License.
// -------------------------------------------------------------------------------------------------

//! Numeral transliteration tables for localized amount rendering.

use std::{
    fmt::{Debug, Display, Formatter},
    str::FromStr,
};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::errors::{FAILED, MonetaryError};

/// The number of glyphs in a numeral table: the digits zero through nine
/// followed by the minus sign.
pub const NUMERAL_TABLE_LEN: usize = 11;

/// A table of glyphs substituted for Western digits when rendering a
/// localized amount.
///
/// The table holds exactly [`NUMERAL_TABLE_LEN`] characters: the glyphs for
/// the digits `0` through `9` in order, then the glyph used for a leading
/// minus sign. Transliteration touches only digits and the minus sign;
/// separators and every other character pass through unchanged.
#[derive(Clone, Copy, Eq, Hash, PartialEq)]
pub struct NumeralSystem {
    glyphs: [char; NUMERAL_TABLE_LEN],
}

impl NumeralSystem {
    /// Creates a new [`NumeralSystem`] instance with correctness checking.
    ///
    /// # Errors
    ///
    /// Returns an error if `table` does not contain exactly
    /// [`NUMERAL_TABLE_LEN`] characters.
    pub fn new_checked(table: &str) -> anyhow::Result<Self> {
        let chars: Vec<char> = table.chars().collect();
        let len = chars.len();
        let glyphs: [char; NUMERAL_TABLE_LEN] =
            chars.try_into().map_err(|_| MonetaryError::InvalidNumerals {
                table: table.to_string(),
                len,
            })?;
        Ok(Self { glyphs })
    }

    /// Creates a new [`NumeralSystem`] instance.
    ///
    /// # Panics
    ///
    /// Panics if `table` does not contain exactly [`NUMERAL_TABLE_LEN`]
    /// characters.
    #[must_use]
    pub fn new(table: &str) -> Self {
        Self::new_checked(table).expect(FAILED)
    }

    /// Returns the glyph substituted for a leading minus sign.
    #[must_use]
    pub const fn minus_sign(&self) -> char {
        self.glyphs[NUMERAL_TABLE_LEN - 1]
    }

    /// Returns the Western character for `glyph`, or `None` when the glyph
    /// is not part of this table.
    #[must_use]
    pub fn western(&self, glyph: char) -> Option<char> {
        self.glyphs.iter().position(|&g| g == glyph).map(|index| {
            if index == NUMERAL_TABLE_LEN - 1 {
                '-'
            } else {
                char::from(b'0' + index as u8)
            }
        })
    }

    /// Replaces every Western digit and minus sign in `text` with the glyphs
    /// of this table, leaving all other characters in place.
    #[must_use]
    pub fn transliterate(&self, text: &str) -> String {
        text.chars()
            .map(|c| match c {
                '0'..='9' => self.glyphs[(c as usize) - ('0' as usize)],
                '-' => self.minus_sign(),
                _ => c,
            })
            .collect()
    }

    /// Replaces every glyph of this table in `text` with its Western form,
    /// inverting [`transliterate`](Self::transliterate); characters outside
    /// the table pass through unchanged.
    #[must_use]
    pub fn to_western(&self, text: &str) -> String {
        text.chars().map(|c| self.western(c).unwrap_or(c)).collect()
    }
}

impl Debug for NumeralSystem {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}('{self}')", stringify!(NumeralSystem))
    }
}

impl Display for NumeralSystem {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for glyph in self.glyphs {
            write!(f, "{glyph}")?;
        }
        Ok(())
    }
}

impl FromStr for NumeralSystem {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new_checked(s)
    }
}

impl From<&str> for NumeralSystem {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl Serialize for NumeralSystem {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for NumeralSystem {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let table = String::deserialize(deserializer)?;
        Self::new_checked(&table).map_err(serde::de::Error::custom)
    }
}
