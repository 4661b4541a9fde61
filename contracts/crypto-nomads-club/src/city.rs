// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! The fixed registry of cities a token can be labelled with.
//!
//! Cities are passed over the ABI as their upper-case names and stored on chain
//! as a one-byte code. Code `0` is never assigned, so an unset storage slot never
//! decodes to a city.

use alloc::{string::String, vec::Vec};
use core::{fmt, str::FromStr};

use crate::error::ClubError;

/// A city in the registry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum City {
    Amsterdam = 1,
    Austin,
    Bali,
    Barcelona,
    Denver,
    Lisbon,
    London,
    Miami,
    Paris,
    Singapore,
}

impl City {
    /// Every registered city, ordered by storage code.
    pub const ALL: [City; 10] = [
        City::Amsterdam,
        City::Austin,
        City::Bali,
        City::Barcelona,
        City::Denver,
        City::Lisbon,
        City::London,
        City::Miami,
        City::Paris,
        City::Singapore,
    ];

    /// The name used on the ABI.
    pub const fn name(self) -> &'static str {
        match self {
            City::Amsterdam => "AMSTERDAM",
            City::Austin => "AUSTIN",
            City::Bali => "BALI",
            City::Barcelona => "BARCELONA",
            City::Denver => "DENVER",
            City::Lisbon => "LISBON",
            City::London => "LONDON",
            City::Miami => "MIAMI",
            City::Paris => "PARIS",
            City::Singapore => "SINGAPORE",
        }
    }

    /// The code kept in storage.
    pub const fn code(self) -> u8 {
        self as u8
    }

    pub fn from_code(code: u8) -> Option<Self> {
        Self::ALL.into_iter().find(|city| city.code() == code)
    }
}

impl FromStr for City {
    type Err = ClubError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|city| city.name() == name)
            .ok_or(ClubError::InvalidCity)
    }
}

impl fmt::Display for City {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Parses every requested name, failing on the first one not in the registry.
pub fn parse_all(names: &[String]) -> Result<Vec<City>, ClubError> {
    names.iter().map(|name| name.parse()).collect()
}
