use std::{fmt, str::FromStr};

use serde::{Serialize, Serializer};

use crate::models::error::SeasonError;

/// A Formula-1 season, identified by its four-digit year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Season(i32);

impl Season {
    pub fn new(year: i32) -> Result<Self, SeasonError> {
        if (1000..=9999).contains(&year) {
            Ok(Season(year))
        } else {
            Err(SeasonError::Invalid(year.to_string()))
        }
    }

    pub fn year(&self) -> i32 {
        self.0
    }
}

pub fn season_href(year: i32) -> String {
    format!("/f1/{year}")
}

impl FromStr for Season {
    type Err = SeasonError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let is_year = s.len() == 4
            && s.bytes().all(|b| b.is_ascii_digit())
            && !s.starts_with('0');
        if !is_year {
            return Err(SeasonError::Invalid(s.to_string()));
        }
        s.parse::<i32>()
            .map(Season)
            .map_err(|_| SeasonError::Invalid(s.to_string()))
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for Season {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
