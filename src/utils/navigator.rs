use serde::Serialize;

use crate::models::season::{season_href, Season};

/// The first Formula-1 world championship season.
pub const FIRST_SEASON: i32 = 1950;

/// Previous/next controls and the year selector of a season page.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeasonNavigator {
    pub selected: Season,
    pub previous: NavLink,
    pub next: NavLink,
    pub year_options: Vec<YearOption>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NavLink {
    pub year: i32,
    pub href: String,
    pub disabled: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct YearOption {
    pub year: i32,
    pub href: String,
    pub selected: bool,
}

impl SeasonNavigator {
    pub fn new(season: Season, current_year: i32) -> Self {
        let year = season.year();

        // No lower bound on "previous": only "next" stops at the present.
        let previous = NavLink {
            year: year - 1,
            href: season_href(year - 1),
            disabled: false,
        };
        let next = NavLink {
            year: year + 1,
            href: season_href(year + 1),
            disabled: year == current_year,
        };

        let year_options = (FIRST_SEASON..=current_year)
            .rev()
            .map(|option| YearOption {
                year: option,
                href: season_href(option),
                selected: option == year,
            })
            .collect();

        Self {
            selected: season,
            previous,
            next,
            year_options,
        }
    }

    pub fn go_previous(&self) -> Option<String> {
        (!self.previous.disabled).then(|| self.previous.href.clone())
    }

    pub fn go_next(&self) -> Option<String> {
        (!self.next.disabled).then(|| self.next.href.clone())
    }

    /// Navigation target for a pick from the year selector.
    pub fn select(&self, year: i32) -> Option<String> {
        self.year_options
            .iter()
            .find(|option| option.year == year)
            .map(|option| option.href.clone())
    }
}
