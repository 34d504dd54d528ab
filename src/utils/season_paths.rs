use crate::models::season::Season;

/// Number of seasons, ending at the current year, built ahead of any request.
pub const PREBUILT_SEASONS: i32 = 10;

/// What to do with a season that was not built ahead of time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fallback {
    /// Hold the request until the page is built, then cache it.
    Blocking,
}

impl Fallback {
    pub fn as_str(&self) -> &'static str {
        match self {
            Fallback::Blocking => "blocking",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeasonPaths {
    pub paths: Vec<Season>,
    pub fallback: Fallback,
}

pub fn season_paths(current_year: i32) -> SeasonPaths {
    let paths = (0..PREBUILT_SEASONS)
        .filter_map(|i| Season::new(current_year - i).ok())
        .collect();
    SeasonPaths {
        paths,
        fallback: Fallback::Blocking,
    }
}
