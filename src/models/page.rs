use serde::Serialize;

use crate::models::race::{RaceDriverWithResultsAndConstructor, SeasonRaceResults, SeasonRaces};
use crate::models::season::Season;
use crate::utils::navigator::SeasonNavigator;

/// The three datasets a season page is built from.
#[derive(Debug, Clone, PartialEq)]
pub struct SeasonPageInput {
    pub season_race_results: SeasonRaceResults,
    pub season_race_results_by_driver: Vec<RaceDriverWithResultsAndConstructor>,
    pub season_races: SeasonRaces,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct F1PageProps {
    pub year: Season,
    pub navigator: SeasonNavigator,
    pub season_race_results: SeasonRaceResults,
    pub season_race_results_by_driver: Vec<RaceDriverWithResultsAndConstructor>,
    pub season_races: SeasonRaces,
    pub graph: Vec<DriverSeries>,
}

/// One line of the driver results graph: cumulative points after each round.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DriverSeries {
    pub driver_id: String,
    pub label: String,
    pub constructor: String,
    pub points: Vec<GraphPoint>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphPoint {
    pub round: u32,
    pub race_name: String,
    pub cumulative_points: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeasonPathsResponse {
    pub paths: Vec<Season>,
    pub fallback: &'static str,
}
