use std::collections::HashMap;

use crate::models::{
    error::StatsError,
    page::{DriverSeries, GraphPoint},
    race::{DriverRaceResult, Race, RaceDriverWithResultsAndConstructor},
};

/// Appends one Ergast page of races. A race cut in half by the page boundary
/// arrives again at the head of the next page and has its results merged.
pub fn merge_race_page(races: &mut Vec<Race>, page: Vec<Race>) {
    for race in page {
        match races.last_mut() {
            Some(last) if last.season == race.season && last.round == race.round => {
                last.results.extend(race.results);
            }
            _ => races.push(race),
        }
    }
}

pub fn parse_round(round: &str) -> Result<u32, StatsError> {
    round.trim().parse().map_err(|_| StatsError::InvalidField {
        field: "round",
        value: round.to_string(),
    })
}

fn parse_points(points: &str) -> Result<f64, StatsError> {
    points.trim().parse().map_err(|_| StatsError::InvalidField {
        field: "points",
        value: points.to_string(),
    })
}

/// Regroups season results per driver. Drivers are ordered by total points,
/// ties keep the order in which drivers first appear. The constructor is the
/// one the driver raced for most recently.
pub fn group_results_by_driver(
    races: &[Race],
) -> Result<Vec<RaceDriverWithResultsAndConstructor>, StatsError> {
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut drivers: Vec<RaceDriverWithResultsAndConstructor> = Vec::new();

    for race in races {
        let round = parse_round(&race.round)?;
        for result in &race.results {
            let entry = DriverRaceResult {
                round,
                race_name: race.race_name.clone(),
                date: race.date,
                position: result.position.trim().parse().ok(),
                position_text: result.position_text.clone(),
                points: parse_points(&result.points)?,
                status: result.status.clone(),
            };

            match index.get(&result.driver.driver_id) {
                Some(&i) => {
                    let driver = &mut drivers[i];
                    driver.constructor = result.constructor.clone();
                    driver.results.push(entry);
                }
                None => {
                    index.insert(result.driver.driver_id.clone(), drivers.len());
                    drivers.push(RaceDriverWithResultsAndConstructor {
                        driver: result.driver.clone(),
                        constructor: result.constructor.clone(),
                        results: vec![entry],
                    });
                }
            }
        }
    }

    drivers.sort_by(|a, b| b.total_points().total_cmp(&a.total_points()));
    Ok(drivers)
}

/// Cumulative points per driver over the rounds of the calendar that have
/// been raced. Rounds a driver missed carry the previous total forward.
pub fn cumulative_points_series(
    drivers: &[RaceDriverWithResultsAndConstructor],
    calendar: &[Race],
) -> Result<Vec<DriverSeries>, StatsError> {
    let last_raced = drivers
        .iter()
        .flat_map(|d| d.results.iter().map(|r| r.round))
        .max();
    let Some(last_raced) = last_raced else {
        return Ok(Vec::new());
    };

    let mut rounds = Vec::with_capacity(calendar.len());
    for race in calendar {
        let round = parse_round(&race.round)?;
        if round <= last_raced {
            rounds.push((round, race.race_name.as_str()));
        }
    }

    let series = drivers
        .iter()
        .map(|driver| {
            let by_round: HashMap<u32, f64> = driver
                .results
                .iter()
                .fold(HashMap::new(), |mut acc, r| {
                    *acc.entry(r.round).or_insert(0.0) += r.points;
                    acc
                });
            let mut total = 0.0;
            let points = rounds
                .iter()
                .map(|(round, race_name)| {
                    total += by_round.get(round).copied().unwrap_or(0.0);
                    GraphPoint {
                        round: *round,
                        race_name: race_name.to_string(),
                        cumulative_points: total,
                    }
                })
                .collect();
            DriverSeries {
                driver_id: driver.driver.driver_id.clone(),
                label: driver.label(),
                constructor: driver.constructor.name.clone(),
                points,
            }
        })
        .collect();

    Ok(series)
}
