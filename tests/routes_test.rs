use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc,
};

use async_trait::async_trait;
use chrono::{NaiveDate, TimeZone, Utc};
use portfolio::{
    models::{
        error::StatsError,
        race::{
            Circuit, Constructor, Driver, DriverRaceResult, Race, RaceDriverWithResultsAndConstructor,
            SeasonRaceResults, SeasonRaces,
        },
        season::Season,
    },
    routes::build_router,
    utils::{
        clock::ManualClock, config::Config, ergast_client::SeasonStatsClient,
        projects::ProjectCatalog, state::AppState,
    },
};
use reqwest::{redirect::Policy, StatusCode};
use serde_json::Value;
use tokio::net::TcpListener;

#[derive(Default)]
struct FakeStatsClient {
    calls: AtomicUsize,
    fail: bool,
}

fn race(round: u32) -> Race {
    Race {
        season: "2021".to_string(),
        round: round.to_string(),
        race_name: format!("Grand Prix {round}"),
        circuit: Circuit {
            circuit_id: format!("c{round}"),
            circuit_name: format!("Circuit {round}"),
            location: None,
        },
        date: NaiveDate::from_ymd_opt(2021, 4, 10 + round).unwrap(),
        time: None,
        results: vec![],
    }
}

#[async_trait]
impl SeasonStatsClient for FakeStatsClient {
    async fn fetch_season_race_results(&self, season: &Season) -> Result<SeasonRaceResults, StatsError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(StatsError::Status {
                url: "fake://results".to_string(),
                status: 503,
            });
        }
        Ok(SeasonRaceResults {
            season: season.to_string(),
            races: vec![race(1)],
        })
    }

    async fn fetch_season_race_results_by_driver(
        &self,
        _season: &Season,
    ) -> Result<Vec<RaceDriverWithResultsAndConstructor>, StatsError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(vec![RaceDriverWithResultsAndConstructor {
            driver: Driver {
                driver_id: "hamilton".to_string(),
                permanent_number: Some("44".to_string()),
                code: Some("HAM".to_string()),
                given_name: "Lewis".to_string(),
                family_name: "Hamilton".to_string(),
                date_of_birth: None,
                nationality: None,
            },
            constructor: Constructor {
                constructor_id: "mercedes".to_string(),
                name: "Mercedes".to_string(),
                nationality: None,
            },
            results: vec![DriverRaceResult {
                round: 1,
                race_name: "Grand Prix 1".to_string(),
                date: NaiveDate::from_ymd_opt(2021, 4, 11).unwrap(),
                position: Some(1),
                position_text: "1".to_string(),
                points: 25.0,
                status: None,
            }],
        }])
    }

    async fn fetch_season_races(&self, season: &Season) -> Result<SeasonRaces, StatsError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(SeasonRaces {
            season: season.to_string(),
            races: vec![race(1), race(2)],
        })
    }
}

struct TestApp {
    base_url: String,
    http: reqwest::Client,
    stats: Arc<FakeStatsClient>,
}

impl TestApp {
    async fn get(&self, path: &str) -> reqwest::Response {
        self.http
            .get(format!("{}{path}", self.base_url))
            .send()
            .await
            .unwrap()
    }
}

async fn spawn_app(stats: FakeStatsClient) -> TestApp {
    let stats = Arc::new(stats);
    let clock = Arc::new(ManualClock::new(Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap()));
    let config = Config {
        prebuild_on_startup: false,
        ..Config::default()
    };
    let state = Arc::new(AppState::new(
        config,
        stats.clone(),
        clock,
        ProjectCatalog::bundled().unwrap(),
    ));

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, build_router(state)).await.unwrap();
    });

    TestApp {
        base_url: format!("http://{addr}"),
        http: reqwest::Client::builder().redirect(Policy::none()).build().unwrap(),
        stats,
    }
}

#[tokio::test]
async fn health_check_responds() {
    let app = spawn_app(FakeStatsClient::default()).await;
    let res = app.get("/").await;
    assert_eq!(res.status(), StatusCode::OK);
}

#[tokio::test]
async fn serves_season_page_and_caches_it() {
    let app = spawn_app(FakeStatsClient::default()).await;

    let res = app.get("/f1/2021").await;
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(res.headers()["x-page-cache"], "miss");
    let body: Value = res.json().await.unwrap();

    assert_eq!(body["year"], "2021");
    assert_eq!(body["navigator"]["previous"]["href"], "/f1/2020");
    assert_eq!(body["navigator"]["next"]["href"], "/f1/2022");
    assert_eq!(body["navigator"]["next"]["disabled"], false);
    assert_eq!(body["navigator"]["yearOptions"].as_array().unwrap().len(), 75);
    assert_eq!(body["seasonRaceResults"]["races"].as_array().unwrap().len(), 1);
    assert_eq!(body["seasonRaceResultsByDriver"][0]["driver"]["driverId"], "hamilton");
    assert_eq!(body["seasonRaces"]["races"].as_array().unwrap().len(), 2);
    assert_eq!(body["graph"][0]["points"][0]["cumulativePoints"], 25.0);
    assert_eq!(app.stats.calls.load(Ordering::SeqCst), 3);

    let res = app.get("/f1/2021").await;
    assert_eq!(res.headers()["x-page-cache"], "hit");
    assert_eq!(app.stats.calls.load(Ordering::SeqCst), 3);
}

#[tokio::test]
async fn current_season_disables_next() {
    let app = spawn_app(FakeStatsClient::default()).await;
    let body: Value = app.get("/f1/2024").await.json().await.unwrap();
    assert_eq!(body["navigator"]["next"]["disabled"], true);
}

#[tokio::test]
async fn seasons_outside_the_prebuilt_range_are_built_on_demand() {
    let app = spawn_app(FakeStatsClient::default()).await;
    let res = app.get("/f1/1950").await;
    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["navigator"]["previous"]["href"], "/f1/1949");
}

#[tokio::test]
async fn rejects_invalid_season_without_calling_upstream() {
    let app = spawn_app(FakeStatsClient::default()).await;
    for path in ["/f1/abc", "/f1/21", "/f1/20211"] {
        let res = app.get(path).await;
        assert_eq!(res.status(), StatusCode::BAD_REQUEST, "{path}");
    }
    assert_eq!(app.stats.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn upstream_failure_fails_the_page_and_is_not_cached() {
    let app = spawn_app(FakeStatsClient {
        fail: true,
        ..Default::default()
    })
    .await;

    let res = app.get("/f1/2021").await;
    assert_eq!(res.status(), StatusCode::BAD_GATEWAY);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["message"], "Failed to load season data");
    assert!(body.get("seasonRaces").is_none());

    let calls_after_first = app.stats.calls.load(Ordering::SeqCst);
    let res = app.get("/f1/2021").await;
    assert_eq!(res.status(), StatusCode::BAD_GATEWAY);
    assert!(app.stats.calls.load(Ordering::SeqCst) > calls_after_first);
}

#[tokio::test]
async fn f1_root_redirects_to_current_season() {
    let app = spawn_app(FakeStatsClient::default()).await;
    let res = app.get("/f1").await;
    assert_eq!(res.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(res.headers()["location"], "/f1/2024");
}

#[tokio::test]
async fn lists_prebuilt_season_paths() {
    let app = spawn_app(FakeStatsClient::default()).await;
    let body: Value = app.get("/f1/paths").await.json().await.unwrap();
    let paths: Vec<&str> = body["paths"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p.as_str().unwrap())
        .collect();
    assert_eq!(
        paths,
        vec!["2024", "2023", "2022", "2021", "2020", "2019", "2018", "2017", "2016", "2015"]
    );
    assert_eq!(body["fallback"], "blocking");
}

#[tokio::test]
async fn lists_project_cards() {
    let app = spawn_app(FakeStatsClient::default()).await;
    let body: Value = app.get("/work/code").await.json().await.unwrap();
    let projects = body["projects"].as_array().unwrap();

    assert_eq!(projects.len(), 3);
    assert_eq!(projects[0]["previews"]["kind"], "carousel");
    assert_eq!(projects[0]["previews"]["autoAdvance"], "advancing");
    assert_eq!(projects[0]["moreHref"], "/work/code/f1-season-graphs");
    assert_eq!(projects[1]["previews"]["kind"], "static");
    assert!(projects[2].get("previews").is_none());
    assert!(projects[2].get("repositories").is_none());
    assert!(projects[2].get("visit").is_none());
}

#[tokio::test]
async fn manual_preview_selection_suppresses_auto_advance() {
    let app = spawn_app(FakeStatsClient::default()).await;
    let body: Value = app
        .get("/work/code/f1-season-graphs?preview=2")
        .await
        .json()
        .await
        .unwrap();
    assert_eq!(body["previews"]["selectedItem"], 2);
    assert_eq!(body["previews"]["autoAdvance"], "suppressedOnce");
}

#[tokio::test]
async fn unknown_project_is_not_found() {
    let app = spawn_app(FakeStatsClient::default()).await;
    let res = app.get("/work/code/nope").await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn previous_and_next_redirect_to_adjacent_seasons() {
    let app = spawn_app(FakeStatsClient::default()).await;

    let res = app.get("/f1/2021/previous").await;
    assert_eq!(res.status(), StatusCode::SEE_OTHER);
    assert_eq!(res.headers()["location"], "/f1/2020");

    let res = app.get("/f1/1950/previous").await;
    assert_eq!(res.headers()["location"], "/f1/1949");

    let res = app.get("/f1/2021/next").await;
    assert_eq!(res.status(), StatusCode::SEE_OTHER);
    assert_eq!(res.headers()["location"], "/f1/2022");

    let res = app.get("/f1/2024/next").await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    assert_eq!(app.stats.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn year_selector_redirects_to_listed_seasons_only() {
    let app = spawn_app(FakeStatsClient::default()).await;

    let res = app.get("/f1/select?year=1988").await;
    assert_eq!(res.status(), StatusCode::SEE_OTHER);
    assert_eq!(res.headers()["location"], "/f1/1988");

    for year in ["1949", "2025"] {
        let res = app.get(&format!("/f1/select?year={year}")).await;
        assert_eq!(res.status(), StatusCode::NOT_FOUND, "{year}");
    }
}
