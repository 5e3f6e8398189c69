use chrono::{NaiveDate, NaiveDateTime};
use flightmatch::logic::DecisionEngine;
use flightmatch::models::{CargoQuery, Decision};
use flightmatch::repository::{JsonRuleRepository, RuleRepository};

fn demo_rules() -> Vec<flightmatch::models::FlightRule> {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/demos/rules.json");
    JsonRuleRepository::open(path).load().unwrap()
}

fn at(h: u32, m: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 3, 14)
        .unwrap()
        .and_hms_opt(h, m, 0)
        .unwrap()
}

fn pick(weight: f64, destination: &str, now: NaiveDateTime) -> Option<String> {
    let rules = demo_rules();
    let query = CargoQuery::new(weight, destination).unwrap();
    DecisionEngine::new()
        .decide(&rules, &query, now)
        .unwrap()
        .selected()
        .map(|f| f.flight.clone())
}

#[test]
fn demo_file_loads() {
    assert_eq!(demo_rules().len(), 5);
}

#[test]
fn paris_prefers_tighter_fit() {
    assert_eq!(pick(450.0, "paris", at(9, 0)).as_deref(), Some("AF1240"));
}

#[test]
fn paris_after_first_departure() {
    assert_eq!(pick(450.0, "Paris", at(21, 15)).as_deref(), Some("AF1234"));
}

#[test]
fn frankfurt_tie_goes_to_lower_carbon() {
    let rules = demo_rules();
    let query = CargoQuery::new(600.0, "Frankfurt").unwrap();
    match DecisionEngine::new().decide(&rules, &query, at(12, 0)).unwrap() {
        Decision::Selected {
            flight,
            surplus,
            explanation,
        } => {
            assert_eq!(flight.flight, "LH0904");
            assert_eq!(surplus, 20.0);
            assert!(explanation.contains("won on tie-break cost"));
        }
        other => panic!("expected selection, got {:?}", other),
    }
}

#[test]
fn everything_departed_late_at_night() {
    assert_eq!(pick(10.0, "London", at(23, 59)), None);
}
