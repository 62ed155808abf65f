//! exchange-admin: headless administrator runner for the gift exchange.
//!
//! Usage:
//!   exchange-admin --db exchange.db --event winter-2026
//!   exchange-admin --demo 8 --csv
//!   exchange-admin --config admin.json --seed 42 --json

use anyhow::Result;
use chrono::{Duration, Utc};
use exchange_core::assignment::AssignmentDetail;
use exchange_core::config::ExchangeConfig;
use exchange_core::engine::ExchangeEngine;
use exchange_core::event::{EventRecord, EventStatus};
use exchange_core::export::render_csv;
use exchange_core::participant::ParticipantRecord;
use exchange_core::store::ExchangeStore;
use std::env;
use uuid::Uuid;

const DEMO_NAMES: [&str; 12] = [
    "Alice", "Bob", "Charlie", "David", "Eve", "Frank", "Grace", "Heidi", "Ivan", "Judy",
    "Mallory", "Niaj",
];

const DEMO_WISHES: [&str; 6] = [
    "wool socks",
    "a teapot",
    "a board game",
    "fancy chocolate",
    "a plant for the desk",
    "a good novel",
];

#[derive(serde::Serialize)]
struct MappingOutput<'a> {
    event_id: &'a str,
    assignments: usize,
    mapping: &'a [AssignmentDetail],
}

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let config = match arg_value(&args, "--config") {
        Some(path) => ExchangeConfig::load(path)?,
        None => ExchangeConfig::default(),
    };

    let db = arg_value(&args, "--db").unwrap_or(&config.db_path).to_string();
    let event_id = arg_value(&args, "--event").unwrap_or("demo").to_string();
    let demo = parse_arg(&args, "--demo", 0usize);
    let seed: Option<u64> = arg_value(&args, "--seed")
        .and_then(|s| s.parse().ok())
        .or(config.seed);
    let csv = args.iter().any(|a| a == "--csv");
    let json = args.iter().any(|a| a == "--json");

    let store = ExchangeStore::open(&db)?;
    store.migrate()?;

    if demo > 0 {
        seed_demo_event(&store, &event_id, demo)?;
        log::info!("seeded demo event '{event_id}' with {demo} participants");
    }

    let mut engine = match seed {
        Some(s) => ExchangeEngine::with_seed(store, s),
        None => ExchangeEngine::new(store),
    };

    let written = engine.run_assignment(&event_id)?;
    let details = engine.all_assignments(&event_id)?;

    if csv {
        print!("{}", render_csv(&details));
    } else if json {
        let output = MappingOutput {
            event_id: &event_id,
            assignments: written,
            mapping: &details,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("event {event_id}: {written} assignments");
        for detail in &details {
            println!(
                "  #{:<3} {} <{}> gives to {} <{}>",
                detail.receiver_number,
                detail.santa_name,
                detail.santa_email,
                detail.receiver_name,
                detail.receiver_email,
            );
        }
    }

    Ok(())
}

/// Create the event if missing and register `count` demo participants.
fn seed_demo_event(store: &ExchangeStore, event_id: &str, count: usize) -> Result<()> {
    if store.find_event(event_id)?.is_none() {
        store.insert_event(&EventRecord {
            event_id: event_id.to_string(),
            name: "Demo Exchange".to_string(),
            budget: 20.0,
            deadline: Some(Utc::now() + Duration::days(14)),
            status: EventStatus::Open,
        })?;
    }

    for i in 0..count {
        let name = DEMO_NAMES[i % DEMO_NAMES.len()];
        let wish = DEMO_WISHES[i % DEMO_WISHES.len()];
        store.insert_participant(&ParticipantRecord {
            participant_id: format!("demo-{}", Uuid::new_v4()),
            name: name.to_string(),
            email: format!("{}.{i}@example.com", name.to_lowercase()),
            wish: wish.to_string(),
            wish_link: None,
            event_id: Some(event_id.to_string()),
        })?;
    }
    Ok(())
}

fn arg_value<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    args.windows(2)
        .find(|w| w[0] == flag)
        .map(|w| w[1].as_str())
}

fn parse_arg<T: std::str::FromStr>(args: &[String], flag: &str, default: T) -> T {
    args.windows(2)
        .find(|w| w[0] == flag)
        .and_then(|w| w[1].parse().ok())
        .unwrap_or(default)
}
