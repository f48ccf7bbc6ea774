//! `LogObserver` — renders engine reports as `tracing` events.
//!
//! | Event                        | Level   |
//! |------------------------------|---------|
//! | initial map and placement    | `info`  |
//! | each destroyed city          | `info`  |
//! | per-step counts              | `debug` |
//! | outcome, survivors, final map| `info`  |

use inv_alien::AlienStore;
use inv_core::CityId;
use inv_map::CityMap;
use inv_sim::{InvasionObserver, Outcome, StepReport};

/// An [`InvasionObserver`] that logs the run through `tracing`.
#[derive(Default)]
pub struct LogObserver;

impl LogObserver {
    pub fn new() -> Self {
        Self
    }
}

fn city_name(map: &CityMap, city: CityId) -> &str {
    map.name(city).unwrap_or("?")
}

/// `name@city` for every active alien, comma separated.
fn placement(map: &CityMap, aliens: &AlienStore) -> String {
    aliens
        .active_ids()
        .map(|a| {
            let city = aliens.city(a).map_or("?", |c| city_name(map, c));
            format!("{}@{city}", aliens.name(a))
        })
        .collect::<Vec<_>>()
        .join(", ")
}

impl InvasionObserver for LogObserver {
    fn on_start(&mut self, map: &CityMap, aliens: &AlienStore) {
        tracing::info!(
            cities = map.city_count(),
            routes = map.route_count(),
            "initial city map:\n{map}"
        );
        tracing::info!(aliens = aliens.active_count(), "aliens landed: {}", placement(map, aliens));
    }

    fn on_step_end(&mut self, report: &StepReport, map: &CityMap, aliens: &AlienStore) {
        for collision in &report.collisions {
            let names: Vec<&str> = collision.aliens.iter().map(|&a| aliens.name(a)).collect();
            tracing::info!(
                step = report.step.0,
                "city {} has been destroyed by aliens {}",
                city_name(map, collision.city),
                names.join(", "),
            );
        }
        tracing::debug!(
            step = report.step.0,
            active_aliens = aliens.active_count(),
            remaining_cities = map.city_count(),
            "step complete"
        );
    }

    fn on_end(&mut self, outcome: &Outcome, map: &CityMap, aliens: &AlienStore) {
        tracing::info!(
            step = outcome.final_step.0,
            cities_destroyed = outcome.cities_destroyed,
            aliens_destroyed = outcome.aliens_destroyed,
            "invasion over: {}",
            outcome.termination,
        );
        tracing::info!(aliens = aliens.active_count(), "aliens left: {}", placement(map, aliens));
        tracing::info!(cities = map.city_count(), "final city map:\n{map}");
    }
}
