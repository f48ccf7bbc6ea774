//! Observer trait for reporting what the step loop does.

use inv_alien::AlienStore;
use inv_map::CityMap;

use crate::{Outcome, StepReport};

/// Callbacks invoked by [`Invasion::run`][crate::Invasion::run].
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.  Observers get read-only access; they
/// cannot influence the run.
///
/// # Example — collision printer
///
/// ```rust,ignore
/// struct CollisionPrinter;
///
/// impl InvasionObserver for CollisionPrinter {
///     fn on_step_end(&mut self, report: &StepReport, map: &CityMap, _: &AlienStore) {
///         for c in &report.collisions {
///             println!("{} destroyed", map.name(c.city).unwrap_or("?"));
///         }
///     }
/// }
/// ```
pub trait InvasionObserver {
    /// Called once before the placement step, with the initial map and the
    /// aliens at their starting cities.
    fn on_start(&mut self, _map: &CityMap, _aliens: &AlienStore) {}

    /// Called after every step, placement included, once collisions have been
    /// resolved.
    fn on_step_end(&mut self, _report: &StepReport, _map: &CityMap, _aliens: &AlienStore) {}

    /// Called once after the final step with the surviving map and roster.
    fn on_end(&mut self, _outcome: &Outcome, _map: &CityMap, _aliens: &AlienStore) {}
}

/// An [`InvasionObserver`] that does nothing.
pub struct NoopObserver;

impl InvasionObserver for NoopObserver {}

impl<O: InvasionObserver + ?Sized> InvasionObserver for &mut O {
    fn on_start(&mut self, map: &CityMap, aliens: &AlienStore) {
        (**self).on_start(map, aliens);
    }

    fn on_step_end(&mut self, report: &StepReport, map: &CityMap, aliens: &AlienStore) {
        (**self).on_step_end(report, map, aliens);
    }

    fn on_end(&mut self, outcome: &Outcome, map: &CityMap, aliens: &AlienStore) {
        (**self).on_end(outcome, map, aliens);
    }
}

/// Two observers driven in order.
impl<A: InvasionObserver, B: InvasionObserver> InvasionObserver for (A, B) {
    fn on_start(&mut self, map: &CityMap, aliens: &AlienStore) {
        self.0.on_start(map, aliens);
        self.1.on_start(map, aliens);
    }

    fn on_step_end(&mut self, report: &StepReport, map: &CityMap, aliens: &AlienStore) {
        self.0.on_step_end(report, map, aliens);
        self.1.on_step_end(report, map, aliens);
    }

    fn on_end(&mut self, outcome: &Outcome, map: &CityMap, aliens: &AlienStore) {
        self.0.on_end(outcome, map, aliens);
        self.1.on_end(outcome, map, aliens);
    }
}
