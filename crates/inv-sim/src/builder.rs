//! Fluent builder for constructing an [`Invasion`].

use inv_alien::AlienStore;
use inv_core::{AlienId, CityId, InvasionConfig, SimRng, Step};
use inv_map::CityMap;

use crate::{Invasion, SimError, SimResult};

/// Fluent builder for [`Invasion`].
///
/// # Required inputs
///
/// - [`InvasionConfig`] — step threshold and seed
/// - [`CityMap`] — from [`inv_map::load_city_map`] or [`inv_map::CityMapBuilder`]
/// - [`AlienStore`] — from [`inv_alien::AlienStoreBuilder`]
///
/// # Optional inputs
///
/// | Method                   | Default                                      |
/// |--------------------------|----------------------------------------------|
/// | `.initial_positions(v)`  | Uniform random city per alien (with replacement) |
///
/// # Example
///
/// ```rust,ignore
/// let mut invasion = InvasionBuilder::new(config, map, aliens)
///     .initial_positions(positions)
///     .build()?;
/// invasion.run(&mut NoopObserver);
/// ```
pub struct InvasionBuilder {
    config:    InvasionConfig,
    map:       CityMap,
    aliens:    AlienStore,
    positions: Option<Vec<CityId>>,
}

impl InvasionBuilder {
    /// Create a builder with all required inputs.
    pub fn new(config: InvasionConfig, map: CityMap, aliens: AlienStore) -> Self {
        Self { config, map, aliens, positions: None }
    }

    /// Supply the starting city for each alien instead of drawing them at
    /// random.  Must be length `aliens.count`; cities may repeat.
    pub fn initial_positions(mut self, positions: Vec<CityId>) -> Self {
        self.positions = Some(positions);
        self
    }

    /// Validate inputs, place every alien, and return a ready-to-run
    /// [`Invasion`] at the placement step.
    pub fn build(self) -> SimResult<Invasion> {
        let Self { config, map, mut aliens, positions } = self;
        let mut rng = SimRng::new(config.seed);

        let positions = match positions {
            Some(p) => {
                if p.len() != aliens.count {
                    return Err(SimError::AlienCountMismatch {
                        expected: aliens.count,
                        got:      p.len(),
                        what:     "initial positions",
                    });
                }
                if let Some(&bad) = p.iter().find(|&&c| !map.contains(c)) {
                    return Err(SimError::UnknownCity(bad));
                }
                p
            }
            None => {
                let cities: Vec<CityId> = map.cities().collect();
                let mut drawn = Vec::with_capacity(aliens.count);
                for _ in 0..aliens.count {
                    let Some(&city) = rng.choose(&cities) else {
                        return Err(SimError::NoCities { aliens: aliens.count });
                    };
                    drawn.push(city);
                }
                drawn
            }
        };

        for (i, &city) in positions.iter().enumerate() {
            aliens.place(AlienId::from_index(i), city);
        }

        Ok(Invasion::new(config, Step::PLACEMENT, map, aliens, rng))
    }
}
