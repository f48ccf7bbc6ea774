//! The city graph and its builder.
//!
//! # Data layout
//!
//! Cities are interned to dense `CityId`s at build time.  Every per-city
//! table is a `Vec` indexed by `CityId`:
//!
//! ```text
//! names[c]     name of city c (kept after destruction, for reporting)
//! routes[c]    outgoing routes of c, one slot per Direction
//! incoming[c]  (source, direction) of every route that ends at c
//! alive[c]     false once c has been destroyed
//! ```
//!
//! The `incoming` index makes [`CityMap::remove_city`] proportional to the
//! degree of the removed city instead of a scan over the whole map.

use std::collections::HashMap;
use std::fmt;

use inv_core::{CityId, Direction};

// ── Routes ────────────────────────────────────────────────────────────────────

/// Outgoing routes of one city: at most one destination per [`Direction`].
///
/// `Copy` and four words wide, so lookups hand it out by value.
#[derive(Copy, Clone, Default, PartialEq, Eq, Hash, Debug)]
pub struct Routes([Option<CityId>; 4]);

impl Routes {
    pub const EMPTY: Routes = Routes([None; 4]);

    #[inline]
    pub fn get(&self, direction: Direction) -> Option<CityId> {
        self.0[direction.index()]
    }

    /// Set the route in `direction`, returning the destination it replaced.
    #[inline]
    pub fn insert(&mut self, direction: Direction, to: CityId) -> Option<CityId> {
        self.0[direction.index()].replace(to)
    }

    #[inline]
    pub fn remove(&mut self, direction: Direction) -> Option<CityId> {
        self.0[direction.index()].take()
    }

    /// Number of directions with a route.
    pub fn len(&self) -> usize {
        self.0.iter().filter(|slot| slot.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.0.iter().all(Option::is_none)
    }

    /// `(direction, destination)` pairs in [`Direction::ALL`] order.
    pub fn iter(&self) -> impl Iterator<Item = (Direction, CityId)> + '_ {
        Direction::ALL
            .into_iter()
            .filter_map(|d| self.get(d).map(|to| (d, to)))
    }

    /// `true` if any route leads to `city`.
    pub fn leads_to(&self, city: CityId) -> bool {
        self.0.contains(&Some(city))
    }
}

// ── CityMap ───────────────────────────────────────────────────────────────────

/// Directed graph of cities connected by direction-labeled routes.
///
/// Built once by [`CityMapBuilder`]; afterwards the only mutation is
/// [`remove_city`](Self::remove_city).
#[derive(Clone, Debug)]
pub struct CityMap {
    names:       Vec<String>,
    ids:         HashMap<String, CityId>,
    routes:      Vec<Routes>,
    incoming:    Vec<Vec<(CityId, Direction)>>,
    alive:       Vec<bool>,
    alive_count: usize,
}

impl CityMap {
    /// A map with no cities.
    pub fn empty() -> Self {
        CityMapBuilder::new().build()
    }

    // ── Dimensions ────────────────────────────────────────────────────────

    /// Number of cities still standing.
    pub fn city_count(&self) -> usize {
        self.alive_count
    }

    /// Number of routes between standing cities.
    pub fn route_count(&self) -> usize {
        self.cities().map(|c| self.routes[c.index()].len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.alive_count == 0
    }

    // ── Lookup ────────────────────────────────────────────────────────────

    /// `true` if `city` exists and has not been destroyed.
    #[inline]
    pub fn contains(&self, city: CityId) -> bool {
        self.alive.get(city.index()).copied().unwrap_or(false)
    }

    /// Name of `city`.  Destroyed cities keep their name so that reports
    /// can refer to them; only ids never issued by this map return `None`.
    pub fn name(&self, city: CityId) -> Option<&str> {
        self.names.get(city.index()).map(String::as_str)
    }

    /// Id interned for `name`, whether or not the city still stands.
    pub fn id(&self, name: &str) -> Option<CityId> {
        self.ids.get(name).copied()
    }

    /// Standing cities in ascending id order.
    pub fn cities(&self) -> impl Iterator<Item = CityId> + '_ {
        self.alive
            .iter()
            .enumerate()
            .filter(|&(_, &alive)| alive)
            .map(|(i, _)| CityId::from_index(i))
    }

    /// Routes currently leaving `city`.
    ///
    /// Empty if the city has no routes left or no longer exists; a dead end
    /// is a valid state, not an error.
    #[inline]
    pub fn routes_from(&self, city: CityId) -> Routes {
        if self.contains(city) {
            self.routes[city.index()]
        } else {
            Routes::EMPTY
        }
    }

    // ── Mutation ──────────────────────────────────────────────────────────

    /// Destroy `city`: drop it and every route into or out of it.
    ///
    /// Returns `false` (and changes nothing) if the city was already gone.
    pub fn remove_city(&mut self, city: CityId) -> bool {
        if !self.contains(city) {
            return false;
        }
        let c = city.index();

        // Routes into the city.
        for (from, direction) in std::mem::take(&mut self.incoming[c]) {
            let routes = &mut self.routes[from.index()];
            if routes.get(direction) == Some(city) {
                routes.remove(direction);
            }
        }

        // Routes out of the city: unregister them from their destinations.
        let outgoing = std::mem::take(&mut self.routes[c]);
        for (direction, to) in outgoing.iter() {
            self.incoming[to.index()].retain(|&entry| entry != (city, direction));
        }

        self.alive[c] = false;
        self.alive_count -= 1;
        true
    }
}

impl fmt::Display for CityMap {
    /// Renders the standing cities in the city-map file format, one line
    /// per city.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for city in self.cities() {
            f.write_str(&self.names[city.index()])?;
            for (direction, to) in self.routes[city.index()].iter() {
                write!(f, " {direction}={}", self.names[to.index()])?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

// ── CityMapBuilder ────────────────────────────────────────────────────────────

/// Construct a [`CityMap`] incrementally, then call [`build`](Self::build).
///
/// Cities are interned by name on first mention, whether as a route source
/// or a destination, so every destination is a member of the built map.
///
/// # Example
///
/// ```
/// use inv_core::Direction;
/// use inv_map::CityMapBuilder;
///
/// let mut b = CityMapBuilder::new();
/// let foo = b.add_city("foo");
/// let bar = b.add_city("bar");
/// b.add_two_way(foo, Direction::South, bar);
/// let map = b.build();
/// assert_eq!(map.city_count(), 2);
/// assert_eq!(map.route_count(), 2);
/// ```
#[derive(Default)]
pub struct CityMapBuilder {
    names:  Vec<String>,
    ids:    HashMap<String, CityId>,
    routes: Vec<Routes>,
}

impl CityMapBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the id for `name`, adding a route-less city if it is new.
    pub fn add_city(&mut self, name: &str) -> CityId {
        if let Some(&id) = self.ids.get(name) {
            return id;
        }
        let id = CityId::from_index(self.names.len());
        self.names.push(name.to_owned());
        self.ids.insert(name.to_owned(), id);
        self.routes.push(Routes::EMPTY);
        id
    }

    /// Add the route `from --direction--> to`, replacing any route `from`
    /// already had in that direction.
    pub fn add_route(&mut self, from: CityId, direction: Direction, to: CityId) -> Option<CityId> {
        self.routes[from.index()].insert(direction, to)
    }

    /// Convenience: `a --direction--> b` plus the return route
    /// `b --opposite--> a`.
    pub fn add_two_way(&mut self, a: CityId, direction: Direction, b: CityId) {
        self.add_route(a, direction, b);
        self.add_route(b, direction.opposite(), a);
    }

    /// Drop every outgoing route of `city` (used when a later map line
    /// redefines a city).
    pub fn clear_routes(&mut self, city: CityId) {
        self.routes[city.index()] = Routes::EMPTY;
    }

    pub fn city_count(&self) -> usize { self.names.len() }
    pub fn route_count(&self) -> usize { self.routes.iter().map(Routes::len).sum() }

    /// Consume the builder and produce a [`CityMap`] with its incoming-route
    /// index.
    pub fn build(self) -> CityMap {
        let count = self.names.len();
        let mut incoming: Vec<Vec<(CityId, Direction)>> = vec![Vec::new(); count];
        for (i, routes) in self.routes.iter().enumerate() {
            for (direction, to) in routes.iter() {
                incoming[to.index()].push((CityId::from_index(i), direction));
            }
        }

        CityMap {
            names:       self.names,
            ids:         self.ids,
            routes:      self.routes,
            incoming,
            alive:       vec![true; count],
            alive_count: count,
        }
    }
}
