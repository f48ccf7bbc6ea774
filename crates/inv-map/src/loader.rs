//! City-map file loader.
//!
//! # File format
//!
//! One city per line: the city name followed by zero or more
//! `direction=city` pairs.
//!
//! ```text
//! Foo north=Bar west=Baz south=Qu-ux
//! Bar south=Foo west=Bee
//! Bee
//! ```
//!
//! - Names and directions are case-insensitive; names are folded to
//!   lowercase.
//! - Any run of whitespace separates tokens.
//! - Blank lines are skipped.
//! - A city mentioned only as a destination becomes a city with no routes.
//! - A later line for the same city replaces that city's routes; a direction
//!   repeated within one line keeps its last destination.
//!
//! Any malformed pair aborts the load with [`MapError::Parse`].

use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use inv_core::Direction;

use crate::{CityMap, CityMapBuilder, MapError, MapResult};

// ── Parsed line ───────────────────────────────────────────────────────────────

/// One non-blank line of a city-map file, with names already case-folded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CityLine {
    pub city:   String,
    pub routes: Vec<(Direction, String)>,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load a [`CityMap`] from a file.
pub fn load_city_map(path: &Path) -> MapResult<CityMap> {
    let file = std::fs::File::open(path)?;
    load_city_map_reader(file)
}

/// Like [`load_city_map`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor`) or embedding a map in a
/// binary.
pub fn load_city_map_reader<R: Read>(reader: R) -> MapResult<CityMap> {
    let mut builder = CityMapBuilder::new();

    for (i, line) in BufReader::new(reader).lines().enumerate() {
        let line = line?;
        let Some(parsed) = parse_line(i + 1, &line)? else {
            continue;
        };

        let city = builder.add_city(&parsed.city);
        builder.clear_routes(city);
        for (direction, name) in &parsed.routes {
            let to = builder.add_city(name);
            builder.add_route(city, *direction, to);
        }
    }

    if builder.city_count() == 0 {
        return Err(MapError::Empty);
    }

    tracing::debug!(
        cities = builder.city_count(),
        routes = builder.route_count(),
        "loaded city map"
    );
    Ok(builder.build())
}

/// Parse one line of a city-map file.
///
/// `line_no` is 1-based and only used in error messages.  Returns
/// `Ok(None)` for a blank line.
pub fn parse_line(line_no: usize, line: &str) -> MapResult<Option<CityLine>> {
    let mut tokens = line.split_whitespace();
    let Some(city) = tokens.next() else {
        return Ok(None);
    };

    let parse_err = |reason: String| MapError::Parse { line: line_no, reason };

    if city.contains('=') {
        return Err(parse_err(format!("expected a city name, found pair {city:?}")));
    }

    let routes = tokens
        .map(|token| {
            let (direction, to) = token
                .split_once('=')
                .ok_or_else(|| parse_err(format!("route {token:?} is missing '='")))?;
            if to.is_empty() || to.contains('=') {
                return Err(parse_err(format!("route {token:?} has no valid destination")));
            }
            let direction = direction
                .parse::<Direction>()
                .map_err(|e| parse_err(e.to_string()))?;
            Ok((direction, to.to_lowercase()))
        })
        .collect::<MapResult<Vec<_>>>()?;

    Ok(Some(CityLine { city: city.to_lowercase(), routes }))
}
