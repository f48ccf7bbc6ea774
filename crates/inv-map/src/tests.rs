//! Unit tests for inv-map.
//!
//! All graph tests use hand-built maps; loader tests feed in-memory text.

#[cfg(test)]
mod helpers {
    use inv_core::{CityId, Direction};

    use crate::{CityMap, CityMapBuilder};

    /// A small map:
    ///
    /// ```text
    /// foo north=bar west=baz
    /// bar south=foo west=bee
    /// baz east=foo
    /// bee
    /// ```
    pub fn sample_map() -> (CityMap, [CityId; 4]) {
        let mut b = CityMapBuilder::new();
        let foo = b.add_city("foo");
        let bar = b.add_city("bar");
        let baz = b.add_city("baz");
        let bee = b.add_city("bee");
        b.add_two_way(foo, Direction::North, bar);
        b.add_two_way(foo, Direction::West, baz);
        b.add_route(bar, Direction::West, bee);
        (b.build(), [foo, bar, baz, bee])
    }

    /// Assert that no standing city has a route to `city` and that `city`
    /// itself has none.
    pub fn assert_no_edges_touch(map: &CityMap, city: CityId) {
        assert!(map.routes_from(city).is_empty());
        for c in map.cities() {
            assert!(
                !map.routes_from(c).leads_to(city),
                "{:?} still routes to removed {:?}",
                map.name(c),
                map.name(city),
            );
        }
    }
}

// ── Routes ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod routes {
    use inv_core::{CityId, Direction};

    use crate::Routes;

    #[test]
    fn one_destination_per_direction() {
        let mut r = Routes::EMPTY;
        assert_eq!(r.insert(Direction::East, CityId(1)), None);
        assert_eq!(r.insert(Direction::East, CityId(2)), Some(CityId(1)));
        assert_eq!(r.len(), 1);
        assert_eq!(r.get(Direction::East), Some(CityId(2)));
    }

    #[test]
    fn iter_follows_direction_order() {
        let mut r = Routes::EMPTY;
        r.insert(Direction::West, CityId(3));
        r.insert(Direction::North, CityId(1));
        let pairs: Vec<_> = r.iter().collect();
        assert_eq!(pairs, [(Direction::North, CityId(1)), (Direction::West, CityId(3))]);
    }

    #[test]
    fn remove_clears_slot() {
        let mut r = Routes::EMPTY;
        r.insert(Direction::South, CityId(0));
        assert_eq!(r.remove(Direction::South), Some(CityId(0)));
        assert!(r.is_empty());
        assert_eq!(r.remove(Direction::South), None);
    }
}

// ── CityMap structure ─────────────────────────────────────────────────────────

#[cfg(test)]
mod city_map {
    use inv_core::{CityId, Direction};

    use crate::{CityMap, CityMapBuilder};

    #[test]
    fn empty_build() {
        let map = CityMap::empty();
        assert_eq!(map.city_count(), 0);
        assert_eq!(map.route_count(), 0);
        assert!(map.is_empty());
        assert_eq!(map.cities().count(), 0);
    }

    #[test]
    fn builder_interns_names() {
        let mut b = CityMapBuilder::new();
        let a = b.add_city("foo");
        let again = b.add_city("foo");
        assert_eq!(a, again);
        assert_eq!(b.city_count(), 1);
    }

    #[test]
    fn routes_from_standing_city() {
        let (map, [foo, bar, baz, _]) = super::helpers::sample_map();
        let routes = map.routes_from(foo);
        assert_eq!(routes.len(), 2);
        assert_eq!(routes.get(Direction::North), Some(bar));
        assert_eq!(routes.get(Direction::West), Some(baz));
        assert_eq!(map.route_count(), 5);
    }

    #[test]
    fn dead_end_has_no_routes() {
        let (map, [_, _, _, bee]) = super::helpers::sample_map();
        assert!(map.contains(bee));
        assert!(map.routes_from(bee).is_empty());
    }

    #[test]
    fn unknown_city_has_no_routes() {
        let (map, _) = super::helpers::sample_map();
        assert!(!map.contains(CityId(99)));
        assert!(map.routes_from(CityId(99)).is_empty());
        assert!(map.routes_from(CityId::INVALID).is_empty());
        assert_eq!(map.name(CityId(99)), None);
    }

    #[test]
    fn name_and_id_lookup() {
        let (map, [foo, ..]) = super::helpers::sample_map();
        assert_eq!(map.name(foo), Some("foo"));
        assert_eq!(map.id("foo"), Some(foo));
        assert_eq!(map.id("nowhere"), None);
    }

    #[test]
    fn display_uses_file_format() {
        let (map, _) = super::helpers::sample_map();
        let rendered = map.to_string();
        let lines: Vec<_> = rendered.lines().collect();
        assert_eq!(
            lines,
            [
                "foo north=bar west=baz",
                "bar south=foo west=bee",
                "baz east=foo",
                "bee",
            ]
        );
    }
}

// ── City removal ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod removal {
    use inv_core::Direction;

    use super::helpers::{assert_no_edges_touch, sample_map};
    use crate::CityMapBuilder;

    #[test]
    fn removes_incoming_and_outgoing_routes() {
        let (mut map, [foo, bar, baz, bee]) = sample_map();
        assert!(map.remove_city(foo));

        assert!(!map.contains(foo));
        assert_eq!(map.city_count(), 3);
        assert_no_edges_touch(&map, foo);

        // bar keeps its unrelated route, baz loses its only one.
        assert_eq!(map.routes_from(bar).get(Direction::West), Some(bee));
        assert_eq!(map.routes_from(bar).len(), 1);
        assert!(map.routes_from(baz).is_empty());
        assert_eq!(map.route_count(), 1);
    }

    #[test]
    fn removal_is_idempotent() {
        let (mut map, [foo, ..]) = sample_map();
        assert!(map.remove_city(foo));
        let once = map.to_string();
        assert!(!map.remove_city(foo));
        assert_eq!(map.to_string(), once);
        assert_eq!(map.city_count(), 3);
    }

    #[test]
    fn removed_city_keeps_its_name() {
        let (mut map, [foo, ..]) = sample_map();
        map.remove_city(foo);
        assert_eq!(map.name(foo), Some("foo"));
        assert_eq!(map.id("foo"), Some(foo));
    }

    #[test]
    fn self_loop_is_cleaned_up() {
        let mut b = CityMapBuilder::new();
        let a = b.add_city("loop");
        let c = b.add_city("other");
        b.add_route(a, Direction::North, a);
        b.add_route(c, Direction::South, a);
        let mut map = b.build();

        map.remove_city(a);
        assert_no_edges_touch(&map, a);
        assert_eq!(map.route_count(), 0);
    }

    #[test]
    fn removing_every_city_empties_the_map() {
        let (mut map, cities) = sample_map();
        for c in cities {
            map.remove_city(c);
        }
        assert!(map.is_empty());
        assert_eq!(map.route_count(), 0);
        assert_eq!(map.to_string(), "");
    }

    #[test]
    fn later_removal_after_neighbour_removed() {
        // Removing bar after foo must not trip over foo's scrubbed routes.
        let (mut map, [foo, bar, baz, bee]) = sample_map();
        map.remove_city(foo);
        map.remove_city(bar);
        assert_no_edges_touch(&map, bar);
        assert!(map.contains(baz));
        assert!(map.contains(bee));
        assert_eq!(map.route_count(), 0);
    }
}

// ── Property tests ────────────────────────────────────────────────────────────

#[cfg(test)]
mod properties {
    use inv_core::{CityId, Direction};
    use proptest::prelude::*;

    use crate::{CityMap, CityMapBuilder};

    fn arb_map() -> impl Strategy<Value = CityMap> {
        (1usize..10).prop_flat_map(|n| {
            prop::collection::vec((0..n, 0usize..4, 0..n), 0..40).prop_map(move |edges| {
                let mut b = CityMapBuilder::new();
                let ids: Vec<CityId> = (0..n).map(|i| b.add_city(&format!("c{i}"))).collect();
                for (from, d, to) in edges {
                    b.add_route(ids[from], Direction::ALL[d], ids[to]);
                }
                b.build()
            })
        })
    }

    proptest! {
        #[test]
        fn no_route_touches_removed_city(mut map in arb_map(), pick in 0usize..10) {
            let city = CityId((pick % map.city_count()) as u32);
            map.remove_city(city);
            prop_assert!(!map.contains(city));
            prop_assert!(map.routes_from(city).is_empty());
            for c in map.cities() {
                prop_assert!(!map.routes_from(c).leads_to(city));
            }
        }

        #[test]
        fn removing_twice_equals_removing_once(mut map in arb_map(), pick in 0usize..10) {
            let city = CityId((pick % map.city_count()) as u32);
            map.remove_city(city);
            let once = (map.to_string(), map.city_count(), map.route_count());
            map.remove_city(city);
            prop_assert_eq!(once, (map.to_string(), map.city_count(), map.route_count()));
        }

        #[test]
        fn other_routes_survive_removal(map in arb_map(), pick in 0usize..10) {
            let city = CityId((pick % map.city_count()) as u32);
            let mut after = map.clone();
            after.remove_city(city);
            for c in after.cities() {
                for (d, to) in map.routes_from(c).iter() {
                    if to != city {
                        prop_assert_eq!(after.routes_from(c).get(d), Some(to));
                    }
                }
            }
        }
    }
}

// ── Loader ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod loader {
    use std::io::{Cursor, Write};

    use inv_core::Direction;

    use crate::{CityLine, MapError, load_city_map, load_city_map_reader, parse_line};

    #[test]
    fn parse_line_folds_case_and_whitespace() {
        let parsed = parse_line(1, "Bar south=Foo   west=Bee").unwrap().unwrap();
        assert_eq!(
            parsed,
            CityLine {
                city:   "bar".into(),
                routes: vec![
                    (Direction::South, "foo".into()),
                    (Direction::West, "bee".into()),
                ],
            }
        );
    }

    #[test]
    fn parse_line_uppercase_direction() {
        let parsed = parse_line(1, "\tQu-ux NORTH=Foo ").unwrap().unwrap();
        assert_eq!(parsed.city, "qu-ux");
        assert_eq!(parsed.routes, vec![(Direction::North, "foo".to_string())]);
    }

    #[test]
    fn parse_line_city_without_routes() {
        let parsed = parse_line(1, "Bee").unwrap().unwrap();
        assert_eq!(parsed.city, "bee");
        assert!(parsed.routes.is_empty());
    }

    #[test]
    fn blank_line_is_skipped() {
        assert_eq!(parse_line(1, "").unwrap(), None);
        assert_eq!(parse_line(1, "   \t ").unwrap(), None);
    }

    #[test]
    fn missing_separator_rejected() {
        let err = parse_line(7, "Foo north").unwrap_err();
        match err {
            MapError::Parse { line, .. } => assert_eq!(line, 7),
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn malformed_pairs_rejected() {
        assert!(parse_line(1, "Foo north=").is_err());
        assert!(parse_line(1, "Foo up=Bar").is_err());
        assert!(parse_line(1, "Foo north=Bar=Baz").is_err());
        assert!(parse_line(1, "north=Bar").is_err());
    }

    #[test]
    fn load_registers_destination_only_cities() {
        let text = "Foo north=Bar west=Baz south=Qu-ux\nBar south=Foo west=Bee\n";
        let map = load_city_map_reader(Cursor::new(text)).unwrap();
        assert_eq!(map.city_count(), 5);
        let bee = map.id("bee").unwrap();
        assert!(map.contains(bee));
        assert!(map.routes_from(bee).is_empty());
        assert_eq!(map.route_count(), 5);
    }

    #[test]
    fn later_line_replaces_routes() {
        let text = "Foo north=Bar\nFoo south=Baz\n";
        let map = load_city_map_reader(Cursor::new(text)).unwrap();
        let foo = map.id("foo").unwrap();
        let routes = map.routes_from(foo);
        assert_eq!(routes.len(), 1);
        assert_eq!(routes.get(Direction::South), map.id("baz"));
    }

    #[test]
    fn repeated_direction_keeps_last() {
        let map = load_city_map_reader(Cursor::new("Foo north=Bar north=Baz\n")).unwrap();
        let foo = map.id("foo").unwrap();
        assert_eq!(map.routes_from(foo).get(Direction::North), map.id("baz"));
    }

    #[test]
    fn empty_input_rejected() {
        assert!(matches!(load_city_map_reader(Cursor::new("")), Err(MapError::Empty)));
        assert!(matches!(load_city_map_reader(Cursor::new("\n  \n")), Err(MapError::Empty)));
    }

    #[test]
    fn bad_line_aborts_load() {
        let text = "Foo north=Bar\nBar south\n";
        match load_city_map_reader(Cursor::new(text)) {
            Err(MapError::Parse { line, .. }) => assert_eq!(line, 2),
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "Foo south=Bar").unwrap();
        writeln!(file, "Bar north=Foo").unwrap();
        let map = load_city_map(file.path()).unwrap();
        assert_eq!(map.city_count(), 2);
        assert_eq!(map.to_string(), "foo south=bar\nbar north=foo\n");
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_city_map(&dir.path().join("missing.txt"));
        assert!(matches!(result, Err(MapError::Io(_))));
    }
}
