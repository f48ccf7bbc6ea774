//! `inv-map` — the city graph the aliens roam and destroy.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                   |
//! |--------------|------------------------------------------------------------|
//! | [`city_map`] | `CityMap` (mutable graph), `CityMapBuilder`, `Routes`      |
//! | [`loader`]   | `load_city_map`, `load_city_map_reader`, `parse_line`      |
//! | [`error`]    | `MapError`, `MapResult<T>`                                 |

pub mod city_map;
pub mod error;
pub mod loader;

#[cfg(test)]
mod tests;

pub use city_map::{CityMap, CityMapBuilder, Routes};
pub use error::{MapError, MapResult};
pub use loader::{CityLine, load_city_map, load_city_map_reader, parse_line};
