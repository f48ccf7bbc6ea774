//! Strongly typed, zero-cost identifier wrappers.
//!
//! Cities and aliens are named by strings in the input files; the loaders
//! intern those names into dense integer ids so every per-entity table can
//! be a plain `Vec` indexed by `id.index()`.

use std::fmt;

/// Generate a dense `u32` id with an `INVALID` sentinel and a display
/// prefix (`CityId(3)` prints as `city#3`).
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident => $label:literal;) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub u32);

        impl $name {
            /// Sentinel for "not on the map" / "not in the roster".
            pub const INVALID: $name = $name(u32::MAX);

            /// Id of the `i`-th interned entry.
            ///
            /// Interners hand out at most `u32::MAX` ids; anything past
            /// that collapses to `INVALID`.
            #[inline]
            pub fn from_index(i: usize) -> Self {
                u32::try_from(i).map_or(Self::INVALID, $name)
            }

            #[inline(always)]
            pub fn index(self) -> usize {
                self.0 as usize
            }

            #[inline]
            pub fn is_valid(self) -> bool {
                self != Self::INVALID
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::INVALID
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                if self.is_valid() {
                    write!(f, concat!($label, "#{}"), self.0)
                } else {
                    f.write_str(concat!($label, "#invalid"))
                }
            }
        }
    };
}

typed_id! {
    /// Index of an alien in the roster, in name-file order.
    pub struct AlienId => "alien";
}

typed_id! {
    /// Index of a city in the city map, in first-seen order.
    ///
    /// Ids are never reused: a destroyed city keeps its slot so that ids held
    /// by aliens and reports stay meaningful for the whole run.
    pub struct CityId => "city";
}
