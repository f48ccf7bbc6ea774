//! Validated construction of an `AlienStore` from a list of names.
//!
//! # Usage
//!
//! ```rust
//! use inv_alien::AlienStoreBuilder;
//!
//! let names = vec!["Xul".to_string(), "Zorg".to_string(), "Blip".to_string()];
//! let store = AlienStoreBuilder::new(names).limit(2).build().unwrap();
//!
//! assert_eq!(store.count, 2);
//! assert_eq!(store.name(inv_core::AlienId(1)), "Zorg");
//! ```

use std::collections::HashMap;

use inv_core::AlienId;

use crate::{AlienError, AlienResult, AlienStore};

/// Fluent builder for [`AlienStore`].
///
/// Every alien starts active but unplaced (`CityId::INVALID`, zero steps);
/// the simulation builder places them on the map.
pub struct AlienStoreBuilder {
    names: Vec<String>,
    limit: Option<usize>,
}

impl AlienStoreBuilder {
    /// Create a builder over the available names, in roster order.
    pub fn new(names: Vec<String>) -> Self {
        Self { names, limit: None }
    }

    /// Only enlist the first `n` names.  Building fails if fewer than `n`
    /// are available.
    pub fn limit(mut self, n: usize) -> Self {
        self.limit = Some(n);
        self
    }

    /// Validate the roster and construct the store.
    pub fn build(mut self) -> AlienResult<AlienStore> {
        if let Some(n) = self.limit {
            if n > self.names.len() {
                return Err(AlienError::NotEnoughNames {
                    requested: n,
                    available: self.names.len(),
                });
            }
            self.names.truncate(n);
        }

        let mut ids = HashMap::with_capacity(self.names.len());
        for (i, name) in self.names.iter().enumerate() {
            if ids.insert(name.clone(), AlienId::from_index(i)).is_some() {
                return Err(AlienError::DuplicateName(name.clone()));
            }
        }

        Ok(AlienStore::new(self.names, ids))
    }
}
