//! `inv-alien` — Structure-of-Arrays storage for the alien roster.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                  |
//! |-------------|-----------------------------------------------------------|
//! | [`store`]   | `AlienStore` (names, positions, step counts)              |
//! | [`builder`] | `AlienStoreBuilder` (validated construction from names)   |
//! | [`loader`]  | `load_names`, `load_names_reader`                         |
//! | [`error`]   | `AlienError`, `AlienResult<T>`                            |

pub mod builder;
pub mod error;
pub mod loader;
pub mod store;


pub use builder::AlienStoreBuilder;
pub use error::{AlienError, AlienResult};
pub use loader::{load_names, load_names_reader};
pub use store::AlienStore;
