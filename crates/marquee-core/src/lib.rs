//! marquee-core – in-memory movie catalog.
//!
//! The crate owns the movie records and every rule applied to them:
//!
//! - [`store`]: the [`CatalogStore`] contract and its in-process
//!   implementation [`MemoryCatalog`].
//! - [`rating`]: average / count derivation from a rating list.
//! - [`validation`]: input predicates for ratings and reviews.
//! - [`search`]: case-insensitive title / genre matching.
//! - [`seed`]: the fixed catalog loaded at process start.
//!
//! Nothing here knows about HTTP; callers hand in already-parsed primitive
//! fields and get back owned views or a [`CatalogError`].

pub mod error;
pub mod model;
pub mod rating;
pub mod search;
pub mod seed;
pub mod store;
pub mod validation;

pub use error::CatalogError;
pub use model::{MovieRecord, MovieView, RatingSummary, Review, ReviewResult};
pub use store::{CatalogStore, MemoryCatalog};
