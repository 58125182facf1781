//! Objectives over index arrangements backed by a [`RelationTable`].
//!
//! - [`LinearPath`]: total distance along an open route
//! - [`Circular`]: total neighbour relation around a closed cycle
//!
//! Both implement [`ScoreFn<usize>`](crate::search::ScoreFn) and only
//! borrow the table, so one table can back any number of searches.
//!
//! [`RelationTable`]: crate::relation::RelationTable

mod circular;
mod linear;

pub use circular::Circular;
pub use linear::LinearPath;
