//! Session user entities.

pub mod model;

pub use model::SessionUser;
