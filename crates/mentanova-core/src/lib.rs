//! # Mentanova Core
//!
//! Shared, I/O-free logic for the Mentanova client: data models, the
//! customization record, brand palette math, the session store
//! abstraction, and the navigation trait.
//!
//! This crate contains no tokio, HTTP, or filesystem dependencies.

pub mod customization;
pub mod models;
pub mod navigation;
pub mod palette;
pub mod store;
