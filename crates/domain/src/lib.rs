//! # affiche-domain
//!
//! Pure domain model for the affiche event-poster catalog.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers, error conventions, timestamps
//! - Define the **Poster** entity (title, date, location, embedded image)
//! - Define the **ImageData** value object (inline base64 data URI)
//! - Month/year **grouping** of the date-sorted collection for the list view
//! - **Calendar** month grids with marked days for the calendar view
//! - Best-effort date **extraction** from image payload bytes
//! - Contain all invariant enforcement and domain logic
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;
pub mod time;

pub mod calendar;
pub mod extract;
pub mod grouping;
pub mod image;
pub mod poster;
