//! # affiche-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `PosterRepository` — CRUD for posters, listed ascending by date
//!   - `DateExtractor` — best-effort date detection from an image payload
//! - Define **driving/inbound ports** as use-case structs:
//!   - `PosterService` — create, get, list, replace, delete
//!   - `ExtractionService` — extract a date from an uploaded image
//! - Provide **in-process infrastructure** (the heuristic extractor) that
//!   doesn't need IO
//! - Orchestrate domain objects without knowing *how* persistence works
//!
//! ## Dependency rule
//! Depends on `affiche-domain` only.
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod extractor;
pub mod ports;
pub mod services;
