//! # affiche-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve a **REST JSON API** for programmatic access
//!   (`/api/posters`, `/api/extract-date`)
//! - Serve a **server-side-rendered HTML dashboard** that works with
//!   **zero JavaScript** — pure HTML forms, POST-redirect-GET
//! - Map HTTP requests into application service calls (driving adapter)
//! - Map application results into HTTP responses (JSON or HTML)
//!
//! ## No-JS dashboard approach
//! - Every page is rendered server-side as complete HTML (askama templates).
//! - The add/edit/delete controls are `<form>` elements that POST back to
//!   the server and redirect (PRG pattern).
//! - Validation failures re-render the form with a message and the values
//!   the user entered.
//!
//! ## Dependency rule
//! Depends on `affiche-app` (for port traits and services) and
//! `affiche-domain` (for domain types used in request/response mapping).
//! Never leaks axum types into the domain.

pub mod api;
pub mod dashboard;
pub mod error;
pub mod router;
pub mod state;
