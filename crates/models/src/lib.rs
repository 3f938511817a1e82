//! Wire-level data models shared by the API client and the screens.
//! - Request payloads use the backend's camelCase field names.
//! - Catalog documents mirror the backend's Mongo-style shapes.

pub mod auth;
pub mod catalog;
