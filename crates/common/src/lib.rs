//! Shared building blocks for the storefront client.
//! - Wire envelope types mirroring the backend's response contract.
//! - Localized message catalog for all user-facing text.
//! - Pagination helpers and logging initialization.

pub mod i18n;
pub mod pagination;
pub mod types;
pub mod utils;
