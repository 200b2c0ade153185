/*
 * Responsibility
 * - ガードの後ろで配信するページ (JSON) と公開 API
 * - routes() の re-export
 */
pub mod dto;
pub mod extractors;
pub mod handlers;
mod routes;

pub use routes::routes;
