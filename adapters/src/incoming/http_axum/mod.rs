#[cfg(feature = "docs")]
pub mod docs;

pub(crate) mod error_mapper;

pub mod dto;
pub mod handlers;
pub mod routes;
