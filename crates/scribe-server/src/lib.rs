//! Bookmark API server: routes, authentication, DTOs, and versioned OpenAPI documents.

pub mod auth;
pub mod config;
pub mod dto;
pub mod error;
pub mod openapi;
pub mod routes;
pub mod state;
pub mod store;
