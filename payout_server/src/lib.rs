//! # Nile Payout Server
//! This crate hosts the HTTP server for the Nile Payout System. It is responsible for:
//! Registering vendors and checking their credentials.
//! Recording vendor orders and marking them as completed.
//! Answering payout requests, which also triggers an emailed PDF copy of the payout summary.
//!
//! ## Configuration
//! The server is configured via environment variables. See [config](config/index.html) for more information.
//!
//! ## Routes
//! The server exposes the following routes:
//! * `GET /health`: A health check route.
//! * `POST /auth/register`, `POST /auth/login`: Vendor accounts. Both respond with an access token.
//! * `POST /orders`, `PATCH /orders/{order_id}/status`: Vendor orders.
//! * `GET /payouts/{vendor_id}`: The payout summary for a vendor.
//!
//! Order and payout routes require an `Authorization: Bearer <token>` header. See [auth](auth/index.html).
pub mod auth;
pub mod cli;
pub mod config;
pub mod data_objects;
pub mod errors;
pub mod routes;
pub mod server;

#[cfg(test)]
mod endpoint_tests;
