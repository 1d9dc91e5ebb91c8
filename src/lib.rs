//! LinkedIn Integration Bridge Library
//!
//! This library provides the core functionality for the LinkedIn integration
//! bridge: inbound lead-capture webhook handling with HMAC signature
//! verification, and outbound reaction calls to the LinkedIn REST API.
//!
//! # Modules
//!
//! - `config`: Configuration management.
//! - `errors`: Error handling types.
//! - `handlers`: Application state, health check, and router construction.
//! - `linkedin_client`: LinkedIn REST API client.
//! - `payload`: Best-effort field extraction from nested payloads.
//! - `reaction_handler`: Outbound reaction endpoint handler.
//! - `reaction_models`: Reaction payload models.
//! - `signature`: Webhook signature verification.
//! - `webhook_handler`: Lead capture webhook handler.

pub mod config;
pub mod errors;
pub mod handlers;
pub mod linkedin_client;
pub mod payload;
pub mod reaction_handler;
pub mod reaction_models;
pub mod signature;
pub mod webhook_handler;
