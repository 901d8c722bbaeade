//! Nlytical service metadata API library
//!
//! Server side of the store/service detail pages: decodes the route
//! identifier, resolves document-head metadata from the directory API and
//! renders the page shell. Also hosts the business dashboard's social-links
//! quick link.
//!
//! # Modules
//!
//! - `api`: HTTP-facing components.
//! - `core`: Metadata resolution and page rendering.
//! - `integrations`: Directory API client.
//! - `config`: Configuration management.
//! - `directory_client`: Directory REST API client.
//! - `errors`: Error handling types.
//! - `handlers`: HTTP request handlers and router.
//! - `head`: Document head rendering.
//! - `identifier`: Route identifier encoding.
//! - `models`: Directory records, page metadata and quick-link payloads.
//! - `resolver`: Page metadata resolution with fallbacks.
//! - `social_links`: Social-links quick link.

pub mod api;
pub mod core;
pub mod integrations;

pub mod config;
pub mod directory_client;
pub mod errors;
pub mod handlers;
pub mod head;
pub mod identifier;
pub mod models;
pub mod resolver;
pub mod social_links;
