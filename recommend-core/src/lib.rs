#![deny(clippy::all, clippy::pedantic, clippy::nursery)]

//! Bootstrap and identity core for the Recommend SDK.
//!
//! Host applications construct a [`RecommendCore`] from a
//! [`RecommendConfiguration`] and a platform-provided [`storage::PlatformProvider`].
//! The core validates the configuration, wires the customer-info cache and the
//! API client, and resolves the durable device identifier and first-launch
//! state from the two platform storage tiers.

mod api;
pub use api::*;

mod config;
pub use config::*;

mod core;
pub use self::core::*;

mod customer_info;
pub use customer_info::*;

mod error;
pub use error::*;

pub mod logger;

pub mod storage;

uniffi::setup_scaffolding!("recommend_core");
