//! Discord wire types, webhook/REST client, and interaction signature checks

pub mod client;
pub mod signature;
pub mod types;

pub use client::DiscordClient;
pub use signature::{verify_signature, SignatureError};
