//! Umbrella crate that re-exports the `campaign-*` building blocks.
//!
//! This crate is intended as a convenient entrypoint for users.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

#[cfg(feature = "core")]
#[cfg_attr(docsrs, doc(cfg(feature = "core")))]
pub use campaign_core as core;

#[cfg(feature = "search")]
#[cfg_attr(docsrs, doc(cfg(feature = "search")))]
pub use campaign_search as search;

#[cfg(feature = "mission")]
#[cfg_attr(docsrs, doc(cfg(feature = "mission")))]
pub use campaign_mission as mission;
