//! Cross-cutting helpers: configuration, formatting, platform glue and the
//! single persisted display preference.

pub mod config;
pub mod format;
pub mod platform;
pub mod preferences;
pub mod storage;
