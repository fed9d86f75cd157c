//! unbang: fast bang redirects
//!
//! A library for resolving bang queries such as `!w rust` to search
//! engine URLs, using a remotely published bang list that is cached
//! locally and refreshed once it goes stale.

pub mod bangs;
pub mod cache;
pub mod config;
pub mod fetch;
pub mod link;
pub mod resolve;
pub mod session;
pub mod store;
pub mod time;
