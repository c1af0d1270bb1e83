//! Guild headquarters placement rules.
//!
//! A guild may set one headquarters location. Every headquarters is protected
//! by a radius that grows with the owning guild's level, and no other guild
//! may place its headquarters strictly inside that radius.

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod infrastructure;
pub mod util;
