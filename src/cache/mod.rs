//! Cache module for storing raw API responses in memory
//!
//! This module provides a time-expiring byte cache keyed by request URL. A
//! background reaper task periodically sweeps the map and evicts entries
//! older than the configured interval, shielding the remote API from
//! repeated identical requests without keeping stale data around forever.

mod store;

pub use store::Cache;
