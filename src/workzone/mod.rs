//! SAP Build Work Zone API calls

pub mod client;

pub use client::{ClearCacheOutcome, ClearCacheRequest, WorkZoneClient};
