//! Refresh the SAP Build Work Zone HTML5 content provider cache from the
//! command line: store tenant credentials once, then trigger the refresh with
//! an XSUAA password-grant token.

pub mod auth;
pub mod cli;
pub mod config;
pub mod error;
pub mod ui;
pub mod workzone;

pub use error::{HttpFailure, Result, WzError};
