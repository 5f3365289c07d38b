pub mod client;

pub use client::{TokenResponse, XsuaaAuthClient, token_url};
