pub mod clear_cache;
pub mod init;
pub mod status;

pub use clear_cache::clear_cache_command;
pub use init::{InitArgs, init_command};
pub use status::status_command;
