pub mod prompts;

pub use prompts::{DialoguerPrompter, FieldPrompter};
