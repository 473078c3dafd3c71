// Include handlers module directly from handlers.rs
#[path = "handlers.rs"]
pub mod handlers;

// Re-export commonly used handler functions for convenience
pub use handlers::{DEFAULT_TOPICS, default_topics, dot_available, output_filename};

// Re-export run functionality from gtp-core
pub use gtp_core::{SeedOutcome, WalkOptions, execute_walks, generate_walk_report};
