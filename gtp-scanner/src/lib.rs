pub mod error;
pub mod extract;
pub mod fetch;
pub mod result;
pub mod topic;
pub mod walker;

pub use error::WalkError;
pub use extract::LinkFilter;
pub use fetch::{HttpFetcher, PageFetch};
pub use result::{Walk, WalkOutcome};
pub use topic::Topic;
pub use walker::{ProgressCallback, Walker, default_terminal_labels};
