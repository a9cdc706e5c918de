//! Domain logic - pure rules independent of GitHub and Notion I/O

pub mod history;
pub mod release;
pub mod release_type;
pub mod version;

pub use history::previous_tag;
pub use release::{Release, ReleaseAuthor, ReleaseEvent};
pub use release_type::ReleaseType;
pub use version::Version;
