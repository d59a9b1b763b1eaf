pub mod git;
pub mod interface;
pub mod local;

pub use git::GitFetcher;
pub use interface::TemplateFetcher;
pub use local::LocalFetcher;
