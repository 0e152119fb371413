//! Repository abstraction used when finalizing
//!
//! The finalizer only needs two facts about the repository the changelog
//! lives in: whether it is hosted on a recognised platform, and the base URL
//! that compare and tree links are built from.
//!
//! - [repository::Git2Repository]: reads the remote URL with the `git2` crate
//! - [mock::MockRepository]: a fixed answer for testing
//!
//! ```rust
//! # use changelog_publish::git::{MockRepository, Repository};
//! let repo = MockRepository::hosted("https://github.com/owner/repo");
//! assert!(repo.is_hosted());
//! assert_eq!(repo.url_base(), "https://github.com/owner/repo");
//! ```

pub mod mock;
pub mod remote;
pub mod repository;

pub use mock::MockRepository;
pub use remote::RemoteUrl;
pub use repository::Git2Repository;

/// Source repository the changelog belongs to
///
/// ## Implementations
///
/// - [Git2Repository](repository::Git2Repository): Real Git implementation using the `git2` crate
/// - [MockRepository](mock::MockRepository): Test implementation
pub trait Repository {
    /// Whether the repository is hosted on a platform that serves
    /// `/compare/A...B` and `/tree/TAG` pages
    fn is_hosted(&self) -> bool;

    /// Base URL for links, without a trailing slash
    fn url_base(&self) -> &str;
}
