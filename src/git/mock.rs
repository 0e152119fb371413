use crate::git::Repository;

/// Mock repository for testing without a git checkout
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MockRepository {
    url_base: String,
    hosted: bool,
}

impl MockRepository {
    /// A repository on a recognised hosting platform
    pub fn hosted(url_base: impl Into<String>) -> Self {
        MockRepository {
            url_base: url_base.into(),
            hosted: true,
        }
    }

    /// A repository without a hosting platform
    pub fn local(url_base: impl Into<String>) -> Self {
        MockRepository {
            url_base: url_base.into(),
            hosted: false,
        }
    }
}

impl Repository for MockRepository {
    fn is_hosted(&self) -> bool {
        self.hosted
    }

    fn url_base(&self) -> &str {
        &self.url_base
    }
}
