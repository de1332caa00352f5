// file: src/directory/mod.rs
// description: directory service lookup abstraction and http client
// reference: internal module structure

mod client;
mod response;

pub use client::{DirectoryClient, LookupError, encode_name};
pub use response::{DirectoryResponse, extract_mail};

use crate::models::LookupResult;
use async_trait::async_trait;

/// Resolves a display name to the addresses the directory holds for it.
///
/// Implementations never fail: any problem reaching or reading the directory
/// is reported as [`LookupResult::NotFound`] so one bad name cannot stop a
/// batch.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DirectoryLookup: Send + Sync {
    async fn lookup(&self, name: &str) -> LookupResult;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn test_lookup_through_trait_object() {
        let mut mock = MockDirectoryLookup::new();
        mock.expect_lookup()
            .returning(|name| LookupResult::Found(format!("{}@ex.com", name.to_lowercase())));

        let lookup: Arc<dyn DirectoryLookup> = Arc::new(mock);
        let result = tokio_test::block_on(lookup.lookup("Ann"));

        assert_eq!(result, LookupResult::Found("ann@ex.com".to_string()));
    }
}
