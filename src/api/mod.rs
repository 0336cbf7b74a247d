pub mod streme;

use std::future::Future;

use crate::error::Result;
use streme::TokenRecord;

/// Anything that can list token records for a contract address.
pub trait TokenSource: Send + Sync + 'static {
    fn fetch_tokens(&self, address: &str) -> impl Future<Output = Result<Vec<TokenRecord>>> + Send;
}
