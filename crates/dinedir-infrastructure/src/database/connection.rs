//! Document store client construction

use std::time::Duration;

use mongodb::options::ClientOptions;
use mongodb::Client;

/// Builds the store client. Construction is explicit: the caller owns the
/// lifecycle, opening the client at startup and shutting it down on exit.
pub async fn create_client(uri: &str) -> Result<Client, mongodb::error::Error> {
    let mut options = ClientOptions::parse(uri).await?;
    options.max_pool_size = Some(10);
    options.connect_timeout = Some(Duration::from_secs(5));
    Client::with_options(options)
}
