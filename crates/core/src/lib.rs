#[cfg(feature = "fetch")]
pub mod batch;
pub mod cache;
pub mod error;
pub mod extract;
pub mod fetch;
pub mod optimize;

#[cfg(feature = "fetch")]
pub use batch::{LinkContent, LinkProcessor, ProcessorConfig};
pub use cache::LookupCache;
pub use error::{RecorteError, Result};
pub use extract::extract_text;
#[cfg(feature = "fetch")]
pub use fetch::{build_client, fetch_url};
pub use fetch::{FetchConfig, FetchedPage, fetch_file, fetch_stdin};
pub use optimize::{OptimizeConfig, optimize_content, optimize_content_with_config};
