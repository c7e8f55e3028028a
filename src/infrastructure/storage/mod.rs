//! Photo storage backends.
//!
//! - [`LocalImageStore`] - Files in a local directory, served under `/images`

mod local_image_store;

pub use local_image_store::LocalImageStore;
