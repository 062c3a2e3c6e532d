//! Sign dictionary lookup for NZSL glosses.
//!
//! Maps the gloss words produced by `nzsl_gloss` to signs in the NZSL
//! dictionary, with tolerant matching for plural and inflected forms.
//!
//! # Modules
//!
//! - [`record`] - Sign records as published by Signbank
//! - [`index`] - Word index, lookup, and search
//! - [`store`] - JSON and `MessagePack` index files
//! - [`media`] - Video and image locations

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod index;
pub mod media;
pub mod record;
pub mod store;

pub use index::{MIN_SEARCH_LEN, SEARCH_LIMIT, SignIndex, SignMatch};
pub use media::{MediaLinks, SIGNBANK_MEDIA_URL};
pub use record::{Gloss, SignId, SignRecord};
pub use store::IndexFile;
