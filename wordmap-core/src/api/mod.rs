//! High-level API for word frequency analysis
//!
//! [`WordMap`] counts words across documents, ranks them and searches the
//! counted vocabulary with the bad-character matcher. Settings come from
//! [`Config`], built with [`ConfigBuilder`].

pub mod config;
pub mod error;
pub mod word_map;

pub use config::{defaults, Config, ConfigBuilder};
pub use error::{Error, Result};
pub use word_map::WordMap;
