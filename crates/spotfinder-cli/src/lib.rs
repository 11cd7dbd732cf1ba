//! spotfinder-cli
//! ==============
//!
//! Command-line interface for the `spotfinder-core` proximity search engine.
//!
//! This crate primarily provides a binary (`spotfinder`). The library target
//! exists so that docs.rs renders this overview.
//!
//! Quick start
//! -----------
//!
//! ```text
//! cargo install spotfinder-cli
//! spotfinder --help
//! spotfinder -c spots.json search --q onsen --tags outdoor --lat 35.47 --lng 133.05 -r 10
//! spotfinder -c spots.json stats
//! spotfinder distance 35.4681 133.0486 35.4231 133.0100
//! ```
//!
//! For programmatic access use [`spotfinder-core`] directly.
#![cfg_attr(docsrs, feature(doc_cfg))]
