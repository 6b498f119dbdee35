//! scrollfeed library exports for testing

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

pub mod core;
pub mod feed;
pub mod headless;
pub mod tui;

#[cfg(test)]
pub mod test_support;

/// Where feed content comes from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    /// `GET {base_url}/content/feed`
    #[default]
    Http,
    /// Built-in list of URLs served one at a time, no network for the feed itself
    Rotating,
}
