//! Link selection capability
//!
//! When a site has more than one internet circuit the pipeline asks a
//! chooser for the index to use, so a terminal prompt and a deterministic
//! test double are interchangeable.

use crate::error::Result;
use crate::models::Link;

pub trait LinkChooser {
    /// Pick an index into `links`. Only called with two or more options.
    fn choose(&self, links: &[Link]) -> Result<usize>;
}

/// Non-interactive chooser: always takes the first link.
pub struct FirstLink;

impl LinkChooser for FirstLink {
    fn choose(&self, _links: &[Link]) -> Result<usize> {
        Ok(0)
    }
}
