//! Interactive link chooser

use std::io::{self, Write};

use capgraph_lib::chooser::LinkChooser;
use capgraph_lib::error::Result;
use capgraph_lib::models::Link;

/// Terminal prompt that keeps asking until a valid 1-based link number is
/// entered.
pub struct PromptChooser;

impl LinkChooser for PromptChooser {
    fn choose(&self, links: &[Link]) -> Result<usize> {
        let mut input = String::new();
        loop {
            print!("Select a link (1 - {}): ", links.len());
            io::stdout().flush()?;
            input.clear();
            if io::stdin().read_line(&mut input)? == 0 {
                return Err(io::Error::new(
                    io::ErrorKind::UnexpectedEof,
                    "stdin closed during link selection",
                )
                .into());
            }
            if let Ok(choice) = input.trim().parse::<usize>() {
                if (1..=links.len()).contains(&choice) {
                    return Ok(choice - 1);
                }
            }
        }
    }
}
