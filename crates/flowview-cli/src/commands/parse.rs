use std::io::{self, Read};
use std::path::Path;

use anyhow::{Context, Result};
use flowview::wire::{load_transcript, transcript_from_str};

use super::Output;

/// Render a transcript already saved to disk, or piped in when the path is `-`
pub fn execute(path: &Path, output: &Output) -> Result<()> {
    let messages = if path == Path::new("-") {
        let mut text = String::new();
        io::stdin()
            .read_to_string(&mut text)
            .context("Failed to read transcript from stdin")?;
        transcript_from_str(&text)?
    } else {
        load_transcript(path)
            .with_context(|| format!("Failed to load transcript from {}", path.display()))?
    };

    output.show(&messages)
}
