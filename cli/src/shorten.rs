//! Sequential batch submission through one form.
//!
//! Each URL goes through the same `FormState` a browser form would use, so
//! validation, notice text, and result handling match the web UI exactly.
//! Short URLs go to `out`, notices to `err`.

#[cfg(test)]
#[path = "shorten_test.rs"]
mod shorten_test;

use std::io::{self, BufRead, Write};

use shortener::{Endpoint, FormState, ResultSlot, Transport};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Summary {
    pub succeeded: usize,
    pub failed: usize,
    /// Result value after the last successful submission.
    pub last: Option<String>,
}

impl Summary {
    pub fn total(&self) -> usize {
        self.succeeded + self.failed
    }
}

/// One URL per line. Blank lines are skipped; every other line is kept
/// verbatim, surrounding whitespace included, as a typed draft would be.
pub fn read_urls(reader: impl BufRead) -> Result<Vec<String>, io::Error> {
    let mut urls = Vec::new();
    for line in reader.lines() {
        let line = line?;
        if !line.trim().is_empty() {
            urls.push(line);
        }
    }
    Ok(urls)
}

pub async fn shorten_all<T: Transport>(
    transport: &T,
    endpoint: &Endpoint,
    urls: &[String],
    out: &mut impl Write,
    err: &mut impl Write,
) -> Result<Summary, io::Error> {
    let mut form = FormState::new();
    let mut slot = ResultSlot::new();
    let mut summary = Summary::default();

    for url in urls {
        form.set_draft(url.as_str());
        let mut on_result = |short_url: String| slot.set(short_url);
        match form.submit(transport, endpoint, Some(&mut on_result)).await {
            Ok(short_url) => {
                summary.succeeded += 1;
                writeln!(out, "{short_url}")?;
            }
            Err(e) => {
                summary.failed += 1;
                writeln!(err, "{url}: {}", e.notice())?;
            }
        }
    }

    summary.last = slot.display().map(str::to_owned);
    Ok(summary)
}
