//! Link collector: writes online service link URLs to an output sink.

use std::io::Write;

use crate::error::Result;
use crate::types::OnlineServiceRecord;

/// Writes link URLs, one per line, to the sink it owns.
///
/// Links are written in the order they are handed in. Nothing is
/// deduplicated, within or across documents.
#[derive(Debug)]
pub struct LinkCollector<W: Write> {
    sink: W,
    written: usize,
}

impl<W: Write> LinkCollector<W> {
    /// Create a collector that owns `sink`.
    pub fn new(sink: W) -> Self {
        Self { sink, written: 0 }
    }

    /// Write the links of one online service.
    ///
    /// # Returns
    /// The number of lines written
    pub fn collect(&mut self, record: &OnlineServiceRecord) -> Result<usize> {
        self.write_links(record.urls())
    }

    /// Write already extracted links.
    pub fn write_links<I>(&mut self, links: I) -> Result<usize>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut count = 0;
        for link in links {
            writeln!(self.sink, "{}", link.as_ref())?;
            count += 1;
        }
        self.written += count;
        Ok(count)
    }

    /// Total number of lines written so far.
    #[must_use]
    pub fn written(&self) -> usize {
        self.written
    }

    /// Flush the underlying sink.
    pub fn flush(&mut self) -> Result<()> {
        self.sink.flush()?;
        Ok(())
    }

    /// Give back the sink.
    pub fn into_inner(self) -> W {
        self.sink
    }
}
