use std::io::Write;

use fractic_server_error::{CriticalError, ServerError};

use crate::{config::InvalidRecordPolicy, entities::Operation, errors::WriteError};

pub(crate) struct ReportPrinter {
    on_invalid_record: InvalidRecordPolicy,
}

impl ReportPrinter {
    pub(crate) fn new(on_invalid_record: InvalidRecordPolicy) -> Self {
        Self { on_invalid_record }
    }

    /// Writes one block per operation, each followed by a blank line, in the
    /// given order. Blocks are written as they are formatted, so under
    /// `InvalidRecordPolicy::Abort` everything before the failing operation
    /// has already reached `out`.
    ///
    /// Returns the number of blocks written.
    pub(crate) fn write_report<W: Write>(
        &self,
        operations: &[&Operation],
        mut out: W,
    ) -> Result<usize, ServerError> {
        let mut written = 0;
        for operation in operations {
            let block = match operation.format_block() {
                Ok(block) => block,
                Err(e) => match self.on_invalid_record {
                    InvalidRecordPolicy::Abort => return Err(e),
                    InvalidRecordPolicy::Skip => {
                        log::warn!("skipping operation {}: {:?}", operation.label(), e);
                        continue;
                    }
                },
            };
            write!(out, "{}\n\n", block).map_err(|e| WriteError::with_debug(&e))?;
            written += 1;
        }
        out.flush().map_err(|e| WriteError::with_debug(&e))?;
        Ok(written)
    }

    pub(crate) fn render(&self, operations: &[&Operation]) -> Result<String, ServerError> {
        let mut buf = Vec::new();
        self.write_report(operations, &mut buf)?;
        String::from_utf8(buf)
            .map_err(|e| CriticalError::with_debug("report output is not valid UTF-8", &e))
    }
}
