use fractic_server_error::ServerError;

use crate::entities::Operation;

pub(crate) struct OperationSelector<'a> {
    operations: &'a [Operation],
}

impl<'a> OperationSelector<'a> {
    pub(crate) fn new(operations: &'a [Operation]) -> Self {
        Self { operations }
    }

    /// Up to `n` operations in the given state, newest first.
    ///
    /// Dates are compared as raw strings, which orders ISO-8601 timestamps
    /// correctly as long as they share one format. The sort is stable, so
    /// operations with equal dates keep their document order. Every matching
    /// operation must carry a date, even if it would be truncated away.
    pub(crate) fn last_n(
        &self,
        n: usize,
        state: &str,
    ) -> Result<Vec<&'a Operation>, ServerError> {
        let mut matching = self
            .operations
            .iter()
            .filter(|op| op.state.as_deref() == Some(state))
            .map(|op| op.require_date().map(|date| (date, op)))
            .collect::<Result<Vec<_>, _>>()?;
        let total = matching.len();
        matching.sort_by(|(a, _), (b, _)| b.cmp(a));
        matching.truncate(n);
        log::debug!(
            "selected {} of {} '{}' operations (out of {})",
            matching.len(),
            total,
            state,
            self.operations.len()
        );
        Ok(matching.into_iter().map(|(_, op)| op).collect())
    }
}
