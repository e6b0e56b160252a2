use std::io::Write;

use fractic_server_error::ServerError;

use crate::{
    config::{InvalidRecordPolicy, ReportConfig},
    domain::usecases::report_usecase::{ReportUsecase as _, ReportUsecaseImpl},
    entities::Operation,
    presentation::report_printer::ReportPrinter,
};

pub struct OperationsReportUtil {
    config: ReportConfig,
    report_usecase: ReportUsecaseImpl,
    printer: ReportPrinter,
}

impl OperationsReportUtil {
    pub fn new(config: ReportConfig) -> Self {
        Self {
            printer: ReportPrinter::new(config.on_invalid_record),
            report_usecase: ReportUsecaseImpl::new(),
            config,
        }
    }

    pub fn config(&self) -> &ReportConfig {
        &self.config
    }

    /// Reads the operations document at the configured path.
    pub fn load(&self) -> Result<Vec<Operation>, ServerError> {
        self.report_usecase.load_from_file(&self.config.operations_path)
    }

    pub fn load_from_string(&self, operations_json: &str) -> Result<Vec<Operation>, ServerError> {
        self.report_usecase.load_from_string(operations_json)
    }

    /// The configured number of most recent operations in the configured
    /// state, newest first.
    pub fn select<'a>(
        &self,
        operations: &'a [Operation],
    ) -> Result<Vec<&'a Operation>, ServerError> {
        self.report_usecase
            .select(operations, self.config.count, &self.config.state)
    }

    pub fn render(&self, operations: &[Operation]) -> Result<String, ServerError> {
        self.printer.render(&self.select(operations)?)
    }

    /// Writes the report to `out`, returning the number of blocks written.
    pub fn report_to<W: Write>(
        &self,
        operations: &[Operation],
        out: W,
    ) -> Result<usize, ServerError> {
        self.printer.write_report(&self.select(operations)?, out)
    }

    /// Loads the configured document and prints the report to stdout.
    pub fn run(&self) -> Result<usize, ServerError> {
        let operations = self.load()?;
        self.report_to(&operations, std::io::stdout().lock())
    }
}

impl Default for OperationsReportUtil {
    fn default() -> Self {
        Self::new(ReportConfig::default())
    }
}

// Function-level API.
// ---

/// Reads a JSON array of operations, in document order.
pub fn read_operations<P>(path: P) -> Result<Vec<Operation>, ServerError>
where
    P: AsRef<std::path::Path>,
{
    ReportUsecaseImpl::new().load_from_file(path)
}

pub fn read_operations_from_str(operations_json: &str) -> Result<Vec<Operation>, ServerError> {
    ReportUsecaseImpl::new().load_from_string(operations_json)
}

/// Up to `n` operations whose state equals `state`, newest first.
pub fn last_n_operations<'a>(
    operations: &'a [Operation],
    n: usize,
    state: &str,
) -> Result<Vec<&'a Operation>, ServerError> {
    ReportUsecaseImpl::new().select(operations, n, state)
}

/// Three-line, human-readable rendering of one operation, with account and
/// card numbers masked.
pub fn format_operation(operation: &Operation) -> Result<String, ServerError> {
    operation.format_block()
}

/// Prints [`last_n_operations`] to stdout, one block per operation followed
/// by a blank line. Stops at the first operation that cannot be formatted.
pub fn print_last_n_operations(
    operations: &[Operation],
    n: usize,
    state: &str,
) -> Result<(), ServerError> {
    let selected = last_n_operations(operations, n, state)?;
    ReportPrinter::new(InvalidRecordPolicy::Abort)
        .write_report(&selected, std::io::stdout().lock())
        .map(|_| ())
}
