use std::path::PathBuf;

use fractic_server_error::ServerError;

use crate::errors::InvalidConfig;

/// Location of the operations document used when none is configured,
/// relative to the working directory.
pub const DEFAULT_OPERATIONS_PATH: &str = "../data/operations.json";
pub const DEFAULT_COUNT: usize = 5;
pub const DEFAULT_STATE: &str = "EXECUTED";

/// What the report does when a selected operation cannot be formatted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde_derive::Deserialize)]
pub enum InvalidRecordPolicy {
    /// Stop at the first invalid operation. Blocks already written stay
    /// written.
    #[default]
    Abort,
    /// Log a warning and continue with the next operation.
    Skip,
}

#[derive(Debug, Clone, PartialEq, serde_derive::Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    pub operations_path: PathBuf,
    pub count: usize,
    pub state: String,
    pub on_invalid_record: InvalidRecordPolicy,
}

impl Default for ReportConfig {
    fn default() -> Self {
        ReportConfig {
            operations_path: PathBuf::from(DEFAULT_OPERATIONS_PATH),
            count: DEFAULT_COUNT,
            state: DEFAULT_STATE.to_string(),
            on_invalid_record: InvalidRecordPolicy::default(),
        }
    }
}

impl ReportConfig {
    /// Parse a config written in RON, for example:
    ///
    /// ```text
    /// (operations_path: "data/operations.json", count: 3, on_invalid_record: Skip)
    /// ```
    ///
    /// Keys that are left out keep their default values.
    pub fn from_ron(s: &str) -> Result<Self, ServerError> {
        ron::from_str(s).map_err(|e| InvalidConfig::with_debug(&e))
    }

    pub fn with_operations_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.operations_path = path.into();
        self
    }

    pub fn with_count(mut self, count: usize) -> Self {
        self.count = count;
        self
    }

    pub fn with_state(mut self, state: impl Into<String>) -> Self {
        self.state = state.into();
        self
    }

    pub fn with_invalid_record_policy(mut self, policy: InvalidRecordPolicy) -> Self {
        self.on_invalid_record = policy;
        self
    }
}
