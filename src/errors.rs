use fractic_server_error::{define_client_error, define_internal_error};

// IO-related.
define_client_error!(ReadError, "Error reading operations file: '{path}'.", { path: &str });
define_internal_error!(WriteError, "Error writing operations report.");

// Parsing-related.
define_client_error!(InvalidJson, "Invalid operations JSON: {details}.", { details: &str });
define_client_error!(InvalidConfig, "Invalid report config (invalid RON format).");
define_client_error!(
    InvalidTimestamp,
    "Invalid operation date: '{date}' (expected YYYY-MM-DDTHH:MM:SS.ffffff).",
    { date: &str }
);
define_client_error!(InvalidAmount, "Invalid operation amount: '{value}'.", { value: &str });

// Record-related.
define_client_error!(
    MissingField,
    "Operation {operation} is missing required field '{field}'.",
    { operation: &str, field: &str }
);
define_client_error!(
    InvalidField,
    "Operation {operation} has a field '{field}' of an unexpected type.",
    { operation: &str, field: &str }
);
define_client_error!(
    InvalidCardNumber,
    "Card number of length {length} is too short to mask (at least 8 characters required).",
    { length: usize }
);
