use std::sync::LazyLock;

use chrono::NaiveDateTime;
use fractic_server_error::ServerError;
use regex::Regex;

use crate::{
    entities::Operation,
    errors::{InvalidAmount, InvalidField, InvalidTimestamp, MissingField},
};

/// Timestamps must carry a fractional-seconds part of one to six digits.
static TIMESTAMP_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\d{4}-\d{2}-\d{2}T\d{2}:\d{2}:\d{2}\.\d{1,6}$")
        .expect("hardcoded regex should be valid")
});

impl Operation {
    /// Short identifier used in log and error messages.
    pub(crate) fn label(&self) -> String {
        match self.id {
            Some(id) => format!("#{}", id),
            None => "(no id)".to_string(),
        }
    }

    /// Error for a field that reads as `None`: either it is not in the source
    /// at all, or it has the wrong type.
    fn unusable(&self, field: &str) -> ServerError {
        if self.mistyped_fields.iter().any(|f| f == field) {
            InvalidField::new(&self.label(), field)
        } else {
            MissingField::new(&self.label(), field)
        }
    }

    /// An optional field that must still be well-typed when present.
    fn optional_text<'a>(
        &self,
        value: &'a Option<String>,
        field: &str,
    ) -> Result<Option<&'a str>, ServerError> {
        match value.as_deref() {
            Some(v) => Ok(Some(v)),
            None if self.mistyped_fields.iter().any(|f| f == field) => {
                Err(InvalidField::new(&self.label(), field))
            }
            None => Ok(None),
        }
    }

    pub(crate) fn require_date(&self) -> Result<&str, ServerError> {
        self.date.as_deref().ok_or_else(|| self.unusable("date"))
    }

    pub(crate) fn source_account(&self) -> Result<Option<&str>, ServerError> {
        self.optional_text(&self.from, "from")
    }

    pub(crate) fn destination_account(&self) -> Result<Option<&str>, ServerError> {
        self.optional_text(&self.to, "to")
    }

    pub(crate) fn timestamp(&self) -> Result<NaiveDateTime, ServerError> {
        let raw = self.require_date()?;
        if !TIMESTAMP_PATTERN.is_match(raw) {
            return Err(InvalidTimestamp::new(raw));
        }
        NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
            .map_err(|e| InvalidTimestamp::with_debug(raw, &e))
    }

    pub(crate) fn require_description(&self) -> Result<&str, ServerError> {
        self.description
            .as_deref()
            .ok_or_else(|| self.unusable("description"))
    }

    pub(crate) fn amount_value(&self) -> Result<f64, ServerError> {
        let raw = self
            .operation_amount
            .as_ref()
            .ok_or_else(|| self.unusable("operationAmount"))?
            .amount
            .as_deref()
            .ok_or_else(|| self.unusable("operationAmount.amount"))?;
        raw.trim()
            .parse::<f64>()
            .map_err(|e| InvalidAmount::with_debug(raw, &e))
    }

    pub(crate) fn currency_name(&self) -> Result<&str, ServerError> {
        self.operation_amount
            .as_ref()
            .ok_or_else(|| self.unusable("operationAmount"))?
            .currency
            .as_ref()
            .ok_or_else(|| self.unusable("operationAmount.currency"))?
            .name
            .as_deref()
            .ok_or_else(|| self.unusable("operationAmount.currency.name"))
    }
}
