use serde::{de, Deserialize};

/// Amount as found in the source document. Exporters disagree on whether the
/// amount is a JSON string or a JSON number, so both are accepted and kept as
/// text; conversion to a numeric value happens when the operation is
/// formatted.
#[derive(Debug, PartialEq)]
pub(crate) struct RawAmountModel(String);

impl<'de> Deserialize<'de> for RawAmountModel {
    fn deserialize<D>(deserializer: D) -> Result<RawAmountModel, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        match serde_json::Value::deserialize(deserializer)? {
            serde_json::Value::String(s) => Ok(RawAmountModel(s)),
            serde_json::Value::Number(n) => Ok(RawAmountModel(n.to_string())),
            other => Err(de::Error::custom(format!(
                "expected amount as string or number, got {}",
                other
            ))),
        }
    }
}

impl Into<String> for RawAmountModel {
    fn into(self) -> String {
        self.0
    }
}
