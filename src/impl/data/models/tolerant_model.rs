use serde::{de::DeserializeOwned, Deserialize};

/// A field that must not fail the whole document when it has an unexpected
/// JSON type. Such a value becomes `Mistyped`, and the error is raised later
/// by whichever stage actually needs the field.
#[derive(Debug, PartialEq)]
pub(crate) enum TolerantModel<T> {
    Valid(T),
    Mistyped,
}

impl<'de, T: DeserializeOwned> Deserialize<'de> for TolerantModel<T> {
    fn deserialize<D>(deserializer: D) -> Result<TolerantModel<T>, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = serde_json::Value::deserialize(deserializer)?;
        Ok(serde_json::from_value(value).map_or(TolerantModel::Mistyped, TolerantModel::Valid))
    }
}

impl<T> TolerantModel<T> {
    /// The valid value, if any. A mistyped field is recorded under `name` in
    /// `mistyped`.
    pub(crate) fn sort(
        field: Option<TolerantModel<T>>,
        name: &str,
        mistyped: &mut Vec<String>,
    ) -> Option<T> {
        match field? {
            TolerantModel::Valid(v) => Some(v),
            TolerantModel::Mistyped => {
                mistyped.push(name.to_string());
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrong_type_does_not_fail_deserialization() {
        let s: TolerantModel<String> = serde_json::from_str(r#""EXECUTED""#).unwrap();
        assert_eq!(s, TolerantModel::Valid("EXECUTED".to_string()));

        let n: TolerantModel<String> = serde_json::from_str("20190101").unwrap();
        assert_eq!(n, TolerantModel::Mistyped);

        let o: TolerantModel<String> = serde_json::from_str(r#"{"a": [1, 2]}"#).unwrap();
        assert_eq!(o, TolerantModel::Mistyped);
    }

    #[test]
    fn sort_records_mistyped_names() {
        let mut mistyped = Vec::new();
        assert_eq!(
            TolerantModel::sort(Some(TolerantModel::Valid(1)), "a", &mut mistyped),
            Some(1)
        );
        assert_eq!(TolerantModel::<u64>::sort(None, "b", &mut mistyped), None);
        assert_eq!(
            TolerantModel::<u64>::sort(Some(TolerantModel::Mistyped), "c", &mut mistyped),
            None
        );
        assert_eq!(mistyped, vec!["c".to_string()]);
    }
}
