/// A single financial operation as it appears in the source document.
///
/// Every field is optional: the document is not validated on load, and a
/// missing field only becomes an error once a later stage needs it.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Operation {
    pub id: Option<u64>,
    pub state: Option<String>,
    /// Raw ISO-8601 timestamp, kept as text so that ordering is lexicographic.
    pub date: Option<String>,
    pub operation_amount: Option<OperationAmount>,
    pub description: Option<String>,
    pub from: Option<String>,
    pub to: Option<String>,
    /// Fields present in the source with an unexpected JSON type, by their
    /// dotted path (ex. "operationAmount.amount"). Such fields read as `None`
    /// above.
    pub mistyped_fields: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct OperationAmount {
    /// Raw amount text (numbers in the source are kept in their JSON form).
    pub amount: Option<String>,
    pub currency: Option<OperationCurrency>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct OperationCurrency {
    pub name: Option<String>,
    pub code: Option<String>,
}
