use crate::entities::{Operation, OperationAmount, OperationCurrency};

use super::{raw_amount_model::RawAmountModel, tolerant_model::TolerantModel};

// Every field is optional and tolerates any JSON type: a record is only
// checked when a later stage needs one of its fields, so an odd value on a
// record that is never selected cannot fail the load. Wrong-typed fields are
// remembered in `Operation::mistyped_fields`.

#[derive(Debug, Default, serde_derive::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub(crate) struct OperationModel {
    pub(crate) id: Option<TolerantModel<u64>>,
    pub(crate) state: Option<TolerantModel<String>>,
    pub(crate) date: Option<TolerantModel<String>>,
    pub(crate) operation_amount: Option<TolerantModel<OperationAmountModel>>,
    pub(crate) description: Option<TolerantModel<String>>,
    pub(crate) from: Option<TolerantModel<String>>,
    pub(crate) to: Option<TolerantModel<String>>,
}

#[derive(Debug, Default, serde_derive::Deserialize)]
#[serde(default)]
pub(crate) struct OperationAmountModel {
    pub(crate) amount: Option<TolerantModel<RawAmountModel>>,
    pub(crate) currency: Option<TolerantModel<CurrencyModel>>,
}

#[derive(Debug, Default, serde_derive::Deserialize)]
#[serde(default)]
pub(crate) struct CurrencyModel {
    pub(crate) name: Option<TolerantModel<String>>,
    pub(crate) code: Option<TolerantModel<String>>,
}

impl Into<Operation> for OperationModel {
    fn into(self) -> Operation {
        let mut mistyped = Vec::new();
        let operation_amount =
            TolerantModel::sort(self.operation_amount, "operationAmount", &mut mistyped)
                .map(|a| a.into_entity(&mut mistyped));
        Operation {
            // Only labels messages; a mistyped id is not worth reporting.
            id: TolerantModel::sort(self.id, "id", &mut Vec::new()),
            state: TolerantModel::sort(self.state, "state", &mut mistyped),
            date: TolerantModel::sort(self.date, "date", &mut mistyped),
            operation_amount,
            description: TolerantModel::sort(self.description, "description", &mut mistyped),
            from: TolerantModel::sort(self.from, "from", &mut mistyped),
            to: TolerantModel::sort(self.to, "to", &mut mistyped),
            mistyped_fields: mistyped,
        }
    }
}

impl OperationAmountModel {
    fn into_entity(self, mistyped: &mut Vec<String>) -> OperationAmount {
        OperationAmount {
            amount: TolerantModel::sort(self.amount, "operationAmount.amount", mistyped)
                .map(Into::into),
            currency: TolerantModel::sort(self.currency, "operationAmount.currency", mistyped)
                .map(|c| c.into_entity(mistyped)),
        }
    }
}

impl CurrencyModel {
    fn into_entity(self, mistyped: &mut Vec<String>) -> OperationCurrency {
        OperationCurrency {
            name: TolerantModel::sort(self.name, "operationAmount.currency.name", mistyped),
            code: TolerantModel::sort(self.code, "operationAmount.currency.code", mistyped),
        }
    }
}
