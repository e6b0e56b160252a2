use fractic_server_error::ServerError;

use crate::entities::Operation;

use super::{
    account_mask::{mask_destination, mask_source, MISSING_ACCOUNT_PLACEHOLDER},
    utils::format_amount,
};

impl Operation {
    /// Human-readable block:
    ///
    /// ```text
    /// 26.08.2019 Перевод организации:
    /// Maestro 1596 83** **** 5199 -> Счет **9589
    /// 31957.58 руб.
    /// ```
    pub(crate) fn format_block(&self) -> Result<String, ServerError> {
        let amount = self.amount_value()?;
        let currency = self.currency_name()?;
        let date = self.timestamp()?.format("%d.%m.%Y");
        let description = self.require_description()?;
        let from = match self.source_account()? {
            Some(from) => mask_source(from)?,
            None => MISSING_ACCOUNT_PLACEHOLDER.to_string(),
        };
        let to = match self.destination_account()? {
            Some(to) => mask_destination(to),
            None => MISSING_ACCOUNT_PLACEHOLDER.to_string(),
        };
        Ok(format!(
            "{} {}:\n{} -> {}\n{}",
            date,
            description,
            from,
            to,
            format_amount(amount, currency)
        ))
    }
}
