use std::fs;

use fractic_server_error::ServerError;

use crate::{
    data::models::operation_model::OperationModel,
    entities::Operation,
    errors::{InvalidJson, ReadError},
};

pub(crate) trait OperationsJsonDatasource {
    fn from_string(&self, s: &str) -> Result<Vec<Operation>, ServerError>;

    fn from_file<P>(&self, path: P) -> Result<Vec<Operation>, ServerError>
    where
        P: AsRef<std::path::Path>;
}

pub(crate) struct OperationsJsonDatasourceImpl;

impl OperationsJsonDatasourceImpl {
    pub(crate) fn new() -> Self {
        Self
    }
}

impl OperationsJsonDatasource for OperationsJsonDatasourceImpl {
    fn from_string(&self, s: &str) -> Result<Vec<Operation>, ServerError> {
        let models: Vec<OperationModel> =
            serde_json::from_str(s).map_err(|e| InvalidJson::new(&e.to_string()))?;
        Ok(models.into_iter().map(Into::into).collect())
    }

    fn from_file<P>(&self, path: P) -> Result<Vec<Operation>, ServerError>
    where
        P: AsRef<std::path::Path>,
    {
        let path = path.as_ref();
        let raw = fs::read_to_string(path)
            .map_err(|e| ReadError::with_debug(&path.display().to_string(), &e))?;
        let operations = self.from_string(&raw)?;
        log::debug!(
            "loaded {} operations from '{}'",
            operations.len(),
            path.display()
        );
        Ok(operations)
    }
}
