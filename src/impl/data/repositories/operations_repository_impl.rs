use fractic_server_error::ServerError;

use crate::{
    data::datasources::operations_json_datasource::{
        OperationsJsonDatasource, OperationsJsonDatasourceImpl,
    },
    domain::repositories::operations_repository::OperationsRepository,
    entities::Operation,
};

pub(crate) struct OperationsRepositoryImpl<DS: OperationsJsonDatasource> {
    operations_datasource: DS,
}

impl<DS: OperationsJsonDatasource> OperationsRepository for OperationsRepositoryImpl<DS> {
    fn from_string(&self, operations_json: &str) -> Result<Vec<Operation>, ServerError> {
        self.operations_datasource.from_string(operations_json)
    }

    fn from_file<P>(&self, operations_json: P) -> Result<Vec<Operation>, ServerError>
    where
        P: AsRef<std::path::Path>,
    {
        self.operations_datasource.from_file(operations_json)
    }
}

impl OperationsRepositoryImpl<OperationsJsonDatasourceImpl> {
    pub(crate) fn new() -> Self {
        OperationsRepositoryImpl {
            operations_datasource: OperationsJsonDatasourceImpl::new(),
        }
    }
}
