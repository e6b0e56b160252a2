use fractic_server_error::ServerError;

use crate::{
    data::{
        datasources::operations_json_datasource::OperationsJsonDatasourceImpl,
        repositories::operations_repository_impl::OperationsRepositoryImpl,
    },
    domain::{
        logic::operation_selector::OperationSelector,
        repositories::operations_repository::OperationsRepository,
    },
    entities::Operation,
};

pub trait ReportUsecase {
    fn load_from_string(&self, operations_json: &str) -> Result<Vec<Operation>, ServerError>;

    fn load_from_file<P>(&self, operations_json: P) -> Result<Vec<Operation>, ServerError>
    where
        P: AsRef<std::path::Path>;

    fn select<'a>(
        &self,
        operations: &'a [Operation],
        n: usize,
        state: &str,
    ) -> Result<Vec<&'a Operation>, ServerError>;
}

pub(crate) struct ReportUsecaseImpl<
    R1 = OperationsRepositoryImpl<OperationsJsonDatasourceImpl>, // Default.
> where
    R1: OperationsRepository,
{
    operations_repository: R1,
}

impl<R1> ReportUsecase for ReportUsecaseImpl<R1>
where
    R1: OperationsRepository,
{
    fn load_from_string(&self, operations_json: &str) -> Result<Vec<Operation>, ServerError> {
        self.operations_repository.from_string(operations_json)
    }

    fn load_from_file<P>(&self, operations_json: P) -> Result<Vec<Operation>, ServerError>
    where
        P: AsRef<std::path::Path>,
    {
        self.operations_repository.from_file(operations_json)
    }

    fn select<'a>(
        &self,
        operations: &'a [Operation],
        n: usize,
        state: &str,
    ) -> Result<Vec<&'a Operation>, ServerError> {
        OperationSelector::new(operations).last_n(n, state)
    }
}

impl ReportUsecaseImpl {
    pub(crate) fn new() -> Self {
        ReportUsecaseImpl {
            operations_repository: OperationsRepositoryImpl::new(),
        }
    }
}
