use fractic_server_error::ServerError;

use crate::entities::Operation;

pub trait OperationsRepository {
    fn from_string(&self, operations_json: &str) -> Result<Vec<Operation>, ServerError>;

    fn from_file<P>(&self, operations_json: P) -> Result<Vec<Operation>, ServerError>
    where
        P: AsRef<std::path::Path>;
}
