use std::future::Future;
use std::pin::Pin;

use sea_orm::{DatabaseConnection, DatabaseTransaction, TransactionError, TransactionTrait};

use crate::error::AppError;

/// Runs `work` inside one transaction borrowed from the pool.
///
/// The transaction commits when `work` returns `Ok` and rolls back when it
/// returns `Err`. Either way the connection goes back to the pool before this
/// returns, and `work` cannot keep the transaction past its own future.
pub async fn with_session<F, T>(db: &DatabaseConnection, work: F) -> Result<T, AppError>
where
    F: for<'c> FnOnce(
            &'c DatabaseTransaction,
        ) -> Pin<Box<dyn Future<Output = Result<T, AppError>> + Send + 'c>>
        + Send,
    T: Send,
{
    db.transaction::<_, T, AppError>(work)
        .await
        .map_err(map_tx_error)
}

fn map_tx_error(err: TransactionError<AppError>) -> AppError {
    match err {
        TransactionError::Connection(e) => AppError::Storage(e),
        TransactionError::Transaction(app) => app,
    }
}
