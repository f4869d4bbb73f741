use thiserror::Error;

#[derive(Error, Debug)]
pub enum AdapterError {
    #[error("Executor failed for {statement} on {table}: {source}")]
    ExecutorFailure {
        table: String,
        statement: &'static str,
        #[source]
        source: anyhow::Error,
    },

    #[error("Update aborted at row {row_index}: {message}")]
    Aborted { row_index: usize, message: String },

    #[error("Invalid row change at row {row_index}: {message}")]
    InvalidRowChange { row_index: usize, message: String },

    #[error("Batch of {size} rows exceeds the maximum of {max}")]
    BatchTooLarge { size: usize, max: usize },
}
