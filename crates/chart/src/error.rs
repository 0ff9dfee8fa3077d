use thiserror::Error;

#[derive(Error, Debug)]
pub enum ChartError {
    #[error("row has {got} values but the table defines {expected} number columns")]
    RowArity { expected: usize, got: usize },
    #[error("chart has no data rows")]
    EmptyTable,
    #[error("chart rendering failed: {0}")]
    Render(String),
}
