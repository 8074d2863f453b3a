use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    /// The query was empty or whitespace only.
    ///
    /// A usage error, distinct from a query that simply matched nothing.
    #[error("Pet name query must not be empty")]
    InvalidQuery,
}
