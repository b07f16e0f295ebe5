use crate::types::DbId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    /// A list query matched no rows. Reported to clients the same way as
    /// [`CoreError::NotFound`].
    #[error("No {entity} rows matched the query")]
    EmptyResult { entity: &'static str },
}
