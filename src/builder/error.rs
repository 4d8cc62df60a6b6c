//! Build errors for field declarations.

use thiserror::Error;

/// Errors that can occur when declaring a field.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BuildError {
    #[error("Type name is empty. Pass the owning type's name to FieldDecl::builder")]
    EmptyTypeName,

    #[error("Field name is empty. Pass the field's name to FieldDecl::builder")]
    EmptyFieldName,

    #[error("{type_name}.{field_name} already has a writer. Call .writer() once")]
    ConflictingWriter {
        type_name: String,
        field_name: String,
    },
}
