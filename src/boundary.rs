use std::fmt;

/// Warnings about fields the patterns could not see or could not update.
/// These are non-fatal issues that should be reported to the user.
#[derive(Debug, Clone, PartialEq)]
pub enum BoundaryWarning {
    /// The read pattern found no value for the field
    FieldMissing { field: String, path: String },
    /// The field has a value the write pattern cannot replace
    FieldNotWritable { field: String, value: String },
    /// A write completed but replaced nothing for the field
    FieldNotUpdated { field: String, path: String },
    /// A write replaced some occurrences of the field and left others
    FieldPartlyUpdated {
        field: String,
        path: String,
        skipped: usize,
    },
}

impl fmt::Display for BoundaryWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoundaryWarning::FieldMissing { field, path } => {
                write!(f, "No {} found in '{}'", field, path)
            }
            BoundaryWarning::FieldNotWritable { field, value } => {
                write!(
                    f,
                    "{} is '{}', which the update pattern does not match; it will not be updated",
                    field, value
                )
            }
            BoundaryWarning::FieldNotUpdated { field, path } => {
                write!(f, "{} was not updated in '{}'", field, path)
            }
            BoundaryWarning::FieldPartlyUpdated {
                field,
                path,
                skipped,
            } => {
                write!(
                    f,
                    "{} was only partly updated in '{}'; {} occurrence(s) kept their old value",
                    field, path, skipped
                )
            }
        }
    }
}
