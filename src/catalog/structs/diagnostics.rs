use crate::catalog::structs::warning::Warning;

/// Collects warnings for failures that must not abort the surrounding operation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Diagnostics {
    pub(crate) warnings: Vec<Warning>,
}
