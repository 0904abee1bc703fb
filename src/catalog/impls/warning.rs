use std::fmt;
use std::fmt::Formatter;
use crate::catalog::structs::warning::Warning;

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}
