#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Warning {
    pub module: String,
    pub message: String,
}
