#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogicalLine {
    /// Indentation column of the first physical line (tabs expand to multiples of 8).
    pub indent: usize,
    /// 1-based number of the first physical line.
    pub lineno: usize,
    pub text: String,
}
