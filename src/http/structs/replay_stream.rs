/// A stream whose first reads return `prefix`, then whatever `inner` yields.
///
/// Writes go straight to `inner`.
pub struct ReplayStream<S> {
    pub(crate) prefix: Vec<u8>,
    pub(crate) position: usize,
    pub(crate) inner: S,
}
