//! Status codes for the adaptive controller

/// How an adaptive integration run terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Reached the end of the interval.
    Success,
    /// Hit the step cap before reaching the end of the interval; the
    /// returned solution covers only the integrated prefix.
    NeedLargerNmax,
}
