/// Type alias for Result with anyhow::Error as the error type.
/// Every layer returns this so domain errors and I/O context compose with `?`.
pub type Result<T> = std::result::Result<T, anyhow::Error>;
