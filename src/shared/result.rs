/// Result alias used by the application and adapter layers.
///
/// Domain code returns `std::result::Result<T, VexError>`; anything above it
/// wraps those errors in `anyhow::Error` so context can be attached.
pub type Result<T> = std::result::Result<T, anyhow::Error>;
