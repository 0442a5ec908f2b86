/// Configuration errors, rejected eagerly at construction or update time.
///
/// The engine never produces a negative or inverted range from bad inputs;
/// anything that could cause one is refused here instead.
#[derive(Clone, Copy, Debug, PartialEq, thiserror::Error)]
pub enum ConfigError {
    /// `item_extent` must be a positive, finite number.
    #[error("item extent must be positive and finite (got {0})")]
    InvalidItemExtent(f64),
    /// The initial scroll offset must be non-negative and finite.
    #[error("initial scroll offset must be non-negative and finite (got {0})")]
    InvalidInitialOffset(f64),
}
