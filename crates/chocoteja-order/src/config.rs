//! Store Configuration
//!
//! Fixed storefront settings shared by the order rules and the UI.

/// Storefront-wide constants
pub struct StoreConfig;

impl StoreConfig {
    /// Prefix shown before every amount (Peruvian sol)
    pub const CURRENCY_PREFIX: &'static str = "S/";
    /// Maximum characters allowed in a gift note
    pub const NOTE_MAX_CHARS: usize = 150;
    /// Counter turns red above this many characters
    pub const NOTE_WARN_CHARS: usize = 140;
    /// Message recorded when the customer does not include a note
    pub const NO_MESSAGE: &'static str = "Sin mensaje";
    /// How long a toast stays on screen
    pub const TOAST_LIFETIME_MS: u32 = 4_000;
}
