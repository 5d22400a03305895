/// Application name
pub const APP_NAME: &str = "Milkar";

/// Number of digits in a room join code
pub const ROOM_CODE_DIGITS: usize = 6;

/// Number of digits in the participant disambiguation suffix
pub const ID_SUFFIX_DIGITS: usize = 4;

/// Minimum accepted length for a payment reference suffix
pub const MIN_REFERENCE_SUFFIX: usize = 4;

/// Hours a live event may stand before the auto-archiver claims it
pub const DEFAULT_EXPIRY_HOURS: i64 = 48;

/// ISO 4217 currency code embedded in payment URIs
pub const CURRENCY: &str = "INR";

/// Default third-party QR image endpoint
pub const DEFAULT_QR_ENDPOINT: &str = "https://api.qrserver.com/v1/create-qr-code/";

/// Rendered QR size in pixels (square)
pub const QR_SIZE: u32 = 180;

/// Default outbound share (nudge) deep-link endpoint
pub const DEFAULT_SHARE_ENDPOINT: &str = "https://wa.me/";

/// Note recorded when a claimant leaves the note field empty
pub const DEFAULT_CLAIM_NOTE: &str = "Paid!";
