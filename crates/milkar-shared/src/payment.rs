//! Payment intent links.
//!
//! Nothing here moves money. The UPI deep link is scanned by the payer's
//! own app with the amount pre-filled, the QR endpoint turns that link
//! into an image, and the share link opens a messaging app with a nudge
//! body. All three are plain URL construction; no request is made from
//! this crate.

use rust_decimal::Decimal;

use crate::constants::{CURRENCY, QR_SIZE};
use crate::event::Event;

/// `upi://pay` deep link pre-filling payee handle, payee name and amount.
///
/// Field order is fixed (`pa`, `pn`, `am`, `cu`); some UPI apps are
/// strict about it. The URI itself is returned raw; percent-encoding
/// happens where it gets embedded in an outer URL.
pub fn upi_uri(payee_handle: &str, payee_name: &str, amount: Decimal) -> String {
    format!("upi://pay?pa={payee_handle}&pn={payee_name}&am={amount}&cu={CURRENCY}")
}

/// Payment URI for one head of the given event.
pub fn event_upi_uri(event: &Event) -> String {
    upi_uri(
        &event.creator_payment_handle,
        &event.creator_name,
        event.per_person,
    )
}

/// URL of a scannable image for the given payment URI, rendered by the
/// third-party QR endpoint. The URI rides percent-encoded in the `data`
/// query parameter.
pub fn qr_image_url(endpoint: &str, payment_uri: &str) -> String {
    format!(
        "{endpoint}?size={size}x{size}&data={data}",
        size = QR_SIZE,
        data = percent_encode(payment_uri),
    )
}

/// Nudge body summarizing what is owed and where to enter.
pub fn nudge_text(event: &Event) -> String {
    format!(
        "Pay ₹{} for {}. Code: {}",
        event.per_person, event.title, event.room_code
    )
}

/// Messaging deep link carrying a pre-filled body. Fire-and-forget: the
/// caller opens it and never hears back.
pub fn share_url(endpoint: &str, text: &str) -> String {
    format!("{endpoint}?text={}", percent_encode(text))
}

/// Percent-encode a query component. RFC 3986 unreserved bytes pass
/// through, everything else (including UTF-8 continuation bytes) is
/// escaped.
fn percent_encode(input: &str) -> String {
    const HEX: &[u8; 16] = b"0123456789ABCDEF";

    let mut out = String::with_capacity(input.len());
    for byte in input.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(byte as char);
            }
            _ => {
                out.push('%');
                out.push(HEX[(byte >> 4) as usize] as char);
                out.push(HEX[(byte & 0x0f) as usize] as char);
            }
        }
    }
    out
}
