//! Booking reference generation
//!
//! References look like `KH-RWN-04825`: two letter groups from a reduced
//! alphabet (ambiguous letters dropped for readability over the phone),
//! then five digits. Persisting bookings is the calling system's concern;
//! this module only mints and validates the references.

use rand::Rng;

const LETTERS: &[u8] = b"ABCDEFGHJKMNPQRSTVWXYZ";
const DIGITS: &[u8] = b"0123456789";

/// Mint a fresh booking reference
pub fn generate_booking_reference() -> String {
    let mut rng = rand::thread_rng();
    let mut pick = |set: &[u8], count: usize| -> String {
        (0..count)
            .map(|_| char::from(set[rng.gen_range(0..set.len())]))
            .collect()
    };
    format!(
        "{}-{}-{}",
        pick(LETTERS, 2),
        pick(LETTERS, 3),
        pick(DIGITS, 5)
    )
}

fn is_reference_letter(c: char) -> bool {
    matches!(c, 'A'..='H' | 'J'..='N' | 'P'..='T' | 'V'..='Z')
}

/// Validate the `LL-LLL-DDDDD` reference shape
pub fn is_valid_booking_reference(code: &str) -> bool {
    let parts: Vec<&str> = code.split('-').collect();
    let [letters_a, letters_b, digits] = parts.as_slice() else {
        return false;
    };
    letters_a.len() == 2
        && letters_b.len() == 3
        && digits.len() == 5
        && letters_a.chars().all(is_reference_letter)
        && letters_b.chars().all(is_reference_letter)
        && digits.chars().all(|c| c.is_ascii_digit())
}
