use rand::Rng;

// No 0/O/1/I to keep codes readable on labels.
const CODE_ALPHABET: &[u8] = b"ABCDEFGHJKLMNPQRSTUVWXYZ23456789";
const CODE_LENGTH: usize = 8;

/// Pure code generator, invoked once at product creation when the caller
/// did not supply a code. Uniqueness is enforced by the store; the creation
/// path regenerates on collision.
pub fn generate_product_code() -> String {
    let mut rng = rand::rng();

    let suffix: String = (0..CODE_LENGTH)
        .map(|_| {
            let idx = rng.random_range(0..CODE_ALPHABET.len());
            CODE_ALPHABET[idx] as char
        })
        .collect();

    format!("PRD-{suffix}")
}
