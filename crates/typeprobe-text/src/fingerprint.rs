//! Stable hashes and short fingerprints
//!
//! FNV-1a over UTF-16 code units. Unlike the standard library's hashers,
//! these values are stable across processes, platforms, and runs, which
//! makes them usable inside emitted identifiers.

const FNV32_OFFSET: u32 = 2_166_136_261;
const FNV32_PRIME: u32 = 16_777_619;

const FNV64_OFFSET: u64 = 14_695_981_039_346_656_037;
const FNV64_PRIME: u64 = 1_099_511_628_211;

/// Fingerprint alphabet: digits plus uppercase letters, with I, L, O, and
/// U left out to avoid look-alikes.
const BASE32_ALPHABET: &[u8; 32] = b"0123456789ABCDEFGHJKMNPQRSTVWXYZ";

/// Gets a stable 32-bit hash code of the string.
pub fn stable_hash32(source: &str) -> u32 {
    let mut result = FNV32_OFFSET;
    for unit in source.encode_utf16() {
        result = (result ^ u32::from(unit)).wrapping_mul(FNV32_PRIME);
    }
    result
}

/// Gets a stable 64-bit hash code of the string.
pub fn stable_hash64(source: &str) -> u64 {
    let mut result = FNV64_OFFSET;
    for unit in source.encode_utf16() {
        result = (result ^ u64::from(unit)).wrapping_mul(FNV64_PRIME);
    }
    result
}

/// Gets the stable 32-bit hash as a 7-character base32 fingerprint.
pub fn fingerprint32(source: &str) -> String {
    let hash = stable_hash32(source);
    let mut bytes = [0u8; 8];
    bytes[..4].copy_from_slice(&hash.to_le_bytes());

    to_base32_chars(bytes)[..7].iter().collect()
}

/// Gets the stable 64-bit hash as a 13-character base32 fingerprint.
pub fn fingerprint64(source: &str) -> String {
    let hash = stable_hash64(source);
    to_base32_chars(hash.to_le_bytes()).iter().collect()
}

/// Encodes 8 bytes as 13 base32 characters.
fn to_base32_chars(bytes: [u8; 8]) -> [char; 13] {
    let mut value = 0u64;
    for byte in bytes {
        value = (value << 8) | u64::from(byte);
    }

    let mut chars = ['0'; 13];
    for slot in chars.iter_mut().rev() {
        let remainder = (value % 32) as usize;
        value /= 32;
        *slot = BASE32_ALPHABET[remainder] as char;
    }
    chars
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("", 0x811c_9dc5)]
    #[case("a", 0xe40c_292c)]
    #[case("foobar", 0xbf9c_f968)]
    fn test_stable_hash32_known_answers(#[case] source: &str, #[case] expected: u32) {
        assert_eq!(stable_hash32(source), expected);
    }

    #[rstest]
    #[case("", 0xcbf2_9ce4_8422_2325)]
    #[case("a", 0xaf63_dc4c_8601_ec8c)]
    #[case("foobar", 0x8594_4171_f739_67e8)]
    fn test_stable_hash64_known_answers(#[case] source: &str, #[case] expected: u64) {
        assert_eq!(stable_hash64(source), expected);
    }

    #[rstest]
    #[case("", "CB78WG4")]
    #[case("foobar", "6HYCWQW")]
    #[case("Shop.Money", "0ZFG25W")]
    #[case("System.String", "AFEVBZ8")]
    fn test_fingerprint32_known_answers(#[case] source: &str, #[case] expected: &str) {
        assert_eq!(fingerprint32(source), expected);
    }

    #[rstest]
    #[case("", "2A8S2GKJ9SWPB")]
    #[case("foobar", "EGSSSYXRM3545")]
    #[case("Shop.Money", "6Y3YJGTYD6DZW")]
    fn test_fingerprint64_known_answers(#[case] source: &str, #[case] expected: &str) {
        assert_eq!(fingerprint64(source), expected);
    }

    #[test]
    fn test_fingerprints_are_deterministic() {
        assert_eq!(fingerprint32("Anything"), fingerprint32("Anything"));
        assert_ne!(fingerprint32("Anything"), fingerprint32("AnythingElse"));
        assert_eq!(fingerprint32("x").len(), 7);
        assert_eq!(fingerprint64("x").len(), 13);
    }
}
