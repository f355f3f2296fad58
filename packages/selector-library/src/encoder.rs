//! ABI-style encoding of selector sets.
//!
//! A blob is the tail of a Solidity `bytes4[]` encoding:
//! - `[0..32]`: number of selectors (big-endian, right-aligned)
//! - `[32..]`: one 32-byte word per selector, left-aligned and zero padded
//!
//! The leading offset word of a full `abi.encode` is not part of the blob;
//! see [`dynamic_array_head`].

use alloy_primitives::Selector;

use crate::error::DecodeError;

/// Size of an ABI word in bytes.
pub const ABI_WORD_SIZE: usize = 32;
/// Size of a function selector in bytes.
pub const SELECTOR_SIZE: usize = 4;

/// Left-pads `bytes` with zeros to a 4-byte selector.
///
/// Returns `None` if `bytes` is longer than a selector.
#[must_use]
pub fn selector_from_bytes(bytes: &[u8]) -> Option<Selector> {
    let offset = SELECTOR_SIZE.checked_sub(bytes.len())?;
    let mut selector = Selector::ZERO;
    selector.0[offset..].copy_from_slice(bytes);
    Some(selector)
}

/// Encodes `selectors` as a lowercase hex blob without a `0x` prefix.
#[must_use]
pub fn encode(selectors: &[Selector]) -> String {
    let mut encoded = Vec::with_capacity((selectors.len() + 1) * ABI_WORD_SIZE);
    encoded.extend_from_slice(&uint_word(selectors.len() as u64));
    for selector in selectors {
        let mut word = [0u8; ABI_WORD_SIZE];
        word[..SELECTOR_SIZE].copy_from_slice(selector.as_slice());
        encoded.extend_from_slice(&word);
    }
    hex::encode(encoded)
}

/// Decodes a blob produced by [`encode`].
///
/// # Errors
/// Returns a [`DecodeError`] if the blob is not hex or does not follow the
/// length-prefixed layout exactly.
pub fn decode(blob: &str) -> Result<Vec<Selector>, DecodeError> {
    let data = hex::decode(blob)?;
    if data.len() < ABI_WORD_SIZE {
        return Err(DecodeError::MissingLength(data.len()));
    }
    let (length_word, elements) = data.split_at(ABI_WORD_SIZE);
    let declared = read_length(length_word)?;

    if elements.len() % ABI_WORD_SIZE != 0
        || declared.checked_mul(ABI_WORD_SIZE) != Some(elements.len())
    {
        return Err(DecodeError::LengthMismatch {
            declared,
            actual: elements.len(),
        });
    }

    elements
        .chunks_exact(ABI_WORD_SIZE)
        .enumerate()
        .map(|(index, word)| {
            let (selector, padding) = word.split_at(SELECTOR_SIZE);
            if padding.iter().any(|byte| *byte != 0) {
                return Err(DecodeError::DirtyPadding(index));
            }
            Ok(Selector::from_slice(selector))
        })
        .collect()
}

/// The offset word that precedes a blob in a full `abi.encode(bytes4[])`.
#[must_use]
pub fn dynamic_array_head() -> String {
    hex::encode(uint_word(ABI_WORD_SIZE as u64))
}

fn uint_word(value: u64) -> [u8; ABI_WORD_SIZE] {
    let mut word = [0u8; ABI_WORD_SIZE];
    word[ABI_WORD_SIZE - 8..].copy_from_slice(&value.to_be_bytes());
    word
}

fn read_length(word: &[u8]) -> Result<usize, DecodeError> {
    let (high, low) = word.split_at(ABI_WORD_SIZE - 8);
    if high.iter().any(|byte| *byte != 0) {
        return Err(DecodeError::LengthOverflow);
    }
    let mut bytes = [0u8; 8];
    bytes.copy_from_slice(low);
    usize::try_from(u64::from_be_bytes(bytes)).map_err(|_| DecodeError::LengthOverflow)
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_sol_types::SolValue;
    use rstest::rstest;

    const ONE: &str = "0000000000000000000000000000000000000000000000000000000000000001";
    const OWNER: &str = "8da5cb5b00000000000000000000000000000000000000000000000000000000";

    fn selectors(values: &[[u8; 4]]) -> Vec<Selector> {
        values.iter().copied().map(Selector::from).collect()
    }

    #[test]
    fn encodes_single_selector() {
        let blob = encode(&selectors(&[[0x8d, 0xa5, 0xcb, 0x5b]]));
        assert_eq!(blob, format!("{ONE}{OWNER}"));
    }

    #[test]
    fn encodes_empty_set_as_zero_length() {
        assert_eq!(encode(&[]), "0".repeat(64));
        assert_eq!(decode(&encode(&[])).unwrap(), Vec::<Selector>::new());
    }

    #[rstest]
    #[case(vec![])]
    #[case(vec![[0x8d, 0xa5, 0xcb, 0x5b]])]
    #[case(vec![[0xf2, 0xfd, 0xe3, 0x8b], [0x8d, 0xa5, 0xcb, 0x5b], [0x00, 0x00, 0x00, 0x01]])]
    #[case(vec![[0xff; 4], [0x00; 4], [0xff; 4]])]
    fn decode_reverses_encode(#[case] values: Vec<[u8; 4]>) {
        let set = selectors(&values);
        assert_eq!(decode(&encode(&set)).unwrap(), set);
    }

    #[test]
    fn keeps_reported_order() {
        let set = selectors(&[[0xff, 0, 0, 0], [0x01, 0, 0, 0]]);
        let blob = encode(&set);
        assert!(blob[64..].starts_with("ff"));
        assert_eq!(decode(&blob).unwrap(), set);
    }

    #[rstest]
    #[case(&[0x12, 0x34], [0x00, 0x00, 0x12, 0x34])]
    #[case(&[0x01], [0x00, 0x00, 0x00, 0x01])]
    #[case(&[], [0x00; 4])]
    #[case(&[0xa9, 0x05, 0x9c, 0xbb], [0xa9, 0x05, 0x9c, 0xbb])]
    fn short_selectors_are_left_padded(#[case] raw: &[u8], #[case] padded: [u8; 4]) {
        let selector = selector_from_bytes(raw).unwrap();
        assert_eq!(selector, Selector::from(padded));
        assert_eq!(encode(&[selector]), encode(&[Selector::from(padded)]));
    }

    #[test]
    fn rejects_selectors_longer_than_four_bytes() {
        assert!(selector_from_bytes(&[1, 2, 3, 4, 5]).is_none());
    }

    #[test]
    fn matches_solidity_abi_encoding() {
        let set = selectors(&[[0xa9, 0x05, 0x9c, 0xbb], [0x8d, 0xa5, 0xcb, 0x5b]]);
        let expected = hex::encode(set.abi_encode());
        assert_eq!(format!("{}{}", dynamic_array_head(), encode(&set)), expected);
    }

    #[test]
    fn head_is_offset_thirty_two() {
        let head = dynamic_array_head();
        assert_eq!(head.len(), 64);
        assert!(head.ends_with("20"));
        assert!(head[..62].chars().all(|c| c == '0'));
    }

    #[rstest]
    #[case("zz", DecodeError::Hex(hex::FromHexError::InvalidHexCharacter { c: 'z', index: 0 }))]
    #[case("00", DecodeError::MissingLength(1))]
    #[case(ONE, DecodeError::LengthMismatch { declared: 1, actual: 0 })]
    fn rejects_malformed_blobs(#[case] blob: &str, #[case] expected: DecodeError) {
        assert_eq!(decode(blob).unwrap_err(), expected);
    }

    #[test]
    fn rejects_truncated_element() {
        let blob = format!("{ONE}{}", &OWNER[..32]);
        assert!(matches!(
            decode(&blob),
            Err(DecodeError::LengthMismatch { declared: 1, actual: 16 })
        ));
    }

    #[test]
    fn rejects_dirty_padding() {
        let blob = format!("{ONE}8da5cb5b{}01", "0".repeat(54));
        assert_eq!(decode(&blob).unwrap_err(), DecodeError::DirtyPadding(0));
    }

    #[test]
    fn rejects_oversized_length() {
        let blob = format!("01{}", "0".repeat(62));
        assert_eq!(decode(&blob).unwrap_err(), DecodeError::LengthOverflow);
    }
}
