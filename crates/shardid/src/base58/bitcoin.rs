use super::Error;

const ALPHABET: &[u8; 58] = b"123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";
const NO_VALUE: u8 = 255;
const RADIX: u32 = 58;

/// Lookup table for base58 decoding (Bitcoin alphabet)
const LOOKUP: [u8; 256] = {
    let mut lut = [NO_VALUE; 256];
    let mut i = 0_u8;
    while i < 58 {
        lut[ALPHABET[i as usize] as usize] = i;
        i += 1;
    }
    lut
};

/// Upper bound on the number of base58 characters needed to encode `bytes`
/// bytes (`log(256) / log(58)` is just under `1.38`).
pub(crate) const fn base58_size(bytes: usize) -> usize {
    bytes * 138 / 100 + 1
}

/// Encodes a byte slice into base58 using the Bitcoin alphabet, writing the
/// output to the front of `buf` and returning the number of characters
/// written.
///
/// Each leading zero byte is rendered as a single `'1'`; the remaining bytes
/// are treated as one big-endian number. No padding is emitted, so the output
/// length varies with the input value.
///
/// # Panics
///
/// Panics if `buf` is shorter than the encoded output. A buffer of
/// [`LeBytes::BASE58_SIZE`](super::LeBytes::BASE58_SIZE) bytes is always large
/// enough for the matching integer width.
pub fn encode_base58(input: &[u8], buf: &mut [u8]) -> usize {
    let zeros = input.iter().take_while(|&&b| b == 0).count();

    // Accumulate base58 digits least-significant first.
    let mut len = 0;
    for &byte in &input[zeros..] {
        let mut carry = u32::from(byte);
        for digit in &mut buf[..len] {
            carry += u32::from(*digit) << 8;
            *digit = (carry % RADIX) as u8;
            carry /= RADIX;
        }
        while carry > 0 {
            buf[len] = (carry % RADIX) as u8;
            len += 1;
            carry /= RADIX;
        }
    }

    buf[..len].reverse();
    buf.copy_within(..len, zeros);
    buf[..zeros].fill(ALPHABET[0]);
    for digit in &mut buf[zeros..zeros + len] {
        *digit = ALPHABET[*digit as usize];
    }
    zeros + len
}

/// Decodes a base58 string (Bitcoin alphabet) into its bytes.
///
/// Each leading `'1'` becomes a zero byte; the rest of the string is read as
/// one big-endian number. The output is as long as the encoded value requires,
/// so callers must check its length.
///
/// # Errors
///
/// Returns [`Error::DecodeInvalidAscii`] for the first byte that is not part
/// of the alphabet, including the visually ambiguous `0`, `O`, `I` and `l`.
pub fn decode_base58<E>(encoded: &str) -> Result<Vec<u8>, Error<E>> {
    let input = encoded.as_bytes();
    let zeros = input.iter().take_while(|&&c| c == ALPHABET[0]).count();

    // Accumulate bytes least-significant first.
    let mut out: Vec<u8> = Vec::with_capacity(input.len());
    for (index, &c) in input.iter().enumerate() {
        let val = LOOKUP[c as usize];
        if val == NO_VALUE {
            return Err(Error::DecodeInvalidAscii { byte: c, index });
        }
        let mut carry = u32::from(val);
        for byte in &mut out {
            carry += u32::from(*byte) * RADIX;
            *byte = (carry & 0xFF) as u8;
            carry >>= 8;
        }
        while carry > 0 {
            out.push((carry & 0xFF) as u8);
            carry >>= 8;
        }
    }

    out.resize(out.len() + zeros, 0);
    out.reverse();
    Ok(out)
}
