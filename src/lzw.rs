//! LZW coding over a fixed 16-bit code space.
//!
//! Codes 0..255 are single bytes, 256 is the CLEAR marker, and 257..65534
//! are learned phrases. The encoder emits CLEAR in-band when the dictionary
//! saturates; the decoder mirrors the reset. See `crate::container` for how
//! this combines with Huffman coding.

use crate::error::{Error, Result};
use std::collections::HashMap;

/// Reserved code signaling a dictionary reset.
pub const CLEAR_CODE: u16 = 256;
/// One past the highest code value the encoder will ever assign.
const MAX_DICT_SIZE: usize = 65535;
/// First code available to a fresh dictionary, right after the literal bytes and CLEAR.
const FIRST_CODE: u16 = 257;

/// Produce the raw code sequence for `input`, before little-endian byte
/// packing. Exposed separately so `crate::report` can describe the
/// dictionary trace without re-parsing the packed bytes.
pub(crate) fn encode_codes(input: &[u8]) -> Vec<u16> {
    if input.is_empty() {
        return Vec::new();
    }
    let mut codes: Vec<u16> = Vec::new();
    let mut dictionary: HashMap<(u16, u8), u16> = HashMap::new();
    let mut next_code = FIRST_CODE;
    let mut w: u16 = input[0] as u16;

    for &c in &input[1..] {
        let key = (w, c);
        if let Some(&code) = dictionary.get(&key) {
            w = code;
            continue;
        }
        codes.push(w);
        if next_code as usize >= MAX_DICT_SIZE {
            log::debug!("lzw dictionary saturated, emitting clear after {} codes", codes.len());
            codes.push(CLEAR_CODE);
            dictionary.clear();
            next_code = FIRST_CODE;
        } else {
            dictionary.insert(key, next_code);
            next_code += 1;
        }
        w = c as u16;
    }
    codes.push(w);
    codes
}

/// Encode `input` to a little-endian sequence of u16 codes.
///
/// Empty input produces empty output; otherwise the output length is always
/// a multiple of 2.
pub fn encode(input: &[u8]) -> Vec<u8> {
    let codes = encode_codes(input);
    let mut out = Vec::with_capacity(codes.len() * 2);
    for code in codes {
        out.extend_from_slice(&code.to_le_bytes());
    }
    out
}

/// A fresh decode-side dictionary: 256 single-byte entries, then a
/// placeholder at index 256 (the CLEAR marker, never looked up) so that
/// `dict.len()` doubles as the next code to be learned.
fn fresh_dictionary() -> Vec<Vec<u8>> {
    let mut dict: Vec<Vec<u8>> = (0..256u16).map(|b| vec![b as u8]).collect();
    dict.push(Vec::new());
    dict
}

fn lookup(dict: &[Vec<u8>], code: usize) -> Result<&Vec<u8>> {
    if code == CLEAR_CODE as usize || code >= dict.len() {
        return Err(Error::MalformedLzw);
    }
    Ok(&dict[code])
}

/// Decode a little-endian sequence of u16 codes back to the original bytes.
pub fn decode(input: &[u8]) -> Result<Vec<u8>> {
    if input.len() % 2 != 0 {
        return Err(Error::MalformedLzw);
    }
    let codes: Vec<u16> = input
        .chunks_exact(2)
        .map(|c| u16::from_le_bytes([c[0], c[1]]))
        .collect();
    if codes.is_empty() {
        return Ok(Vec::new());
    }

    let mut dict = fresh_dictionary();
    let mut idx = 0;
    while idx < codes.len() && codes[idx] == CLEAR_CODE {
        idx += 1;
    }
    if idx >= codes.len() {
        return Ok(Vec::new());
    }
    let mut old = codes[idx] as usize;
    idx += 1;
    let mut out = lookup(&dict, old)?.clone();

    while idx < codes.len() {
        let c = codes[idx] as usize;
        idx += 1;

        if c == CLEAR_CODE as usize {
            log::debug!("lzw decoder saw clear, resetting dictionary");
            dict = fresh_dictionary();
            if idx >= codes.len() {
                break;
            }
            old = codes[idx] as usize;
            idx += 1;
            let entry = lookup(&dict, old)?;
            out.extend_from_slice(entry);
            continue;
        }

        let entry: Vec<u8> = if c < dict.len() {
            dict[c].clone()
        } else if c == dict.len() {
            // self-reference case: the code the encoder just assigned, which
            // our copy of the dictionary has not learned yet.
            let mut e = dict[old].clone();
            e.push(dict[old][0]);
            e
        } else {
            return Err(Error::MalformedLzw);
        };
        out.extend_from_slice(&entry);

        if dict.len() < MAX_DICT_SIZE {
            let mut new_entry = dict[old].clone();
            new_entry.push(entry[0]);
            dict.push(new_entry);
        }
        old = c;
    }
    Ok(out)
}
