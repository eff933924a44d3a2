//! The hybrid container format: a single flag byte plus a payload, and the
//! greedy selector that picks among {identity, Huffman-only, hybrid}.

use crate::error::{Error, Result};
use crate::{huffman, lzw};

const FLAG_HUFFMAN_ONLY: u8 = 0x00;
const FLAG_HYBRID: u8 = 0x01;
const FLAG_IDENTITY: u8 = 0x02;

/// Compress `input` into a full container frame: one flag byte followed by
/// the chosen encoding. Output is never larger than `input.len() + 1`.
pub fn compress(input: &[u8]) -> Vec<u8> {
    let n = input.len();
    let lzw_payload = lzw::encode(input);
    let use_lzw = lzw_payload.len() < n;
    let src: &[u8] = if use_lzw { &lzw_payload } else { input };

    let huff = huffman::encode(src);
    if 1 + huff.len() < n {
        let flag = if use_lzw { FLAG_HYBRID } else { FLAG_HUFFMAN_ONLY };
        log::debug!("container: chose flag {:#04x}, {} -> {} bytes", flag, n, 1 + huff.len());
        let mut out = Vec::with_capacity(1 + huff.len());
        out.push(flag);
        out.extend_from_slice(&huff);
        out
    } else {
        log::debug!("container: identity wins, {} -> {} bytes", n, n + 1);
        let mut out = Vec::with_capacity(1 + n);
        out.push(FLAG_IDENTITY);
        out.extend_from_slice(input);
        out
    }
}

/// Decompress a container frame produced by [`compress`].
pub fn decompress(input: &[u8]) -> Result<Vec<u8>> {
    let (&flag, payload) = input.split_first().ok_or(Error::MalformedHeader)?;
    match flag {
        FLAG_IDENTITY => Ok(payload.to_vec()),
        FLAG_HUFFMAN_ONLY => huffman::decode(payload),
        FLAG_HYBRID => {
            let lzw_payload = huffman::decode(payload)?;
            lzw::decode(&lzw_payload)
        }
        other => Err(Error::UnknownFlag(other)),
    }
}

/// Thin file wrapper: reads `path_in`, compresses, writes `path_out`.
/// Empty input is rejected per the file-level contract; the pure
/// [`compress`] function has no such restriction.
pub fn compress_file(path_in: &std::path::Path, path_out: &std::path::Path) -> Result<()> {
    let data = std::fs::read(path_in)?;
    if data.is_empty() {
        return Err(Error::InputEmpty);
    }
    let out = compress(&data);
    std::fs::write(path_out, out)?;
    Ok(())
}

/// Thin file wrapper: reads `path_in`, decompresses, writes `path_out`.
pub fn decompress_file(path_in: &std::path::Path, path_out: &std::path::Path) -> Result<()> {
    let data = std::fs::read(path_in)?;
    let out = decompress(&data)?;
    std::fs::write(path_out, out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn round_trip(data: &[u8]) {
        let enc = compress(data);
        assert_eq!(decompress(&enc).unwrap(), data);
    }

    #[test]
    fn empty_input_round_trips_through_the_pure_api() {
        round_trip(b"");
    }

    #[test]
    fn single_symbol_run_chooses_huffman_only() {
        let data = b"A".repeat(100);
        let enc = compress(&data);
        assert_eq!(enc[0], FLAG_HUFFMAN_ONLY);
        assert_eq!(decompress(&enc).unwrap(), data);
    }

    #[test]
    fn tobeornottobe_chooses_the_smallest_representation() {
        let data = b"TOBEORNOTTOBEORTOBEORNOT";
        let enc = compress(data);
        assert!(enc.len() <= data.len() + 1);
        assert_eq!(decompress(&enc).unwrap(), data);
    }

    #[test]
    fn abc_repeated_a_thousand_times_chooses_hybrid() {
        let data = b"abc".repeat(1000);
        let enc = compress(&data);
        assert_eq!(enc[0], FLAG_HYBRID);
        assert_eq!(decompress(&enc).unwrap(), data);
    }

    #[test]
    fn log_like_repeated_phrase_stream_compresses_well() {
        let mut data = Vec::new();
        for i in 0..200_000u32 {
            data.extend_from_slice(format!("2026-07-28 INFO request id={i} ok\n").as_bytes());
        }
        let enc = compress(&data);
        assert_eq!(enc[0], FLAG_HYBRID);
        assert!((enc.len() as f64) < 0.3 * data.len() as f64);
        assert_eq!(decompress(&enc).unwrap(), data);
    }

    #[test]
    fn random_bytes_choose_identity_and_grow_by_exactly_one() {
        let mut state: u64 = 0x9E3779B97F4A7C15;
        let data: Vec<u8> = (0..1_000_000)
            .map(|_| {
                state ^= state << 13;
                state ^= state >> 7;
                state ^= state << 17;
                (state & 0xFF) as u8
            })
            .collect();
        let enc = compress(&data);
        assert_eq!(enc[0], FLAG_IDENTITY);
        assert_eq!(enc.len(), data.len() + 1);
        assert_eq!(decompress(&enc).unwrap(), data);
    }

    #[test]
    fn unknown_flag_is_rejected() {
        assert!(matches!(decompress(&[0x03]), Err(Error::UnknownFlag(0x03))));
    }

    #[test]
    fn empty_container_is_rejected() {
        assert!(decompress(&[]).is_err());
    }

    #[test]
    fn header_is_deterministic_across_independent_compresses() {
        let data = b"mississippi river".to_vec();
        assert_eq!(compress(&data), compress(&data));
    }
}
