//! Tests for base64 encoding (encode, encode_to_slice).

use base64_rfc4648::{encode, encode_to_slice, required_encode_size, Alphabet, Codec};
use rand::Rng;

fn generate_blob() -> Vec<u8> {
    let mut rng = rand::thread_rng();
    let length = rng.gen_range(1..=100);
    (0..length).map(|_| rng.gen::<u8>()).collect()
}

#[test]
fn works() {
    for _ in 0..100 {
        let blob = generate_blob();
        let result = encode(&blob, Alphabet::Standard);

        let expected = base64_encode(&blob, b'+', b'/');
        assert_eq!(result, expected, "Failed for blob of length {}", blob.len());
    }
}

#[test]
fn works_url_safe() {
    for _ in 0..100 {
        let blob = generate_blob();
        let result = encode(&blob, Alphabet::UrlSafe);

        assert!(!result.contains('+'));
        assert!(!result.contains('/'));

        let expected = base64_encode(&blob, b'-', b'_');
        assert_eq!(result, expected, "Failed for blob of length {}", blob.len());
    }
}

#[test]
fn to_slice_matches_string() {
    for _ in 0..100 {
        let blob = generate_blob();
        let expected = encode(&blob, Alphabet::Standard);

        let mut dest = vec![0u8; blob.len() * 4 + 3];
        let len = encode_to_slice(&blob, &mut dest[3..], Alphabet::Standard);
        assert_eq!(len, required_encode_size(blob.len()));
        assert_eq!(&dest[3..3 + len], expected.as_bytes());
        assert_eq!(&dest[..3], &[0u8; 3]);
    }
}

#[test]
fn does_not_mutate_input() {
    let blob = generate_blob();
    let dupe = blob.clone();
    let _ = Codec::new().encode(&blob);
    assert_eq!(dupe, blob);
}

#[test]
fn size_law() {
    for _ in 0..100 {
        let blob = generate_blob();
        let encoded = encode(&blob, Alphabet::UrlSafe);
        assert_eq!(encoded.len(), required_encode_size(blob.len()));
        assert_eq!(encoded.len() % 4, 0);
    }
}

#[test]
fn pad_count() {
    for length in 0..30 {
        let blob = vec![0xa5u8; length];
        let encoded = encode(&blob, Alphabet::Standard);
        let pads = encoded.bytes().rev().take_while(|&b| b == b'=').count();
        assert_eq!(pads, (3 - length % 3) % 3, "length {length}");
    }
}

#[test]
fn empty_input() {
    assert_eq!(encode(b"", Alphabet::Standard), "");
    assert_eq!(encode(b"", Alphabet::UrlSafe), "");
    let mut dest = [0u8; 0];
    assert_eq!(encode_to_slice(b"", &mut dest, Alphabet::Standard), 0);
}

#[test]
fn rfc4648_vectors() {
    let vectors: [(&[u8], &str); 7] = [
        (b"", ""),
        (b"f", "Zg=="),
        (b"fo", "Zm8="),
        (b"foo", "Zm9v"),
        (b"foob", "Zm9vYg=="),
        (b"fooba", "Zm9vYmE="),
        (b"foobar", "Zm9vYmFy"),
    ];
    for (data, expected) in vectors {
        assert_eq!(encode(data, Alphabet::Standard), expected);
        assert_eq!(encode(data, Alphabet::UrlSafe), expected);
    }
}

#[test]
fn hello_world() {
    assert_eq!(encode(b"hello world", Alphabet::Standard), "aGVsbG8gd29ybGQ=");
}

/// Simple base64 encoding for test verification
fn base64_encode(data: &[u8], sym62: u8, sym63: u8) -> String {
    const SHARED: &[u8; 62] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";
    let symbol = |v: u8| match v {
        62 => sym62 as char,
        63 => sym63 as char,
        _ => SHARED[v as usize] as char,
    };

    let mut result = String::new();
    let mut i = 0;

    while i < data.len() {
        let chunk = &data[i..std::cmp::min(i + 3, data.len())];
        let b0 = chunk[0];
        let b1 = chunk.get(1).copied().unwrap_or(0);
        let b2 = chunk.get(2).copied().unwrap_or(0);

        result.push(symbol(b0 >> 2));
        result.push(symbol(((b0 & 0x03) << 4) | (b1 >> 4)));

        if chunk.len() > 1 {
            result.push(symbol(((b1 & 0x0f) << 2) | (b2 >> 6)));
        } else {
            result.push('=');
        }

        if chunk.len() > 2 {
            result.push(symbol(b2 & 0x3f));
        } else {
            result.push('=');
        }

        i += 3;
    }

    result
}
