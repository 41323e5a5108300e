//! Byte-exact known-answer tests for scenarios A-D.
//!
//! The vectors in `tests/vectors.txt` were produced by compiling and
//! running the original reference implementation
//! (`examples/original_source/SpongeDuplexES/SpongeDuplexES.cpp`) against
//! each scenario's (K, IV, AD, P) and capturing its (CT, tag) output, not
//! by hand-tracing the algorithm or by round-tripping this crate against
//! itself.

use duplexcrypt::io::parse_hex;
use duplexcrypt::session::Session;

struct Vector {
    key: &'static str,
    iv: &'static str,
    ad: &'static str,
    plaintext: &'static str,
    ciphertext_body: &'static str,
    tag: &'static str,
}

const VECTORS: &[Vector] = &[
    // Scenario A: single-byte plaintext, zero key/IV, empty AD.
    Vector {
        key: "00000000000000000000000000000000",
        iv: "00000000000000000000000000000000",
        ad: "",
        plaintext: "41",
        ciphertext_body: "c65d326e4af9935c1d55f08217389205da2bd5cdf28fc1039aa171f3e77b5b91",
        tag: "4d89134722764134bef3f4ad884dbb16",
    },
    // Scenario B: empty plaintext, empty AD, zero key/IV.
    Vector {
        key: "00000000000000000000000000000000",
        iv: "00000000000000000000000000000000",
        ad: "",
        plaintext: "",
        ciphertext_body: "07dd326e4af9935c1d55f08217389205da2bd5cdf28fc1039aa171f3e77b5b91",
        tag: "6dcc0abcb203e18f2e33b152b59a0c11",
    },
    // Scenario C: non-zero key, short AD ("hdr") and plaintext ("payload").
    Vector {
        key: "ffffffffffffffffffffffffffffffff",
        iv: "00000000000000000000000000000000",
        ad: "686472",
        plaintext: "7061796c6f6164",
        ciphertext_body: "b735bb8d9b313ea43ddb68249eb63c718c49cfbe6915cd44f4363fec2feef34d",
        tag: "6d8505f71f69e62e6c85054abd6acc9d",
    },
    // Scenario D: multi-block AD (32 x 0xAA) and plaintext (64 x 0x55).
    Vector {
        key: "0102030405060708090a0b0c0d0e0f10",
        iv: "100f0e0d0c0b0a090807060504030201",
        ad: "aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa",
        plaintext: "55555555555555555555555555555555555555555555555555555555555555555555555555555555555555555555555555555555555555555555555555555555",
        ciphertext_body: "ae3d6d3d4df94be035dff27ef52d300312f8efdc0fb0ab91cad4b5cfb68185eb653cf9c2af59bf208cde79d44622741897870abe291b460c2fbd7c70da7e2cf09357491765306ee6228e400b329ad52d6219dd5d43a9e5fc73a38e9ed245b2d5",
        tag: "61e2b6a590fe2af449ca60ad986bdabe",
    },
];

#[test]
fn reference_vectors_match_byte_for_byte() {
    for (i, v) in VECTORS.iter().enumerate() {
        let key: [u8; 16] = parse_hex(v.key).unwrap().try_into().unwrap();
        let iv: [u8; 16] = parse_hex(v.iv).unwrap().try_into().unwrap();
        let ad = parse_hex(v.ad).unwrap();
        let plaintext = parse_hex(v.plaintext).unwrap();
        let expected_body = parse_hex(v.ciphertext_body).unwrap();
        let expected_tag = parse_hex(v.tag).unwrap();

        let mut session = Session::new(key, iv);
        session.absorb_ad(&ad).unwrap();
        let (ciphertext, tag) = session.encrypt(&plaintext).unwrap();

        let (body, trailing_tag) = ciphertext.split_at(ciphertext.len() - 16);

        assert_eq!(body, expected_body.as_slice(), "vector {i}: ciphertext body mismatch");
        assert_eq!(trailing_tag, expected_tag.as_slice(), "vector {i}: trailing tag mismatch");
        assert_eq!(tag.as_slice(), expected_tag.as_slice(), "vector {i}: returned tag mismatch");
    }
}

#[test]
fn reference_vectors_decrypt_back_to_padded_plaintext() {
    for (i, v) in VECTORS.iter().enumerate() {
        let key: [u8; 16] = parse_hex(v.key).unwrap().try_into().unwrap();
        let iv: [u8; 16] = parse_hex(v.iv).unwrap().try_into().unwrap();
        let ad = parse_hex(v.ad).unwrap();
        let expected_body = parse_hex(v.ciphertext_body).unwrap();
        let expected_tag = parse_hex(v.tag).unwrap();

        let mut ciphertext = expected_body.clone();
        ciphertext.extend_from_slice(&expected_tag);

        let mut session = Session::new(key, iv);
        session.absorb_ad(&ad).unwrap();
        let (plaintext, recomputed) = session.decrypt(&ciphertext).unwrap();

        assert_eq!(
            recomputed.as_slice(),
            expected_tag.as_slice(),
            "vector {i}: recomputed tag mismatch"
        );

        let raw_plaintext = parse_hex(v.plaintext).unwrap();
        assert_eq!(
            &plaintext[..raw_plaintext.len()],
            raw_plaintext.as_slice(),
            "vector {i}: decrypted plaintext mismatch"
        );
    }
}
