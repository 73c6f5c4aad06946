//! tests/codec_tests.rs
//! Alphabet encode/decode behavior: known vectors, round-trips, rejection
//! of malformed input.

use rand::{Rng, RngCore};

use secretdec_rs::{strip_whitespace, KeyFault, SecretdecError, BASE32, BASE64, HEX};

#[test]
fn base64_known_vectors() {
    let cases: &[(&[u8], bool, &str)] = &[
        (b"", false, ""),
        (b"", true, ""),
        (b"Hi", false, "SGk"),
        (b"Hi", true, "SGk="),
        (b"Man", false, "TWFu"),
        (b"Man", true, "TWFu"), // exact group: no padding even when requested
        (b"Hello, World!", true, "SGVsbG8sIFdvcmxkIQ=="),
    ];
    for (input, pad, expected) in cases {
        assert_eq!(
            BASE64.encode(input, *pad),
            expected.as_bytes(),
            "encode {input:?} pad={pad}"
        );
    }
}

#[test]
fn base64_decode_vectors() {
    assert_eq!(BASE64.decode(b"SGk").unwrap(), b"Hi");
    assert_eq!(BASE64.decode(b"SGk=").unwrap(), b"Hi");
    assert_eq!(BASE64.decode(b"TWFu").unwrap(), b"Man");
    assert_eq!(BASE64.decode(b"").unwrap(), b"");
}

#[test]
fn base64_rejects_out_of_alphabet() {
    let err = BASE64.decode(b"SG!k").unwrap_err();
    assert!(matches!(err, SecretdecError::InvalidCharacter(b'!')));

    // whitespace is not tolerated outside hex mode
    assert!(matches!(
        BASE64.decode(b"SG k").unwrap_err(),
        SecretdecError::InvalidCharacter(b' ')
    ));

    // data after padding
    assert!(matches!(
        BASE64.decode(b"SGk=A").unwrap_err(),
        SecretdecError::InvalidCharacter(b'A')
    ));
}

#[test]
fn base64_rejects_impossible_length() {
    // a single symbol carries 6 bits, never a full byte
    assert!(matches!(
        BASE64.decode(b"S").unwrap_err(),
        SecretdecError::InvalidLength
    ));
    assert!(matches!(
        BASE64.decode(b"SGkxS").unwrap_err(),
        SecretdecError::InvalidLength
    ));
}

#[test]
fn base32_rejects_lowercase_and_bad_lengths() {
    assert!(matches!(
        BASE32.decode(b"abcd").unwrap_err(),
        SecretdecError::InvalidCharacter(b'a')
    ));
    // 0, 7, 8, 9 are not in the A-Z 1-6 alphabet
    assert!(matches!(
        BASE32.decode(b"AB70").unwrap_err(),
        SecretdecError::InvalidCharacter(b'7')
    ));
    for bad in [b"A".as_slice(), b"ABC", b"ABCDEF"] {
        assert!(
            matches!(BASE32.decode(bad).unwrap_err(), SecretdecError::InvalidLength),
            "length {} must be rejected",
            bad.len()
        );
    }
    for good_len in [2usize, 4, 5, 7, 8] {
        let text = vec![b'A'; good_len];
        assert!(BASE32.decode(&text).is_ok(), "length {good_len} must decode");
    }
}

#[test]
fn hex_decode_tolerates_whitespace_and_case() {
    assert_eq!(HEX.decode(b"4869").unwrap(), b"Hi");
    assert_eq!(HEX.decode(b"48 69").unwrap(), b"Hi");
    assert_eq!(HEX.decode(b"\t48\n6 9 ").unwrap(), b"Hi");
    assert_eq!(HEX.decode(b"48E9").unwrap(), HEX.decode(b"48e9").unwrap());
}

#[test]
fn hex_rejects_bad_input() {
    assert!(matches!(
        HEX.decode(b"4z").unwrap_err(),
        SecretdecError::InvalidCharacter(b'z')
    ));
    assert!(matches!(
        HEX.decode(b"486").unwrap_err(),
        SecretdecError::InvalidLength
    ));
    // whitespace does not count toward the digit total
    assert!(matches!(
        HEX.decode(b"48 6").unwrap_err(),
        SecretdecError::InvalidLength
    ));
}

#[test]
fn round_trips_all_alphabets() {
    let mut rng = rand::thread_rng();
    for len in 0..64usize {
        let mut input = vec![0u8; len];
        rng.fill_bytes(&mut input);

        for (alphabet, pad) in [(&BASE64, false), (&BASE64, true), (&BASE32, false), (&HEX, false)]
        {
            let encoded = alphabet.encode(&input, pad);
            let decoded = alphabet.decode(&encoded).unwrap();
            assert_eq!(decoded, input, "len {len} pad {pad}");
        }
    }
}

#[test]
fn encode_into_overflow_writes_nothing() {
    let mut out = [0xAAu8; 3];
    let err = BASE64.encode_into(b"Hi!", &mut out, false).unwrap_err();
    assert!(matches!(err, SecretdecError::Overflow));
    assert_eq!(out, [0xAA; 3], "failed encode must not touch the buffer");
}

#[test]
fn decode_into_overflow() {
    let mut out = [0u8; 1];
    assert!(matches!(
        BASE64.decode_into(b"SGkx", &mut out).unwrap_err(),
        SecretdecError::Overflow
    ));
}

#[test]
fn strip_whitespace_removes_all_ascii_whitespace() {
    let mut out = [0u8; 16];
    let n = strip_whitespace(b" 48\t69\r\n20 ", &mut out).unwrap();
    assert_eq!(&out[..n], b"486920");
}

#[test]
fn strip_whitespace_idempotent() {
    let mut once = [0u8; 16];
    let n1 = strip_whitespace(b"48 69 20", &mut once).unwrap();
    let mut twice = [0u8; 16];
    let n2 = strip_whitespace(&once[..n1], &mut twice).unwrap();
    assert_eq!(&once[..n1], &twice[..n2]);
}

#[test]
fn strip_whitespace_overflow_boundary() {
    let mut out = [0u8; 2];
    assert!(matches!(
        strip_whitespace(b"486", &mut out).unwrap_err(),
        SecretdecError::Overflow
    ));
    // exactly fitting is fine
    assert_eq!(strip_whitespace(b"4 8", &mut out).unwrap(), 2);
}

#[test]
fn random_padded_base64_matches_unpadded_prefix() {
    let mut rng = rand::thread_rng();
    for _ in 0..32 {
        let len = rng.gen_range(1..48usize);
        let mut input = vec![0u8; len];
        rng.fill_bytes(&mut input);
        let unpadded = BASE64.encode(&input, false);
        let padded = BASE64.encode(&input, true);
        assert!(padded.starts_with(&unpadded));
        assert!(padded.len() % 4 == 0);
        assert!(padded[unpadded.len()..].iter().all(|&b| b == b'='));
    }
}

#[test]
fn key_fault_display() {
    assert_eq!(
        SecretdecError::InvalidKey(KeyFault::WrongSize).to_string(),
        "invalid key: wrong size"
    );
    assert_eq!(
        SecretdecError::InvalidKey(KeyFault::WrongPassword).to_string(),
        "invalid key: wrong password"
    );
}
