//! End-to-end tests of the five boundary operations

use ecbridge::prelude::*;
use ecbridge_tests::{clamp_scalar, decompress_p256, decompress_secp256k1};

const P256_ID: u32 = 0;
const SECP256K1_ID: u32 = 1;

#[test]
fn known_secp256k1_public_key() {
    // Vector produced by an independent secp256k1 implementation.
    let private_key =
        hex::decode("995d78eada34f8fdae356d0c4b8e1ee25f104b094cb0689888dfdb6144f3271a").unwrap();
    let expected = hex::decode(
        "02e639863bbc4dd0db450bb0029b1a1a05689b7cb178ef13c3d343138705d3e8\
         48d454141846ea165524e5d418fccb107207374f861f1c13f9b46d5785d0e878",
    )
    .unwrap();

    let public = compute_public_key(&private_key, SECP256K1_ID).unwrap();
    assert_eq!(public.as_ref(), expected.as_slice());
}

#[test]
fn known_secp256k1_compressions() {
    let cases = [
        (
            "02e639863bbc4dd0db450bb0029b1a1a05689b7cb178ef13c3d343138705d3e8\
             48d454141846ea165524e5d418fccb107207374f861f1c13f9b46d5785d0e878",
            "0202e639863bbc4dd0db450bb0029b1a1a05689b7cb178ef13c3d343138705d3e8",
        ),
        (
            "3ba44319e14583c7c01957d8997d13399bbb66f6b88774701a67f2e7ea9c32fc\
             39eb4651dafef5c94b360beff76813d74d94890a0aa6a25989382ee67fa230a1",
            "033ba44319e14583c7c01957d8997d13399bbb66f6b88774701a67f2e7ea9c32fc",
        ),
    ];

    for (public_hex, compressed_hex) in cases {
        let public = hex::decode(public_hex).unwrap();
        let compressed = compress_public_key(&public, SECP256K1_ID).unwrap();
        assert_eq!(
            compressed.as_ref(),
            hex::decode(compressed_hex).unwrap().as_slice()
        );
    }
}

#[test]
fn scalar_one_derives_the_generator() {
    let mut one = [0u8; 32];
    one[31] = 1;

    let k1 = compute_public_key(&one, SECP256K1_ID).unwrap();
    assert_eq!(
        hex::encode(k1.as_ref()),
        "79be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798\
         483ada7726a3c4655da4fbfc0e1108a8fd17b448a68554199c47d08ffb10d4b8"
    );
    // secp256k1's G has an even Y coordinate.
    let compressed = compress_public_key(k1.as_ref(), SECP256K1_ID).unwrap();
    assert_eq!(compressed.as_bytes()[0], 0x02);
    assert_eq!(compressed.x_bytes(), &k1.as_bytes()[..32]);

    let p = compute_public_key(&one, P256_ID).unwrap();
    assert_eq!(
        hex::encode(p.as_ref()),
        "6b17d1f2e12c4247f8bce6e563a440f277037d812deb33a0f4a13945d898c296\
         4fe342e2fe1a7f9b8ee7eb4a7c0f9e162bce33576b315ececbb6406837bf51f5"
    );
    // P-256's G has an odd Y coordinate.
    let compressed = compress_public_key(p.as_ref(), P256_ID).unwrap();
    assert_eq!(compressed.as_bytes()[0], 0x03);
}

#[test]
fn compression_round_trips_through_an_independent_decoder() {
    let key = clamp_scalar([0x27u8; 32]);

    let public = compute_public_key(&key, SECP256K1_ID).unwrap();
    let compressed = compress_public_key(public.as_ref(), SECP256K1_ID).unwrap();
    assert_eq!(decompress_secp256k1(compressed.as_ref()), *public.as_bytes());

    let public = compute_public_key(&key, P256_ID).unwrap();
    let compressed = compress_public_key(public.as_ref(), P256_ID).unwrap();
    assert_eq!(decompress_p256(compressed.as_ref()), *public.as_bytes());
}

#[test]
fn signatures_verify_and_a_digest_bit_flip_fails() {
    use k256::ecdsa::signature::hazmat::PrehashVerifier;

    let key = clamp_scalar([0x42u8; 32]);
    let digest = [0x10u8; 32];

    let public = compute_public_key(&key, SECP256K1_ID).unwrap();
    let signature = sign_message_digest(&key, &digest, SECP256K1_ID).unwrap();
    let mut sec1 = vec![0x04u8];
    sec1.extend_from_slice(public.as_ref());
    let verifier = k256::ecdsa::VerifyingKey::from_sec1_bytes(&sec1).unwrap();
    let sig = k256::ecdsa::Signature::from_slice(signature.as_ref()).unwrap();
    verifier.verify_prehash(&digest, &sig).unwrap();

    let mut flipped = digest;
    flipped[0] ^= 0x01;
    assert!(verifier.verify_prehash(&flipped, &sig).is_err());

    let public = compute_public_key(&key, P256_ID).unwrap();
    let signature = sign_message_digest(&key, &digest, P256_ID).unwrap();
    let mut sec1 = vec![0x04u8];
    sec1.extend_from_slice(public.as_ref());
    let verifier = p256::ecdsa::VerifyingKey::from_sec1_bytes(&sec1).unwrap();
    let sig = p256::ecdsa::Signature::from_slice(signature.as_ref()).unwrap();
    verifier.verify_prehash(&digest, &sig).unwrap();
    assert!(verifier.verify_prehash(&flipped, &sig).is_err());
}

#[test]
fn independently_generated_key_pairs_agree() {
    use rand::RngCore;

    let mut rng = rand::rngs::OsRng;
    for curve_id in [P256_ID, SECP256K1_ID] {
        let mut a = [0u8; 32];
        rng.fill_bytes(&mut a);
        let a = clamp_scalar(a);
        let mut b = [0u8; 32];
        rng.fill_bytes(&mut b);
        let b = clamp_scalar(b);

        let pub_a = compute_public_key(&a, curve_id).unwrap();
        let pub_b = compute_public_key(&b, curve_id).unwrap();
        let ab = generate_shared_secret(&a, pub_b.as_ref(), curve_id).unwrap();
        let ba = generate_shared_secret(&b, pub_a.as_ref(), curve_id).unwrap();
        assert_eq!(ab, ba);
    }
}

#[test]
fn unsupported_selectors_fail_every_operation() {
    let key = [0x01u8; 32];
    let point = [0u8; 64];
    let digest = [0u8; 32];

    for id in [2u32, 9, u32::MAX] {
        assert_eq!(
            compress_public_key(&point, id).unwrap_err(),
            Error::UnsupportedCurve { id }
        );
        assert_eq!(
            generate_shared_secret(&key, &point, id).unwrap_err(),
            Error::UnsupportedCurve { id }
        );
        assert_eq!(
            sign_message_digest(&key, &digest, id).unwrap_err(),
            Error::UnsupportedCurve { id }
        );
        assert_eq!(
            compute_public_key(&key, id).unwrap_err(),
            Error::UnsupportedCurve { id }
        );
        assert_eq!(
            verify_public_key(&point, id).unwrap_err(),
            Error::UnsupportedCurve { id }
        );
    }
}

#[test]
fn wrong_sized_inputs_fail_closed() {
    for curve_id in [P256_ID, SECP256K1_ID] {
        for bad_scalar_len in [0, 31, 33] {
            let bytes = vec![0x11u8; bad_scalar_len];
            assert!(matches!(
                compute_public_key(&bytes, curve_id).unwrap_err(),
                Error::LengthMismatch { .. }
            ));
        }
        for bad_point_len in [0, 33, 63, 65] {
            let bytes = vec![0x11u8; bad_point_len];
            assert!(matches!(
                verify_public_key(&bytes, curve_id).unwrap_err(),
                Error::LengthMismatch { .. }
            ));
            assert!(matches!(
                compress_public_key(&bytes, curve_id).unwrap_err(),
                Error::LengthMismatch { .. }
            ));
        }
        assert!(matches!(
            sign_message_digest(&[0x11u8; 32], &[0u8; 31], curve_id).unwrap_err(),
            Error::LengthMismatch { .. }
        ));
    }
}

#[test]
fn validation_reports_specific_reasons() {
    // (0, 0) and (1, 0) satisfy neither curve equation.
    let zero_point = [0u8; 64];
    let mut one_zero = [0u8; 64];
    one_zero[31] = 1;

    for curve_id in [P256_ID, SECP256K1_ID] {
        for point in [&zero_point, &one_zero] {
            assert_eq!(
                verify_public_key(point, curve_id).unwrap_err(),
                Error::PointNotOnCurve {
                    context: "verify_public_key"
                }
            );
        }
    }
}
