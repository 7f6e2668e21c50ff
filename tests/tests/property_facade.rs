//! Property-based tests for the facade operations

use ecbridge::prelude::*;
use ecbridge_tests::{clamp_scalar, decompress_p256, decompress_secp256k1};
use proptest::prelude::*;

const CURVE_IDS: [u32; 2] = [0, 1];

fn scalars() -> impl Strategy<Value = [u8; 32]> {
    any::<[u8; 32]>().prop_map(clamp_scalar)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn derived_keys_always_validate(scalar in scalars()) {
        for curve_id in CURVE_IDS {
            let public = compute_public_key(&scalar, curve_id).unwrap();
            prop_assert!(verify_public_key(public.as_ref(), curve_id).is_ok());
        }
    }

    #[test]
    fn ecdh_is_symmetric(a in scalars(), b in scalars()) {
        prop_assume!(a != b);
        for curve_id in CURVE_IDS {
            let pub_a = compute_public_key(&a, curve_id).unwrap();
            let pub_b = compute_public_key(&b, curve_id).unwrap();
            let ab = generate_shared_secret(&a, pub_b.as_ref(), curve_id).unwrap();
            let ba = generate_shared_secret(&b, pub_a.as_ref(), curve_id).unwrap();
            prop_assert_eq!(ab, ba);
        }
    }

    #[test]
    fn compression_round_trips(scalar in scalars()) {
        let public = compute_public_key(&scalar, 1).unwrap();
        let compressed = compress_public_key(public.as_ref(), 1).unwrap();
        prop_assert_eq!(decompress_secp256k1(compressed.as_ref()), *public.as_bytes());

        let public = compute_public_key(&scalar, 0).unwrap();
        let compressed = compress_public_key(public.as_ref(), 0).unwrap();
        prop_assert_eq!(decompress_p256(compressed.as_ref()), *public.as_bytes());
    }

    #[test]
    fn signing_is_deterministic(scalar in scalars(), digest in any::<[u8; 32]>()) {
        for curve_id in CURVE_IDS {
            let first = sign_message_digest(&scalar, &digest, curve_id).unwrap();
            let second = sign_message_digest(&scalar, &digest, curve_id).unwrap();
            prop_assert_eq!(first, second);
        }
    }

    #[test]
    fn wrong_length_private_keys_fail_closed(len in 0usize..64) {
        prop_assume!(len != 32);
        let bytes = vec![0x33u8; len];
        for curve_id in CURVE_IDS {
            let is_length_mismatch = matches!(
                compute_public_key(&bytes, curve_id),
                Err(Error::LengthMismatch { .. })
            );
            prop_assert!(is_length_mismatch);
        }
    }
}
