
#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::keys::{Keypair, PublicKey};
    use crate::peer::PeerId;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn test_ed25519_sign_verify(seed in any::<[u8; 32]>(), message in any::<Vec<u8>>()) {
            let keypair = Keypair::from_seed_ed25519(seed);
            let signature = keypair.sign(&message).unwrap();
            prop_assert!(keypair.public().verify(&message, &signature));
        }

        #[test]
        fn test_p256_sign_verify(seed in any::<[u8; 32]>(), message in any::<Vec<u8>>()) {
            // Scalars outside the curve order are skipped; in practice only
            // the all-zero shrink target hits this.
            if let Ok(keypair) = Keypair::from_seed_ecdsa_p256(seed) {
                let signature = keypair.sign(&message).unwrap();
                prop_assert!(keypair.public().verify(&message, &signature));
            }
        }

        #[test]
        fn test_tampered_message_fails(
            seed in any::<[u8; 32]>(),
            message in prop::collection::vec(any::<u8>(), 1..256),
            flip in any::<usize>(),
        ) {
            let keypair = Keypair::from_seed_ed25519(seed);
            let signature = keypair.sign(&message).unwrap();

            let mut tampered = message.clone();
            let idx = flip % tampered.len();
            tampered[idx] ^= 0x01;
            prop_assert!(!keypair.public().verify(&tampered, &signature));
        }

        #[test]
        fn test_peer_id_round_trip(seed in any::<[u8; 32]>()) {
            let public = Keypair::from_seed_ed25519(seed).public();
            let id = PeerId::from_public_key(&public);

            let parsed = PeerId::from_bytes(&id.to_bytes()).unwrap();
            prop_assert_eq!(&parsed, &id);
            prop_assert!(parsed.matches_key(&public));
        }

        #[test]
        fn test_peer_id_round_trip_hashed(seed in any::<[u8; 32]>()) {
            if let Ok(keypair) = Keypair::from_seed_ecdsa_p256(seed) {
                let public = keypair.public();
                let id = PeerId::from_public_key(&public);
                prop_assert!(!id.embeds_key());

                let parsed = PeerId::from_bytes(&id.to_bytes()).unwrap();
                prop_assert_eq!(&parsed, &id);
                prop_assert!(parsed.matches_key(&public));
            }
        }

        #[test]
        fn test_peer_id_binds_to_one_key(
            seed_a in any::<[u8; 32]>(),
            seed_b in any::<[u8; 32]>(),
        ) {
            prop_assume!(seed_a != seed_b);
            let a = Keypair::from_seed_ed25519(seed_a).public();
            let b = Keypair::from_seed_ed25519(seed_b).public();
            prop_assert!(!PeerId::from_public_key(&a).matches_key(&b));
        }

        #[test]
        fn test_public_key_protobuf_round_trip(seed in any::<[u8; 32]>()) {
            let public = Keypair::from_seed_ed25519(seed).public();
            let decoded = PublicKey::from_protobuf(&public.to_protobuf()).unwrap();
            prop_assert_eq!(decoded, public);
        }
    }
}
