
#[cfg(test)]
mod tests {
    use bytes::Bytes;
    use proptest::prelude::*;

    use gsw_crypto::keys::Keypair;
    use gsw_crypto::peer::PeerId;

    use crate::message::{SignedMessage, UnsignedMessage};
    use crate::sign::{sign_message, SignableMessage};
    use crate::verify::verify_message;

    fn message(keypair: &Keypair, data: Vec<u8>, seqno: Vec<u8>, topic: String) -> UnsignedMessage {
        UnsignedMessage {
            from: PeerId::from_public_key(&keypair.public()),
            data: Bytes::from(data),
            seqno: Bytes::from(seqno),
            topic,
        }
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn test_sign_verify_round_trip_ed25519(
            seed in any::<[u8; 32]>(),
            data in prop::collection::vec(any::<u8>(), 0..256),
            seqno in prop::collection::vec(any::<u8>(), 0..16),
            topic in "[a-z0-9/]{1,24}",
        ) {
            let keypair = Keypair::from_seed_ed25519(seed);
            let signed = sign_message(&keypair, message(&keypair, data, seqno, topic)).unwrap();
            prop_assert!(verify_message(&signed).unwrap());
        }

        #[test]
        fn test_sign_verify_round_trip_p256(
            seed in any::<[u8; 32]>(),
            data in prop::collection::vec(any::<u8>(), 0..256),
            seqno in prop::collection::vec(any::<u8>(), 0..16),
            topic in "[a-z0-9/]{1,24}",
        ) {
            if let Ok(keypair) = Keypair::from_seed_ecdsa_p256(seed) {
                let signed = sign_message(&keypair, message(&keypair, data, seqno, topic)).unwrap();
                prop_assert!(signed.key.is_some());
                prop_assert!(verify_message(&signed).unwrap());
            }
        }

        // The canonical encoding must not depend on how `from` came to be
        // in memory: derived from the key or re-parsed from raw bytes.
        #[test]
        fn test_encoding_ignores_identifier_provenance(
            seed in any::<[u8; 32]>(),
            data in prop::collection::vec(any::<u8>(), 0..256),
            seqno in prop::collection::vec(any::<u8>(), 0..16),
            topic in "[a-z0-9/]{1,24}",
        ) {
            let keypair = Keypair::from_seed_ed25519(seed);
            let derived = PeerId::from_public_key(&keypair.public());
            let parsed = PeerId::from_bytes(&derived.to_bytes()).unwrap();

            let a = UnsignedMessage {
                from: derived,
                data: Bytes::from(data.clone()),
                seqno: Bytes::from(seqno.clone()),
                topic: topic.clone(),
            };
            let b = UnsignedMessage { from: parsed, data: a.data.clone(), seqno: a.seqno.clone(), topic };

            prop_assert_eq!(
                SignableMessage::from_unsigned(&a).encode(),
                SignableMessage::from_unsigned(&b).encode()
            );
        }

        #[test]
        fn test_payload_tamper_detected(
            seed in any::<[u8; 32]>(),
            data in prop::collection::vec(any::<u8>(), 1..256),
            seqno in prop::collection::vec(any::<u8>(), 0..16),
            topic in "[a-z0-9/]{1,24}",
            flip in any::<usize>(),
        ) {
            let keypair = Keypair::from_seed_ed25519(seed);
            let mut signed = sign_message(&keypair, message(&keypair, data, seqno, topic)).unwrap();

            let mut tampered = signed.message.data.to_vec();
            let idx = flip % tampered.len();
            tampered[idx] ^= 0x01;
            signed.message.data = Bytes::from(tampered);

            prop_assert!(!verify_message(&signed).unwrap());
        }

        #[test]
        fn test_wire_round_trip_preserves_verification(
            seed in any::<[u8; 32]>(),
            data in prop::collection::vec(any::<u8>(), 0..256),
            seqno in any::<[u8; 8]>(),
            topic in "[a-z0-9/]{1,24}",
        ) {
            let keypair = Keypair::from_seed_ed25519(seed);
            let signed =
                sign_message(&keypair, message(&keypair, data, seqno.to_vec(), topic)).unwrap();

            let received = SignedMessage::from_wire(&signed.to_wire()).unwrap();
            prop_assert_eq!(&received, &signed);
            prop_assert!(verify_message(&received).unwrap());
        }
    }
}
