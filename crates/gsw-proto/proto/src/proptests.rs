
#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use prost::Message;
    use crate::v1::{MessageV1, PublicKeyV1};

    // Strategies for generating wire messages with every presence combination

    prop_compose! {
        fn any_message()(
            from in prop::option::of(prop::collection::vec(any::<u8>(), 0..64)),
            data in prop::option::of(prop::collection::vec(any::<u8>(), 0..256)),
            seqno in prop::option::of(prop::collection::vec(any::<u8>(), 0..16)),
            topic in prop::option::of("[a-z0-9/.-]{0,24}"),
            signature in prop::option::of(prop::collection::vec(any::<u8>(), 0..96)),
            key in prop::option::of(prop::collection::vec(any::<u8>(), 0..96)),
        ) -> MessageV1 {
            MessageV1 { from, data, seqno, topic, signature, key }
        }
    }

    prop_compose! {
        fn any_public_key()(
            key_type in 0..4i32,
            key_bytes in prop::collection::vec(any::<u8>(), 0..80),
        ) -> PublicKeyV1 {
            PublicKeyV1 { key_type, key_bytes }
        }
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn test_message_round_trip(msg in any_message()) {
            let mut buf = Vec::new();
            msg.encode(&mut buf).unwrap();

            let decoded = MessageV1::decode(buf.as_slice()).unwrap();
            assert_eq!(msg.from, decoded.from);
            assert_eq!(msg.data, decoded.data);
            assert_eq!(msg.seqno, decoded.seqno);
            assert_eq!(msg.topic, decoded.topic);
            assert_eq!(msg.signature, decoded.signature);
            assert_eq!(msg.key, decoded.key);
        }

        #[test]
        fn test_public_key_round_trip(key in any_public_key()) {
            let mut buf = Vec::new();
            key.encode(&mut buf).unwrap();

            let decoded = PublicKeyV1::decode(buf.as_slice()).unwrap();
            assert_eq!(key.key_type, decoded.key_type);
            assert_eq!(key.key_bytes, decoded.key_bytes);
        }

        // Absent and present-but-empty are distinct states for optional
        // fields; signatures depend on that distinction surviving encoding.
        #[test]
        fn test_absent_field_differs_from_empty(msg in any_message()) {
            if msg.data.is_none() {
                let mut with_empty = msg.clone();
                with_empty.data = Some(Vec::new());
                prop_assert_ne!(msg.encode_to_vec(), with_empty.encode_to_vec());
            }
            if msg.signature.is_none() {
                let mut with_empty = msg.clone();
                with_empty.signature = Some(Vec::new());
                prop_assert_ne!(msg.encode_to_vec(), with_empty.encode_to_vec());
            }
        }
    }
}
