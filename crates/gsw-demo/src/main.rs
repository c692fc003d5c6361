use anyhow::Context;
use bytes::Bytes;
use prost::Message;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use gsw_crypto::keys::Keypair;
use gsw_crypto::peer::PeerId;
use gsw_proto::v1::MessageV1;
use gsw_pubsub::{
    message::{random_seqno, SignedMessage, UnsignedMessage},
    policy::SignaturePolicy,
    sign::sign_message,
    verify::verify_message,
};

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Publishing with an Ed25519 identity (key rides inside the peer id)");
    publish_and_verify(&Keypair::generate_ed25519(), "demo/ed25519")?;

    info!("Publishing with a P-256 identity (key travels in the key field)");
    publish_and_verify(&Keypair::generate_ecdsa_p256(), "demo/p256")?;

    info!("Anonymous publish under StrictNoSign");
    anonymous_publish()?;

    Ok(())
}

fn publish_and_verify(keypair: &Keypair, topic: &str) -> anyhow::Result<()> {
    let policy = SignaturePolicy::default();

    // 1) Build and sign the outgoing message
    let message = UnsignedMessage {
        from: PeerId::from_public_key(&keypair.public()),
        data: Bytes::from_static(b"hello gossip"),
        seqno: Bytes::copy_from_slice(&random_seqno()?),
        topic: topic.to_string(),
    };
    anyhow::ensure!(policy.must_sign(), "default policy should require signing");
    let signed = sign_message(keypair, message).context("signing failed")?;

    println!("PEER_ID_HEX={}", signed.message.from);
    println!("SIGNATURE_HEX={}", hex::encode(&signed.signature));
    println!("KEY_ATTACHED={}", signed.key.is_some());

    // 2) Encode to wire bytes and decode as a receiver would
    let wire_bytes = signed.to_wire().encode_to_vec();
    println!("WIRE_BYTES={}", wire_bytes.len());

    let wire = MessageV1::decode(wire_bytes.as_slice()).context("wire decode failed")?;
    policy.check_incoming(&wire).context("policy rejected message")?;
    let received = SignedMessage::from_wire(&wire).context("signed parse failed")?;

    // 3) Verify and de-duplicate
    let verified = verify_message(&received).context("key resolution failed")?;
    println!("MESSAGE_ID={}", received.id());
    println!("VERIFIED={}", verified);
    anyhow::ensure!(verified, "signature did not verify");

    // 4) A tampered copy must fail
    let mut tampered = received;
    tampered.message.data = Bytes::from_static(b"hello forgery");
    let verified = verify_message(&tampered).context("key resolution failed")?;
    println!("TAMPERED_VERIFIED={}", verified);
    anyhow::ensure!(!verified, "tampered message verified");

    Ok(())
}

fn anonymous_publish() -> anyhow::Result<()> {
    let policy = SignaturePolicy::StrictNoSign;

    let wire = MessageV1 {
        from: None,
        data: Some(b"hello anonymous".to_vec()),
        seqno: None,
        topic: Some("demo/anonymous".to_string()),
        signature: None,
        key: None,
    };
    policy
        .check_incoming(&wire)
        .context("policy rejected anonymous message")?;
    println!("ANONYMOUS_ACCEPTED=true");

    Ok(())
}
