//! End-to-end key exchanges through the negotiation context.

mod common;

use common::*;
use tls_groups::crypto::hybrid::{X25519_KYBER512, X25519_KYBER768};
use tls_groups::crypto::kem::{KemKeyPairGenerator, KemParameterSet};
use tls_groups::crypto::{DefaultBackend, SupportedKxGroup};
use tls_groups::{
    AlertDescription, ConnectionGroups, ConnectionParams, ContextConfig, Error, NamedGroup,
    NegotiationContext, PeerMisbehaved, ProtocolVersion,
};

fn default_backend_context() -> NegotiationContext {
    init_logging();
    NegotiationContext::new(
        false,
        Arc::new(DefaultBackend),
        &ContextConfig::default().with_named_groups([
            "x25519Kyber768",
            "x25519Kyber512",
            "x25519",
            "secp256r1",
            "kyber1024",
        ]),
    )
}

#[test]
fn client_and_server_agree_on_negotiated_hybrid() {
    let ctx = default_backend_context();
    let client = ConnectionGroups::for_client(
        &ctx,
        &ConnectionParams::default(),
        &[ProtocolVersion::TLSv1_3],
    )
    .unwrap();
    assert_eq!(
        client.local_groups(),
        vec![
            NamedGroup::X25519Kyber768,
            NamedGroup::X25519Kyber512,
            NamedGroup::X25519,
            NamedGroup::kyber1024,
        ]
    );

    let server = ConnectionGroups::for_server(&ctx, &ConnectionParams::default(), ProtocolVersion::TLSv1_3);
    server
        .notify_peer_extension(&client.supported_groups_extension())
        .unwrap();

    let chosen = server.peer()[0].group();
    assert_eq!(chosen, NamedGroup::X25519Kyber768);

    let kx = ctx.kx_group(chosen).unwrap();
    let client_kx = kx.start().unwrap();
    let server_done = kx
        .start_and_complete(client_kx.pub_key())
        .unwrap();
    let client_secret = client_kx
        .complete(&server_done.pub_key)
        .unwrap();

    assert_eq!(client_secret.secret_bytes().len(), 32 + 32);
    assert_eq!(
        client_secret.secret_bytes(),
        server_done.secret.secret_bytes()
    );
}

#[test]
fn hybrid_secrets_are_classical_then_kem() {
    for domain in [&X25519_KYBER512, &X25519_KYBER768] {
        let initiator = domain.start().unwrap();
        let responder = domain
            .start_and_complete(initiator.pub_key())
            .unwrap();
        assert_eq!(responder.group, domain.name());

        let secret = initiator
            .complete(&responder.pub_key)
            .unwrap();
        assert_eq!(secret.secret_bytes(), responder.secret.secret_bytes());
        assert_eq!(secret.secret_bytes().len(), 64);
    }
}

#[test]
fn degenerate_x25519_share_is_a_fatal_handshake_failure() {
    let initiator = X25519_KYBER768.start().unwrap();
    let mut crafted = initiator.pub_key().to_vec();
    crafted[..32].copy_from_slice(&[0u8; 32]);

    let err = X25519_KYBER768
        .start_and_complete(&crafted)
        .unwrap_err();
    assert_eq!(err, Error::PeerMisbehaved(PeerMisbehaved::DegenerateSharedSecret));
    assert_eq!(
        AlertDescription::try_from(&err),
        Ok(AlertDescription::HandshakeFailure)
    );

    let ctx = default_backend_context();
    let x25519 = ctx.kx_group(NamedGroup::X25519).unwrap();
    let err = x25519
        .start()
        .unwrap()
        .complete(&[0u8; 32])
        .unwrap_err();
    assert_eq!(err, Error::PeerMisbehaved(PeerMisbehaved::DegenerateSharedSecret));
}

#[test]
fn disabled_groups_have_no_key_exchange() {
    let ctx = default_backend_context();
    assert_eq!(
        ctx.kx_group(NamedGroup::secp256r1).unwrap_err(),
        Error::UnsupportedNamedGroup(NamedGroup::secp256r1)
    );
    assert!(!ctx
        .named_group(NamedGroup::secp256r1)
        .unwrap()
        .is_enabled());
}

#[test]
fn hybrids_listed_pre13_but_kx_is_tls13_only() {
    let ctx = default_backend_context();
    let conn = ConnectionGroups::for_server(&ctx, &ConnectionParams::default(), ProtocolVersion::TLSv1_2);
    assert_eq!(
        conn.local_groups(),
        vec![
            NamedGroup::X25519Kyber768,
            NamedGroup::X25519Kyber512,
            NamedGroup::X25519,
            NamedGroup::kyber1024,
        ]
    );
    assert!(!X25519_KYBER768.usable_for_version(ProtocolVersion::TLSv1_2));
}

#[test]
fn restricted_kem_generator() {
    let mut generator = KemKeyPairGenerator::restricted(KemParameterSet::Kyber512);
    assert_eq!(
        generator
            .initialize(KemParameterSet::Kyber768)
            .unwrap_err(),
        Error::ParameterMismatch {
            bound: "kyber512",
            requested: "kyber768",
        }
    );

    let (dk, ek) = generator.generate().unwrap();
    let (ct, sent) = KemParameterSet::Kyber512
        .encapsulate(&ek)
        .unwrap();
    assert_eq!(
        dk.decapsulate(&ct)
            .unwrap()
            .secret_bytes(),
        sent.secret_bytes()
    );
}
