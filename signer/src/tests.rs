use super::*;
use curve::Fq;

#[test]
fn wallet_flow_end_to_end() {
    let sender = Keypair::from_seed(b"integration wallet", 0).expect("derive sender");
    let receiver = Keypair::from_seed(b"integration wallet", 1).expect("derive receiver");

    let tx = Transaction::payment(
        sender.public().compress(),
        receiver.public().compress(),
        5_000_000_000,
        10_000_000,
        3,
    )
    .valid_until(100_000)
    .memo("integration")
    .expect("memo");

    for variant in [HashVariant::Legacy, HashVariant::Kimchi] {
        for network in [NetworkId::Testnet, NetworkId::Mainnet] {
            let sig = sign(&sender, &tx, network, variant).expect("sign");
            assert!(verify(&sig, sender.public(), &tx, network, variant));
            assert!(!verify(&sig, receiver.public(), &tx, network, variant));

            let decoded = Signature::from_hex(&sig.to_hex()).expect("decode");
            assert!(verify(&decoded, sender.public(), &tx, network, variant));
        }
    }
}

#[test]
fn delegation_flow_end_to_end() {
    let delegator = Keypair::from_secret(Fq::from_u64(31337)).expect("keypair");
    let delegate = Keypair::from_secret(Fq::from_u64(271828)).expect("keypair");

    let tx = Transaction::delegation(
        delegator.public().compress(),
        delegate.public().compress(),
        10_000_000,
        0,
    );

    let sig = sign(&delegator, &tx, NetworkId::Mainnet, HashVariant::Kimchi).expect("sign");
    assert!(verify(&sig, delegator.public(), &tx, NetworkId::Mainnet, HashVariant::Kimchi));
    assert!(!verify(&sig, delegator.public(), &tx, NetworkId::Testnet, HashVariant::Kimchi));
}

#[test]
fn transaction_serde_round_trip() {
    let a = Keypair::from_secret(Fq::from_u64(11)).expect("keypair");
    let b = Keypair::from_secret(Fq::from_u64(13)).expect("keypair");
    let tx = Transaction::payment(a.public().compress(), b.public().compress(), 42, 1, 9)
        .memo("serde")
        .expect("memo");

    let encoded = bincode::serialize(&tx).expect("serialize");
    let decoded: Transaction = bincode::deserialize(&encoded).expect("deserialize");
    assert_eq!(decoded, tx);
}

#[test]
fn signature_serde_round_trip() {
    let pair = Keypair::from_secret(Fq::from_u64(17)).expect("keypair");
    let tx = Transaction::payment(pair.public().compress(), pair.public().compress(), 1, 1, 0);
    let sig = sign(&pair, &tx, NetworkId::Testnet, HashVariant::Legacy).expect("sign");

    let encoded = bincode::serialize(&sig).expect("serialize");
    let decoded: Signature = bincode::deserialize(&encoded).expect("deserialize");
    assert_eq!(decoded, sig);
}

#[test]
fn hash_input_matches_manual_sponge() {
    let tx = {
        let a = Keypair::from_secret(Fq::from_u64(5)).expect("keypair");
        Transaction::payment(a.public().compress(), a.public().compress(), 7, 1, 2)
    };
    let input = tx.to_roinput().expect("encode");

    let direct = hash_input(HashVariant::Legacy, NetworkId::Testnet, &input);
    let mut sponge = Sponge::new(HashVariant::Legacy, NetworkId::Testnet);
    sponge.absorb_input(&input);
    assert_eq!(direct, sponge.digest());
}
