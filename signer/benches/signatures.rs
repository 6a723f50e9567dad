use criterion::{black_box, criterion_group, criterion_main, Criterion};
use signer::{sign, verify, HashVariant, Keypair, NetworkId, Transaction};

fn setup() -> (Keypair, Transaction) {
    let sender = Keypair::from_seed(b"bench wallet", 0).expect("derive sender");
    let receiver = Keypair::from_seed(b"bench wallet", 1).expect("derive receiver");
    let tx = Transaction::payment(
        sender.public().compress(),
        receiver.public().compress(),
        1_000_000_000,
        10_000_000,
        0,
    );
    (sender, tx)
}

fn bench_sign(c: &mut Criterion) {
    let (sender, tx) = setup();

    c.bench_function("sign_legacy", |bencher| {
        bencher.iter(|| {
            let sig = sign(
                &sender,
                black_box(&tx),
                NetworkId::Testnet,
                HashVariant::Legacy,
            )
            .expect("sign");
            black_box(sig);
        })
    });

    c.bench_function("sign_kimchi", |bencher| {
        bencher.iter(|| {
            let sig = sign(
                &sender,
                black_box(&tx),
                NetworkId::Testnet,
                HashVariant::Kimchi,
            )
            .expect("sign");
            black_box(sig);
        })
    });
}

fn bench_verify(c: &mut Criterion) {
    let (sender, tx) = setup();
    let sig = sign(&sender, &tx, NetworkId::Testnet, HashVariant::Legacy).expect("sign");

    c.bench_function("verify_legacy", |bencher| {
        bencher.iter(|| {
            let ok = verify(
                black_box(&sig),
                sender.public(),
                black_box(&tx),
                NetworkId::Testnet,
                HashVariant::Legacy,
            );
            black_box(ok);
        })
    });
}

criterion_group!(benches, bench_sign, bench_verify);
criterion_main!(benches);
