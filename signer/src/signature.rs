//! Schnorr signatures over the transaction schema.
//!
//! Signing is fully deterministic: the ephemeral scalar is derived by
//! hashing the secret key together with the message and network, never from
//! randomness, so identical inputs always produce the identical signature.
//! The ephemeral point is normalized to even y before its x-coordinate is
//! used, and verification re-checks that parity.

use core::fmt;

use curve::{Affine, CurveError, Fp, Fq, Group, Projective};
use serde::{Deserialize, Serialize};

use crate::error::SignerError;
use crate::keys::Keypair;
use crate::poseidon::{HashVariant, NetworkId, Sponge};
use crate::roinput::ROInput;
use crate::transaction::{Transaction, TX_BIT_COUNT, TX_FIELD_COUNT};

/// A signature: the x-coordinate of the ephemeral point and the response
/// scalar.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Signature {
    pub rx: Fp,
    pub s: Fq,
}

impl Signature {
    /// Encode as 128 hex characters: `rx` then `s`, each written limb by
    /// limb from the most significant limb down.
    pub fn to_hex(&self) -> String {
        let mut out = String::with_capacity(128);
        for limbs in [self.rx.to_canonical_limbs(), self.s.to_canonical_limbs()] {
            for i in (0..4).rev() {
                out.push_str(&format!("{:016x}", limbs[i]));
            }
        }
        out
    }

    /// Decode the 128-character hex form.
    pub fn from_hex(s: &str) -> Result<Self, SignerError> {
        let mut bytes = [0u8; 64];
        hex::decode_to_slice(s, &mut bytes).map_err(CurveError::from)?;

        let rx = Fp::from_canonical_limbs(limbs_be(&bytes[..32]))
            .ok_or(CurveError::NonCanonical)?;
        let s = Fq::from_canonical_limbs(limbs_be(&bytes[32..]))
            .ok_or(CurveError::NonCanonical)?;
        Ok(Signature { rx, s })
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

fn limbs_be(bytes: &[u8]) -> [u64; 4] {
    let mut limbs = [0u64; 4];
    for (i, chunk) in bytes.chunks_exact(8).enumerate() {
        let mut word = [0u8; 8];
        word.copy_from_slice(chunk);
        limbs[3 - i] = u64::from_be_bytes(word);
    }
    limbs
}

/// Deterministic nonce: hash of the message, the public key, the full
/// secret scalar, the network byte, and an attempt counter byte. The
/// counter is bumped only if a candidate comes out as zero or maps to the
/// identity.
fn derive_nonce(
    keypair: &Keypair,
    tx: &Transaction,
    network: NetworkId,
    variant: HashVariant,
    attempt: u8,
) -> Result<Fq, SignerError> {
    let mut input = ROInput::with_capacity(TX_FIELD_COUNT + 2, TX_BIT_COUNT + Fq::NUM_BITS + 16);
    tx.append_to(&mut input)?;
    input.add_field(keypair.public().x)?;
    input.add_field(keypair.public().y)?;
    input.add_scalar(keypair.secret())?;
    input.add_bytes(&[network.id_byte()])?;
    input.add_bytes(&[attempt])?;

    let mut sponge = Sponge::new(variant, network);
    sponge.absorb_input(&input);
    Ok(sponge.digest())
}

/// Challenge scalar binding a signature to its message: hash of the
/// message, the public key, and the ephemeral x-coordinate.
fn challenge(
    public: &Affine,
    rx: &Fp,
    tx: &Transaction,
    network: NetworkId,
    variant: HashVariant,
) -> Result<Fq, SignerError> {
    let mut input = ROInput::with_capacity(TX_FIELD_COUNT + 3, TX_BIT_COUNT);
    tx.append_to(&mut input)?;
    input.add_field(public.x)?;
    input.add_field(public.y)?;
    input.add_field(*rx)?;

    let mut sponge = Sponge::new(variant, network);
    sponge.absorb_input(&input);
    Ok(sponge.digest())
}

/// Sign a transaction.
pub fn sign(
    keypair: &Keypair,
    tx: &Transaction,
    network: NetworkId,
    variant: HashVariant,
) -> Result<Signature, SignerError> {
    for attempt in 0..=u8::MAX {
        let mut k = derive_nonce(keypair, tx, network, variant, attempt)?;
        if k.is_zero() {
            continue;
        }
        let mut r = Projective::mul_generator(&k).to_affine();
        if r.is_identity() {
            continue;
        }

        // canonical even-y ephemeral point
        if r.y.is_odd() {
            k = -k;
            r = r.negate();
        }

        let e = challenge(keypair.public(), &r.x, tx, network, variant)?;
        let s = k + e * *keypair.secret();
        return Ok(Signature { rx: r.x, s });
    }
    Err(SignerError::NonceExhausted)
}

/// Verify a signature. Any mismatch, including a malformed message, yields
/// `false`; verification never errors.
pub fn verify(
    signature: &Signature,
    public: &Affine,
    tx: &Transaction,
    network: NetworkId,
    variant: HashVariant,
) -> bool {
    let e = match challenge(public, &signature.rx, tx, network, variant) {
        Ok(e) => e,
        Err(_) => return false,
    };

    // R' = s·G − e·P
    let r = (Projective::mul_generator(&signature.s)
        - Projective::from(*public).scalar_mul(&e))
    .to_affine();

    !r.is_identity() && !r.y.is_odd() && r.x == signature.rx
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transaction::Transaction;

    const SK1_HEX: &str = "39ab1b8f51a28767dc726c63ac9abebccbfcd178e52c85852eaeae9781a903ce";
    const SK2_HEX: &str = "0e0ddd1405fc0962e393ae234c9e26c85f1a17c59ab548ca55cbd5123c060377";
    const SK3_HEX: &str = "2dd000fe93888aa5d3edcb5c1d926f0ed296a83c2b157257a846892c3554eb49";

    fn payment_tx() -> (Keypair, Transaction) {
        let sender = Keypair::from_hex(SK1_HEX).unwrap();
        let receiver = Keypair::from_hex(SK2_HEX).unwrap();
        let tx = Transaction::payment(
            sender.public().compress(),
            receiver.public().compress(),
            1729000000000,
            2000000000,
            16,
        )
        .valid_until(271828)
        .memo("Hello Mina!")
        .unwrap();
        (sender, tx)
    }

    fn delegation_tx() -> (Keypair, Transaction) {
        let delegator = Keypair::from_hex(SK2_HEX).unwrap();
        let delegate = Keypair::from_hex(SK3_HEX).unwrap();
        let tx = Transaction::delegation(
            delegator.public().compress(),
            delegate.public().compress(),
            2000000000,
            0,
        )
        .memo("Delegewd!")
        .unwrap();
        (delegator, tx)
    }

    // Pinned signature vectors, cross-checked against an independent model
    // of the whole protocol.
    #[test]
    fn payment_signature_vectors() {
        let (pair, tx) = payment_tx();
        let cases = [
            (HashVariant::Legacy, NetworkId::Testnet,
             "198dde96bb0341191b890ba6c27cf02f0959497070ea2ae9eb43d930c81b0d4b17aef7903d2b397913d08da67280f68ed00a7cb65f2cfdbdd56c02b4b5b34ec6"),
            (HashVariant::Legacy, NetworkId::Mainnet,
             "1464b7690544d84fc72ee7bc02bf801a69cc2bd31e3113872b2d6dcbeefdc028311cb7104a60d8efd0630196652fa15f3321c0831eafd77233638eaea980e60c"),
            (HashVariant::Kimchi, NetworkId::Testnet,
             "253bcc1fa39507083403b0a3d65a0bf5639af2619296ed7ae16c8000a2e64def2ae187beea051bc1a7ab77e114f743cc79c91ea0c37210bd14be32ece2bc7d72"),
            (HashVariant::Kimchi, NetworkId::Mainnet,
             "2531997c1aa88cf1f950dc3f1a54e1d8a9eea2944ccfe9caa1d1f1b1748ebcf01ca96acfff4e27b9e096f137b819c96bc85b4dce579f23b34484086b5b348539"),
        ];
        for (variant, network, expected) in cases {
            let sig = sign(&pair, &tx, network, variant).unwrap();
            assert_eq!(sig.to_hex(), expected);
            assert!(verify(&sig, pair.public(), &tx, network, variant));
        }
    }

    #[test]
    fn delegation_signature_vectors() {
        let (pair, tx) = delegation_tx();
        let cases = [
            (HashVariant::Legacy, NetworkId::Testnet,
             "3ff4569ec86b68035041bdcf9e93da444dd8387fa60194e38134c3168ae02ed0104244e74febf6227188c947a2628b759ab09cf34d5508ee4953df6fe331dc97"),
            (HashVariant::Legacy, NetworkId::Mainnet,
             "1b1b7d4c6124b6a58ce3a0d25ece2e7f5c03acf8425ac11940675900a324efaa29646450e6559656a775c039e8169718bf2b4bf3ba9a7ef3e88e747acf1fbf54"),
            (HashVariant::Kimchi, NetworkId::Testnet,
             "2ea6484ce4fbd544c99dccf54493c27f4cad20e920229962586042b9f46a35ed1303c8167a0fbd09d7a79b079b478ceefe8784befedcad6008d2a734633e16bb"),
            (HashVariant::Kimchi, NetworkId::Mainnet,
             "39c3c343b683de8fa9119e8436395fe63a1417f0eaee704147914c754954d0ab190695d7a4707243abe0cf33db6ce33523cac9c12feffc658d9494deb2f6a8a1"),
        ];
        for (variant, network, expected) in cases {
            let sig = sign(&pair, &tx, network, variant).unwrap();
            assert_eq!(sig.to_hex(), expected);
            assert!(verify(&sig, pair.public(), &tx, network, variant));
        }
    }

    #[test]
    fn signing_is_deterministic() {
        let (pair, tx) = payment_tx();
        let a = sign(&pair, &tx, NetworkId::Testnet, HashVariant::Legacy).unwrap();
        let b = sign(&pair, &tx, NetworkId::Testnet, HashVariant::Legacy).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn tampered_message_fails() {
        let (pair, tx) = payment_tx();
        let sig = sign(&pair, &tx, NetworkId::Testnet, HashVariant::Legacy).unwrap();

        let mut bad = tx.clone();
        bad.amount += 1;
        assert!(!verify(&sig, pair.public(), &bad, NetworkId::Testnet, HashVariant::Legacy));

        let mut bad = tx.clone();
        bad.nonce += 1;
        assert!(!verify(&sig, pair.public(), &bad, NetworkId::Testnet, HashVariant::Legacy));

        let mut bad = tx.clone();
        bad.memo[0] ^= 1;
        assert!(!verify(&sig, pair.public(), &bad, NetworkId::Testnet, HashVariant::Legacy));
    }

    #[test]
    fn wrong_network_variant_or_key_fails() {
        let (pair, tx) = payment_tx();
        let other = Keypair::from_hex(SK3_HEX).unwrap();
        let sig = sign(&pair, &tx, NetworkId::Testnet, HashVariant::Legacy).unwrap();

        assert!(!verify(&sig, pair.public(), &tx, NetworkId::Mainnet, HashVariant::Legacy));
        assert!(!verify(&sig, pair.public(), &tx, NetworkId::Testnet, HashVariant::Kimchi));
        assert!(!verify(&sig, other.public(), &tx, NetworkId::Testnet, HashVariant::Legacy));
    }

    #[test]
    fn tampered_signature_fails() {
        let (pair, tx) = payment_tx();
        let sig = sign(&pair, &tx, NetworkId::Testnet, HashVariant::Legacy).unwrap();

        let bad = Signature { rx: sig.rx + Fp::ONE, s: sig.s };
        assert!(!verify(&bad, pair.public(), &tx, NetworkId::Testnet, HashVariant::Legacy));

        let bad = Signature { rx: sig.rx, s: sig.s + Fq::ONE };
        assert!(!verify(&bad, pair.public(), &tx, NetworkId::Testnet, HashVariant::Legacy));
    }

    #[test]
    fn hex_round_trip() {
        let (pair, tx) = payment_tx();
        let sig = sign(&pair, &tx, NetworkId::Testnet, HashVariant::Legacy).unwrap();
        let decoded = Signature::from_hex(&sig.to_hex()).unwrap();
        assert_eq!(decoded, sig);
    }

    #[test]
    fn malformed_signature_hex_is_rejected() {
        assert!(Signature::from_hex("deadbeef").is_err());
        assert!(Signature::from_hex(&"f".repeat(128)).is_err());
    }

    #[test]
    fn display_matches_hex() {
        let (pair, tx) = payment_tx();
        let sig = sign(&pair, &tx, NetworkId::Testnet, HashVariant::Legacy).unwrap();
        assert_eq!(sig.to_string(), sig.to_hex());
    }
}
