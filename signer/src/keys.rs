//! Key material: secret scalars, derived public points, and the
//! human-readable address encoding.

use curve::{Affine, Fq, Group, Projective, RandomField};
use rand::Rng;
use sha2::{Digest, Sha256};

use crate::error::SignerError;

/// Version bytes prefixing an address payload.
const ADDRESS_PREFIX: [u8; 3] = [0xcb, 0x01, 0x01];
/// Checksum bytes appended to an address payload.
const CHECKSUM_BYTES: usize = 4;

/// A secret scalar and its derived public point.
///
/// The public point is computed once at construction and is always
/// `secret · G`; the pairing cannot go stale.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Keypair {
    secret: Fq,
    public: Affine,
}

impl Keypair {
    /// Build a keypair from a secret scalar. Zero is rejected: it has no
    /// usable public point.
    pub fn from_secret(secret: Fq) -> Result<Self, SignerError> {
        if secret.is_zero() {
            return Err(SignerError::ZeroSecretKey);
        }
        let public = Projective::mul_generator(&secret).to_affine();
        Ok(Keypair { secret, public })
    }

    /// Decode a secret key from its hex form. Secret keys serialize
    /// big-endian at the byte level, unlike field elements.
    pub fn from_hex(s: &str) -> Result<Self, SignerError> {
        let mut bytes = [0u8; Fq::NUM_BYTES];
        hex::decode_to_slice(s, &mut bytes).map_err(curve::CurveError::from)?;
        let secret = Fq::from_bytes_be(&bytes)?;
        Self::from_secret(secret)
    }

    /// Sample a fresh keypair from a cryptographically secure generator.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        loop {
            let secret = Fq::random(rng);
            if let Ok(pair) = Self::from_secret(secret) {
                return pair;
            }
        }
    }

    /// Derive a keypair deterministically from seed bytes.
    ///
    /// The seed is hashed, the top two bits of the result are cleared to
    /// land below the group order, and the bytes are read as a
    /// little-endian scalar. Distinct counters allow several keys from one
    /// seed; the zero outcome is rejected like any other zero secret.
    pub fn from_seed(seed: &[u8], counter: u32) -> Result<Self, SignerError> {
        let mut hasher = blake3::Hasher::new();
        hasher.update(seed);
        hasher.update(&counter.to_le_bytes());
        let mut bytes: [u8; 32] = *hasher.finalize().as_bytes();
        bytes[31] &= 0x3f;
        let secret = Fq::from_bytes(&bytes)?;
        Self::from_secret(secret)
    }

    pub fn secret(&self) -> &Fq {
        &self.secret
    }

    pub fn public(&self) -> &Affine {
        &self.public
    }

    /// Hex form of the secret key, big-endian bytes.
    pub fn to_hex(&self) -> String {
        hex::encode(self.secret.to_bytes_be())
    }

    /// The public key's human-readable address.
    pub fn address(&self) -> String {
        address(&self.public)
    }
}

/// Encode a public point as a base58-check address: version prefix, the
/// little-endian x-coordinate, the y-parity byte, and a truncated double
/// SHA-256 checksum.
pub fn address(public: &Affine) -> String {
    let compressed = public.compress();

    let mut payload = Vec::with_capacity(ADDRESS_PREFIX.len() + 33 + CHECKSUM_BYTES);
    payload.extend_from_slice(&ADDRESS_PREFIX);
    payload.extend_from_slice(&compressed.x.to_bytes());
    payload.push(compressed.is_odd as u8);

    let checksum = Sha256::digest(Sha256::digest(&payload));
    payload.extend_from_slice(&checksum[..CHECKSUM_BYTES]);

    bs58::encode(payload).into_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn public_key_is_secret_times_generator() {
        let pair = Keypair::from_secret(Fq::from_u64(7)).unwrap();
        let expected = Projective::generator().mul_u64(7).to_affine();
        assert_eq!(*pair.public(), expected);
        assert!(pair.public().is_on_curve());
    }

    #[test]
    fn zero_secret_is_rejected() {
        assert!(matches!(
            Keypair::from_secret(Fq::ZERO),
            Err(SignerError::ZeroSecretKey)
        ));
    }

    #[test]
    fn hex_round_trip_is_big_endian() {
        let hex = "39ab1b8f51a28767dc726c63ac9abebccbfcd178e52c85852eaeae9781a903ce";
        let pair = Keypair::from_hex(hex).unwrap();
        assert_eq!(pair.to_hex(), hex);
    }

    // Pinned key and address vectors.
    #[test]
    fn known_addresses() {
        let cases = [
            (
                "39ab1b8f51a28767dc726c63ac9abebccbfcd178e52c85852eaeae9781a903ce",
                "B62qntdwEcfrF89y1CRY4NjpTwVoCpbxg2HPaiURtS1jL8VhAKZc3Gw",
            ),
            (
                "0e0ddd1405fc0962e393ae234c9e26c85f1a17c59ab548ca55cbd5123c060377",
                "B62qofptaJc1xvhqmP6MDS9PoAVFKKTgyV1oLSKsaDYrrrfLn94gd95",
            ),
            (
                "2dd000fe93888aa5d3edcb5c1d926f0ed296a83c2b157257a846892c3554eb49",
                "B62qnkTtXYt45rR5V3J9i5JTnM5YJDMiXf9LavDaAfd57o4owXsywD6",
            ),
        ];
        for (sk_hex, expected) in cases {
            let pair = Keypair::from_hex(sk_hex).unwrap();
            assert_eq!(pair.address(), expected);
        }
    }

    #[test]
    fn known_public_coordinates() {
        let pair = Keypair::from_hex(
            "39ab1b8f51a28767dc726c63ac9abebccbfcd178e52c85852eaeae9781a903ce",
        )
        .unwrap();
        assert_eq!(
            pair.public().x.to_hex(),
            "845f0ab9454a8ceea89ac3f721e2d2cb874d8caae1b5bf748b43801b54e9d00f"
        );
        assert_eq!(
            pair.public().y.to_hex(),
            "edd9483ed32b12ccfc7e7bef267da02d98f8bf6840cfee60a759fc394995200e"
        );
        assert!(pair.public().y.is_odd());
    }

    #[test]
    fn addresses_have_fixed_shape() {
        let pair = Keypair::from_secret(Fq::from_u64(12345)).unwrap();
        let addr = pair.address();
        assert_eq!(addr.len(), 55);
        assert!(addr.starts_with("B62q"));
    }

    #[test]
    fn seed_derivation_is_deterministic_and_separated() {
        let a = Keypair::from_seed(b"wallet seed", 0).unwrap();
        let b = Keypair::from_seed(b"wallet seed", 0).unwrap();
        let c = Keypair::from_seed(b"wallet seed", 1).unwrap();
        assert_eq!(a, b);
        assert_ne!(a.public(), c.public());
    }

    #[test]
    fn random_keypairs_are_valid_and_distinct() {
        use rand::rngs::StdRng;
        use rand::SeedableRng;

        let mut rng = StdRng::seed_from_u64(42);
        let a = Keypair::random(&mut rng);
        let b = Keypair::random(&mut rng);
        assert!(a.public().is_on_curve());
        assert_ne!(a.public(), b.public());
    }

    #[test]
    fn malformed_hex_is_rejected() {
        assert!(Keypair::from_hex("abc").is_err());
        assert!(Keypair::from_hex(&"ff".repeat(32)).is_err());
    }
}
