//! Transaction records and their wire-order encoding into an [`ROInput`].

use curve::Compressed;
use serde::{Deserialize, Serialize};

use crate::error::SignerError;
use crate::roinput::ROInput;

/// Memo length on the wire; shorter memos are zero-padded.
pub const MEMO_BYTES: usize = 32;

/// Field elements a transaction contributes to its pre-image.
pub const TX_FIELD_COUNT: usize = 3;
/// Bits a transaction contributes: 3 parity bits, four 64-bit amounts, two
/// 32-bit counters, the memo, the 3-bit tag, and the token-locked flag.
pub const TX_BIT_COUNT: usize = 3 + 4 * 64 + 2 * 32 + 8 * MEMO_BYTES + 3 + 1;

/// Tag value marking a payment.
const TAG_PAYMENT: u8 = 0;
/// Tag value marking a stake delegation.
const TAG_DELEGATION: u8 = 1;

/// A fixed-schema transaction, immutable once constructed and consumed only
/// for hashing and signing.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    pub fee_payer: Compressed,
    pub source: Compressed,
    pub receiver: Compressed,
    pub token_id: u64,
    pub amount: u64,
    pub fee: u64,
    pub fee_token: u64,
    pub nonce: u32,
    pub valid_until: u32,
    pub memo: [u8; MEMO_BYTES],
    pub tag: u8,
    pub token_locked: bool,
}

impl Transaction {
    /// Build a payment. The fee payer and source are the sender.
    pub fn payment(
        from: Compressed,
        to: Compressed,
        amount: u64,
        fee: u64,
        nonce: u32,
    ) -> Self {
        Transaction {
            fee_payer: from,
            source: from,
            receiver: to,
            token_id: 1,
            amount,
            fee,
            fee_token: 1,
            nonce,
            valid_until: u32::MAX,
            memo: [0; MEMO_BYTES],
            tag: TAG_PAYMENT,
            token_locked: false,
        }
    }

    /// Build a stake delegation from `delegator` to `delegate`. Delegations
    /// move no funds.
    pub fn delegation(delegator: Compressed, delegate: Compressed, fee: u64, nonce: u32) -> Self {
        Transaction {
            fee_payer: delegator,
            source: delegator,
            receiver: delegate,
            token_id: 1,
            amount: 0,
            fee,
            fee_token: 1,
            nonce,
            valid_until: u32::MAX,
            memo: [0; MEMO_BYTES],
            tag: TAG_DELEGATION,
            token_locked: false,
        }
    }

    /// Set the expiry slot.
    pub fn valid_until(mut self, slot: u32) -> Self {
        self.valid_until = slot;
        self
    }

    /// Attach a memo, zero-padded to the wire width. Fails if the text does
    /// not fit.
    pub fn memo(mut self, text: &str) -> Result<Self, SignerError> {
        let bytes = text.as_bytes();
        if bytes.len() > MEMO_BYTES {
            return Err(SignerError::MemoTooLong {
                len: bytes.len(),
                limit: MEMO_BYTES,
            });
        }
        self.memo = [0; MEMO_BYTES];
        self.memo[..bytes.len()].copy_from_slice(bytes);
        Ok(self)
    }

    /// Append the transaction to an input in wire order: the three public
    /// key x-coordinates as fields, then their parity bits, the amounts,
    /// the counters, the memo, the tag, and the token-locked flag.
    pub fn append_to(&self, input: &mut ROInput) -> Result<(), SignerError> {
        for key in [&self.fee_payer, &self.source, &self.receiver] {
            input.add_field(key.x)?;
        }
        for key in [&self.fee_payer, &self.source, &self.receiver] {
            input.add_bit(key.is_odd)?;
        }
        input.add_u64(self.token_id)?;
        input.add_u64(self.amount)?;
        input.add_u64(self.fee)?;
        input.add_u64(self.fee_token)?;
        input.add_u32(self.nonce)?;
        input.add_u32(self.valid_until)?;
        input.add_bytes(&self.memo)?;
        for i in 0..3 {
            input.add_bit((self.tag >> i) & 1 == 1)?;
        }
        input.add_bit(self.token_locked)
    }

    /// Encode into a fresh input sized exactly for the schema.
    pub fn to_roinput(&self) -> Result<ROInput, SignerError> {
        let mut input = ROInput::with_capacity(TX_FIELD_COUNT, TX_BIT_COUNT);
        self.append_to(&mut input)?;
        Ok(input)
    }
}
