//! Quorum-gated wrapped-token bridge core.
//!
//! Maintains an authoritative validator set that collectively controls a
//! wrapped token: the set (acting as quorum) mints wrapped tokens on inbound
//! bridging, authorizes outbound bridging requests initiated by ordinary
//! users, rotates its own membership, and revokes stale outbound requests.
//!
//! - Quorum-signed action protocol over a dynamic, bounded, duplicate-free
//!   validator set (`quorum` module).
//! - Program-derived accounts tied to a fixed mint authority (`state`,
//!   `instructions::initialize`, `instructions::validator_set_change`).
//! - Outbound bridging-request state machine with one-per-sender uniqueness
//!   and burn-on-request escrow (`instructions::bridge_request`,
//!   `instructions::close_request`).

use anchor_lang::prelude::*;

pub mod constants;
pub mod errors;
pub mod events;
pub mod instructions;
pub mod quorum;
pub mod state;

use instructions::*;

declare_id!("BridgeCore11111111111111111111111111111111");

#[program]
pub mod bridge_core {
    use super::*;

    /// Create the singleton validator set. No authority gate beyond the
    /// runtime's first-writer-wins semantics.
    pub fn initialize(ctx: Context<Initialize>, signers: Vec<Pubkey>) -> Result<()> {
        instructions::initialize::handler(ctx, signers)
    }

    /// Quorum-gated inbound mint of wrapped tokens to a recipient's
    /// associated token account.
    pub fn bridge_tokens(ctx: Context<BridgeTokens>, amount: u64) -> Result<()> {
        instructions::bridge_tokens::handler(ctx, amount)
    }

    /// Open an outbound bridging request, escrowing `amount` tokens.
    pub fn bridge_request(
        ctx: Context<BridgeRequest>,
        amount: u64,
        receiver: [u8; constants::RECEIVER_LEN],
        destination_chain: u32,
    ) -> Result<()> {
        instructions::bridge_request::handler(ctx, amount, receiver, destination_chain)
    }

    /// Quorum-gated closure of an outbound bridging request.
    pub fn close_request(ctx: Context<CloseRequest>) -> Result<()> {
        instructions::close_request::handler(ctx)
    }

    /// Quorum-gated replacement of the validator set and threshold.
    pub fn validator_set_change(ctx: Context<ValidatorSetChange>, new_set: Vec<Pubkey>) -> Result<()> {
        instructions::validator_set_change::handler(ctx, new_set)
    }
}
