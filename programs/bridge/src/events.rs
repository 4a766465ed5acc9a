use anchor_lang::prelude::*;

#[event]
pub struct ValidatorSetInitialized {
    pub validator_set: Pubkey,
    pub signers: Vec<Pubkey>,
    pub threshold: u8,
}

#[event]
pub struct ValidatorSetRotated {
    pub validator_set: Pubkey,
    pub signers: Vec<Pubkey>,
    pub threshold: u8,
}

#[event]
pub struct TokensBridgedIn {
    pub recipient: Pubkey,
    pub recipient_ata: Pubkey,
    pub amount: u64,
}

#[event]
pub struct BridgingRequestOpened {
    pub sender: Pubkey,
    pub bridging_request: Pubkey,
    pub amount: u64,
    pub receiver: [u8; 32],
    pub destination_chain: u32,
}

#[event]
pub struct BridgingRequestClosed {
    pub sender: Pubkey,
    pub bridging_request: Pubkey,
}
