use anchor_lang::prelude::*;
use crate::error::*;

/**
 * Owner and pause switch shared by the distributor and the academy
 *
 * Two independent axes: a single owner that can hand over control, and an
 * active/paused flag toggled by that owner. Mutating instructions consult
 * the pause flag first and ownership second.
 */
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Default, Debug, PartialEq, Eq)]
pub struct Gate {
    /// Single identity allowed to mutate configuration
    pub owner: Pubkey,

    /// When set, every mutating instruction except the gate's own is rejected
    pub paused: bool,
}

impl Gate {
    pub fn new(owner: Pubkey) -> Self {
        Gate {
            owner,
            paused: false,
        }
    }

    pub fn ensure_active(&self) -> Result<()> {
        require!(!self.paused, ClubRewardsError::ContractPaused);
        Ok(())
    }

    pub fn ensure_owner(&self, caller: &Pubkey) -> Result<()> {
        require_keys_eq!(*caller, self.owner, ClubRewardsError::OnlyOwner);
        Ok(())
    }

    /// Gate for owner-only configuration changes
    pub fn authorize_admin(&self, caller: &Pubkey) -> Result<()> {
        self.ensure_active()?;
        self.ensure_owner(caller)
    }

    pub fn pause(&mut self, caller: &Pubkey) -> Result<()> {
        self.ensure_owner(caller)?;
        self.ensure_active()?;
        self.paused = true;
        Ok(())
    }

    pub fn activate(&mut self, caller: &Pubkey) -> Result<()> {
        self.ensure_owner(caller)?;
        require!(self.paused, ClubRewardsError::ContractNotPaused);
        self.paused = false;
        Ok(())
    }

    /// Hands the gate to `new_owner`, returning the previous owner
    pub fn transfer_ownership(&mut self, caller: &Pubkey, new_owner: Pubkey) -> Result<Pubkey> {
        self.ensure_owner(caller)?;
        require!(new_owner != Pubkey::default(), ClubRewardsError::InvalidOwner);
        let previous = self.owner;
        self.owner = new_owner;
        Ok(previous)
    }
}
