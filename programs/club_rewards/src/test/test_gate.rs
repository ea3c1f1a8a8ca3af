use anchor_lang::prelude::*;
use crate::error::ClubRewardsError;
use crate::state::Gate;

fn expect_error<T: std::fmt::Debug>(result: Result<T>, expected: ClubRewardsError) {
    let err = result.expect_err("call should have been rejected");
    assert_eq!(err, anchor_lang::error::Error::from(expected));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_owner_can_pause_and_activate() {
        let owner = Pubkey::new_unique();
        let stranger = Pubkey::new_unique();
        let mut gate = Gate::new(owner);

        expect_error(gate.pause(&stranger), ClubRewardsError::OnlyOwner);
        assert!(!gate.paused);

        gate.pause(&owner).unwrap();
        assert!(gate.paused);

        expect_error(gate.activate(&stranger), ClubRewardsError::OnlyOwner);
        gate.activate(&owner).unwrap();
        assert!(!gate.paused);
    }

    #[test]
    fn test_pause_state_transitions() {
        let owner = Pubkey::new_unique();
        let mut gate = Gate::new(owner);

        expect_error(gate.activate(&owner), ClubRewardsError::ContractNotPaused);
        gate.pause(&owner).unwrap();
        expect_error(gate.pause(&owner), ClubRewardsError::ContractPaused);
    }

    #[test]
    fn test_admin_checks_pause_before_owner() {
        let owner = Pubkey::new_unique();
        let stranger = Pubkey::new_unique();
        let mut gate = Gate::new(owner);

        expect_error(gate.authorize_admin(&stranger), ClubRewardsError::OnlyOwner);
        gate.authorize_admin(&owner).unwrap();

        gate.pause(&owner).unwrap();
        expect_error(gate.authorize_admin(&stranger), ClubRewardsError::ContractPaused);
        expect_error(gate.authorize_admin(&owner), ClubRewardsError::ContractPaused);
    }

    #[test]
    fn test_transfer_ownership() {
        let owner = Pubkey::new_unique();
        let next_owner = Pubkey::new_unique();
        let mut gate = Gate::new(owner);

        expect_error(
            gate.transfer_ownership(&next_owner, next_owner),
            ClubRewardsError::OnlyOwner,
        );
        expect_error(
            gate.transfer_ownership(&owner, Pubkey::default()),
            ClubRewardsError::InvalidOwner,
        );

        // Allowed while paused
        gate.pause(&owner).unwrap();
        assert_eq!(gate.transfer_ownership(&owner, next_owner).unwrap(), owner);
        assert_eq!(gate.owner, next_owner);

        expect_error(gate.activate(&owner), ClubRewardsError::OnlyOwner);
        gate.activate(&next_owner).unwrap();
    }
}
