use anchor_lang::prelude::*;
use crate::error::ClubRewardsError;
use crate::state::*;
use crate::utils::{MerkleTree, EMPTY_ROOT};

const INITIAL_AMOUNT: u64 = 150;
const EXTRA: u64 = 40;

/// Distributor, one asset root and the claim record of one account
struct Ledger {
    distributor: PrizeDistributor,
    asset_root: AssetRoot,
    claim_status: ClaimStatus,
    tree: MerkleTree,
}

impl Ledger {
    fn new(owner: Pubkey, asset: AssetClass) -> Self {
        Ledger {
            distributor: PrizeDistributor {
                creator: owner,
                gate: Gate::new(owner),
                ..Default::default()
            },
            asset_root: AssetRoot {
                asset,
                ..Default::default()
            },
            claim_status: ClaimStatus::default(),
            tree: MerkleTree::new(Vec::new()),
        }
    }

    /// Publishes a table of (account, total) allocations for the ledger's asset
    fn publish(&mut self, allocations: &[(Pubkey, u64)]) {
        let leaves = allocations
            .iter()
            .map(|(account, total)| allocation_leaf(&self.asset_root.asset, account, *total))
            .collect();
        self.tree = MerkleTree::new(leaves);
        self.asset_root.merkle_root = self.tree.root();
    }

    fn proof(&self, account: &Pubkey, total: u64) -> Vec<[u8; 32]> {
        let leaf = allocation_leaf(&self.asset_root.asset, account, total);
        self.tree.proof_for(&leaf).expect("allocation is in the table")
    }

    /// Validates then settles, the same sequence the claim handlers run
    fn claim(&mut self, caller: &Pubkey, account: &Pubkey, total: u64, proof: &[[u8; 32]]) -> Result<u64> {
        let pending = self.distributor.authorize_claim(
            &self.asset_root,
            &self.claim_status,
            caller,
            account,
            total,
            proof,
        )?;
        let paid = self.claim_status.record(total);
        assert_eq!(pending, paid);
        Ok(paid)
    }
}

fn expect_error<T: std::fmt::Debug>(result: Result<T>, expected: ClubRewardsError) {
    let err = result.expect_err("call should have been rejected");
    assert_eq!(err, anchor_lang::error::Error::from(expected));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cumulative_claim_across_root_update() {
        let owner = Pubkey::new_unique();
        let account = Pubkey::new_unique();
        let mut ledger = Ledger::new(owner, AssetClass::Token(Pubkey::new_unique()));

        ledger.publish(&[(account, INITIAL_AMOUNT), (Pubkey::new_unique(), 10)]);
        let proof = ledger.proof(&account, INITIAL_AMOUNT);
        assert_eq!(ledger.claim(&account, &account, INITIAL_AMOUNT, &proof).unwrap(), INITIAL_AMOUNT);
        assert_eq!(ledger.claim_status.claimed_amount, INITIAL_AMOUNT);

        // Updated table raises the allocation; only the difference is paid
        ledger.publish(&[(account, INITIAL_AMOUNT + EXTRA)]);
        let proof = ledger.proof(&account, INITIAL_AMOUNT + EXTRA);
        assert_eq!(ledger.claim(&account, &account, INITIAL_AMOUNT + EXTRA, &proof).unwrap(), EXTRA);

        // Third identical claim settles nothing
        assert_eq!(ledger.claim(&account, &account, INITIAL_AMOUNT + EXTRA, &proof).unwrap(), 0);
        assert_eq!(ledger.claim_status.claimed_amount, INITIAL_AMOUNT + EXTRA);
    }

    #[test]
    fn test_repeated_claim_pays_zero_without_error() {
        let account = Pubkey::new_unique();
        let mut ledger = Ledger::new(Pubkey::new_unique(), AssetClass::Native);
        ledger.publish(&[(account, INITIAL_AMOUNT)]);
        let proof = ledger.proof(&account, INITIAL_AMOUNT);

        assert_eq!(ledger.claim(&account, &account, INITIAL_AMOUNT, &proof).unwrap(), INITIAL_AMOUNT);
        for _ in 0..3 {
            assert_eq!(ledger.claim(&account, &account, INITIAL_AMOUNT, &proof).unwrap(), 0);
        }
    }

    #[test]
    fn test_falsified_amount_is_rejected() {
        let account = Pubkey::new_unique();
        let mut ledger = Ledger::new(Pubkey::new_unique(), AssetClass::Token(Pubkey::new_unique()));
        ledger.publish(&[(account, INITIAL_AMOUNT), (Pubkey::new_unique(), 500)]);
        let proof = ledger.proof(&account, INITIAL_AMOUNT);

        expect_error(
            ledger.claim(&account, &account, INITIAL_AMOUNT + 1, &proof),
            ClubRewardsError::InvalidProof,
        );
        expect_error(
            ledger.claim(&account, &account, 100, &proof),
            ClubRewardsError::InvalidProof,
        );
        assert_eq!(ledger.claim_status.claimed_amount, 0);
    }

    #[test]
    fn test_proof_is_bound_to_asset() {
        let account = Pubkey::new_unique();
        let mut token_ledger = Ledger::new(Pubkey::new_unique(), AssetClass::Token(Pubkey::new_unique()));
        token_ledger.publish(&[(account, INITIAL_AMOUNT)]);
        let proof = token_ledger.proof(&account, INITIAL_AMOUNT);

        // Same table root stored under the native asset
        let mut native_ledger = Ledger::new(Pubkey::new_unique(), AssetClass::Native);
        native_ledger.asset_root.merkle_root = token_ledger.asset_root.merkle_root;

        expect_error(
            native_ledger.claim(&account, &account, INITIAL_AMOUNT, &proof),
            ClubRewardsError::InvalidProof,
        );
    }

    #[test]
    fn test_lowered_allocation_never_decreases_claimed_amount() {
        let account = Pubkey::new_unique();
        let mut ledger = Ledger::new(Pubkey::new_unique(), AssetClass::Native);

        let mut history = Vec::new();
        for total in [150u64, 120, 190, 190, 60, 200] {
            ledger.publish(&[(account, total)]);
            let proof = ledger.proof(&account, total);
            ledger.claim(&account, &account, total, &proof).unwrap();
            history.push(ledger.claim_status.claimed_amount);
        }

        assert_eq!(history, vec![150, 150, 190, 190, 190, 200]);
        assert!(history.windows(2).all(|pair| pair[0] <= pair[1]));
    }

    #[test]
    fn test_pending_is_clamped_at_zero() {
        let status = ClaimStatus { claimed_amount: 190 };
        assert_eq!(status.pending(150), 0);
        assert_eq!(status.pending(190), 0);
        assert_eq!(status.pending(u64::MAX), u64::MAX - 190);
    }

    #[test]
    fn test_claim_for_another_account_requires_relayer() {
        let owner = Pubkey::new_unique();
        let account = Pubkey::new_unique();
        let stranger = Pubkey::new_unique();
        let relayer = Pubkey::new_unique();
        let mut ledger = Ledger::new(owner, AssetClass::Native);
        ledger.publish(&[(account, INITIAL_AMOUNT)]);
        let proof = ledger.proof(&account, INITIAL_AMOUNT);

        expect_error(
            ledger.claim(&stranger, &account, INITIAL_AMOUNT, &proof),
            ClubRewardsError::InvalidAccount,
        );
        expect_error(
            ledger.claim(&owner, &account, INITIAL_AMOUNT, &proof),
            ClubRewardsError::InvalidAccount,
        );

        ledger.distributor.relayer = Some(relayer);
        expect_error(
            ledger.claim(&stranger, &account, INITIAL_AMOUNT, &proof),
            ClubRewardsError::InvalidAccount,
        );
        assert_eq!(ledger.claim(&relayer, &account, INITIAL_AMOUNT, &proof).unwrap(), INITIAL_AMOUNT);
    }

    #[test]
    fn test_paused_check_precedes_other_failures() {
        let owner = Pubkey::new_unique();
        let account = Pubkey::new_unique();
        let mut ledger = Ledger::new(owner, AssetClass::Native);
        ledger.publish(&[(account, INITIAL_AMOUNT)]);
        let proof = ledger.proof(&account, INITIAL_AMOUNT);

        ledger.distributor.gate.pause(&owner).unwrap();

        expect_error(
            ledger.claim(&account, &account, INITIAL_AMOUNT, &proof),
            ClubRewardsError::ContractPaused,
        );
        // Wrong caller and wrong amount still report the pause
        expect_error(
            ledger.claim(&Pubkey::new_unique(), &account, 1, &proof),
            ClubRewardsError::ContractPaused,
        );

        ledger.distributor.gate.activate(&owner).unwrap();
        assert_eq!(ledger.claim(&account, &account, INITIAL_AMOUNT, &proof).unwrap(), INITIAL_AMOUNT);
    }

    #[test]
    fn test_claim_without_root_is_rejected() {
        let account = Pubkey::new_unique();
        let mut ledger = Ledger::new(Pubkey::new_unique(), AssetClass::Native);
        assert_eq!(ledger.asset_root.merkle_root, EMPTY_ROOT);

        expect_error(
            ledger.claim(&account, &account, 0, &[]),
            ClubRewardsError::NoMerkleRoot,
        );
    }

    #[test]
    fn test_deposit_rejected_while_paused() {
        let owner = Pubkey::new_unique();
        let mut ledger = Ledger::new(owner, AssetClass::Native);

        ledger.distributor.authorize_deposit(1_000).unwrap();
        expect_error(ledger.distributor.authorize_deposit(0), ClubRewardsError::InvalidAmount);

        ledger.distributor.gate.pause(&owner).unwrap();
        expect_error(ledger.distributor.authorize_deposit(1_000), ClubRewardsError::ContractPaused);
        expect_error(ledger.distributor.authorize_deposit(0), ClubRewardsError::ContractPaused);

        ledger.distributor.gate.activate(&owner).unwrap();
        ledger.distributor.authorize_deposit(1_000).unwrap();
    }

    #[test]
    fn test_old_proof_fails_after_root_update() {
        let account = Pubkey::new_unique();
        let mut ledger = Ledger::new(Pubkey::new_unique(), AssetClass::Native);
        ledger.publish(&[(account, INITIAL_AMOUNT), (Pubkey::new_unique(), 7)]);
        let stale_proof = ledger.proof(&account, INITIAL_AMOUNT);

        ledger.publish(&[(account, INITIAL_AMOUNT + EXTRA), (Pubkey::new_unique(), 7)]);
        expect_error(
            ledger.claim(&account, &account, INITIAL_AMOUNT, &stale_proof),
            ClubRewardsError::InvalidProof,
        );
    }
}
