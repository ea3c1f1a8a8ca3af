use anchor_lang::prelude::Pubkey;
use crate::state::{allocation_leaf, division_leaf, AssetClass};
use crate::utils::{build_root, hash_pair, verify, MerkleTree, EMPTY_ROOT};

#[derive(Debug, Clone)]
struct TreeNode {
    claimant: Pubkey,
    amount: u64,
}

fn hash_node(asset: &AssetClass, node: &TreeNode) -> [u8; 32] {
    allocation_leaf(asset, &node.claimant, node.amount)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn get_test_data() -> Vec<TreeNode> {
        vec![
            TreeNode { claimant: Pubkey::new_unique(), amount: 1000 },
            TreeNode { claimant: Pubkey::new_unique(), amount: 2000 },
            TreeNode { claimant: Pubkey::new_unique(), amount: 3000 },
            TreeNode { claimant: Pubkey::new_unique(), amount: 4000 },
        ]
    }

    fn leaves(asset: &AssetClass, nodes: &[TreeNode]) -> Vec<[u8; 32]> {
        nodes.iter().map(|node| hash_node(asset, node)).collect()
    }

    #[test]
    fn test_get_proof_and_verify() {
        let asset = AssetClass::Token(Pubkey::new_unique());
        let tree_nodes = get_test_data();
        let merkle_tree = MerkleTree::new(leaves(&asset, &tree_nodes));
        let root = merkle_tree.root();

        for node in &tree_nodes {
            let leaf_hash = hash_node(&asset, node);
            let proof = merkle_tree.proof_for(&leaf_hash).expect("Failed to get proof");
            println!("claimant={}, amount={}, proof length={}", node.claimant, node.amount, proof.len());

            assert_eq!(proof.len(), 2);
            assert!(verify(&proof, root, leaf_hash), "Proof verification failed for {}", node.claimant);
        }
    }

    #[test]
    fn test_build_root_matches_tree_root() {
        let asset = AssetClass::Native;
        let nodes = get_test_data();
        for count in 1..=nodes.len() {
            let tree_leaves = leaves(&asset, &nodes[..count]);
            assert_eq!(build_root(&tree_leaves), MerkleTree::new(tree_leaves).root());
        }
    }

    #[test]
    fn test_root_ignores_leaf_order() {
        let asset = AssetClass::Native;
        let mut tree_leaves = leaves(&asset, &get_test_data());
        let root = build_root(&tree_leaves);

        tree_leaves.reverse();
        assert_eq!(build_root(&tree_leaves), root);

        tree_leaves.swap(0, 2);
        assert_eq!(build_root(&tree_leaves), root);

        // A repeated leaf does not change the committed set
        let first = tree_leaves[0];
        tree_leaves.push(first);
        assert_eq!(build_root(&tree_leaves), root);
    }

    #[test]
    fn test_hash_pair_is_symmetric() {
        let a = [1u8; 32];
        let b = [2u8; 32];
        assert_eq!(hash_pair(&a, &b), hash_pair(&b, &a));
        assert_ne!(hash_pair(&a, &b), hash_pair(&a, &a));
    }

    #[test]
    fn test_invalid_proof() {
        let asset = AssetClass::Native;
        let tree_nodes = get_test_data();
        let merkle_tree = MerkleTree::new(leaves(&asset, &tree_nodes));
        let root = merkle_tree.root();

        // Wrong leaf
        let wrong_leaf = allocation_leaf(&asset, &Pubkey::new_unique(), 9999);
        let proof = merkle_tree.proof(0).expect("Failed to get proof");
        assert!(!verify(&proof, root, wrong_leaf), "Invalid proof should not verify");

        // Tampered proof
        let correct_leaf = merkle_tree.leaves()[0];
        let mut tampered_proof = merkle_tree.proof(0).expect("Failed to get proof");
        tampered_proof[0][0] = tampered_proof[0][0].wrapping_add(1);
        assert!(!verify(&tampered_proof, root, correct_leaf), "Tampered proof should not verify");

        // Truncated proof
        let truncated = &merkle_tree.proof(0).expect("Failed to get proof")[..1];
        assert!(!verify(truncated, root, correct_leaf));
    }

    #[test]
    fn test_leaf_binds_asset_and_amount() {
        let claimant = Pubkey::new_unique();
        let mint = Pubkey::new_unique();

        let token_leaf = allocation_leaf(&AssetClass::Token(mint), &claimant, 150);
        assert_ne!(token_leaf, allocation_leaf(&AssetClass::Native, &claimant, 150));
        assert_ne!(token_leaf, allocation_leaf(&AssetClass::Token(mint), &claimant, 151));
        assert_ne!(token_leaf, allocation_leaf(&AssetClass::Token(Pubkey::new_unique()), &claimant, 150));

        assert_ne!(division_leaf(7, 4), division_leaf(7, 5));
        assert_ne!(division_leaf(7, 4), division_leaf(4, 7));
    }

    #[test]
    fn test_odd_leaf_count_pairs_last_node_with_itself() {
        let asset = AssetClass::Native;
        let nodes = get_test_data();
        let tree_leaves = leaves(&asset, &nodes[..3]);
        let merkle_tree = MerkleTree::new(tree_leaves.clone());
        let root = merkle_tree.root();

        let sorted = merkle_tree.leaves().to_vec();
        let expected = hash_pair(
            &hash_pair(&sorted[0], &sorted[1]),
            &hash_pair(&sorted[2], &sorted[2]),
        );
        assert_eq!(root, expected);

        // The unmatched leaf carries itself as its first sibling
        let last_proof = merkle_tree.proof(2).expect("Failed to get proof");
        assert_eq!(last_proof[0], sorted[2]);

        for leaf in &tree_leaves {
            let proof = merkle_tree.proof_for(leaf).expect("Failed to get proof");
            assert!(verify(&proof, root, *leaf));
        }
    }

    #[test]
    fn test_proof_edge_cases() {
        // Single node: root is the leaf and the proof is empty
        let asset = AssetClass::Native;
        let single_leaf = hash_node(&asset, &get_test_data()[0]);
        let single_tree = MerkleTree::new(vec![single_leaf]);
        let single_proof = single_tree.proof(0).expect("Failed to get proof for single node");

        assert_eq!(single_tree.root(), single_leaf);
        assert_eq!(single_proof.len(), 0, "Single node should have empty proof");
        assert!(verify(&single_proof, single_tree.root(), single_leaf));

        // Empty tree: sentinel root and no proofs
        let empty_tree = MerkleTree::new(Vec::new());
        assert_eq!(empty_tree.root(), EMPTY_ROOT);
        assert_eq!(build_root(&[]), EMPTY_ROOT);
        assert!(empty_tree.proof(0).is_none());

        // Out of bounds
        let merkle_tree = MerkleTree::new(leaves(&asset, &get_test_data()));
        assert!(merkle_tree.proof(10).is_none(), "Out of bounds should return None");
        assert!(merkle_tree.proof_for(&[9u8; 32]).is_none());
    }
}
