use anchor_lang::solana_program::hash::hashv;

/**
 * Sorted-pair merkle commitments
 *
 * Every parent is sha256(min(a, b) || max(a, b)) under lexicographic byte order,
 * so a proof only carries sibling hashes and never a left/right flag.
 * Off-chain tree builders must use the same rule, including the padding rule:
 * an unmatched node at the end of a level is paired with itself.
 *
 * Builders sort and deduplicate the leaves first, so a root depends only on
 * the set of leaves and never on the order they were listed in.
 */

/// Root of an empty tree. Doubles as the "no root set" sentinel on chain.
pub const EMPTY_ROOT: [u8; 32] = [0; 32];

/// Hash two sibling nodes with lexicographic ordering
pub fn hash_pair(a: &[u8; 32], b: &[u8; 32]) -> [u8; 32] {
    if a <= b {
        hashv(&[a.as_ref(), b.as_ref()]).to_bytes()
    } else {
        hashv(&[b.as_ref(), a.as_ref()]).to_bytes()
    }
}

/// Recomputes the root from `leaf` and its proof, shallow to deep
pub fn verify(proof: &[[u8; 32]], root: [u8; 32], leaf: [u8; 32]) -> bool {
    let computed = proof
        .iter()
        .fold(leaf, |node, sibling| hash_pair(&node, sibling));
    computed == root
}

/// Root over `leaves` without keeping the intermediate levels
pub fn build_root(leaves: &[[u8; 32]]) -> [u8; 32] {
    if leaves.is_empty() {
        return EMPTY_ROOT;
    }

    let mut level = leaf_set(leaves.to_vec());
    while level.len() > 1 {
        level = next_level(&level);
    }
    level[0]
}

fn leaf_set(mut leaves: Vec<[u8; 32]>) -> Vec<[u8; 32]> {
    leaves.sort_unstable();
    leaves.dedup();
    leaves
}

fn next_level(level: &[[u8; 32]]) -> Vec<[u8; 32]> {
    level
        .chunks(2)
        .map(|pair| {
            // Duplicate last entry if odd
            let right = pair.get(1).unwrap_or(&pair[0]);
            hash_pair(&pair[0], right)
        })
        .collect()
}

/// Full tree kept level by level so proofs can be served for any leaf.
///
/// Used by clients through the `lib` crate type to produce roots and proofs
/// that `verify` accepts.
#[derive(Debug, Clone)]
pub struct MerkleTree {
    levels: Vec<Vec<[u8; 32]>>,
}

impl MerkleTree {
    pub fn new(leaves: Vec<[u8; 32]>) -> Self {
        let mut levels = vec![leaf_set(leaves)];
        while levels[levels.len() - 1].len() > 1 {
            let next = next_level(&levels[levels.len() - 1]);
            levels.push(next);
        }
        MerkleTree { levels }
    }

    /// Leaves in tree order (sorted, without duplicates)
    pub fn leaves(&self) -> &[[u8; 32]] {
        &self.levels[0]
    }

    pub fn leaf_count(&self) -> usize {
        self.levels[0].len()
    }

    /// Root hash, or `EMPTY_ROOT` when the tree has no leaves
    pub fn root(&self) -> [u8; 32] {
        self.levels
            .last()
            .and_then(|top| top.first())
            .copied()
            .unwrap_or(EMPTY_ROOT)
    }

    /// Sibling path for the leaf at `index` in tree order, or `None` when out of bounds
    pub fn proof(&self, index: usize) -> Option<Vec<[u8; 32]>> {
        if index >= self.leaf_count() {
            return None;
        }

        let mut proof = Vec::with_capacity(self.levels.len().saturating_sub(1));
        let mut current_index = index;
        for level in &self.levels[..self.levels.len() - 1] {
            let sibling_index = if current_index % 2 == 0 {
                // Left child, falls back to itself when it has no right sibling
                if current_index + 1 < level.len() {
                    current_index + 1
                } else {
                    current_index
                }
            } else {
                current_index - 1
            };
            proof.push(level[sibling_index]);
            current_index /= 2;
        }

        Some(proof)
    }

    /// Proof for `leaf`, or `None` when it is not in the tree
    pub fn proof_for(&self, leaf: &[u8; 32]) -> Option<Vec<[u8; 32]>> {
        let index = self.levels[0].binary_search(leaf).ok()?;
        self.proof(index)
    }
}
