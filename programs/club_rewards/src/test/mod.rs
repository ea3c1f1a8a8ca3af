pub mod test_gate;
pub mod test_ledger;
pub mod test_merkle;
