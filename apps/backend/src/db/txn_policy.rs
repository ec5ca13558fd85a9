//! Process-wide transaction policy for `with_txn`.
//!
//! Production always commits on success. Test binaries running against a
//! shared database can flip to rollback-on-ok so cases never observe each
//! other's writes.

use std::sync::atomic::{AtomicU8, Ordering};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TxnPolicy {
    CommitOnOk,
    RollbackOnOk,
}

const COMMIT_ON_OK: u8 = 0;
const ROLLBACK_ON_OK: u8 = 1;

static POLICY: AtomicU8 = AtomicU8::new(COMMIT_ON_OK);

pub fn current() -> TxnPolicy {
    match POLICY.load(Ordering::Relaxed) {
        ROLLBACK_ON_OK => TxnPolicy::RollbackOnOk,
        _ => TxnPolicy::CommitOnOk,
    }
}

pub fn set_txn_policy(policy: TxnPolicy) {
    let value = match policy {
        TxnPolicy::CommitOnOk => COMMIT_ON_OK,
        TxnPolicy::RollbackOnOk => ROLLBACK_ON_OK,
    };
    POLICY.store(value, Ordering::Relaxed);
}
