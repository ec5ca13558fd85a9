//! Orchestration services: the operations the transport layer exposes.
//!
//! Services are generic over `ConnectionTrait`; handlers run them inside
//! `with_txn` so each operation is one atomic unit against persistence.

pub mod game_sets;
pub mod rounds;
pub mod templates;
