#![doc(test(attr(deny(warnings))))]

//! AZEx bundles two console utilities behind one menu: a money spending manager
//! that tracks an in-memory balance and transaction log, and a stateless
//! scientific calculator.

pub mod calculator;
pub mod cli;
pub mod config;
pub mod currency;
pub mod errors;
pub mod ledger;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("AZEx tracing initialized.");
    });
}
