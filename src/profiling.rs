//! Simple profiling counters for understanding hot paths.
//!
//! Counters are process-wide and relaxed; they are for eyeballing rotation
//! and relinking costs, not for exact accounting across threads.

use std::sync::atomic::{AtomicU64, Ordering};

pub static ROTATIONS: AtomicU64 = AtomicU64::new(0);
pub static TRANSPLANTS: AtomicU64 = AtomicU64::new(0);
pub static WEIGHT_COPIES: AtomicU64 = AtomicU64::new(0);
pub static REPLACEMENTS: AtomicU64 = AtomicU64::new(0);
pub static NOOP_PUTS: AtomicU64 = AtomicU64::new(0);

#[inline]
pub fn rotation() {
    ROTATIONS.fetch_add(1, Ordering::Relaxed);
}

#[inline]
pub fn transplant() {
    TRANSPLANTS.fetch_add(1, Ordering::Relaxed);
}

#[inline]
pub fn weight_copy() {
    WEIGHT_COPIES.fetch_add(1, Ordering::Relaxed);
}

#[inline]
pub fn replacement() {
    REPLACEMENTS.fetch_add(1, Ordering::Relaxed);
}

#[inline]
pub fn noop_put() {
    NOOP_PUTS.fetch_add(1, Ordering::Relaxed);
}

pub fn reset() {
    ROTATIONS.store(0, Ordering::Relaxed);
    TRANSPLANTS.store(0, Ordering::Relaxed);
    WEIGHT_COPIES.store(0, Ordering::Relaxed);
    REPLACEMENTS.store(0, Ordering::Relaxed);
    NOOP_PUTS.store(0, Ordering::Relaxed);
}

pub fn report() -> String {
    let rotations = ROTATIONS.load(Ordering::Relaxed);
    let transplants = TRANSPLANTS.load(Ordering::Relaxed);
    let copies = WEIGHT_COPIES.load(Ordering::Relaxed);
    let replacements = REPLACEMENTS.load(Ordering::Relaxed);
    let noops = NOOP_PUTS.load(Ordering::Relaxed);

    format!(
        "Rotations: {}, Transplants: {}, Weight copies: {}, Puts: {} replaced, {} unchanged",
        rotations, transplants, copies, replacements, noops
    )
}
