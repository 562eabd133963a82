//! Parts inventory ledger.
//!
//! [`InventoryLedger`] is the authoritative record of part quantities. Stock
//! only ever changes through [`InventoryLedger::add_stock`] and
//! [`InventoryLedger::deduct_parts`]; entries are never removed, so a part
//! that runs out stays listed at zero.
//!
//! Deduction is two-phase: the whole request is validated against current
//! stock first and only then committed, so a failed request leaves every
//! quantity exactly as it was.
//!
//! ```rust
//! use mro_core::InventoryLedger;
//!
//! let mut ledger = InventoryLedger::new();
//! ledger.add_stock("O-Ring", 5);
//! ledger.add_stock("WrenchSet", 2);
//!
//! ledger.deduct_parts(&["O-Ring", "WrenchSet"], 1)?;
//! assert_eq!(ledger.quantity("O-Ring"), Some(4));
//!
//! // Not enough wrench sets: nothing is deducted.
//! assert!(ledger.deduct_parts(&["O-Ring", "WrenchSet", "WrenchSet"], 1).is_err());
//! assert_eq!(ledger.quantity("O-Ring"), Some(4));
//! # Ok::<(), mro_core::MroError>(())
//! ```

use std::{
    collections::BTreeMap,
    sync::{Arc, Mutex, MutexGuard, PoisonError},
};

use log::debug;

use crate::{
    error::{MroError, Result},
    models::{Part, Shortage},
};

/// Mapping from part identifier to available quantity.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InventoryLedger {
    parts: BTreeMap<String, u32>,
}

impl InventoryLedger {
    /// Creates an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Increases a part's quantity, creating the entry if absent.
    ///
    /// A zero quantity registers the part without changing its count.
    pub fn add_stock(&mut self, part: impl Into<String>, quantity: u32) {
        let entry = self.parts.entry(part.into()).or_insert(0);
        *entry = entry.saturating_add(quantity);
    }

    /// Returns true iff the part is stocked with at least `quantity` units.
    pub fn has_available(&self, part: &str, quantity: u32) -> bool {
        self.parts.get(part).is_some_and(|&on_hand| on_hand >= quantity)
    }

    /// Units on hand for a part, `None` if the part is not in the ledger.
    pub fn quantity(&self, part: &str) -> Option<u32> {
        self.parts.get(part).copied()
    }

    /// Number of distinct parts in the ledger.
    pub fn len(&self) -> usize {
        self.parts.len()
    }

    /// Whether the ledger holds no parts at all.
    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    /// Every part that cannot cover its share of the request.
    ///
    /// Each occurrence of a part in `parts` needs `quantity_each` units, so a
    /// part listed twice is checked against twice the demand. Shortages come
    /// back in the order the parts first appear in the request.
    pub fn shortages<S: AsRef<str>>(&self, parts: &[S], quantity_each: u32) -> Vec<Shortage> {
        aggregate_demand(parts, quantity_each)
            .into_iter()
            .filter_map(|(part, requested)| {
                let available = self.quantity(part);
                match available {
                    Some(on_hand) if on_hand >= requested => None,
                    _ => Some(Shortage {
                        part: part.to_string(),
                        requested,
                        available,
                    }),
                }
            })
            .collect()
    }

    /// Deducts `quantity_each` units for every occurrence in `parts`.
    ///
    /// The request is validated in full before anything is mutated. If any
    /// part is missing or short the ledger is left unchanged and every short
    /// part is reported.
    ///
    /// # Errors
    ///
    /// Returns [`MroError::Shortage`] when at least one part cannot cover its
    /// demand.
    pub fn deduct_parts<S: AsRef<str>>(&mut self, parts: &[S], quantity_each: u32) -> Result<()> {
        let shortages = self.shortages(parts, quantity_each);
        if !shortages.is_empty() {
            debug!("Rejected deduction of {} part(s): {shortages:?}", parts.len());
            return Err(MroError::Shortage { shortages });
        }

        for (part, requested) in aggregate_demand(parts, quantity_each) {
            if let Some(on_hand) = self.parts.get_mut(part) {
                *on_hand -= requested;
            }
        }
        debug!("Deducted {} part occurrence(s)", parts.len());
        Ok(())
    }

    /// All current entries, each exactly once, sorted by part identifier.
    pub fn snapshot(&self) -> Vec<Part> {
        self.parts
            .iter()
            .map(|(id, &quantity)| Part::new(id.clone(), quantity))
            .collect()
    }
}

impl FromIterator<(String, u32)> for InventoryLedger {
    fn from_iter<I: IntoIterator<Item = (String, u32)>>(iter: I) -> Self {
        let mut ledger = Self::new();
        for (part, quantity) in iter {
            ledger.add_stock(part, quantity);
        }
        ledger
    }
}

/// Total demand per distinct part, in first-occurrence order.
fn aggregate_demand<S: AsRef<str>>(parts: &[S], quantity_each: u32) -> Vec<(&str, u32)> {
    let mut demand: Vec<(&str, u32)> = Vec::new();
    for part in parts {
        let part = part.as_ref();
        match demand.iter_mut().find(|(p, _)| *p == part) {
            Some((_, total)) => *total = total.saturating_add(quantity_each),
            None => demand.push((part, quantity_each)),
        }
    }
    demand
}

/// A ledger shared between threads.
///
/// Each operation holds the lock for its whole duration, so the
/// validate-then-commit sequence of [`SharedLedger::deduct_parts`] cannot
/// interleave with another caller's mutation.
#[derive(Debug, Clone, Default)]
pub struct SharedLedger {
    inner: Arc<Mutex<InventoryLedger>>,
}

impl SharedLedger {
    /// Wraps `ledger` for shared use.
    pub fn new(ledger: InventoryLedger) -> Self {
        Self {
            inner: Arc::new(Mutex::new(ledger)),
        }
    }

    fn lock(&self) -> MutexGuard<'_, InventoryLedger> {
        // Operations never leave the ledger half-updated, so a poisoned lock
        // still guards consistent data.
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Locked [`InventoryLedger::add_stock`].
    pub fn add_stock(&self, part: impl Into<String>, quantity: u32) {
        self.lock().add_stock(part, quantity);
    }

    /// Locked [`InventoryLedger::has_available`]. The answer may be stale by
    /// the time the caller acts on it; use [`SharedLedger::deduct_parts`] to
    /// check and deduct together.
    pub fn has_available(&self, part: &str, quantity: u32) -> bool {
        self.lock().has_available(part, quantity)
    }

    /// Atomic deduction under the ledger lock.
    ///
    /// # Errors
    ///
    /// Returns [`MroError::Shortage`] as [`InventoryLedger::deduct_parts`].
    pub fn deduct_parts<S: AsRef<str>>(&self, parts: &[S], quantity_each: u32) -> Result<()> {
        self.lock().deduct_parts(parts, quantity_each)
    }

    /// Sorted copy of every entry, taken under the lock.
    pub fn snapshot(&self) -> Vec<Part> {
        self.lock().snapshot()
    }
}
