// Cart Session - Process-wide cart state with explicit lifecycle
//
// Created at application start (`CartSession::start`) and torn down at
// session end (`end`). Views mutate it only through the CartStore port.

use crate::domain::{CartEntry, Product, SnapshotLine};
use crate::port::{CartError, CartStore, TimeProvider};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tokio::sync::watch;
use tracing::{debug, info, warn};

struct SessionState {
    entries: Vec<CartEntry>,
    ended: bool,
}

/// In-memory cart shared by every view of the process
pub struct CartSession {
    state: Mutex<SessionState>,
    time_provider: Arc<dyn TimeProvider>,
    /// Bumped on every successful mutation
    revision: watch::Sender<u64>,
}

impl CartSession {
    /// Start a new, empty cart session
    pub fn start(time_provider: Arc<dyn TimeProvider>) -> Arc<Self> {
        let (revision, _) = watch::channel(0);
        info!("Cart session started");

        Arc::new(Self {
            state: Mutex::new(SessionState {
                entries: Vec::new(),
                ended: false,
            }),
            time_provider,
            revision,
        })
    }

    /// End the session; later mutations are rejected
    pub fn end(&self) {
        let mut state = self.lock();
        state.ended = true;
        state.entries.clear();
        info!("Cart session ended");
    }

    pub fn is_active(&self) -> bool {
        !self.lock().ended
    }

    /// Sum of quantities across all lines
    pub fn total_quantity(&self) -> u64 {
        self.lock()
            .entries
            .iter()
            .map(|e| u64::from(e.quantity))
            .sum()
    }

    /// Subscribe to cart changes (value is the mutation revision)
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.revision.subscribe()
    }

    fn lock(&self) -> MutexGuard<'_, SessionState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn bump(&self) {
        self.revision.send_modify(|rev| *rev += 1);
    }
}

impl CartStore for CartSession {
    fn add_item(&self, product: &Product) -> Result<(), CartError> {
        {
            let mut state = self.lock();
            if state.ended {
                warn!(product_id = %product.id, "Add to ended cart session rejected");
                return Err(CartError::SessionEnded);
            }

            match state.entries.iter_mut().find(|e| e.product_id == product.id) {
                Some(entry) => {
                    entry.quantity = entry
                        .quantity
                        .checked_add(1)
                        .ok_or_else(|| CartError::QuantityOverflow(product.id.clone()))?;
                    if entry.product.is_none() {
                        entry.product = Some(product.clone());
                    }
                    debug!(product_id = %product.id, quantity = entry.quantity, "Cart quantity incremented");
                }
                None => {
                    let added_at = self.time_provider.now_millis();
                    state
                        .entries
                        .push(CartEntry::new(product.clone(), 1, added_at));
                    debug!(product_id = %product.id, "Cart line added");
                }
            }
        }

        self.bump();
        Ok(())
    }

    fn reconcile(&self, lines: &[SnapshotLine]) -> Result<(), CartError> {
        {
            let mut state = self.lock();
            if state.ended {
                return Err(CartError::SessionEnded);
            }

            let mut local = std::mem::take(&mut state.entries);
            let now = self.time_provider.now_millis();

            state.entries = lines
                .iter()
                .filter(|line| line.quantity > 0)
                .map(|line| {
                    match local.iter().position(|e| e.product_id == line.product_id) {
                        Some(idx) => {
                            let mut entry = local.swap_remove(idx);
                            entry.quantity = line.quantity;
                            entry
                        }
                        None => CartEntry {
                            product_id: line.product_id.clone(),
                            product: None,
                            quantity: line.quantity,
                            added_at: now,
                        },
                    }
                })
                .collect();

            debug!(lines = state.entries.len(), dropped = local.len(), "Cart reconciled with server");
        }

        self.bump();
        Ok(())
    }

    fn entries(&self) -> Vec<CartEntry> {
        self.lock().entries.clone()
    }
}
