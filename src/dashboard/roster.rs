//! Worker list

use crate::status::WorkerStats;
use std::collections::BTreeMap;

/// Characters of the FEN shown on a card
pub const PREVIEW_LEN: usize = 35;

/// Preview text for a worker that has not published a position yet
pub const PREVIEW_PLACEHOLDER: &str = "Initializing...";

/// One worker row in the roster.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkerCard {
    pub id: String,
    pub status: String,
    /// Leading characters of the worker's current FEN
    pub preview: String,
    pub active: bool,
}

impl WorkerCard {
    fn new(id: &str) -> Self {
        Self {
            id: id.to_string(),
            status: String::new(),
            preview: PREVIEW_PLACEHOLDER.to_string(),
            active: false,
        }
    }

    /// Card heading, e.g. `ACTOR_03`
    pub fn label(&self) -> String {
        format!("ACTOR_0{}", self.id)
    }
}

/// Worker cards diffed by id across snapshots.
///
/// Cards are created the first time an id appears and updated in place
/// afterwards. Cards for workers missing from a snapshot are kept unless
/// pruning is enabled.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorkerRoster {
    cards: Vec<WorkerCard>,
    prune_stale: bool,
}

impl WorkerRoster {
    pub fn new(prune_stale: bool) -> Self {
        Self {
            cards: Vec::new(),
            prune_stale,
        }
    }

    /// Apply one snapshot's workers and mark `active_id`.
    pub fn render(&mut self, workers: &BTreeMap<String, WorkerStats>, active_id: &str) {
        if self.prune_stale {
            let before = self.cards.len();
            self.cards.retain(|card| workers.contains_key(&card.id));
            if self.cards.len() != before {
                tracing::debug!(
                    removed = before - self.cards.len(),
                    "Pruned stale worker cards"
                );
            }
        }

        let mut ids: Vec<&String> = workers.keys().collect();
        ids.sort_by(|a, b| worker_order(a, b));

        for id in ids {
            let stats = &workers[id];
            let index = match self.position(id) {
                Some(index) => index,
                None => {
                    tracing::debug!(worker_id = %id, "New worker card");
                    self.cards.push(WorkerCard::new(id));
                    self.cards.len() - 1
                }
            };

            let card = &mut self.cards[index];
            card.status = stats.status.clone();
            card.preview = preview(stats.fen.as_deref());
        }

        self.mark_active(active_id);
    }

    /// Toggle the active flag without touching anything else
    pub fn mark_active(&mut self, active_id: &str) {
        for card in &mut self.cards {
            card.active = card.id == active_id;
        }
    }

    /// Report the id of the card at `index`, for the owner to act on.
    pub fn select(&self, index: usize) -> Option<&str> {
        self.cards.get(index).map(|card| card.id.as_str())
    }

    pub fn position(&self, id: &str) -> Option<usize> {
        self.cards.iter().position(|card| card.id == id)
    }

    pub fn cards(&self) -> &[WorkerCard] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

/// Numeric ids in numeric order, everything else after, lexicographically.
pub fn worker_order(a: &str, b: &str) -> std::cmp::Ordering {
    match (a.parse::<u64>(), b.parse::<u64>()) {
        (Ok(x), Ok(y)) => x.cmp(&y),
        (Ok(_), Err(_)) => std::cmp::Ordering::Less,
        (Err(_), Ok(_)) => std::cmp::Ordering::Greater,
        (Err(_), Err(_)) => a.cmp(b),
    }
}

fn preview(fen: Option<&str>) -> String {
    match fen {
        Some(fen) if !fen.is_empty() => fen.chars().take(PREVIEW_LEN).collect(),
        _ => PREVIEW_PLACEHOLDER.to_string(),
    }
}
