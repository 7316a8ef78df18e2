//! Serves recorded interactions back in order.

use std::collections::{HashMap, VecDeque};

use super::format::{Cassette, Interaction, Port};

type PortMethod = (Port, String);

/// Hands out a cassette's interactions one at a time, keeping a separate
/// queue per `port::method` pair so that ports replay independently.
pub struct CassetteReplayer {
    pending: HashMap<PortMethod, VecDeque<Interaction>>,
    last_served: HashMap<PortMethod, u64>,
}

impl CassetteReplayer {
    /// Indexes a loaded cassette for replay.
    #[must_use]
    pub fn new(cassette: &Cassette) -> Self {
        let mut pending: HashMap<PortMethod, VecDeque<Interaction>> = HashMap::new();
        for interaction in &cassette.interactions {
            pending
                .entry((interaction.port, interaction.method.clone()))
                .or_default()
                .push_back(interaction.clone());
        }
        Self { pending, last_served: HashMap::new() }
    }

    /// Takes the next interaction recorded for `port::method`.
    ///
    /// # Panics
    ///
    /// Panics if nothing was recorded for the pair, or if every recorded
    /// interaction has already been served. The message names what was
    /// asked for so a stale cassette is easy to spot.
    pub fn next_interaction(&mut self, port: Port, method: &str) -> Interaction {
        let key = (port, method.to_string());
        let Some(queue) = self.pending.get_mut(&key) else {
            let mut available: Vec<String> =
                self.pending.keys().map(|(p, m)| format!("{p}::{m}")).collect();
            available.sort();
            panic!(
                "Cassette exhausted: no interactions recorded for {port}::{method}. \
                 Available port::method pairs: [{}]",
                available.join(", ")
            );
        };

        let Some(interaction) = queue.pop_front() else {
            let last_seq = self.last_served.get(&key).copied().unwrap_or_default();
            panic!(
                "Cassette exhausted: every interaction for {port}::{method} has been \
                 consumed. Last interaction was seq={last_seq}."
            );
        };
        self.last_served.insert(key, interaction.seq);
        interaction
    }
}
