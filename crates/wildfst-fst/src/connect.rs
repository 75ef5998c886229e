// Reachability trim and sink-and-trim arc deletion.

use std::collections::VecDeque;

use crate::arc::Arc;
use crate::vector::VectorFst;
use crate::StateId;

const REMOVED: StateId = StateId::MAX;

impl VectorFst {
    /// Keep exactly the states and arcs lying on some path from the start
    /// state to a final state, renumbering surviving states in order.
    ///
    /// A network with no such path ends up with zero states and no start;
    /// that is the empty language, not an error.
    pub fn connect(&mut self) {
        let n = self.states.len();
        let Some(start) = self.start else {
            tracing::trace!(states = n, "connect: no start state, clearing");
            self.clear();
            return;
        };

        // Forward reachability from the start state
        let mut accessible = vec![false; n];
        let mut queue: VecDeque<StateId> = VecDeque::new();
        accessible[start as usize] = true;
        queue.push_back(start);
        while let Some(s) = queue.pop_front() {
            for arc in &self.states[s as usize].arcs {
                let d = arc.nextstate as usize;
                if !accessible[d] {
                    accessible[d] = true;
                    queue.push_back(arc.nextstate);
                }
            }
        }

        // Backward reachability from final states over reversed arcs
        let mut reverse: Vec<Vec<StateId>> = vec![Vec::new(); n];
        for (s, state) in self.states.iter().enumerate() {
            for arc in &state.arcs {
                reverse[arc.nextstate as usize].push(s as StateId);
            }
        }
        let mut coaccessible = vec![false; n];
        for (s, state) in self.states.iter().enumerate() {
            if !state.final_weight.is_zero() {
                coaccessible[s] = true;
                queue.push_back(s as StateId);
            }
        }
        while let Some(s) = queue.pop_front() {
            for &p in &reverse[s as usize] {
                if !coaccessible[p as usize] {
                    coaccessible[p as usize] = true;
                    queue.push_back(p);
                }
            }
        }

        let mut old_to_new = vec![REMOVED; n];
        let mut kept: StateId = 0;
        for s in 0..n {
            if accessible[s] && coaccessible[s] {
                old_to_new[s] = kept;
                kept += 1;
            }
        }

        if old_to_new[start as usize] == REMOVED {
            tracing::trace!(states = n, "connect: start state is dead, clearing");
            self.clear();
            return;
        }
        if kept as usize == n {
            tracing::trace!(states = n, "connect: nothing to trim");
            return;
        }

        let old_states = std::mem::take(&mut self.states);
        self.states.reserve(kept as usize);
        for (s, mut state) in old_states.into_iter().enumerate() {
            if old_to_new[s] == REMOVED {
                continue;
            }
            state.arcs.retain_mut(|a| {
                let target = old_to_new[a.nextstate as usize];
                a.nextstate = target;
                target != REMOVED
            });
            self.states.push(state);
        }
        self.start = Some(old_to_new[start as usize]);
        tracing::trace!(before = n, after = kept, "connect: trimmed states");
    }

    /// Delete every arc matching `doomed` by redirecting it to a fresh
    /// non-final sink state and then trimming with [`connect`](Self::connect).
    ///
    /// Returns the number of redirected arcs.
    pub fn prune_arcs<F>(&mut self, mut doomed: F) -> usize
    where
        F: FnMut(&Arc) -> bool,
    {
        let sink = self.add_state();
        let mut redirected = 0usize;
        for s in self.states() {
            for arc in self.arcs_mut(s) {
                if doomed(&*arc) {
                    arc.nextstate = sink;
                    redirected += 1;
                }
            }
        }
        self.connect();
        redirected
    }
}
