use std::collections::VecDeque;

use serde::{
    Deserialize,
    Serialize,
};

use crate::{
    abilities::AbilityId,
    battle::MonHandle,
    mons::Boost,
};

/// A unit of work for the turn engine to run after the current effect resolves.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Phase {
    /// Displays a message.
    Message(String),
    /// Displays the ability indicator for a Mon.
    ShowAbility {
        mon: MonHandle,
        ability: AbilityId,
        passive: bool,
    },
    /// Changes stat stages.
    StatStageChange {
        target: MonHandle,
        boosts: Vec<Boost>,
        stages: i8,
        self_inflicted: bool,
        source: Option<MonHandle>,
    },
    /// Damages a Mon directly.
    Damage {
        target: MonHandle,
        amount: u32,
        source: Option<MonHandle>,
    },
    /// Heals a Mon.
    Heal { target: MonHandle, amount: u32 },
    /// Forces a Mon to switch out.
    SwitchOut { mon: MonHandle },
    /// Changes the form of a Mon.
    FormChange { mon: MonHandle, form: usize },
}

/// The queue of phases for the turn engine to run.
///
/// Phases can be appended to the end of the queue or unshifted to run before everything already
/// queued. While a splice point is open, unshifted phases are inserted in order at the splice
/// point rather than ahead of each other.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhaseQueue {
    prepend: VecDeque<Phase>,
    phases: VecDeque<Phase>,
    #[serde(skip)]
    splices: Vec<usize>,
}

impl PhaseQueue {
    /// Creates a new [`PhaseQueue`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a phase to the end of the queue.
    pub fn push(&mut self, phase: Phase) {
        self.phases.push_back(phase);
    }

    /// Adds a phase to run before all phases pushed with [`Self::push`].
    pub fn unshift(&mut self, phase: Phase) {
        match self.splices.last_mut() {
            Some(index) => {
                self.prepend.insert(*index, phase);
                *index += 1;
            }
            None => self.prepend.push_back(phase),
        }
    }

    /// Opens a splice point at the current end of the unshifted phases.
    ///
    /// Splice points nest.
    pub fn begin_splice(&mut self) {
        self.splices.push(self.prepend.len());
    }

    /// Closes the innermost splice point.
    pub fn end_splice(&mut self) {
        let closed = self.splices.pop();
        // An inner splice inserted phases in front of the outer splice index, so the outer index
        // must move past them.
        if let (Some(closed), Some(outer)) = (closed, self.splices.last_mut()) {
            if closed > *outer {
                *outer = closed;
            }
        }
    }

    /// Takes the next phase to run.
    pub fn pop(&mut self) -> Option<Phase> {
        if let Some(phase) = self.prepend.pop_front() {
            for index in &mut self.splices {
                *index = index.saturating_sub(1);
            }
            return Some(phase);
        }
        self.phases.pop_front()
    }

    /// Iterates over all queued phases in the order they will run.
    pub fn iter(&self) -> impl Iterator<Item = &Phase> {
        self.prepend.iter().chain(self.phases.iter())
    }

    pub fn len(&self) -> usize {
        self.prepend.len() + self.phases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drains all queued phases.
    pub fn drain(&mut self) -> Vec<Phase> {
        self.splices.clear();
        self.prepend.drain(..).chain(self.phases.drain(..)).collect()
    }
}
