//! Prefix automaton over Unicode code points.
//!
//! States live in an arena addressed by index: the structure is a strict
//! tree with single ownership, so indices avoid any shared-pointer
//! plumbing. States are created during [`Automaton::insert`] and never
//! removed or mutated afterwards; the build-then-scan contract is that all
//! inserts complete before the first scan starts.

use std::collections::HashMap;

use log::debug;

use crate::{KeywordId, StateId};

/// One node of the prefix tree.
///
/// `keyword` is `Some(id)` iff a complete keyword ends at this state; the
/// id points into the automaton's keyword table.
#[derive(Debug, Default)]
struct State {
    children: HashMap<char, StateId>,
    keyword: Option<KeywordId>,
}

/// An immutable-after-build prefix tree over inserted keywords.
#[derive(Debug)]
pub struct Automaton {
    states: Vec<State>,
    keywords: Vec<String>,
}

impl Default for Automaton {
    fn default() -> Self {
        Self::new()
    }
}

impl Automaton {
    /// The root state. Never terminal (see [`Automaton::insert`]).
    pub const ROOT: StateId = 0;

    pub fn new() -> Self {
        Self {
            states: vec![State::default()],
            keywords: Vec::new(),
        }
    }

    /// Inserts a keyword, sharing any existing prefix path.
    ///
    /// An empty keyword is a no-op: marking the root terminal would turn
    /// every scan position into an immediate match and collapse all input
    /// into mask tokens.
    pub fn insert(&mut self, keyword: &str) {
        if keyword.is_empty() {
            debug!("Ignoring empty keyword; the root state must never be terminal.");
            return;
        }

        let mut state = Self::ROOT;
        for ch in keyword.chars() {
            let next = self.states[state as usize].children.get(&ch).copied();
            state = match next {
                Some(child) => child,
                None => {
                    let child = self.states.len() as StateId;
                    self.states.push(State::default());
                    self.states[state as usize].children.insert(ch, child);
                    child
                }
            };
        }

        if self.states[state as usize].keyword.is_none() {
            let id = self.keywords.len() as KeywordId;
            self.keywords.push(keyword.to_string());
            self.states[state as usize].keyword = Some(id);
        }
    }

    /// Pure child lookup: the state reached from `state` on `ch`, if any.
    pub fn transition(&self, state: StateId, ch: char) -> Option<StateId> {
        self.states[state as usize].children.get(&ch).copied()
    }

    /// The keyword ending at `state`, if the state is terminal.
    pub fn keyword_at(&self, state: StateId) -> Option<KeywordId> {
        self.states[state as usize].keyword
    }

    /// The text of an inserted keyword by id.
    pub fn keyword_text(&self, id: KeywordId) -> Option<&str> {
        self.keywords.get(id as usize).map(String::as_str)
    }

    /// Number of distinct keywords inserted.
    pub fn keyword_count(&self) -> usize {
        self.keywords.len()
    }

    /// True when no keyword has been inserted; scans against an empty
    /// automaton are the identity function.
    pub fn is_empty(&self) -> bool {
        self.keywords.is_empty()
    }

    /// Total number of arena states, root included.
    pub fn state_count(&self) -> usize {
        self.states.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_builds_shared_prefix_paths() {
        let mut automaton = Automaton::new();
        automaton.insert("abc");
        automaton.insert("abd");

        // Root + a + b + c + d.
        assert_eq!(automaton.state_count(), 5);
        assert_eq!(automaton.keyword_count(), 2);

        let a = automaton.transition(Automaton::ROOT, 'a').unwrap();
        let b = automaton.transition(a, 'b').unwrap();
        let c = automaton.transition(b, 'c').unwrap();
        let d = automaton.transition(b, 'd').unwrap();
        assert!(automaton.keyword_at(c).is_some());
        assert!(automaton.keyword_at(d).is_some());
        assert!(automaton.keyword_at(b).is_none());
    }

    #[test]
    fn insert_marks_terminal_with_keyword_id() {
        let mut automaton = Automaton::new();
        automaton.insert("赌博");

        let first = automaton.transition(Automaton::ROOT, '赌').unwrap();
        let second = automaton.transition(first, '博').unwrap();
        let id = automaton.keyword_at(second).unwrap();
        assert_eq!(automaton.keyword_text(id), Some("赌博"));
    }

    #[test]
    fn empty_keyword_is_a_guarded_no_op() {
        let mut automaton = Automaton::new();
        automaton.insert("");

        assert!(automaton.is_empty());
        assert_eq!(automaton.state_count(), 1);
        assert!(automaton.keyword_at(Automaton::ROOT).is_none());
    }

    #[test]
    fn duplicate_insert_is_idempotent() {
        let mut automaton = Automaton::new();
        automaton.insert("abc");
        automaton.insert("abc");

        assert_eq!(automaton.keyword_count(), 1);
        assert_eq!(automaton.state_count(), 4);
    }

    #[test]
    fn transition_miss_returns_none_without_side_effects() {
        let mut automaton = Automaton::new();
        automaton.insert("ab");

        let before = automaton.state_count();
        assert!(automaton.transition(Automaton::ROOT, 'x').is_none());
        assert_eq!(automaton.state_count(), before);
    }

    #[test]
    fn prefix_of_longer_keyword_is_terminal_too() {
        let mut automaton = Automaton::new();
        automaton.insert("ab");
        automaton.insert("abc");

        let a = automaton.transition(Automaton::ROOT, 'a').unwrap();
        let b = automaton.transition(a, 'b').unwrap();
        let c = automaton.transition(b, 'c').unwrap();
        assert!(automaton.keyword_at(b).is_some());
        assert!(automaton.keyword_at(c).is_some());
    }
}
