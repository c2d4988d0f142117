//! Votes, verdicts and the ballot that resolves them.
//!
//! Each rule component casts one [`Vote`] per proposal. The [`Ballot`]
//! collects them and [`Ballot::decide`] resolves the outcome:
//! - any deny wins, whatever the priority of competing allows;
//! - otherwise any allow permits the move, reporting the highest priority;
//! - otherwise nobody voted and the move is denied by default.
//!
//! Because deny dominates, the result does not depend on the order in which
//! votes are cast.

/// Strength of a vote. Higher values are more specific rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Priority(pub u8);

impl Priority {
    /// Used for the default denial when no rule voted.
    pub const DEFAULT: Priority = Priority(0);
    /// A general movement pattern matched.
    pub const PATTERN_MATCH: Priority = Priority(1);
    /// A narrower pattern matched, such as a pawn capture.
    pub const SPECIFIC_PATTERN: Priority = Priority(2);
    /// A rule objects to the move.
    pub const DISALLOWED: Priority = Priority(10);
}

/// Reason reported with the default denial.
pub const DEFAULT_DENY_REASON: &str = "No rule permits this move.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Vote {
    Abstain,
    Allow(Priority),
    Deny {
        priority: Priority,
        reason: &'static str,
    },
}

impl Vote {
    #[inline]
    pub fn deny(reason: &'static str) -> Self {
        Vote::Deny {
            priority: Priority::DISALLOWED,
            reason,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Verdict {
    #[default]
    Unset,
    Allowed(Priority),
    Denied {
        priority: Priority,
        reason: &'static str,
    },
}

impl Verdict {
    #[inline]
    pub fn is_permitted(&self) -> bool {
        matches!(self, Verdict::Allowed(_))
    }

    pub fn reason(&self) -> Option<&'static str> {
        match self {
            Verdict::Denied { reason, .. } => Some(*reason),
            _ => None,
        }
    }
}

/// Accumulates votes for one proposal.
#[derive(Debug, Clone, Default)]
pub struct Ballot {
    allow: Option<Priority>,
    deny: Option<(Priority, &'static str)>,
}

impl Ballot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn allow(&mut self, priority: Priority) {
        self.allow = Some(self.allow.map_or(priority, |p| p.max(priority)));
    }

    /// Records a denial. The strongest denial's reason is kept; ties keep the first.
    pub fn deny(&mut self, priority: Priority, reason: &'static str) {
        match self.deny {
            Some((current, _)) if current >= priority => {}
            _ => self.deny = Some((priority, reason)),
        }
    }

    pub fn cast(&mut self, vote: Vote) {
        match vote {
            Vote::Abstain => {}
            Vote::Allow(priority) => self.allow(priority),
            Vote::Deny { priority, reason } => self.deny(priority, reason),
        }
    }

    /// Outcome of the votes so far, `Unset` while nobody has voted.
    pub fn verdict(&self) -> Verdict {
        if let Some((priority, reason)) = self.deny {
            return Verdict::Denied { priority, reason };
        }
        match self.allow {
            Some(priority) => Verdict::Allowed(priority),
            None => Verdict::Unset,
        }
    }

    /// Final outcome, turning an unset ballot into the default denial.
    pub fn decide(&self) -> Verdict {
        match self.verdict() {
            Verdict::Unset => Verdict::Denied {
                priority: Priority::DEFAULT,
                reason: DEFAULT_DENY_REASON,
            },
            decided => decided,
        }
    }
}
