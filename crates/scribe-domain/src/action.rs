//! Action module - the closed set of supported transformations

use thiserror::Error;

/// Error returned when a wire string names no known action
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Unknown action: {0}")]
pub struct UnknownAction(pub String);

/// A transformation requested of the generative model
///
/// The set is closed: requests naming anything outside it are rejected
/// before any collaborator is called.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionKind {
    /// Condense the source text into a short summary
    Summarize,

    /// Produce a list of ideas seeded by the source text
    Brainstorm,

    /// Extract concrete action items from the source text
    ActionItems,

    /// Elaborate on the source text with more detail
    Expand,

    /// Rewrite the source text for clarity and structure
    Rewrite,

    /// Turn the source text into structured notes
    Notes,

    /// Produce a short quiz covering the source text
    Quiz,

    /// Answer a free-text question against the source text
    AskQuestion,

    /// Polish the prose without changing its meaning
    ImproveWriting,

    /// Say the same thing in a different voice
    Rephrase,
}

/// Every supported action, in wire order
pub const ALL_ACTIONS: [ActionKind; 10] = [
    ActionKind::Summarize,
    ActionKind::Brainstorm,
    ActionKind::ActionItems,
    ActionKind::Expand,
    ActionKind::Rewrite,
    ActionKind::Notes,
    ActionKind::Quiz,
    ActionKind::AskQuestion,
    ActionKind::ImproveWriting,
    ActionKind::Rephrase,
];

impl ActionKind {
    /// Get the snake_case wire name of this action
    pub fn as_str(&self) -> &'static str {
        match self {
            ActionKind::Summarize => "summarize",
            ActionKind::Brainstorm => "brainstorm",
            ActionKind::ActionItems => "action_items",
            ActionKind::Expand => "expand",
            ActionKind::Rewrite => "rewrite",
            ActionKind::Notes => "notes",
            ActionKind::Quiz => "quiz",
            ActionKind::AskQuestion => "ask_question",
            ActionKind::ImproveWriting => "improve_writing",
            ActionKind::Rephrase => "rephrase",
        }
    }

    /// Human-readable label, used for the appended header block
    pub fn label(&self) -> &'static str {
        match self {
            ActionKind::Summarize => "Summary",
            ActionKind::Brainstorm => "Brainstorm",
            ActionKind::ActionItems => "Action items",
            ActionKind::Expand => "Expanded text",
            ActionKind::Rewrite => "Rewrite",
            ActionKind::Notes => "Notes",
            ActionKind::Quiz => "Quiz",
            ActionKind::AskQuestion => "Answer",
            ActionKind::ImproveWriting => "Improved writing",
            ActionKind::Rephrase => "Rephrased text",
        }
    }

    /// Parse a wire name into an action
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "summarize" => Some(ActionKind::Summarize),
            "brainstorm" => Some(ActionKind::Brainstorm),
            "action_items" => Some(ActionKind::ActionItems),
            "expand" => Some(ActionKind::Expand),
            "rewrite" => Some(ActionKind::Rewrite),
            "notes" => Some(ActionKind::Notes),
            "quiz" => Some(ActionKind::Quiz),
            "ask_question" => Some(ActionKind::AskQuestion),
            "improve_writing" => Some(ActionKind::ImproveWriting),
            "rephrase" => Some(ActionKind::Rephrase),
            _ => None,
        }
    }
}

impl std::str::FromStr for ActionKind {
    type Err = UnknownAction;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| UnknownAction(s.to_string()))
    }
}

impl std::fmt::Display for ActionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_names_round_trip() {
        for action in ALL_ACTIONS {
            assert_eq!(ActionKind::parse(action.as_str()), Some(action));
        }
    }

    #[test]
    fn test_unknown_action_rejected() {
        let err = "bogus".parse::<ActionKind>().unwrap_err();
        assert_eq!(err, UnknownAction("bogus".to_string()));
    }

    #[test]
    fn test_parse_is_case_sensitive() {
        // Wire names are lowercase snake_case; anything else is rejected
        assert_eq!(ActionKind::parse("Summarize"), None);
        assert_eq!(ActionKind::parse("ACTION_ITEMS"), None);
    }

    #[test]
    fn test_labels_are_human_readable() {
        assert_eq!(ActionKind::ActionItems.label(), "Action items");
        assert_eq!(ActionKind::AskQuestion.label(), "Answer");
    }
}
