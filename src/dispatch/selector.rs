//! Maps a parsed request onto one of the standard actions.

use crate::dispatch::error::Operation;
use crate::dispatch::request::Verb;

/// The standard actions every resource controller understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionKind {
    Create,
    List,
    Show,
    ShowEditForm,
    ShowNewForm,
    Update,
    Destroy,
    MethodNotAllowed,
}

impl ActionKind {
    /// Actions that change the store.
    pub fn is_write(self) -> bool {
        matches!(self, Self::Create | Self::Update | Self::Destroy)
    }

    /// The operation named in a failure message raised by this action.
    pub fn operation(self) -> Operation {
        match self {
            Self::Create => Operation::Create,
            Self::Update => Operation::Update,
            Self::Destroy => Operation::Delete,
            Self::List
            | Self::Show
            | Self::ShowEditForm
            | Self::ShowNewForm
            | Self::MethodNotAllowed => Operation::Retrieve,
        }
    }
}

/// Picks the action for a verb and its header segments.
///
/// Rules are tried in priority order; the first match wins. Extra segments are only
/// inspected for `GET`, so `POST /user/anything` is still a create.
pub fn select(verb: &Verb, segments: &[String]) -> ActionKind {
    match verb {
        Verb::Post => ActionKind::Create,
        Verb::Get => match segments {
            [] => ActionKind::List,
            [only] if only == "new" => ActionKind::ShowNewForm,
            [_] => ActionKind::Show,
            [_, sub] if sub == "edit" => ActionKind::ShowEditForm,
            _ => ActionKind::MethodNotAllowed,
        },
        Verb::Put => ActionKind::Update,
        Verb::Delete => ActionKind::Destroy,
        Verb::Other(_) => ActionKind::MethodNotAllowed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn select_for(verb: &str, segments: &[&str]) -> ActionKind {
        let segments: Vec<String> = segments.iter().map(|s| s.to_string()).collect();
        select(&Verb::parse(verb), &segments)
    }

    #[test]
    fn test_selection_table() {
        let cases = [
            ("POST", vec![], ActionKind::Create),
            ("POST", vec!["3"], ActionKind::Create),
            ("GET", vec![], ActionKind::List),
            ("GET", vec!["new"], ActionKind::ShowNewForm),
            ("GET", vec!["3"], ActionKind::Show),
            ("GET", vec!["abc"], ActionKind::Show),
            ("GET", vec!["3", "edit"], ActionKind::ShowEditForm),
            ("PUT", vec!["3"], ActionKind::Update),
            ("PUT", vec![], ActionKind::Update),
            ("DELETE", vec!["3"], ActionKind::Destroy),
        ];
        for (verb, segments, expected) in cases {
            assert_eq!(select_for(verb, &segments), expected, "{verb} {segments:?}");
        }
    }

    #[test]
    fn test_unmatched_combinations_are_method_not_allowed() {
        assert_eq!(select_for("PATCH", &["3"]), ActionKind::MethodNotAllowed);
        assert_eq!(select_for("get", &[]), ActionKind::MethodNotAllowed);
        assert_eq!(select_for("GET", &["3", "delete"]), ActionKind::MethodNotAllowed);
        assert_eq!(select_for("GET", &["3", "edit", "x"]), ActionKind::MethodNotAllowed);
    }

    #[test]
    fn test_new_wins_over_show() {
        assert_eq!(select_for("GET", &["new"]), ActionKind::ShowNewForm);
        assert_eq!(select_for("GET", &["New"]), ActionKind::Show);
    }

    #[test]
    fn test_operation_names() {
        assert_eq!(ActionKind::Destroy.operation(), Operation::Delete);
        assert_eq!(ActionKind::Show.operation(), Operation::Retrieve);
        assert!(ActionKind::Update.is_write());
        assert!(!ActionKind::List.is_write());
    }
}
