//! Tests for #[derive(Action)] macro

use dexter_macros::Action;

#[derive(Action, Clone, Debug, PartialEq)]
enum BrowserAction {
    #[intent]
    Refresh,

    #[intent]
    Open {
        slug: String,
    },

    #[intent]
    Pick {
        slug: Option<String>,
    },

    #[completion]
    Refreshed {
        entries: Vec<String>,
    },

    #[completion]
    RefreshFailed {
        message: String,
    },

    #[completion]
    Opened(String),

    Tick,
}

#[test]
fn test_is_intent() {
    let action = BrowserAction::Open {
        slug: "pikachu".to_string(),
    };
    assert!(action.is_intent());
    assert!(!action.is_completion());
}

#[test]
fn test_is_completion() {
    let action = BrowserAction::Refreshed {
        entries: vec!["bulbasaur".to_string()],
    };
    assert!(!action.is_intent());
    assert!(action.is_completion());
}

#[test]
fn test_unit_intent() {
    let action = BrowserAction::Refresh;
    assert!(action.is_intent());
    assert!(!action.is_completion());
}

#[test]
fn test_tuple_completion() {
    let action = BrowserAction::Opened("charmander".to_string());
    assert!(action.is_completion());
    assert!(!action.is_intent());
}

#[test]
fn test_unmarked_variant_is_neither() {
    let action = BrowserAction::Tick;
    assert!(!action.is_intent());
    assert!(!action.is_completion());
}

#[test]
fn test_all_intents_identified() {
    let intents = vec![
        BrowserAction::Refresh,
        BrowserAction::Open {
            slug: "squirtle".to_string(),
        },
        BrowserAction::Pick { slug: None },
    ];

    for intent in intents {
        assert!(intent.is_intent(), "Expected intent: {intent:?}");
        assert!(!intent.is_completion(), "Should not be completion: {intent:?}");
    }
}

#[test]
fn test_all_completions_identified() {
    let completions = vec![
        BrowserAction::Refreshed { entries: vec![] },
        BrowserAction::RefreshFailed {
            message: "Network error".to_string(),
        },
        BrowserAction::Opened("eevee".to_string()),
    ];

    for completion in completions {
        assert!(completion.is_completion(), "Expected completion: {completion:?}");
        assert!(!completion.is_intent(), "Should not be intent: {completion:?}");
    }
}

#[test]
fn test_label_names_variant() {
    let labels = vec![
        (BrowserAction::Refresh, "Refresh"),
        (
            BrowserAction::Open {
                slug: "ditto".to_string(),
            },
            "Open",
        ),
        (BrowserAction::Refreshed { entries: vec![] }, "Refreshed"),
        (
            BrowserAction::RefreshFailed {
                message: "Network error".to_string(),
            },
            "RefreshFailed",
        ),
        (BrowserAction::Opened("mew".to_string()), "Opened"),
        (BrowserAction::Tick, "Tick"),
    ];

    for (action, expected) in labels {
        assert_eq!(action.label(), expected);
    }
}
