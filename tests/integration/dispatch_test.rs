//! Tokenize-and-dispatch integration tests.
//!
//! Uses a catalog shaped like a node administration console.

use pretty_assertions::assert_eq;
use verbsh::commands::{
    match_verbs, tokenize, tokens_to_string, Catalog, CommandRouter, CommandSpec,
    ResolutionPolicy, Token, TokenKind, VerbMatch,
};
use verbsh::error::ConsoleError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    Start,
    StartOracle,
    StopOracle,
    ShowState,
    ShowStateDuplicate,
}

fn node_catalog() -> Catalog<Action> {
    Catalog::builder()
        .register(CommandSpec::new("start", Action::Start))
        .register(
            CommandSpec::new("start oracle", Action::StartOracle).category("Oracle Commands"),
        )
        .register(CommandSpec::new("stop oracle", Action::StopOracle).category("Oracle Commands"))
        .register(CommandSpec::new("show state", Action::ShowState))
        .register(CommandSpec::new("show state", Action::ShowStateDuplicate))
        .build()
        .expect("catalog should build")
}

fn tokens(line: &str) -> Vec<Token> {
    tokenize(line).collect()
}

fn dispatch(line: &str) -> Option<(Action, String)> {
    let catalog = node_catalog();
    let router = CommandRouter::new(&catalog, ResolutionPolicy::Longest);
    let tokens = tokens(line);
    router
        .resolve(&tokens)
        .map(|d| (*d.descriptor.handler(), d.arguments_text()))
}

#[test]
fn test_tokenize_two_words() {
    let tokens = tokens("start oracle");
    let kinds: Vec<_> = tokens.iter().map(|t| (t.kind(), t.value())).collect();
    assert_eq!(
        kinds,
        vec![
            (TokenKind::PlainString, "start"),
            (TokenKind::Space, " "),
            (TokenKind::PlainString, "oracle"),
        ]
    );
}

#[test]
fn test_tokenize_quoted_phrase() {
    let tokens = tokens("\"start oracle\"");
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind(), TokenKind::QuotedString);
    assert_eq!(tokens[0].value(), "start oracle");
    assert!(tokens[0].requires_quotes());
}

#[test]
fn test_round_trip_without_embedded_quotes() {
    for line in [
        "start oracle",
        "   send  NEO  \"Alice Wallet\"  10 ",
        "import key \"L1 key\"",
        "a",
    ] {
        assert_eq!(tokens_to_string(&tokens(line)), line);
    }
}

#[test]
fn test_match_counts_tokens() {
    let descriptor = ["start", "oracle"];
    assert_eq!(
        match_verbs(&tokens("start oracle"), &descriptor),
        VerbMatch {
            matched: true,
            consumed: 3
        }
    );
    assert_eq!(match_verbs(&tokens("STOP"), &["start"]), VerbMatch::NONE);
    assert!(match_verbs(&tokens("\"start oracle\""), &descriptor).matched);
}

#[test]
fn test_match_leaves_argument_tail() {
    let tokens = tokens("start oracle extra arg");
    let result = match_verbs(&tokens, &["start", "oracle"]);
    assert!(result.matched);
    assert_eq!(tokens_to_string(&tokens[result.consumed..]), "extra arg");
}

#[test]
fn test_most_specific_command_wins() {
    assert_eq!(
        dispatch("Start Oracle now"),
        Some((Action::StartOracle, "now".to_string()))
    );
    assert_eq!(
        dispatch("start consensus"),
        Some((Action::Start, "consensus".to_string()))
    );
}

#[test]
fn test_quoted_command_dispatches() {
    assert_eq!(
        dispatch("\"stop oracle\""),
        Some((Action::StopOracle, String::new()))
    );
}

#[test]
fn test_duplicate_keys_are_deterministic() {
    for _ in 0..5 {
        assert_eq!(
            dispatch("show   state"),
            Some((Action::ShowState, String::new()))
        );
    }
}

#[test]
fn test_unknown_command_is_not_an_error() {
    assert_eq!(dispatch("open wallet w.json"), None);
}

#[test]
fn test_first_registered_policy() {
    let catalog = node_catalog();
    let router = CommandRouter::new(&catalog, ResolutionPolicy::First);
    let tokens = tokens("start oracle");
    let dispatch = router.resolve(&tokens).unwrap();
    assert_eq!(*dispatch.descriptor.handler(), Action::Start);
    assert_eq!(dispatch.arguments_text(), "oracle");
}

#[test]
fn test_empty_command_fails_at_build() {
    let err = Catalog::builder()
        .register(CommandSpec::new("start oracle", Action::StartOracle))
        .register(CommandSpec::from_verbs(Vec::<String>::new(), Action::Start))
        .build()
        .unwrap_err();
    assert!(matches!(err, ConsoleError::Catalog(_)));
}

#[test]
fn test_catalog_shared_across_threads() {
    let catalog = std::sync::Arc::new(node_catalog());
    let handles: Vec<_> = ["start oracle", "stop oracle", "show state"]
        .into_iter()
        .map(|line| {
            let catalog = std::sync::Arc::clone(&catalog);
            std::thread::spawn(move || {
                let router = CommandRouter::new(&catalog, ResolutionPolicy::Longest);
                let tokens: Vec<_> = tokenize(line).collect();
                router.resolve(&tokens).map(|d| d.descriptor.key().to_string())
            })
        })
        .collect();

    let keys: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(
        keys,
        vec![
            Some("start oracle".to_string()),
            Some("stop oracle".to_string()),
            Some("show state".to_string()),
        ]
    );
}
