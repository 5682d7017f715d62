use reader_core::{update, Msg, ReaderState};

#[test]
fn update_is_noop() {
    let state = ReaderState::new();
    let (next, effects) = update(state.clone(), Msg::NoOp);

    assert_eq!(state, next);
    assert!(effects.is_empty());
}
