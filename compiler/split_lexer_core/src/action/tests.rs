use super::*;
use crate::tag::LexicalMode;

#[test]
fn plain_and_line_comment_have_no_effect() {
    for (action, kind) in [
        (Action::Plain, TokenKind::PlainContent),
        (Action::LineComment, TokenKind::LineComment),
        (Action::EmptyComment, TokenKind::BlockComment),
    ] {
        let mut state = ScanState::initial(0);
        assert_eq!(action.dispatch(&mut state), kind);
        assert_eq!(state, ScanState::initial(0), "{action:?} changed state");
    }
}

#[test]
fn open_block_enters_comment() {
    let mut state = ScanState::initial(0);
    assert_eq!(Action::OpenBlock.dispatch(&mut state), TokenKind::BlockComment);
    assert_eq!(state.mode(), LexicalMode::InBlockComment);
    assert_eq!(state.depth(), 1);
    assert_eq!(state.kind(), CommentKind::Block);
}

#[test]
fn open_doc_enters_doc_comment() {
    let mut state = ScanState::initial(0);
    assert_eq!(Action::OpenDoc.dispatch(&mut state), TokenKind::DocComment);
    assert_eq!(state.depth(), 1);
    assert_eq!(state.kind(), CommentKind::Doc);
}

#[test]
fn comment_pieces_take_current_kind() {
    let mut state = ScanState::in_comment(0, 1, CommentKind::Doc);
    assert_eq!(Action::CommentBody.dispatch(&mut state), TokenKind::DocComment);
    assert_eq!(Action::NestedOpen.dispatch(&mut state), TokenKind::DocComment);
    assert_eq!(state.depth(), 2);
    assert_eq!(Action::Close.dispatch(&mut state), TokenKind::DocComment);
    assert_eq!(state.depth(), 1);
    assert_eq!(Action::Close.dispatch(&mut state), TokenKind::DocComment);
    assert_eq!(state.mode(), LexicalMode::Initial);
    assert_eq!(state.kind(), CommentKind::Doc);
}

#[test]
fn only_effect_free_actions_merge() {
    assert!(Action::Plain.is_mergeable());
    assert!(Action::CommentBody.is_mergeable());
    for action in [
        Action::LineComment,
        Action::OpenBlock,
        Action::OpenDoc,
        Action::EmptyComment,
        Action::NestedOpen,
        Action::Close,
    ] {
        assert!(!action.is_mergeable(), "{action:?}");
    }
}
