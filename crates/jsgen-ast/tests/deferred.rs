use super::*;
use crate::node::NodeKind;
use jsgen_common::SourceLocation;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

#[test]
fn test_build_without_callback_returns_plain_node() {
    let node = DeferredNode::new(|| Node::id("a")).build();
    assert!(matches!(node, Node::Identifier(_)));
}

#[test]
fn test_build_with_callback_returns_tracked() {
    let deferred = DeferredNode::with_callback(|| Node::id("a"), |_| {});
    assert!(deferred.has_callback());
    let node = deferred.build();
    assert!(matches!(node, Node::Tracked(_)));
    assert_eq!(node.kind(), NodeKind::Identifier);
}

#[test]
fn test_builder_runs_only_on_build() {
    let calls = Rc::new(Cell::new(0));
    let counter = Rc::clone(&calls);
    let deferred = DeferredNode::new(move || {
        counter.set(counter.get() + 1);
        Node::null()
    });
    assert_eq!(calls.get(), 0);
    let _node = deferred.build();
    assert_eq!(calls.get(), 1);
}

#[test]
fn test_tracked_into_parts_hands_back_callback() {
    let seen = Rc::new(RefCell::new(None));
    let sink = Rc::clone(&seen);
    let tracked = TrackedNode::new(Node::this(), move |range| {
        *sink.borrow_mut() = Some(range);
    });
    let (node, on_written) = tracked.into_parts();
    assert_eq!(node.kind(), NodeKind::ThisExpression);

    let range = SourceRange::new(SourceLocation::new(1, 1), SourceLocation::new(1, 5));
    on_written(range);
    assert_eq!(*seen.borrow(), Some(range));
}

#[test]
fn test_debug_does_not_run_builder() {
    let deferred = DeferredNode::new(|| panic!("builder must not run"));
    let text = format!("{deferred:?}");
    assert!(text.starts_with("DeferredNode"));
}
