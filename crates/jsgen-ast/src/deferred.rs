//! Lazily built subtrees.
//!
//! A [`DeferredNode`] carries a builder closure instead of a finished subtree.
//! The generator calls [`crate::Node::force`] the first time it needs the
//! child's kind or text, which consumes the builder. An optional completion
//! callback survives the build as a [`TrackedNode`] and is invoked with the
//! written range once the subtree has been emitted.

use std::fmt;

use jsgen_common::SourceRange;

use crate::node::Node;

/// Produces the subtree of a deferred node.
pub type BuildFn = Box<dyn FnOnce() -> Node>;

/// Receives the range a tracked subtree occupied in the output.
pub type OnWritten = Box<dyn FnOnce(SourceRange)>;

/// A subtree that has not been built yet.
pub struct DeferredNode {
    builder: BuildFn,
    on_written: Option<OnWritten>,
}

impl DeferredNode {
    pub fn new(builder: impl FnOnce() -> Node + 'static) -> Self {
        DeferredNode {
            builder: Box::new(builder),
            on_written: None,
        }
    }

    /// Deferred node whose written range is reported to `on_written`.
    pub fn with_callback(
        builder: impl FnOnce() -> Node + 'static,
        on_written: impl FnOnce(SourceRange) + 'static,
    ) -> Self {
        DeferredNode {
            builder: Box::new(builder),
            on_written: Some(Box::new(on_written)),
        }
    }

    pub fn has_callback(&self) -> bool {
        self.on_written.is_some()
    }

    /// Run the builder. Consumes `self`, so a builder can never run twice.
    ///
    /// With a callback attached the result is a [`Node::Tracked`] wrapping the
    /// built subtree; otherwise the built subtree is returned as is.
    pub fn build(self) -> Node {
        let DeferredNode {
            builder,
            on_written,
        } = self;
        let node = builder();
        tracing::trace!(
            kind = ?node.kind(),
            tracked = on_written.is_some(),
            "built deferred node"
        );
        match on_written {
            Some(on_written) => Node::from(TrackedNode {
                node,
                on_written,
            }),
            None => node,
        }
    }
}

impl fmt::Debug for DeferredNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DeferredNode")
            .field("has_callback", &self.has_callback())
            .finish_non_exhaustive()
    }
}

/// A built subtree plus the callback that wants its written range.
pub struct TrackedNode {
    node: Node,
    on_written: OnWritten,
}

impl TrackedNode {
    pub fn new(node: impl Into<Node>, on_written: impl FnOnce(SourceRange) + 'static) -> Self {
        TrackedNode {
            node: node.into(),
            on_written: Box::new(on_written),
        }
    }

    pub fn node(&self) -> &Node {
        &self.node
    }

    pub fn node_mut(&mut self) -> &mut Node {
        &mut self.node
    }

    /// Split into the subtree and its callback; the caller owes exactly one
    /// call to the callback.
    pub fn into_parts(self) -> (Node, OnWritten) {
        (self.node, self.on_written)
    }
}

impl fmt::Debug for TrackedNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TrackedNode")
            .field("node", &self.node)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
#[path = "../tests/deferred.rs"]
mod tests;
