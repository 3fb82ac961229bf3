//! The node container.
//!
//! [`Node`] is a closed tagged union over every payload in [`crate::nodes`].
//! Kind identification is a plain match on the tag, so callers can ask for a
//! child's [`NodeKind`] before deciding how to print it without touching the
//! payload.
//!
//! Two wrapper variants sit outside the payload catalog:
//! - [`Node::Deferred`] holds a builder that has not run yet (see
//!   [`crate::deferred`]). Call [`Node::force`] before inspecting it.
//! - [`Node::Tracked`] holds an already-built node plus a completion callback.
//!   It is transparent to [`Node::kind`] and [`Node::downcast_ref`].

use std::fmt;

use crate::deferred::{DeferredNode, TrackedNode};
use crate::nodes::*;

/// Implemented by every node payload.
pub trait AstNode: Sized {
    const KIND: NodeKind;

    fn from_node(node: &Node) -> Option<&Self>;
    fn from_node_mut(node: &mut Node) -> Option<&mut Self>;
}

macro_rules! define_nodes {
    ($($name:ident),* $(,)?) => {
        /// Kind tag of a [`Node`].
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum NodeKind {
            $($name,)*
            /// An unbuilt deferred subtree.
            Deferred,
        }

        impl NodeKind {
            /// Every concrete payload kind (excludes [`NodeKind::Deferred`]).
            pub const ALL: &'static [NodeKind] = &[$(NodeKind::$name,)*];
        }

        /// A single AST node; owns all of its children.
        pub enum Node {
            $($name(Box<$name>),)*
            Deferred(Box<DeferredNode>),
            Tracked(Box<TrackedNode>),
        }

        impl Node {
            /// Kind of the concrete payload. Tracked wrappers report the kind
            /// of the node they wrap; unbuilt deferred nodes report
            /// [`NodeKind::Deferred`].
            pub fn kind(&self) -> NodeKind {
                match self {
                    $(Node::$name(_) => NodeKind::$name,)*
                    Node::Deferred(_) => NodeKind::Deferred,
                    Node::Tracked(tracked) => tracked.node().kind(),
                }
            }
        }

        impl fmt::Debug for Node {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                match self {
                    $(Node::$name(inner) => fmt::Debug::fmt(inner, f),)*
                    Node::Deferred(inner) => fmt::Debug::fmt(inner, f),
                    Node::Tracked(inner) => fmt::Debug::fmt(inner, f),
                }
            }
        }

        $(
            impl AstNode for $name {
                const KIND: NodeKind = NodeKind::$name;

                fn from_node(node: &Node) -> Option<&Self> {
                    match node {
                        Node::$name(inner) => Some(&**inner),
                        Node::Tracked(tracked) => Self::from_node(tracked.node()),
                        _ => None,
                    }
                }

                fn from_node_mut(node: &mut Node) -> Option<&mut Self> {
                    match node {
                        Node::$name(inner) => Some(&mut **inner),
                        Node::Tracked(tracked) => Self::from_node_mut(tracked.node_mut()),
                        _ => None,
                    }
                }
            }

            impl From<$name> for Node {
                fn from(payload: $name) -> Self {
                    Node::$name(Box::new(payload))
                }
            }
        )*
    };
}

define_nodes! {
    // Structural
    Program,
    Super,
    MemberIdentifier,
    Property,
    SwitchCase,
    CatchClause,
    VariableDeclarator,
    TemplateElement,
    MethodDefinition,
    // Statements
    EmptyStatement,
    BlockStatement,
    ExpressionStatement,
    IfStatement,
    LabeledStatement,
    BreakStatement,
    ContinueStatement,
    WithStatement,
    SwitchStatement,
    ReturnStatement,
    ThrowStatement,
    TryStatement,
    WhileStatement,
    DoWhileStatement,
    ForStatement,
    ForInStatement,
    ForOfStatement,
    DebuggerStatement,
    VariableDeclaration,
    FunctionDeclaration,
    ClassDeclaration,
    // Expressions
    ThisExpression,
    ArrayExpression,
    ObjectExpression,
    FunctionExpression,
    ArrowFunctionExpression,
    ClassExpression,
    SequenceExpression,
    UnaryExpression,
    BinaryExpression,
    AssignmentExpression,
    UpdateExpression,
    LogicalExpression,
    ConditionalExpression,
    CallExpression,
    NewExpression,
    MemberExpression,
    YieldExpression,
    AwaitExpression,
    TemplateLiteral,
    TaggedTemplateExpression,
    MetaProperty,
    // Patterns
    Identifier,
    ArrayPattern,
    ObjectPattern,
    AssignmentPattern,
    RestElement,
    SpreadElement,
    // Literals
    NullLiteral,
    BoolLiteral,
    NumberLiteral,
    StringLiteral,
    RegExpLiteral,
    RawLiteral,
}

impl From<DeferredNode> for Node {
    fn from(deferred: DeferredNode) -> Self {
        Node::Deferred(Box::new(deferred))
    }
}

impl From<TrackedNode> for Node {
    fn from(tracked: TrackedNode) -> Self {
        Node::Tracked(Box::new(tracked))
    }
}

impl Node {
    /// Whether the (resolved) payload is a `T`.
    pub fn is<T: AstNode>(&self) -> bool {
        self.kind() == T::KIND
    }

    /// Read-only view of the payload, seeing through tracked wrappers.
    pub fn downcast_ref<T: AstNode>(&self) -> Option<&T> {
        T::from_node(self)
    }

    pub fn downcast_mut<T: AstNode>(&mut self) -> Option<&mut T> {
        T::from_node_mut(self)
    }

    /// Build any deferred wrapper in place.
    ///
    /// Each builder runs at most once: it is consumed when the deferred node is
    /// replaced by its result. Builders that return another deferred node are
    /// resolved until a concrete (possibly tracked) node remains.
    pub fn force(&mut self) {
        while matches!(self, Node::Deferred(_)) {
            // Placeholder while the builder runs; EmptyStatement is zero-sized.
            let taken = std::mem::replace(self, Node::from(EmptyStatement));
            if let Node::Deferred(deferred) = taken {
                *self = deferred.build();
            }
        }
        if let Node::Tracked(tracked) = self {
            tracked.node_mut().force();
        }
    }

    /// Kind after building any deferred wrapper.
    pub fn resolved_kind(&mut self) -> NodeKind {
        self.force();
        self.kind()
    }

    /// True for statement and declaration kinds.
    pub fn is_statement(&self) -> bool {
        self.kind().is_statement()
    }
}

impl NodeKind {
    pub fn is_statement(self) -> bool {
        matches!(
            self,
            NodeKind::EmptyStatement
                | NodeKind::BlockStatement
                | NodeKind::ExpressionStatement
                | NodeKind::IfStatement
                | NodeKind::LabeledStatement
                | NodeKind::BreakStatement
                | NodeKind::ContinueStatement
                | NodeKind::WithStatement
                | NodeKind::SwitchStatement
                | NodeKind::ReturnStatement
                | NodeKind::ThrowStatement
                | NodeKind::TryStatement
                | NodeKind::WhileStatement
                | NodeKind::DoWhileStatement
                | NodeKind::ForStatement
                | NodeKind::ForInStatement
                | NodeKind::ForOfStatement
                | NodeKind::DebuggerStatement
                | NodeKind::VariableDeclaration
                | NodeKind::FunctionDeclaration
                | NodeKind::ClassDeclaration
        )
    }
}

#[cfg(test)]
#[path = "../tests/node.rs"]
mod tests;
