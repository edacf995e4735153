use crate::ast::NodeKind;

/// The result of visiting a node (and, transitively, its
/// children).
///
/// `Ok(())` means every node reached from the visited node was
/// dispatched exactly once. `Err` carries a [`VisitInterrupt`]
/// describing why the traversal stopped early.
pub type VisitResult<E> = Result<(), VisitInterrupt<E>>;

/// Why a traversal stopped before visiting every reachable node.
///
/// An interrupt travels up through the handler chain on the
/// `Err` channel so that handlers can propagate it with `?`, but
/// the two variants are semantically distinct: [`Cancelled`] is
/// a cooperative "stopped" signal, not a failure, while
/// [`Failed`] wraps a handler's own domain error together with
/// the kind of the node being visited when it originated.
///
/// Either way, the stop guarantee is the same: every node
/// visited strictly before the stopping node, in document order,
/// already ran its handler; no handler runs after the stop.
///
/// [`Cancelled`]: VisitInterrupt::Cancelled
/// [`Failed`]: VisitInterrupt::Failed
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum VisitInterrupt<E> {
    /// Cooperative cancellation signalled by a handler.
    ///
    /// The engine never polls for cancellation between nodes:
    /// the context is the sole cancellation channel, and a
    /// visitor that wants prompt cancellation must check its
    /// signal in its own handlers (particularly on kinds with
    /// large child sequences, such as `Document`).
    #[error("GraphQL AST traversal was cancelled by the visitor")]
    Cancelled,

    /// A visitor handler failed.
    ///
    /// The engine does not catch or reinterpret handler
    /// failures; it ceases traversal immediately and surfaces
    /// the failure to the caller of [`visit`](crate::visit).
    #[error(
        "GraphQL AST visitor failed while visiting `{}` node",
        .node_kind.map_or("<undispatched>", NodeKind::as_str)
    )]
    Failed {
        /// The kind of the node whose handler originated the
        /// failure. Stamped by the innermost engine frame that
        /// dispatched the failing handler; `None` only while the
        /// failure has not yet passed through
        /// [`visit`](crate::visit).
        node_kind: Option<NodeKind>,
        /// The visitor's own error.
        source: E,
    },
}

impl<E> VisitInterrupt<E> {
    /// Wraps a handler's domain error. The failure-site node
    /// kind is stamped by the engine, so handlers never supply
    /// it themselves.
    pub fn failed(source: E) -> Self {
        VisitInterrupt::Failed {
            node_kind: None,
            source,
        }
    }

    /// True if the traversal stopped because a handler signalled
    /// cooperative cancellation ("stopped", not "failed").
    pub fn is_cancelled(&self) -> bool {
        matches!(self, VisitInterrupt::Cancelled)
    }

    /// The kind of the node being visited when a handler failed,
    /// or `None` for cancellations.
    pub fn failure_site(&self) -> Option<NodeKind> {
        match self {
            VisitInterrupt::Cancelled => None,
            VisitInterrupt::Failed { node_kind, .. } => *node_kind,
        }
    }
}

impl<E> From<E> for VisitInterrupt<E> {
    /// Lets handlers apply `?` directly to their own
    /// `Result<_, E>` values.
    fn from(source: E) -> Self {
        VisitInterrupt::failed(source)
    }
}
