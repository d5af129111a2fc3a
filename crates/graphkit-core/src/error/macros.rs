//! Error macros for graphkit

/// Macro for returning a malformed-graph error
#[macro_export]
macro_rules! bail_invalid_graph {
    ($($arg:tt)*) => {
        return Err($crate::error::GraphError::invalid_graph(format!($($arg)*)))
    };
}

/// Macro for returning usage errors
#[macro_export]
macro_rules! bail_usage {
    ($msg:expr) => {
        return Err($crate::error::GraphError::UsageError($msg.to_string()))
    };
}

/// Macro for rejecting a graph of the wrong kind
#[macro_export]
macro_rules! require_kind {
    ($graph:expr, $kind:expr, $algorithm:expr) => {
        if $graph.kind() != $kind {
            return Err($crate::error::GraphError::UnsupportedGraphKind {
                algorithm: $algorithm,
                expected: $kind.as_str(),
            });
        }
    };
}
