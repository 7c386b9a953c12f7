//! Error macros for supergraph

/// Macro for creating invalid value errors
#[macro_export]
macro_rules! bail_invalid {
    ($context:expr, $value:expr) => {
        return Err($crate::error::GraphError::invalid_value($context, $value))
    };
}

/// Macro for creating not-found errors
#[macro_export]
macro_rules! bail_not_found {
    ($context:expr, $value:expr) => {
        return Err($crate::error::GraphError::not_found($context, $value))
    };
}
