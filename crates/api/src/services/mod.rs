//! Request-scoped services used by middleware and handlers.

pub mod session;
