//! Query modules: free functions over a borrowed connection.

pub mod assignment_ops;
pub mod dedup;
pub mod prediction_crud;
pub mod prediction_query;
