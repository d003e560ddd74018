//! Cost Queries and Schema Documentation
//!
//! This module provides:
//! - The five-query capability set shared by all priced items (`CostQueries`)
//! - A selector over those queries (`CostQuery`) and the component `CostBreakdown`
//! - Self-documenting schema for the queries (`schema_docs`)

pub mod queries;
pub mod schema_docs;

// Re-exports
pub use queries::{CostBreakdown, CostQueries, CostQuery};
pub use schema_docs::{
    get_cost_schema, CostExample, CostSchemaDoc, CostSchemaDocumented, QueryDoc,
};
