//! Integration tests for Layer 1: Storage
//!
//! Tests for the variable store: typed values, index allocation and reuse,
//! enumeration bounds, and owner departure.

mod indices;
mod owners;
mod variables;
