//! Integration tests for Layer 2: Host
//!
//! Tests for the native call surface and the plugin lifecycle.

mod lifecycle;
