//! Tests for roster loading
