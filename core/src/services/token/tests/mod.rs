//! Tests for the token codec and the lifecycle manager.
