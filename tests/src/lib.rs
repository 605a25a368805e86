//! Integration test crate for the keyline workspace.
