//! # Simulator Tests
