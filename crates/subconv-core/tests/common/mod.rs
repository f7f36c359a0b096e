//! Fixture media library shared by the integration tests.

pub mod library;
