//! Integration test suite.
//!
//! Every test that touches the database is `#[ignore]`d by default and
//! expects a PostgreSQL instance reachable through the URL in
//! `tests/fixtures/test_config.toml`. Run them with `cargo test -- --ignored`.

mod helpers;

mod auth_test;
mod catalog_test;
mod chat_test;
mod user_test;
