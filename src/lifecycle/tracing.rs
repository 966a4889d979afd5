//! # Observability & Tracing
//!
//! [`setup_tracing`] installs a compact `tracing-subscriber` formatter filtered by
//! `RUST_LOG`. Module paths are hidden (`with_target(false)`); the store actors tag
//! their lines with `entity_type` instead.
//!
//! ```bash
//! # One line per dispatch plus store writes
//! RUST_LOG=info cargo run
//!
//! # Selected actions, client calls and loaded templates
//! RUST_LOG=debug cargo run
//!
//! # Only the router
//! RUST_LOG=resource_dispatch::dispatch=debug cargo run
//! ```
//!
//! ## What Gets Traced
//!
//! - **Dispatch**: a `dispatch` span per request carrying `verb` and `resource`, the
//!   selected action, and the final `status`
//! - **Failures**: rejected requests at `warn`, internal failures and panicked actions
//!   at `error`; the client only ever sees the generic message for the latter
//! - **Stores**: startup, `Created` / `Updated` / `Deleted` with `%id` and `size`, and
//!   shutdown with the final record count
//! - **Clients**: each call is an instrumented span, so store lines nest under the
//!   dispatch that caused them
//!
//! With `RUST_LOG=info`, a create looks like:
//!
//! ```text
//! INFO dispatch{verb=POST resource="user"}: Created entity_type="User" id=1 size=1
//! INFO dispatch{verb=POST resource="user"}: Dispatched status=200
//! ```
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
