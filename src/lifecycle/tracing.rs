//! # Logging
//!
//! [`setup_tracing`] installs a compact `tracing-subscriber` formatter filtered
//! by `RUST_LOG`. Module paths are hidden; log lines carry structured fields
//! such as `order_id` and `estado` instead.
//!
//! ```bash
//! RUST_LOG=info cargo run     # status changes and actor lifecycle
//! RUST_LOG=debug cargo run    # every store request with its payload
//! ```
//!
//! With `RUST_LOG=info` a seller advancing an order looks like:
//!
//! ```text
//! INFO Actor started entity_type="Order"
//! INFO Created order_id=1 size=1
//! INFO advance:set_status: Status updated order_id=1 estado=Enviado
//! INFO advance: Status changed order_id=1 from=Procesando to=Enviado
//! ```

pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
