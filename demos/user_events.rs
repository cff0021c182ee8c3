//! Wires logging and a dispatcher together for a small user-account flow.
//!
//! Run with `RUST_LOG=eventdispatch_core=trace cargo run --example user_events`.

use eventdispatch::{init_logging, AnyDispatcher, AnyPayload, Propagation};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

#[derive(Debug)]
struct UserCreated {
    id: u64,
    name: String,
}

#[derive(Debug)]
struct UserDeleted {
    id: u64,
}

fn main() -> anyhow::Result<()> {
    init_logging()?;

    let dispatcher = AnyDispatcher::new();
    let audited = Arc::new(AtomicUsize::new(0));

    let a = audited.clone();
    dispatcher.on("user.*", move |_: &AnyPayload| {
        a.fetch_add(1, Ordering::SeqCst);
        Propagation::Continue
    });

    dispatcher.on("user.created", |ev: &AnyPayload| {
        if let Some(ev) = ev.downcast_ref::<UserCreated>() {
            tracing::info!(id = ev.id, name = %ev.name, "Welcome mail queued");
        }
        true
    });

    dispatcher.try_on("user.deleted", |ev: &AnyPayload| {
        match ev.downcast_ref::<UserDeleted>() {
            Some(ev) if ev.id == 0 => {
                tracing::warn!("Refusing to delete the root user");
                Propagation::Stop
            }
            _ => Propagation::Continue,
        }
    })?;

    dispatcher.dispatch(
        "user.created",
        &UserCreated {
            id: 42,
            name: "ada".to_string(),
        },
    );
    dispatcher.dispatch("user.deleted", &UserDeleted { id: 0 });
    let outcome = dispatcher.dispatch("billing.invoice", &());

    tracing::info!(
        audited = audited.load(Ordering::SeqCst),
        unmatched = outcome.is_unmatched(),
        "Done"
    );
    Ok(())
}
