use eventdispatch_core::{Dispatcher, Propagation};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Barrier};
use std::thread;

const THREADS: usize = 8;
const PER_THREAD: usize = 250;

#[test]
fn test_concurrent_registration_loses_nothing() {
    let dispatcher: Arc<Dispatcher<usize>> = Arc::new(Dispatcher::new());
    let barrier = Arc::new(Barrier::new(THREADS * 2));
    let mut handles = Vec::new();

    for t in 0..THREADS {
        let d = dispatcher.clone();
        let b = barrier.clone();
        handles.push(thread::spawn(move || {
            b.wait();
            for i in 0..PER_THREAD {
                let name = if i % 2 == 0 { "metric.*" } else { "metric.tick" };
                d.on(name, move |_| Propagation::Continue);
                if i % 50 == 0 {
                    d.on(&format!("thread{t}.private"), |_| true);
                }
            }
        }));
    }

    // dispatch while registrations are in flight
    for _ in 0..THREADS {
        let d = dispatcher.clone();
        let b = barrier.clone();
        handles.push(thread::spawn(move || {
            b.wait();
            for i in 0..PER_THREAD {
                d.dispatch("metric.tick", &i);
            }
        }));
    }

    for handle in handles {
        handle.join().expect("worker thread panicked");
    }

    let total = THREADS * PER_THREAD;
    assert_eq!(dispatcher.callback_count("metric.*"), total / 2);
    assert_eq!(dispatcher.callback_count("metric.tick"), total / 2);
    assert_eq!(dispatcher.dispatch("metric.tick", &0).invoked, total);
    for t in 0..THREADS {
        assert_eq!(
            dispatcher.callback_count(&format!("thread{t}.private")),
            PER_THREAD / 50
        );
    }
}

#[test]
fn test_parallel_dispatch_counts() {
    let dispatcher: Arc<Dispatcher<u64>> = Arc::new(Dispatcher::new());
    let sum = Arc::new(AtomicUsize::new(0));
    let calls = Arc::new(AtomicUsize::new(0));

    let s = sum.clone();
    dispatcher.on("order.*", move |amount: &u64| {
        s.fetch_add(*amount as usize, Ordering::SeqCst);
        true
    });
    let c = calls.clone();
    dispatcher.on("order.placed", move |_| {
        c.fetch_add(1, Ordering::SeqCst);
        true
    });

    let handles: Vec<_> = (0..THREADS)
        .map(|_| {
            let d = dispatcher.clone();
            thread::spawn(move || {
                for _ in 0..PER_THREAD {
                    d.dispatch("order.placed", &2);
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().expect("dispatch thread panicked");
    }

    assert_eq!(calls.load(Ordering::SeqCst), THREADS * PER_THREAD);
    assert_eq!(sum.load(Ordering::SeqCst), THREADS * PER_THREAD * 2);
}
