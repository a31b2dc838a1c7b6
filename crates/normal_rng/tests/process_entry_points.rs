//! Integration tests for the process-wide entry points.
//!
//! Each integration test binary is its own process, so the seed observed
//! here was set by these tests alone.

use normal_rng::process::{generate_many, generate_one, process_seed, random_bm};
use normal_rng::{NormalError, Request};

#[test]
fn test_single_and_batch_requests() {
    let mut single = f64::NAN;
    random_bm(Request::Single(&mut single)).unwrap();
    assert!(single.is_finite());

    let mut buffer = [f64::NAN; 12];
    random_bm(Request::Batch {
        output: &mut buffer,
        count: 10,
    })
    .unwrap();
    assert!(buffer[..10].iter().all(|v| v.is_finite()));
    assert!(buffer[10..].iter().all(|v| v.is_nan()));
}

#[test]
fn test_seed_fixed_for_process_lifetime() {
    let _ = generate_one().unwrap();
    let seed = process_seed().expect("seeded after first draw");

    let handles: Vec<_> = (0..4)
        .map(|_| std::thread::spawn(|| generate_many(1000).unwrap()))
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap().len(), 1000);
    }

    assert_eq!(process_seed(), Some(seed));
}

#[test]
fn test_invalid_requests_rejected() {
    assert!(matches!(
        generate_many(0),
        Err(NormalError::InvalidArgument { name: "count", .. })
    ));

    let mut short = [1.0; 2];
    let result = random_bm(Request::Batch {
        output: &mut short,
        count: 3,
    });
    assert!(result.is_err());
    assert_eq!(short, [1.0; 2]);
}

#[test]
fn test_oversized_count_leaves_generator_usable() {
    assert!(matches!(
        generate_many(usize::MAX / 8 + 1),
        Err(NormalError::InvalidArgument { name: "count", .. })
    ));
    assert_eq!(generate_many(4).unwrap().len(), 4);
}
