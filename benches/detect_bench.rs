use criterion::{black_box, criterion_group, criterion_main, Criterion};

use phonecountry::PHONE_VALIDATOR;

use phonenumber as rlp;

/// Mix of complete, partial and local inputs, the way a phone field sees them.
fn setup_detection_data() -> Vec<&'static str> {
    vec![
        // Specific NANP member ahead of the +1 catch-alls
        "+1 (876) 555-1234",
        // Generic NANP number
        "+1 212 555 1234",
        // Shared +7
        "+7 (701) 123-45-67",
        "+7 999 123 45 67",
        "+44 20 8765 4321",
        "+20 101 234 5678",
        // Still being typed
        "+4",
        "+3519",
        // Only the local pass recognises these
        "8 (999) 123-45-67",
        "0 (10) 1234 5678",
    ]
}

fn detection_benchmark(c: &mut Criterion) {
    let inputs = setup_detection_data();
    // Compile every pattern before measuring.
    for input in &inputs {
        let _ = PHONE_VALIDATOR.detect_all_matches(input);
    }

    let mut group = c.benchmark_group("Detection Comparison");

    group.bench_function("phonecountry: detect_country()", |b| {
        b.iter(|| {
            for input in &inputs {
                let _ = PHONE_VALIDATOR.detect_country(black_box(input));
            }
        })
    });

    group.bench_function("phonecountry: detect_all_matches()", |b| {
        b.iter(|| {
            for input in &inputs {
                let _ = PHONE_VALIDATOR.detect_all_matches(black_box(input));
            }
        })
    });

    // Closest equivalent: parse without a default region and read the country.
    group.bench_function("rust-phonenumber: parse().country()", |b| {
        b.iter(|| {
            for input in &inputs {
                let _ = rlp::parse(None, black_box(input)).map(|number| number.country().id());
            }
        })
    });

    group.finish();
}

criterion_group!(benches, detection_benchmark);
criterion_main!(benches);
