use bulwark::{Exception, catch, try_block};
use criterion::{Criterion, black_box, criterion_group, criterion_main};

fn bench_ok(c: &mut Criterion) {
    fn rust() {
        let _ = black_box(std::panic::catch_unwind(|| black_box(1u32)));
    }

    fn bulwark() {
        let _ = black_box(try_block(|| {
            black_box(1u32);
        }));
    }

    let mut group = c.benchmark_group("ok");
    group.bench_function("Rust", |b| b.iter(rust));
    group.bench_function("Bulwark", |b| b.iter(bulwark));
    group.finish();
}

fn bench_raise(c: &mut Criterion) {
    fn rust() {
        fn imp(n: u32) {
            let n = black_box(n);
            if n == 0 {
                std::panic::resume_unwind(Box::new(Exception::new("Hello, world!")));
            } else {
                imp(n - 1);
            }
        }
        let _ = black_box(std::panic::catch_unwind(|| imp(5)));
    }

    fn bulwark() {
        fn imp(n: u32) {
            let n = black_box(n);
            if n == 0 {
                Exception::new("Hello, world!").raise();
            } else {
                imp(n - 1);
            }
        }
        let _ = black_box(try_block(|| imp(5)));
    }

    let mut group = c.benchmark_group("raise");
    group.bench_function("Rust", |b| b.iter(rust));
    group.bench_function("Bulwark", |b| b.iter(bulwark));
    group.finish();
}

fn bench_rethrow(c: &mut Criterion) {
    fn bulwark() {
        fn imp(n: u32) {
            let n = black_box(n);
            if n == 0 {
                Exception::new("Hello, world!").raise();
            } else {
                match catch::<(), Exception>(|| imp(n - 1)) {
                    Ok(x) => x,
                    Err(ex) => Exception::with_name("Rethrown", ex.to_string()).raise(),
                }
            }
        }
        let _ = black_box(try_block(|| imp(5)));
    }

    let mut group = c.benchmark_group("rethrow");
    group.bench_function("Bulwark", |b| b.iter(bulwark));
    group.finish();
}

criterion_group!(benches, bench_ok, bench_raise, bench_rethrow);
criterion_main!(benches);
