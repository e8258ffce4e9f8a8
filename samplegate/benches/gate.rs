use criterion::Throughput;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use samplegate::{Interval, Processor, RangeMode, SampleGate};

struct Sum {
    gate: SampleGate,
    sum: f64,
}

impl Processor for Sum {
    type Statistic = ();

    fn gate(&self) -> &SampleGate {
        &self.gate
    }

    fn gate_mut(&mut self) -> &mut SampleGate {
        &mut self.gate
    }

    fn update(&mut self, sample: Option<f64>) -> bool {
        match sample {
            Some(v) if self.gate.is_accepted(v) => {
                self.sum += v;
                true
            }
            _ => false,
        }
    }

    fn supported(&self) -> &[()] {
        &[()]
    }

    fn statistic(&self, _: ()) -> Option<f64> {
        Some(self.sum)
    }
}

fn gate(c: &mut Criterion) {
    let mut group = c.benchmark_group("gate");

    group.throughput(Throughput::Elements(1));

    let mut gate = SampleGate::new();

    group.bench_function("is_accepted (no ranges)", |b| {
        b.iter(|| gate.is_accepted(black_box(5.0)))
    });

    let mut gate = SampleGate::new();
    gate.add_range_with_mode(Interval::closed(0.0, 10.0), RangeMode::Included)
        .unwrap();

    group.bench_function("is_accepted (included)", |b| {
        b.iter(|| gate.is_accepted(black_box(5.0)))
    });
    group.bench_function("is_accepted (nan)", |b| {
        b.iter(|| gate.is_accepted(black_box(f64::NAN)))
    });
    group.bench_function("classify", |b| {
        b.iter(|| gate.classify(black_box(20.0)))
    });
}

fn processor(c: &mut Criterion) {
    let mut group = c.benchmark_group("processor");

    group.throughput(Throughput::Elements(1));

    let mut sum = Sum {
        gate: SampleGate::new(),
        sum: 0.0,
    };
    sum.gate_mut().add_range(Interval::less_than(0.0));

    group.bench_function("offer", |b| b.iter(|| sum.offer(black_box(1.0))));
}

criterion_group!(benches, gate, processor);
criterion_main!(benches);
