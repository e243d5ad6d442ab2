#[macro_use]
extern crate criterion;

extern crate contagion;

use criterion::Criterion;

use contagion::config::Config;
use contagion::simulation::Model;

fn bench(c: &mut Criterion) {
    let config = Config {
        cell_count: 50,
        infected_count: 10,
        immune_count: 5,
        seed: Some(1),
        ..Default::default()
    };
    c.bench_function("Model::tick", |b| {
        let mut model = Model::with_config(&config).expect("valid config");
        b.iter(|| model.tick())
    });
    c.bench_function("Model::check_contacts", |b| {
        let mut model = Model::with_config(&config).expect("valid config");
        b.iter(|| model.check_contacts())
    });
}

criterion_group!(benches, bench);
criterion_main!(benches);
