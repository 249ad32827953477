use criterion::{black_box, criterion_group, criterion_main, Criterion};
use iot_env::{Env, IotEnv};

fn bench_random_episode(c: &mut Criterion) {
    let mut env = IotEnv::with_seed(1);
    let mut policy = fastrand::Rng::with_seed(2);
    c.bench_function("iot_random_episode", |b| {
        b.iter(|| {
            env.reset();
            let mut total = 0.0;
            for _ in 0..256 {
                let (_, reward, done) = env.step(policy.usize(..6)).unwrap();
                total += reward;
                if done {
                    break;
                }
            }
            black_box(total)
        });
    });
}

fn bench_single_step(c: &mut Criterion) {
    let mut env = IotEnv::with_seed(3);
    c.bench_function("iot_recharge_step", |b| {
        env.reset_to_row(13).unwrap();
        b.iter(|| black_box(env.step(black_box(0)).unwrap()));
    });
}

criterion_group!(benches, bench_random_episode, bench_single_step);
criterion_main!(benches);
