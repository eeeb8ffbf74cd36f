use criterion::{criterion_group, criterion_main, Criterion};
use std::sync::Arc;

use service::administrator::AdministratorService;
use service::administrator::repository::mock::MockAdministratorRepository;
use service::administrator::domain::{LoginInput, NewAdministrator, Role};
use service::token::TokenService;

fn bench_login(c: &mut Criterion) {
    let svc = AdministratorService::new(Arc::new(MockAdministratorRepository::default()));
    let tokens = TokenService::new("secret", 24).unwrap();

    // pre-create the account outside of the benchmark using a tokio runtime
    let rt = tokio::runtime::Runtime::new().unwrap();
    rt.block_on(svc.create(NewAdministrator { email: "bench@example.com".into(), password: "Benchmark1".into(), role: Role::Admin }))
        .unwrap();
    let input = LoginInput { email: "bench@example.com".into(), password: "Benchmark1".into() };

    c.bench_function("administrator_login_and_issue", |b| {
        b.iter(|| {
            let admin = rt.block_on(svc.login(&input)).unwrap().unwrap();
            tokens.issue(&admin.email, admin.role).unwrap()
        });
    });
}

criterion_group!(benches, bench_login);
criterion_main!(benches);
