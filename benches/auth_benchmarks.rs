//! Performance benchmarks for the authentication core
//!
//! Measures the hashing and token hot paths: Argon2 hash/verify dominate
//! login cost, while decode/validate sit on every protected request.

use coursegate::auth::password::{hash_password, verify_password};
use coursegate::auth::{RevocationSet, TokenService};
use coursegate::config::AuthConfig;
use coursegate::domain::{Department, Role, User};
use coursegate::storage::{MemoryUserStore, UserStore};
use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;
use std::sync::Arc;
use tokio::runtime::Runtime;
use uuid::Uuid;

fn bench_user(password_hash: String) -> User {
    User {
        id: Uuid::new_v4(),
        username: "bench-user".to_string(),
        password_hash,
        roles: vec![Role::Administrator],
        department: Department::Sales,
    }
}

fn bench_service(rt: &Runtime, user: &User) -> TokenService {
    let store = Arc::new(MemoryUserStore::new());
    rt.block_on(store.insert(user.clone())).unwrap();

    let config = AuthConfig {
        jwt_secret: "bench-secret-key".to_string(),
        token_ttl_secs: 3600,
    };
    TokenService::new(&config, store, Arc::new(RevocationSet::new()))
}

/// Benchmark password hashing and verification
fn bench_password_hashing(c: &mut Criterion) {
    let mut group = c.benchmark_group("password_hashing");
    // Argon2 is deliberately slow; keep the sample count down.
    group.sample_size(10);

    group.bench_function("hash", |b| {
        b.iter(|| black_box(hash_password("correct horse battery staple").unwrap()));
    });

    let hash = hash_password("correct horse battery staple").unwrap();
    group.bench_function("verify", |b| {
        b.iter(|| black_box(verify_password("correct horse battery staple", &hash).unwrap()));
    });

    group.finish();
}

/// Benchmark token issue, decode, and full validation
fn bench_token_operations(c: &mut Criterion) {
    let rt = Runtime::new().unwrap();
    let user = bench_user("$argon2id$bench-hash".to_string());
    let service = bench_service(&rt, &user);
    let token = service.issue(&user).unwrap();

    let mut group = c.benchmark_group("token_operations");

    group.bench_function("issue", |b| {
        b.iter(|| black_box(service.issue(&user).unwrap()));
    });

    group.bench_function("decode", |b| {
        b.iter(|| black_box(service.decode(&token).unwrap()));
    });

    group.bench_function("validate", |b| {
        b.iter(|| rt.block_on(async { black_box(service.validate(&token).await.unwrap()) }));
    });

    group.finish();
}

criterion_group!(benches, bench_password_hashing, bench_token_operations);
criterion_main!(benches);
