//! Shared helpers for the handler integration tests.
#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use actix_web::{web, App};
use async_trait::async_trait;
use clientes_api::config::Config;
use clientes_api::handlers::configure;
use clientes_api::models::Cliente;
use clientes_api::services::ClienteRepository;

/// In-memory stand-in for the `clientes` table.
///
/// Enforces `UNIQUE (suscriptor)` like the bundled migration and counts every
/// call so tests can assert that no query was issued.
#[derive(Default)]
pub struct InMemoryRepository {
    rows: Mutex<Vec<(u64, Cliente)>>,
    next_id: AtomicUsize,
    calls: AtomicUsize,
}

impl InMemoryRepository {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn len(&self) -> usize {
        self.rows.lock().expect("rows lock").len()
    }

    fn record_call(&self) {
        self.calls.fetch_add(1, Ordering::SeqCst);
    }
}

fn duplicate_entry(suscriptor: &str) -> sqlx::Error {
    sqlx::Error::Protocol(format!(
        "Duplicate entry '{}' for key 'uq_clientes_suscriptor'",
        suscriptor
    ))
}

#[async_trait]
impl ClienteRepository for InMemoryRepository {
    async fn insert(&self, cliente: &Cliente) -> Result<u64, sqlx::Error> {
        self.record_call();
        let mut rows = self.rows.lock().expect("rows lock");
        if let Some(key) = &cliente.suscriptor {
            if rows.iter().any(|(_, c)| c.suscriptor.as_ref() == Some(key)) {
                return Err(duplicate_entry(key));
            }
        }
        let id = self.next_id.fetch_add(1, Ordering::SeqCst) as u64 + 1;
        rows.push((id, cliente.clone()));
        Ok(id)
    }

    async fn update(&self, suscriptor: &str, cliente: &Cliente) -> Result<u64, sqlx::Error> {
        self.record_call();
        let mut rows = self.rows.lock().expect("rows lock");
        if let Some(new_key) = &cliente.suscriptor {
            let clash = rows.iter().any(|(_, c)| {
                c.suscriptor.as_deref() == Some(new_key.as_str()) && new_key != suscriptor
            });
            if clash {
                return Err(duplicate_entry(new_key));
            }
        }
        let mut affected = 0;
        for (_, row) in rows.iter_mut() {
            if row.suscriptor.as_deref() == Some(suscriptor) {
                *row = cliente.clone();
                affected += 1;
            }
        }
        Ok(affected)
    }

    async fn find_by_suscriptor(&self, suscriptor: &str) -> Result<Option<Cliente>, sqlx::Error> {
        self.record_call();
        let rows = self.rows.lock().expect("rows lock");
        Ok(rows
            .iter()
            .find(|(_, c)| c.suscriptor.as_deref() == Some(suscriptor))
            .map(|(_, c)| c.clone()))
    }

    async fn list_all(&self) -> Result<Vec<Cliente>, sqlx::Error> {
        self.record_call();
        let rows = self.rows.lock().expect("rows lock");
        Ok(rows.iter().map(|(_, c)| c.clone()).collect())
    }

    async fn count_by_suscriptor(&self, suscriptor: &str) -> Result<i64, sqlx::Error> {
        self.record_call();
        let rows = self.rows.lock().expect("rows lock");
        Ok(rows
            .iter()
            .filter(|(_, c)| c.suscriptor.as_deref() == Some(suscriptor))
            .count() as i64)
    }

    async fn ping(&self) -> Result<(), sqlx::Error> {
        Ok(())
    }
}

/// Repository whose every call fails as if the pool could not hand out a
/// connection.
pub struct FailingRepository;

#[async_trait]
impl ClienteRepository for FailingRepository {
    async fn insert(&self, _cliente: &Cliente) -> Result<u64, sqlx::Error> {
        Err(sqlx::Error::PoolTimedOut)
    }

    async fn update(&self, _suscriptor: &str, _cliente: &Cliente) -> Result<u64, sqlx::Error> {
        Err(sqlx::Error::PoolTimedOut)
    }

    async fn find_by_suscriptor(&self, _suscriptor: &str) -> Result<Option<Cliente>, sqlx::Error> {
        Err(sqlx::Error::PoolTimedOut)
    }

    async fn list_all(&self) -> Result<Vec<Cliente>, sqlx::Error> {
        Err(sqlx::Error::PoolTimedOut)
    }

    async fn count_by_suscriptor(&self, _suscriptor: &str) -> Result<i64, sqlx::Error> {
        Err(sqlx::Error::PoolTimedOut)
    }

    async fn ping(&self) -> Result<(), sqlx::Error> {
        Err(sqlx::Error::PoolClosed)
    }
}

pub fn test_config() -> Config {
    Config {
        database_url: "mysql://root@localhost/clientes_test".to_string(),
        host: "127.0.0.1".to_string(),
        port: 3009,
        db_max_connections: 20,
        db_acquire_timeout_secs: 30,
        run_migrations: false,
        public_base_url: "http://localhost:3009".to_string(),
    }
}

/// Helper to create a test app with every route wired to `repo`
pub fn create_test_app(
    repo: Arc<dyn ClienteRepository>,
) -> actix_web::App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(web::Data::from(repo))
        .app_data(web::Data::new(test_config()))
        .configure(configure)
}
