//! Persistence for client records.
//!
//! Handlers depend on the [`ClienteRepository`] trait and receive it as
//! `web::Data<dyn ClienteRepository>`; production wires in
//! [`MySqlClienteRepository`], which runs one parameterized statement per call
//! on a pooled connection.

use async_trait::async_trait;
use sqlx::mysql::MySqlPool;

use crate::db::check_connection;
use crate::models::Cliente;

/// Storage operations behind the clientes endpoints.
///
/// Each method is a single round trip. No method retries on failure.
#[async_trait]
pub trait ClienteRepository: Send + Sync {
    /// Inserts a new record and returns the generated row id.
    async fn insert(&self, cliente: &Cliente) -> Result<u64, sqlx::Error>;

    /// Overwrites every field (including `suscriptor`) of the rows matching
    /// `suscriptor` and returns the number of affected rows.
    async fn update(&self, suscriptor: &str, cliente: &Cliente) -> Result<u64, sqlx::Error>;

    /// Returns the first record with the given subscriber number.
    async fn find_by_suscriptor(&self, suscriptor: &str) -> Result<Option<Cliente>, sqlx::Error>;

    /// Returns every record, unpaginated.
    async fn list_all(&self) -> Result<Vec<Cliente>, sqlx::Error>;

    /// Counts records with the given subscriber number.
    async fn count_by_suscriptor(&self, suscriptor: &str) -> Result<i64, sqlx::Error>;

    /// Checks that the store is reachable.
    async fn ping(&self) -> Result<(), sqlx::Error>;
}

/// MySQL-backed repository over the shared connection pool.
#[derive(Clone)]
pub struct MySqlClienteRepository {
    pool: MySqlPool,
}

impl MySqlClienteRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

const SELECT_COLUMNS: &str = r#"
    SELECT suscriptor, nombreCompleto, telefono1, telefono2, telefono3, plan,
           colilla, tap, nap, mac, sn, ip, direccion, ubicacion
    FROM clientes
"#;

#[async_trait]
impl ClienteRepository for MySqlClienteRepository {
    async fn insert(&self, cliente: &Cliente) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            r#"
            INSERT INTO clientes (suscriptor, nombreCompleto, telefono1, telefono2, telefono3,
                                  plan, colilla, tap, nap, mac, sn, ip, direccion, ubicacion)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&cliente.suscriptor)
        .bind(&cliente.nombre_completo)
        .bind(&cliente.telefono1)
        .bind(&cliente.telefono2)
        .bind(&cliente.telefono3)
        .bind(&cliente.plan)
        .bind(&cliente.colilla)
        .bind(&cliente.tap)
        .bind(&cliente.nap)
        .bind(&cliente.mac)
        .bind(&cliente.sn)
        .bind(&cliente.ip)
        .bind(&cliente.direccion)
        .bind(&cliente.ubicacion)
        .execute(&self.pool)
        .await?;

        Ok(result.last_insert_id())
    }

    async fn update(&self, suscriptor: &str, cliente: &Cliente) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            r#"
            UPDATE clientes
            SET suscriptor = ?,
                nombreCompleto = ?,
                telefono1 = ?,
                telefono2 = ?,
                telefono3 = ?,
                plan = ?,
                colilla = ?,
                tap = ?,
                nap = ?,
                mac = ?,
                sn = ?,
                ip = ?,
                direccion = ?,
                ubicacion = ?
            WHERE suscriptor = ?
            "#,
        )
        .bind(&cliente.suscriptor)
        .bind(&cliente.nombre_completo)
        .bind(&cliente.telefono1)
        .bind(&cliente.telefono2)
        .bind(&cliente.telefono3)
        .bind(&cliente.plan)
        .bind(&cliente.colilla)
        .bind(&cliente.tap)
        .bind(&cliente.nap)
        .bind(&cliente.mac)
        .bind(&cliente.sn)
        .bind(&cliente.ip)
        .bind(&cliente.direccion)
        .bind(&cliente.ubicacion)
        .bind(suscriptor)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }

    async fn find_by_suscriptor(&self, suscriptor: &str) -> Result<Option<Cliente>, sqlx::Error> {
        let query = format!("{} WHERE suscriptor = ? LIMIT 1", SELECT_COLUMNS);

        sqlx::query_as::<_, Cliente>(&query)
            .bind(suscriptor)
            .fetch_optional(&self.pool)
            .await
    }

    async fn list_all(&self) -> Result<Vec<Cliente>, sqlx::Error> {
        sqlx::query_as::<_, Cliente>(SELECT_COLUMNS)
            .fetch_all(&self.pool)
            .await
    }

    async fn count_by_suscriptor(&self, suscriptor: &str) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM clientes WHERE suscriptor = ?")
            .bind(suscriptor)
            .fetch_one(&self.pool)
            .await
    }

    async fn ping(&self) -> Result<(), sqlx::Error> {
        check_connection(&self.pool).await
    }
}
