use sqlx::postgres::{PgPool, PgPoolOptions};

use crate::error::Result;

#[derive(Clone)]
pub struct Database {
    pool: PgPool,
}

impl Database {
    /// Set up the connection pool without opening a connection. The first
    /// request handler that checks a connection out pays the connect cost;
    /// startup itself does no network I/O. Only a malformed URL fails here.
    pub fn connect_lazy(database_url: &str) -> Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(5)
            .connect_lazy(database_url)?;

        Ok(Self { pool })
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Connections currently open in the pool. Zero until first use.
    pub fn pool_size(&self) -> u32 {
        self.pool.size()
    }
}
