use async_trait::async_trait;
use sqlx::{PgPool, Postgres, QueryBuilder};

use crate::core::error::{AppError, Result};
use crate::features::ufs::models::{NovaUf, Uf, UfFiltros};

/// Record access for `tb_uf`
#[async_trait]
pub trait UfRepository: Send + Sync {
    async fn find_by_id(&self, codigo_uf: i64) -> Result<Option<Uf>>;
    async fn find_by_nome(&self, nome: &str) -> Result<Option<Uf>>;
    async fn find_by_sigla(&self, sigla: &str) -> Result<Option<Uf>>;
    async fn find_by_status(&self, status: i32) -> Result<Vec<Uf>>;
    async fn find_all(&self) -> Result<Vec<Uf>>;
    async fn find_by_filters(&self, filtros: &UfFiltros) -> Result<Vec<Uf>>;
    /// Takes the next value of `sequence_uf` and stores sigla/nome uppercased
    async fn insert(&self, nova: NovaUf) -> Result<Uf>;
    async fn update(&self, uf: &Uf) -> Result<()>;
}

pub struct PgUfRepository {
    pool: PgPool,
}

impl PgUfRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UfRepository for PgUfRepository {
    async fn find_by_id(&self, codigo_uf: i64) -> Result<Option<Uf>> {
        sqlx::query_as::<_, Uf>(
            r#"
            SELECT codigo_uf, sigla, nome, status
            FROM tb_uf
            WHERE codigo_uf = $1
            "#,
        )
        .bind(codigo_uf)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to fetch UF by id {}: {:?}", codigo_uf, e);
            AppError::Database(e)
        })
    }

    async fn find_by_nome(&self, nome: &str) -> Result<Option<Uf>> {
        sqlx::query_as::<_, Uf>(
            r#"
            SELECT codigo_uf, sigla, nome, status
            FROM tb_uf
            WHERE nome = $1
            ORDER BY codigo_uf DESC
            LIMIT 1
            "#,
        )
        .bind(nome.trim().to_uppercase())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to fetch UF by nome {}: {:?}", nome, e);
            AppError::Database(e)
        })
    }

    async fn find_by_sigla(&self, sigla: &str) -> Result<Option<Uf>> {
        sqlx::query_as::<_, Uf>(
            r#"
            SELECT codigo_uf, sigla, nome, status
            FROM tb_uf
            WHERE sigla = $1
            ORDER BY codigo_uf DESC
            LIMIT 1
            "#,
        )
        .bind(sigla.trim().to_uppercase())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to fetch UF by sigla {}: {:?}", sigla, e);
            AppError::Database(e)
        })
    }

    async fn find_by_status(&self, status: i32) -> Result<Vec<Uf>> {
        sqlx::query_as::<_, Uf>(
            r#"
            SELECT codigo_uf, sigla, nome, status
            FROM tb_uf
            WHERE status = $1
            ORDER BY codigo_uf DESC
            "#,
        )
        .bind(status)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to fetch UFs by status {}: {:?}", status, e);
            AppError::Database(e)
        })
    }

    async fn find_all(&self) -> Result<Vec<Uf>> {
        sqlx::query_as::<_, Uf>(
            r#"
            SELECT codigo_uf, sigla, nome, status
            FROM tb_uf
            ORDER BY codigo_uf DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list UFs: {:?}", e);
            AppError::Database(e)
        })
    }

    async fn find_by_filters(&self, filtros: &UfFiltros) -> Result<Vec<Uf>> {
        let mut query: QueryBuilder<Postgres> =
            QueryBuilder::new("SELECT codigo_uf, sigla, nome, status FROM tb_uf WHERE 1=1");

        if let Some(codigo_uf) = filtros.codigo_uf {
            query.push(" AND codigo_uf = ").push_bind(codigo_uf);
        }
        if let Some(sigla) = &filtros.sigla {
            query.push(" AND sigla = ").push_bind(sigla.trim().to_uppercase());
        }
        if let Some(nome) = &filtros.nome {
            query.push(" AND nome = ").push_bind(nome.trim().to_uppercase());
        }
        if let Some(status) = filtros.status {
            query.push(" AND status = ").push_bind(status);
        }
        query.push(" ORDER BY codigo_uf DESC");

        query
            .build_query_as::<Uf>()
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to filter UFs {:?}: {:?}", filtros, e);
                AppError::Database(e)
            })
    }

    async fn insert(&self, nova: NovaUf) -> Result<Uf> {
        let codigo_uf: i64 = sqlx::query_scalar("SELECT nextval('sequence_uf')")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to read sequence_uf: {:?}", e);
                AppError::Database(e)
            })?;

        let uf = Uf {
            codigo_uf,
            sigla: nova.sigla.trim().to_uppercase(),
            nome: nova.nome.trim().to_uppercase(),
            status: nova.status,
        };

        sqlx::query(
            r#"
            INSERT INTO tb_uf (codigo_uf, sigla, nome, status)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(uf.codigo_uf)
        .bind(&uf.sigla)
        .bind(&uf.nome)
        .bind(uf.status)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to insert UF {}: {:?}", uf.sigla, e);
            AppError::Database(e)
        })?;

        Ok(uf)
    }

    async fn update(&self, uf: &Uf) -> Result<()> {
        sqlx::query(
            r#"
            UPDATE tb_uf
            SET sigla = $1, nome = $2, status = $3
            WHERE codigo_uf = $4
            "#,
        )
        .bind(uf.sigla.trim().to_uppercase())
        .bind(uf.nome.trim().to_uppercase())
        .bind(uf.status)
        .bind(uf.codigo_uf)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to update UF {}: {:?}", uf.codigo_uf, e);
            AppError::Database(e)
        })?;

        Ok(())
    }
}
