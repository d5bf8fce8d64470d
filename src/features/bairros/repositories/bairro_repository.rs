use async_trait::async_trait;
use sqlx::{PgPool, Postgres, QueryBuilder};

use crate::core::error::{AppError, Result};
use crate::features::bairros::models::{Bairro, BairroFiltros, NovoBairro};

/// Record access for `tb_bairro`
#[async_trait]
pub trait BairroRepository: Send + Sync {
    async fn find_by_id(&self, codigo_bairro: i64) -> Result<Option<Bairro>>;
    async fn find_by_nome(&self, nome: &str) -> Result<Option<Bairro>>;
    async fn find_all(&self) -> Result<Vec<Bairro>>;
    async fn find_by_filters(&self, filtros: &BairroFiltros) -> Result<Vec<Bairro>>;
    async fn insert(&self, novo: NovoBairro) -> Result<Bairro>;
    async fn update(&self, bairro: &Bairro) -> Result<()>;
}

pub struct PgBairroRepository {
    pool: PgPool,
}

impl PgBairroRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BairroRepository for PgBairroRepository {
    async fn find_by_id(&self, codigo_bairro: i64) -> Result<Option<Bairro>> {
        sqlx::query_as::<_, Bairro>(
            r#"
            SELECT codigo_bairro, codigo_municipio, nome, status
            FROM tb_bairro
            WHERE codigo_bairro = $1
            "#,
        )
        .bind(codigo_bairro)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to fetch bairro by id {}: {:?}", codigo_bairro, e);
            AppError::Database(e)
        })
    }

    async fn find_by_nome(&self, nome: &str) -> Result<Option<Bairro>> {
        sqlx::query_as::<_, Bairro>(
            r#"
            SELECT codigo_bairro, codigo_municipio, nome, status
            FROM tb_bairro
            WHERE nome = $1
            ORDER BY codigo_bairro DESC
            LIMIT 1
            "#,
        )
        .bind(nome.trim().to_uppercase())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to fetch bairro by nome {}: {:?}", nome, e);
            AppError::Database(e)
        })
    }

    async fn find_all(&self) -> Result<Vec<Bairro>> {
        sqlx::query_as::<_, Bairro>(
            r#"
            SELECT codigo_bairro, codigo_municipio, nome, status
            FROM tb_bairro
            ORDER BY codigo_bairro DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list bairros: {:?}", e);
            AppError::Database(e)
        })
    }

    async fn find_by_filters(&self, filtros: &BairroFiltros) -> Result<Vec<Bairro>> {
        let mut query: QueryBuilder<Postgres> = QueryBuilder::new(
            "SELECT codigo_bairro, codigo_municipio, nome, status FROM tb_bairro WHERE 1=1",
        );

        if let Some(codigo_bairro) = filtros.codigo_bairro {
            query.push(" AND codigo_bairro = ").push_bind(codigo_bairro);
        }
        if let Some(codigo_municipio) = filtros.codigo_municipio {
            query
                .push(" AND codigo_municipio = ")
                .push_bind(codigo_municipio);
        }
        if let Some(nome) = &filtros.nome {
            query.push(" AND nome = ").push_bind(nome.trim().to_uppercase());
        }
        if let Some(status) = filtros.status {
            query.push(" AND status = ").push_bind(status);
        }
        query.push(" ORDER BY codigo_bairro DESC");

        query
            .build_query_as::<Bairro>()
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to filter bairros {:?}: {:?}", filtros, e);
                AppError::Database(e)
            })
    }

    async fn insert(&self, novo: NovoBairro) -> Result<Bairro> {
        let codigo_bairro: i64 = sqlx::query_scalar("SELECT nextval('sequence_bairro')")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to read sequence_bairro: {:?}", e);
                AppError::Database(e)
            })?;

        let bairro = Bairro {
            codigo_bairro,
            codigo_municipio: novo.codigo_municipio,
            nome: novo.nome.trim().to_uppercase(),
            status: novo.status,
        };

        sqlx::query(
            r#"
            INSERT INTO tb_bairro (codigo_bairro, codigo_municipio, nome, status)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(bairro.codigo_bairro)
        .bind(bairro.codigo_municipio)
        .bind(&bairro.nome)
        .bind(bairro.status)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to insert bairro {}: {:?}", bairro.nome, e);
            AppError::Database(e)
        })?;

        Ok(bairro)
    }

    async fn update(&self, bairro: &Bairro) -> Result<()> {
        sqlx::query(
            r#"
            UPDATE tb_bairro
            SET codigo_municipio = $1, nome = $2, status = $3
            WHERE codigo_bairro = $4
            "#,
        )
        .bind(bairro.codigo_municipio)
        .bind(bairro.nome.trim().to_uppercase())
        .bind(bairro.status)
        .bind(bairro.codigo_bairro)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to update bairro {}: {:?}", bairro.codigo_bairro, e);
            AppError::Database(e)
        })?;

        Ok(())
    }
}
