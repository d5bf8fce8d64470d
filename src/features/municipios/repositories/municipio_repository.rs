use async_trait::async_trait;
use sqlx::{PgPool, Postgres, QueryBuilder};

use crate::core::error::{AppError, Result};
use crate::features::municipios::models::{Municipio, MunicipioFiltros, NovoMunicipio};

/// Record access for `tb_municipio`
#[async_trait]
pub trait MunicipioRepository: Send + Sync {
    async fn find_by_id(&self, codigo_municipio: i64) -> Result<Option<Municipio>>;
    async fn find_by_nome(&self, nome: &str) -> Result<Option<Municipio>>;
    async fn find_all(&self) -> Result<Vec<Municipio>>;
    async fn find_by_filters(&self, filtros: &MunicipioFiltros) -> Result<Vec<Municipio>>;
    async fn insert(&self, novo: NovoMunicipio) -> Result<Municipio>;
    async fn update(&self, municipio: &Municipio) -> Result<()>;
}

pub struct PgMunicipioRepository {
    pool: PgPool,
}

impl PgMunicipioRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MunicipioRepository for PgMunicipioRepository {
    async fn find_by_id(&self, codigo_municipio: i64) -> Result<Option<Municipio>> {
        sqlx::query_as::<_, Municipio>(
            r#"
            SELECT codigo_municipio, codigo_uf, nome, status
            FROM tb_municipio
            WHERE codigo_municipio = $1
            "#,
        )
        .bind(codigo_municipio)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!(
                "Failed to fetch municipio by id {}: {:?}",
                codigo_municipio,
                e
            );
            AppError::Database(e)
        })
    }

    async fn find_by_nome(&self, nome: &str) -> Result<Option<Municipio>> {
        sqlx::query_as::<_, Municipio>(
            r#"
            SELECT codigo_municipio, codigo_uf, nome, status
            FROM tb_municipio
            WHERE nome = $1
            ORDER BY codigo_municipio DESC
            LIMIT 1
            "#,
        )
        .bind(nome.trim().to_uppercase())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to fetch municipio by nome {}: {:?}", nome, e);
            AppError::Database(e)
        })
    }

    async fn find_all(&self) -> Result<Vec<Municipio>> {
        sqlx::query_as::<_, Municipio>(
            r#"
            SELECT codigo_municipio, codigo_uf, nome, status
            FROM tb_municipio
            ORDER BY codigo_municipio DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list municipios: {:?}", e);
            AppError::Database(e)
        })
    }

    async fn find_by_filters(&self, filtros: &MunicipioFiltros) -> Result<Vec<Municipio>> {
        let mut query: QueryBuilder<Postgres> = QueryBuilder::new(
            "SELECT codigo_municipio, codigo_uf, nome, status FROM tb_municipio WHERE 1=1",
        );

        if let Some(codigo_municipio) = filtros.codigo_municipio {
            query
                .push(" AND codigo_municipio = ")
                .push_bind(codigo_municipio);
        }
        if let Some(codigo_uf) = filtros.codigo_uf {
            query.push(" AND codigo_uf = ").push_bind(codigo_uf);
        }
        if let Some(nome) = &filtros.nome {
            query.push(" AND nome = ").push_bind(nome.trim().to_uppercase());
        }
        if let Some(status) = filtros.status {
            query.push(" AND status = ").push_bind(status);
        }
        query.push(" ORDER BY codigo_municipio DESC");

        query
            .build_query_as::<Municipio>()
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to filter municipios {:?}: {:?}", filtros, e);
                AppError::Database(e)
            })
    }

    async fn insert(&self, novo: NovoMunicipio) -> Result<Municipio> {
        let codigo_municipio: i64 = sqlx::query_scalar("SELECT nextval('sequence_municipio')")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to read sequence_municipio: {:?}", e);
                AppError::Database(e)
            })?;

        let municipio = Municipio {
            codigo_municipio,
            codigo_uf: novo.codigo_uf,
            nome: novo.nome.trim().to_uppercase(),
            status: novo.status,
        };

        sqlx::query(
            r#"
            INSERT INTO tb_municipio (codigo_municipio, codigo_uf, nome, status)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(municipio.codigo_municipio)
        .bind(municipio.codigo_uf)
        .bind(&municipio.nome)
        .bind(municipio.status)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to insert municipio {}: {:?}", municipio.nome, e);
            AppError::Database(e)
        })?;

        Ok(municipio)
    }

    async fn update(&self, municipio: &Municipio) -> Result<()> {
        sqlx::query(
            r#"
            UPDATE tb_municipio
            SET codigo_uf = $1, nome = $2, status = $3
            WHERE codigo_municipio = $4
            "#,
        )
        .bind(municipio.codigo_uf)
        .bind(municipio.nome.trim().to_uppercase())
        .bind(municipio.status)
        .bind(municipio.codigo_municipio)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!(
                "Failed to update municipio {}: {:?}",
                municipio.codigo_municipio,
                e
            );
            AppError::Database(e)
        })?;

        Ok(())
    }
}
