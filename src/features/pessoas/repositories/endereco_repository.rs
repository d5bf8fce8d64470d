use async_trait::async_trait;
use sqlx::{FromRow, PgPool};

use crate::core::error::{AppError, Result};
use crate::features::bairros::models::Bairro;
use crate::features::municipios::models::Municipio;
use crate::features::pessoas::models::{Endereco, EnderecoDetalhado, NovoEndereco};
use crate::features::ufs::models::Uf;

/// Record access for `tb_endereco`
#[async_trait]
pub trait EnderecoRepository: Send + Sync {
    async fn find_by_pessoa(&self, codigo_pessoa: i64) -> Result<Vec<Endereco>>;
    /// Addresses of a person joined with their bairro, municipio and UF
    async fn find_detalhados_by_pessoa(&self, codigo_pessoa: i64)
        -> Result<Vec<EnderecoDetalhado>>;
    async fn insert(&self, novo: NovoEndereco) -> Result<Endereco>;
    async fn update(&self, endereco: &Endereco) -> Result<()>;
    async fn delete_by_id(&self, codigo_endereco: i64) -> Result<()>;
    async fn delete_by_pessoa(&self, codigo_pessoa: i64) -> Result<u64>;
}

pub struct PgEnderecoRepository {
    pool: PgPool,
}

impl PgEnderecoRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Flat row produced by the address join
#[derive(Debug, FromRow)]
struct EnderecoDetalhadoRow {
    #[sqlx(flatten)]
    endereco: Endereco,
    bairro_codigo_municipio: Option<i64>,
    bairro_nome: Option<String>,
    bairro_status: Option<i32>,
    municipio_codigo_uf: Option<i64>,
    municipio_nome: Option<String>,
    municipio_status: Option<i32>,
    uf_sigla: Option<String>,
    uf_nome: Option<String>,
    uf_status: Option<i32>,
}

impl From<EnderecoDetalhadoRow> for EnderecoDetalhado {
    fn from(row: EnderecoDetalhadoRow) -> Self {
        let bairro = match (row.bairro_codigo_municipio, row.bairro_nome, row.bairro_status) {
            (Some(codigo_municipio), Some(nome), Some(status)) => Some(Bairro {
                codigo_bairro: row.endereco.codigo_bairro,
                codigo_municipio,
                nome,
                status,
            }),
            _ => None,
        };

        let municipio = match (
            &bairro,
            row.municipio_codigo_uf,
            row.municipio_nome,
            row.municipio_status,
        ) {
            (Some(bairro), Some(codigo_uf), Some(nome), Some(status)) => Some(Municipio {
                codigo_municipio: bairro.codigo_municipio,
                codigo_uf,
                nome,
                status,
            }),
            _ => None,
        };

        let uf = match (&municipio, row.uf_sigla, row.uf_nome, row.uf_status) {
            (Some(municipio), Some(sigla), Some(nome), Some(status)) => Some(Uf {
                codigo_uf: municipio.codigo_uf,
                sigla,
                nome,
                status,
            }),
            _ => None,
        };

        Self {
            endereco: row.endereco,
            bairro,
            municipio,
            uf,
        }
    }
}

#[async_trait]
impl EnderecoRepository for PgEnderecoRepository {
    async fn find_by_pessoa(&self, codigo_pessoa: i64) -> Result<Vec<Endereco>> {
        sqlx::query_as::<_, Endereco>(
            r#"
            SELECT codigo_endereco, codigo_pessoa, codigo_bairro, nome_rua, numero, complemento, cep
            FROM tb_endereco
            WHERE codigo_pessoa = $1
            ORDER BY codigo_endereco
            "#,
        )
        .bind(codigo_pessoa)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!(
                "Failed to fetch enderecos for pessoa {}: {:?}",
                codigo_pessoa,
                e
            );
            AppError::Database(e)
        })
    }

    async fn find_detalhados_by_pessoa(
        &self,
        codigo_pessoa: i64,
    ) -> Result<Vec<EnderecoDetalhado>> {
        let rows = sqlx::query_as::<_, EnderecoDetalhadoRow>(
            r#"
            SELECT
                e.codigo_endereco, e.codigo_pessoa, e.codigo_bairro,
                e.nome_rua, e.numero, e.complemento, e.cep,
                b.codigo_municipio AS bairro_codigo_municipio,
                b.nome AS bairro_nome,
                b.status AS bairro_status,
                m.codigo_uf AS municipio_codigo_uf,
                m.nome AS municipio_nome,
                m.status AS municipio_status,
                u.sigla AS uf_sigla,
                u.nome AS uf_nome,
                u.status AS uf_status
            FROM tb_endereco e
            LEFT JOIN tb_bairro b ON b.codigo_bairro = e.codigo_bairro
            LEFT JOIN tb_municipio m ON m.codigo_municipio = b.codigo_municipio
            LEFT JOIN tb_uf u ON u.codigo_uf = m.codigo_uf
            WHERE e.codigo_pessoa = $1
            ORDER BY e.codigo_endereco
            "#,
        )
        .bind(codigo_pessoa)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!(
                "Failed to fetch detailed enderecos for pessoa {}: {:?}",
                codigo_pessoa,
                e
            );
            AppError::Database(e)
        })?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn insert(&self, novo: NovoEndereco) -> Result<Endereco> {
        let codigo_endereco: i64 = sqlx::query_scalar("SELECT nextval('sequence_endereco')")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to read sequence_endereco: {:?}", e);
                AppError::Database(e)
            })?;

        let endereco = Endereco {
            codigo_endereco,
            codigo_pessoa: novo.codigo_pessoa,
            codigo_bairro: novo.codigo_bairro,
            nome_rua: novo.nome_rua,
            numero: novo.numero,
            complemento: novo.complemento,
            cep: novo.cep,
        };

        sqlx::query(
            r#"
            INSERT INTO tb_endereco
                (codigo_endereco, codigo_pessoa, codigo_bairro, nome_rua, numero, complemento, cep)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(endereco.codigo_endereco)
        .bind(endereco.codigo_pessoa)
        .bind(endereco.codigo_bairro)
        .bind(&endereco.nome_rua)
        .bind(&endereco.numero)
        .bind(&endereco.complemento)
        .bind(&endereco.cep)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!(
                "Failed to insert endereco for pessoa {}: {:?}",
                endereco.codigo_pessoa,
                e
            );
            AppError::Database(e)
        })?;

        Ok(endereco)
    }

    async fn update(&self, endereco: &Endereco) -> Result<()> {
        sqlx::query(
            r#"
            UPDATE tb_endereco
            SET codigo_bairro = $1, nome_rua = $2, numero = $3, complemento = $4, cep = $5
            WHERE codigo_endereco = $6
            "#,
        )
        .bind(endereco.codigo_bairro)
        .bind(&endereco.nome_rua)
        .bind(&endereco.numero)
        .bind(&endereco.complemento)
        .bind(&endereco.cep)
        .bind(endereco.codigo_endereco)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!(
                "Failed to update endereco {}: {:?}",
                endereco.codigo_endereco,
                e
            );
            AppError::Database(e)
        })?;

        Ok(())
    }

    async fn delete_by_id(&self, codigo_endereco: i64) -> Result<()> {
        sqlx::query("DELETE FROM tb_endereco WHERE codigo_endereco = $1")
            .bind(codigo_endereco)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to delete endereco {}: {:?}", codigo_endereco, e);
                AppError::Database(e)
            })?;

        Ok(())
    }

    async fn delete_by_pessoa(&self, codigo_pessoa: i64) -> Result<u64> {
        let result = sqlx::query("DELETE FROM tb_endereco WHERE codigo_pessoa = $1")
            .bind(codigo_pessoa)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!(
                    "Failed to delete enderecos of pessoa {}: {:?}",
                    codigo_pessoa,
                    e
                );
                AppError::Database(e)
            })?;

        Ok(result.rows_affected())
    }
}
