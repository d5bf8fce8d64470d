use async_trait::async_trait;
use sqlx::{PgPool, Postgres, QueryBuilder};

use crate::core::error::{AppError, Result};
use crate::features::pessoas::models::{NovaPessoa, Pessoa, PessoaFiltros};

/// Record access for `tb_pessoa`
#[async_trait]
pub trait PessoaRepository: Send + Sync {
    async fn find_by_id(&self, codigo_pessoa: i64) -> Result<Option<Pessoa>>;
    /// Case-insensitive login lookup
    async fn find_by_login(&self, login: &str) -> Result<Option<Pessoa>>;
    async fn find_all(&self) -> Result<Vec<Pessoa>>;
    async fn find_by_filters(&self, filtros: &PessoaFiltros) -> Result<Vec<Pessoa>>;
    async fn insert(&self, nova: NovaPessoa) -> Result<Pessoa>;
    async fn update(&self, pessoa: &Pessoa) -> Result<()>;
}

pub struct PgPessoaRepository {
    pool: PgPool,
}

impl PgPessoaRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PessoaRepository for PgPessoaRepository {
    async fn find_by_id(&self, codigo_pessoa: i64) -> Result<Option<Pessoa>> {
        sqlx::query_as::<_, Pessoa>(
            r#"
            SELECT codigo_pessoa, nome, sobrenome, idade, login, senha, status
            FROM tb_pessoa
            WHERE codigo_pessoa = $1
            "#,
        )
        .bind(codigo_pessoa)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to fetch pessoa by id {}: {:?}", codigo_pessoa, e);
            AppError::Database(e)
        })
    }

    async fn find_by_login(&self, login: &str) -> Result<Option<Pessoa>> {
        sqlx::query_as::<_, Pessoa>(
            r#"
            SELECT codigo_pessoa, nome, sobrenome, idade, login, senha, status
            FROM tb_pessoa
            WHERE UPPER(login) = $1
            ORDER BY codigo_pessoa DESC
            LIMIT 1
            "#,
        )
        .bind(login.trim().to_uppercase())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to fetch pessoa by login {}: {:?}", login, e);
            AppError::Database(e)
        })
    }

    async fn find_all(&self) -> Result<Vec<Pessoa>> {
        sqlx::query_as::<_, Pessoa>(
            r#"
            SELECT codigo_pessoa, nome, sobrenome, idade, login, senha, status
            FROM tb_pessoa
            ORDER BY codigo_pessoa DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list pessoas: {:?}", e);
            AppError::Database(e)
        })
    }

    async fn find_by_filters(&self, filtros: &PessoaFiltros) -> Result<Vec<Pessoa>> {
        let mut query: QueryBuilder<Postgres> = QueryBuilder::new(
            "SELECT codigo_pessoa, nome, sobrenome, idade, login, senha, status FROM tb_pessoa WHERE 1=1",
        );

        if let Some(codigo_pessoa) = filtros.codigo_pessoa {
            query.push(" AND codigo_pessoa = ").push_bind(codigo_pessoa);
        }
        if let Some(login) = &filtros.login {
            query
                .push(" AND UPPER(login) = ")
                .push_bind(login.trim().to_uppercase());
        }
        if let Some(status) = filtros.status {
            query.push(" AND status = ").push_bind(status);
        }
        query.push(" ORDER BY codigo_pessoa DESC");

        query
            .build_query_as::<Pessoa>()
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to filter pessoas {:?}: {:?}", filtros, e);
                AppError::Database(e)
            })
    }

    async fn insert(&self, nova: NovaPessoa) -> Result<Pessoa> {
        let codigo_pessoa: i64 = sqlx::query_scalar("SELECT nextval('sequence_pessoa')")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to read sequence_pessoa: {:?}", e);
                AppError::Database(e)
            })?;

        let pessoa = Pessoa {
            codigo_pessoa,
            nome: nova.nome,
            sobrenome: nova.sobrenome,
            idade: nova.idade,
            login: nova.login,
            senha: nova.senha,
            status: nova.status,
        };

        sqlx::query(
            r#"
            INSERT INTO tb_pessoa (codigo_pessoa, nome, sobrenome, idade, login, senha, status)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(pessoa.codigo_pessoa)
        .bind(&pessoa.nome)
        .bind(&pessoa.sobrenome)
        .bind(pessoa.idade)
        .bind(&pessoa.login)
        .bind(&pessoa.senha)
        .bind(pessoa.status)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to insert pessoa {}: {:?}", pessoa.login, e);
            AppError::Database(e)
        })?;

        Ok(pessoa)
    }

    async fn update(&self, pessoa: &Pessoa) -> Result<()> {
        sqlx::query(
            r#"
            UPDATE tb_pessoa
            SET nome = $1, sobrenome = $2, idade = $3, login = $4, senha = $5, status = $6
            WHERE codigo_pessoa = $7
            "#,
        )
        .bind(&pessoa.nome)
        .bind(&pessoa.sobrenome)
        .bind(pessoa.idade)
        .bind(&pessoa.login)
        .bind(&pessoa.senha)
        .bind(pessoa.status)
        .bind(pessoa.codigo_pessoa)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to update pessoa {}: {:?}", pessoa.codigo_pessoa, e);
            AppError::Database(e)
        })?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fake::faker::name::en::{FirstName, LastName};
    use fake::Fake;

    async fn repository() -> PgPessoaRepository {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
        let pool = PgPool::connect(&url).await.expect("pool creation failed");
        sqlx::migrate!("./migrations")
            .run(&pool)
            .await
            .expect("migrations failed");
        PgPessoaRepository::new(pool)
    }

    fn nova_pessoa(status: i32) -> NovaPessoa {
        NovaPessoa {
            nome: FirstName().fake(),
            sobrenome: LastName().fake(),
            idade: 30,
            login: format!("u{}", uuid::Uuid::now_v7().simple()),
            senha: "segredo".to_string(),
            status,
        }
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn test_insert_then_find_by_id_round_trips() {
        let repo = repository().await;
        let nova = nova_pessoa(1);

        let inserted = repo.insert(nova.clone()).await.expect("insert failed");
        let found = repo
            .find_by_id(inserted.codigo_pessoa)
            .await
            .expect("query failed")
            .expect("pessoa not found");

        assert_eq!(found, inserted);
        assert_eq!(found.login, nova.login);
        assert_eq!(found.senha, "segredo");
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn test_login_lookup_ignores_case() {
        let repo = repository().await;
        let inserted = repo.insert(nova_pessoa(1)).await.expect("insert failed");

        let found = repo
            .find_by_login(&inserted.login.to_uppercase())
            .await
            .expect("query failed")
            .expect("pessoa not found by login");
        assert_eq!(found.codigo_pessoa, inserted.codigo_pessoa);

        let filtered = repo
            .find_by_filters(&PessoaFiltros {
                login: Some(inserted.login.to_uppercase()),
                status: Some(1),
                ..Default::default()
            })
            .await
            .expect("query failed");
        assert_eq!(filtered, vec![inserted.clone()]);

        let wrong_status = repo
            .find_by_filters(&PessoaFiltros {
                login: Some(inserted.login.clone()),
                status: Some(2),
                ..Default::default()
            })
            .await
            .expect("query failed");
        assert!(wrong_status.is_empty());
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn test_update_overwrites_every_field() {
        let repo = repository().await;
        let mut pessoa = repo.insert(nova_pessoa(1)).await.expect("insert failed");

        pessoa.nome = FirstName().fake();
        pessoa.idade = 41;
        pessoa.senha = "nova-senha".to_string();
        pessoa.status = 2;
        repo.update(&pessoa).await.expect("update failed");

        let stored = repo
            .find_by_id(pessoa.codigo_pessoa)
            .await
            .expect("query failed")
            .expect("pessoa not found");
        assert_eq!(stored, pessoa);
    }
}
