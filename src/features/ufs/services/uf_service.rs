use std::sync::Arc;

use crate::core::error::{AppError, Result};
use crate::features::ufs::dtos::{UfDto, UfResponseDto};
use crate::features::ufs::models::{NovaUf, Uf, UfFiltros};
use crate::features::ufs::repositories::UfRepository;
use crate::shared::validation::{is_blank, is_status_valido, is_uf_valida};

const ERRO_INCLUIR: &str = "Não foi possível incluir UF no banco de dados.";
const ERRO_ALTERAR: &str = "Não foi possível alterar UF no banco de dados.";

/// Service for state (UF) operations
pub struct UfService {
    repository: Arc<dyn UfRepository>,
}

impl UfService {
    pub fn new(repository: Arc<dyn UfRepository>) -> Self {
        Self { repository }
    }

    /// List every state, newest first
    pub async fn find_all(&self) -> Result<Vec<UfResponseDto>> {
        let ufs = self.repository.find_all().await?;
        Ok(ufs.into_iter().map(Into::into).collect())
    }

    /// Fetch with any combination of filters.
    ///
    /// Lookups by identifier or status alone use the dedicated queries.
    pub async fn find_by_filters(&self, filtros: &UfFiltros) -> Result<Vec<UfResponseDto>> {
        let ufs = match filtros {
            f if f.is_empty() => self.repository.find_all().await?,
            UfFiltros {
                codigo_uf: Some(codigo_uf),
                sigla: None,
                nome: None,
                status: None,
            } => self
                .repository
                .find_by_id(*codigo_uf)
                .await?
                .into_iter()
                .collect(),
            UfFiltros {
                codigo_uf: None,
                sigla: None,
                nome: None,
                status: Some(status),
            } => self.repository.find_by_status(*status).await?,
            f => self.repository.find_by_filters(f).await?,
        };

        Ok(ufs.into_iter().map(Into::into).collect())
    }

    /// Validate a POST payload, returning the record to insert
    pub async fn validate_insert(&self, dto: &UfDto) -> Result<NovaUf> {
        if is_blank(dto.sigla.as_deref()) && is_blank(dto.nome.as_deref()) && dto.status.is_none()
        {
            return Err(invalido(
                ERRO_INCLUIR,
                "Os campos nome, sigla e status precisam estar inclusos no corpo da requisição.",
            ));
        }

        let (sigla, nome, status) = campos_obrigatorios(dto, ERRO_INCLUIR)?;

        if let Some(existente) = self.repository.find_by_nome(&nome).await? {
            return Err(invalido(
                ERRO_INCLUIR,
                &format!("O Estado {} já está cadastrado.", existente.nome),
            ));
        }
        if self.repository.find_by_sigla(&sigla).await?.is_some() {
            return Err(invalido(
                ERRO_INCLUIR,
                &format!(
                    "Já existe um Estado cadastrado com a sigla {}.",
                    sigla.to_uppercase()
                ),
            ));
        }
        if !is_uf_valida(&nome, &sigla) {
            return Err(invalido(
                ERRO_INCLUIR,
                "O nome do Estado e/ou sigla foram digitados de maneira incorreta.",
            ));
        }

        Ok(NovaUf {
            sigla,
            nome,
            status,
        })
    }

    /// Validate a PUT payload, returning the record to write
    pub async fn validate_update(&self, dto: &UfDto) -> Result<Uf> {
        if dto.codigo_uf.is_none()
            && is_blank(dto.sigla.as_deref())
            && is_blank(dto.nome.as_deref())
            && dto.status.is_none()
        {
            return Err(invalido(
                ERRO_ALTERAR,
                "Os campos codigoUF, sigla, nome e status precisam estar inclusos no corpo da requisição.",
            ));
        }

        let Some(codigo_uf) = dto.codigo_uf else {
            return Err(invalido(
                ERRO_ALTERAR,
                "O campo codigoUF está vazio ou não foi incluso no corpo da requisição.",
            ));
        };

        let (sigla, nome, status) = campos_obrigatorios(dto, ERRO_ALTERAR)?;

        if self.repository.find_by_id(codigo_uf).await?.is_none() {
            return Err(invalido(ERRO_ALTERAR, "O codigoUF fornecido não existe."));
        }

        if let Some(existente) = self.repository.find_by_sigla(&sigla).await? {
            if existente.codigo_uf != codigo_uf {
                return Err(invalido(
                    ERRO_ALTERAR,
                    &format!("Já existe um Estado cadastrado com a sigla {}.", existente.sigla),
                ));
            }
        }
        if let Some(existente) = self.repository.find_by_nome(&nome).await? {
            if existente.codigo_uf != codigo_uf {
                return Err(invalido(
                    ERRO_ALTERAR,
                    &format!("O Estado {} já está cadastrado.", existente.nome),
                ));
            }
        }
        if !is_uf_valida(&nome, &sigla) {
            return Err(invalido(
                ERRO_ALTERAR,
                "o Estado e/ou sigla foram digitados de maneira incorreta ou não foram preenchidos.",
            ));
        }

        Ok(Uf {
            codigo_uf,
            sigla,
            nome,
            status,
        })
    }

    /// Insert a validated state and return the full list
    pub async fn insert(&self, nova: NovaUf) -> Result<Vec<UfResponseDto>> {
        let uf = self.repository.insert(nova).await?;
        tracing::info!("UF {} inserted with codigo_uf={}", uf.sigla, uf.codigo_uf);
        self.find_all().await
    }

    /// Overwrite a validated state and return the full list
    pub async fn update(&self, uf: Uf) -> Result<Vec<UfResponseDto>> {
        self.repository.update(&uf).await?;
        tracing::info!("UF codigo_uf={} updated", uf.codigo_uf);
        self.find_all().await
    }
}

fn invalido(prefixo: &str, detalhe: &str) -> AppError {
    AppError::Validation(format!("{} {}", prefixo, detalhe))
}

/// Presence and range checks shared by insert and update
fn campos_obrigatorios(dto: &UfDto, prefixo: &str) -> Result<(String, String, i32)> {
    let sigla = match dto.sigla.as_deref() {
        Some(s) if !s.trim().is_empty() => s.trim().to_string(),
        _ => {
            return Err(invalido(
                prefixo,
                "O campo sigla está vazio ou não foi incluso no corpo da requisição.",
            ))
        }
    };
    let nome = match dto.nome.as_deref() {
        Some(n) if !n.trim().is_empty() => n.trim().to_string(),
        _ => {
            return Err(invalido(
                prefixo,
                "O campo nome está vazio ou não foi incluso no corpo da requisição.",
            ))
        }
    };
    let Some(status) = dto.status else {
        return Err(invalido(
            prefixo,
            "O campo status está vazio ou não foi incluso no corpo da requisição.",
        ));
    };
    if !is_status_valido(status) {
        return Err(invalido(prefixo, "O status precisa ser 1 ou 2."));
    }

    Ok((sigla, nome, status))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_helpers::InMemoryDb;

    fn dto(sigla: &str, nome: &str, status: i32) -> UfDto {
        UfDto {
            codigo_uf: None,
            sigla: Some(sigla.to_string()),
            nome: Some(nome.to_string()),
            status: Some(status),
        }
    }

    fn mensagem(err: AppError) -> String {
        match err {
            AppError::Validation(m) => m,
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_insert_returns_list_with_new_uf_first() {
        let db = InMemoryDb::new();
        db.seed_uf("RJ", "RIO DE JANEIRO", 1);
        let service = UfService::new(db.clone());

        let nova = service
            .validate_insert(&dto("sp", "São Paulo", 1))
            .await
            .unwrap();
        let lista = service.insert(nova).await.unwrap();

        assert_eq!(lista.len(), 2);
        assert_eq!(lista[0].codigo_uf, 2);
        assert_eq!(lista[0].sigla, "SP");
        assert_eq!(lista[0].nome, "SÃO PAULO");
    }

    #[tokio::test]
    async fn test_insert_rejects_empty_payload() {
        let service = UfService::new(InMemoryDb::new());
        let err = service.validate_insert(&UfDto::default()).await.unwrap_err();
        assert!(mensagem(err).contains("Os campos nome, sigla e status"));
    }

    #[tokio::test]
    async fn test_insert_reports_first_missing_field() {
        let service = UfService::new(InMemoryDb::new());

        let mut sem_sigla = dto("SP", "SÃO PAULO", 1);
        sem_sigla.sigla = Some("  ".to_string());
        let err = service.validate_insert(&sem_sigla).await.unwrap_err();
        assert!(mensagem(err).contains("O campo sigla está vazio"));

        let mut sem_status = dto("SP", "SÃO PAULO", 1);
        sem_status.status = None;
        let err = service.validate_insert(&sem_status).await.unwrap_err();
        assert!(mensagem(err).contains("O campo status está vazio"));
    }

    #[tokio::test]
    async fn test_insert_rejects_status_out_of_range() {
        let service = UfService::new(InMemoryDb::new());
        let err = service
            .validate_insert(&dto("SP", "SÃO PAULO", 3))
            .await
            .unwrap_err();
        assert!(mensagem(err).ends_with("O status precisa ser 1 ou 2."));
    }

    #[tokio::test]
    async fn test_insert_rejects_duplicates() {
        let db = InMemoryDb::new();
        db.seed_uf("SP", "SÃO PAULO", 1);
        let service = UfService::new(db.clone());

        let err = service
            .validate_insert(&dto("XX", "são paulo", 1))
            .await
            .unwrap_err();
        assert!(mensagem(err).contains("O Estado SÃO PAULO já está cadastrado."));

        let err = service
            .validate_insert(&dto("sp", "RIO DE JANEIRO", 1))
            .await
            .unwrap_err();
        assert!(mensagem(err).contains("Já existe um Estado cadastrado com a sigla SP."));
    }

    #[tokio::test]
    async fn test_insert_rejects_pair_outside_reference_table() {
        let service = UfService::new(InMemoryDb::new());
        let err = service
            .validate_insert(&dto("RJ", "SÃO PAULO", 1))
            .await
            .unwrap_err();
        assert!(mensagem(err).contains("digitados de maneira incorreta"));
    }

    #[tokio::test]
    async fn test_update_requires_identifier_and_existing_record() {
        let service = UfService::new(InMemoryDb::new());

        let err = service
            .validate_update(&dto("SP", "SÃO PAULO", 1))
            .await
            .unwrap_err();
        assert!(mensagem(err).contains("O campo codigoUF está vazio"));

        let mut desconhecida = dto("SP", "SÃO PAULO", 1);
        desconhecida.codigo_uf = Some(99);
        let err = service.validate_update(&desconhecida).await.unwrap_err();
        assert!(mensagem(err).contains("O codigoUF fornecido não existe."));
    }

    #[tokio::test]
    async fn test_update_allows_keeping_own_name_and_sigla() {
        let db = InMemoryDb::new();
        let sp = db.seed_uf("SP", "SÃO PAULO", 1);
        let service = UfService::new(db.clone());

        let mut payload = dto("SP", "SÃO PAULO", 2);
        payload.codigo_uf = Some(sp.codigo_uf);
        let uf = service.validate_update(&payload).await.unwrap();
        let lista = service.update(uf).await.unwrap();

        assert_eq!(lista.len(), 1);
        assert_eq!(lista[0].status, 2);
    }

    #[tokio::test]
    async fn test_update_rejects_name_of_another_state() {
        let db = InMemoryDb::new();
        db.seed_uf("SP", "SÃO PAULO", 1);
        let rj = db.seed_uf("RJ", "RIO DE JANEIRO", 1);
        let service = UfService::new(db.clone());

        let mut payload = dto("RJ", "SÃO PAULO", 1);
        payload.codigo_uf = Some(rj.codigo_uf);
        let err = service.validate_update(&payload).await.unwrap_err();
        assert!(mensagem(err).contains("O Estado SÃO PAULO já está cadastrado."));
    }

    #[tokio::test]
    async fn test_find_by_filters_dispatch() {
        let db = InMemoryDb::new();
        db.seed_uf("SP", "SÃO PAULO", 1);
        db.seed_uf("RJ", "RIO DE JANEIRO", 2);
        db.seed_uf("MG", "MINAS GERAIS", 1);
        let service = UfService::new(db.clone());

        let todos = service.find_by_filters(&UfFiltros::default()).await.unwrap();
        assert_eq!(
            todos.iter().map(|u| u.codigo_uf).collect::<Vec<_>>(),
            vec![3, 2, 1]
        );

        let por_id = service
            .find_by_filters(&UfFiltros {
                codigo_uf: Some(2),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(por_id.len(), 1);
        assert_eq!(por_id[0].sigla, "RJ");

        let ativos = service
            .find_by_filters(&UfFiltros {
                status: Some(1),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(ativos.len(), 2);

        let nenhum = service
            .find_by_filters(&UfFiltros {
                sigla: Some("sp".to_string()),
                status: Some(2),
                ..Default::default()
            })
            .await
            .unwrap();
        assert!(nenhum.is_empty());
    }
}
