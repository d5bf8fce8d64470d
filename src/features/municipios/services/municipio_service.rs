use std::sync::Arc;

use crate::core::error::{AppError, Result};
use crate::features::municipios::dtos::{MunicipioDto, MunicipioResponseDto};
use crate::features::municipios::models::{Municipio, MunicipioFiltros, NovoMunicipio};
use crate::features::municipios::repositories::MunicipioRepository;
use crate::features::ufs::repositories::UfRepository;
use crate::shared::validation::{is_blank, is_status_valido};

const ERRO_INCLUIR: &str = "Não foi possível cadastrar município no banco de dados.";
const ERRO_ALTERAR: &str = "Não foi possível alterar município no banco de dados.";

/// Service for municipality operations
pub struct MunicipioService {
    repository: Arc<dyn MunicipioRepository>,
    ufs: Arc<dyn UfRepository>,
}

impl MunicipioService {
    pub fn new(repository: Arc<dyn MunicipioRepository>, ufs: Arc<dyn UfRepository>) -> Self {
        Self { repository, ufs }
    }

    pub async fn find_all(&self) -> Result<Vec<MunicipioResponseDto>> {
        let municipios = self.repository.find_all().await?;
        Ok(municipios.into_iter().map(Into::into).collect())
    }

    pub async fn find_by_filters(
        &self,
        filtros: &MunicipioFiltros,
    ) -> Result<Vec<MunicipioResponseDto>> {
        let municipios = self.repository.find_by_filters(filtros).await?;
        Ok(municipios.into_iter().map(Into::into).collect())
    }

    pub async fn validate_insert(&self, dto: &MunicipioDto) -> Result<NovoMunicipio> {
        if dto.codigo_uf.is_none() && is_blank(dto.nome.as_deref()) && dto.status.is_none() {
            return Err(invalido(
                ERRO_INCLUIR,
                "Os campos codigoUF, nome e status precisam estar inclusos no corpo da requisição.",
            ));
        }

        let (codigo_uf, nome, status) = campos_obrigatorios(dto, ERRO_INCLUIR)?;
        self.uf_existente(codigo_uf, ERRO_INCLUIR).await?;

        if self.repository.find_by_nome(&nome).await?.is_some() {
            return Err(invalido(
                ERRO_INCLUIR,
                &format!("O município com o nome {} já está cadastrado.", nome),
            ));
        }

        Ok(NovoMunicipio {
            codigo_uf,
            nome,
            status,
        })
    }

    pub async fn validate_update(&self, dto: &MunicipioDto) -> Result<Municipio> {
        if dto.codigo_municipio.is_none()
            && dto.codigo_uf.is_none()
            && is_blank(dto.nome.as_deref())
            && dto.status.is_none()
        {
            return Err(invalido(
                ERRO_ALTERAR,
                "Os campos codigoMunicipio, codigoUF, nome e status precisam estar inclusos no corpo da requisição.",
            ));
        }

        let Some(codigo_municipio) = dto.codigo_municipio else {
            return Err(invalido(ERRO_ALTERAR, "O campo codigoMunicipio é obrigatório."));
        };

        let (codigo_uf, nome, status) = campos_obrigatorios(dto, ERRO_ALTERAR)?;

        if self.repository.find_by_id(codigo_municipio).await?.is_none() {
            return Err(invalido(
                ERRO_ALTERAR,
                "O codigoMunicipio fornecido não existe.",
            ));
        }
        self.uf_existente(codigo_uf, ERRO_ALTERAR).await?;
        if let Some(existente) = self.repository.find_by_nome(&nome).await? {
            if existente.codigo_municipio != codigo_municipio {
                return Err(invalido(
                    ERRO_ALTERAR,
                    &format!("O município com o nome {} já está cadastrado.", nome),
                ));
            }
        }

        Ok(Municipio {
            codigo_municipio,
            codigo_uf,
            nome,
            status,
        })
    }

    pub async fn insert(&self, novo: NovoMunicipio) -> Result<Vec<MunicipioResponseDto>> {
        let municipio = self.repository.insert(novo).await?;
        tracing::info!(
            "Municipio {} inserted with codigo_municipio={}",
            municipio.nome,
            municipio.codigo_municipio
        );
        self.find_all().await
    }

    pub async fn update(&self, municipio: Municipio) -> Result<Vec<MunicipioResponseDto>> {
        self.repository.update(&municipio).await?;
        tracing::info!(
            "Municipio codigo_municipio={} updated",
            municipio.codigo_municipio
        );
        self.find_all().await
    }

    async fn uf_existente(&self, codigo_uf: i64, prefixo: &str) -> Result<()> {
        if self.ufs.find_by_id(codigo_uf).await?.is_none() {
            return Err(invalido(prefixo, "O codigoUF fornecido não existe."));
        }
        Ok(())
    }
}

/// Required fields and status range, in that order
fn campos_obrigatorios(dto: &MunicipioDto, prefixo: &str) -> Result<(i64, String, i32)> {
    let Some(codigo_uf) = dto.codigo_uf else {
        return Err(invalido(prefixo, "O campo codigoUF é obrigatório."));
    };
    let nome = match dto.nome.as_deref() {
        Some(n) if !n.trim().is_empty() => n.trim().to_uppercase(),
        _ => return Err(invalido(prefixo, "O campo nome é obrigatório.")),
    };
    let Some(status) = dto.status else {
        return Err(invalido(prefixo, "O campo status é obrigatório."));
    };
    if !is_status_valido(status) {
        return Err(invalido(prefixo, "O status precisa ser 1 ou 2."));
    }

    Ok((codigo_uf, nome, status))
}

fn invalido(prefixo: &str, detalhe: &str) -> AppError {
    AppError::Validation(format!("{} {}", prefixo, detalhe))
}
