use std::sync::Arc;

use crate::core::error::{AppError, Result};
use crate::features::bairros::dtos::{BairroDto, BairroResponseDto};
use crate::features::bairros::models::{Bairro, BairroFiltros, NovoBairro};
use crate::features::bairros::repositories::BairroRepository;
use crate::features::municipios::repositories::MunicipioRepository;
use crate::shared::validation::{is_blank, is_status_valido};

const ERRO_INCLUIR: &str = "Não foi possível incluir bairro no banco de dados.";
const ERRO_ALTERAR: &str = "Não foi possível alterar bairro no banco de dados.";

/// Service for neighborhood operations
pub struct BairroService {
    repository: Arc<dyn BairroRepository>,
    municipios: Arc<dyn MunicipioRepository>,
}

impl BairroService {
    pub fn new(
        repository: Arc<dyn BairroRepository>,
        municipios: Arc<dyn MunicipioRepository>,
    ) -> Self {
        Self {
            repository,
            municipios,
        }
    }

    pub async fn find_all(&self) -> Result<Vec<BairroResponseDto>> {
        let bairros = self.repository.find_all().await?;
        Ok(bairros.into_iter().map(Into::into).collect())
    }

    pub async fn find_by_filters(&self, filtros: &BairroFiltros) -> Result<Vec<BairroResponseDto>> {
        let bairros = self.repository.find_by_filters(filtros).await?;
        Ok(bairros.into_iter().map(Into::into).collect())
    }

    pub async fn validate_insert(&self, dto: &BairroDto) -> Result<NovoBairro> {
        if dto.codigo_municipio.is_none() && is_blank(dto.nome.as_deref()) && dto.status.is_none()
        {
            return Err(invalido(
                ERRO_INCLUIR,
                "Os campos codigoMunicipio, nome e status precisam estar inclusos no corpo da requisição.",
            ));
        }

        let (codigo_municipio, nome, status) = self.campos_validos(dto, ERRO_INCLUIR).await?;

        if self.repository.find_by_nome(&nome).await?.is_some() {
            return Err(invalido(
                ERRO_INCLUIR,
                &format!("O bairro com o nome {} já está cadastrado.", nome),
            ));
        }

        Ok(NovoBairro {
            codigo_municipio,
            nome,
            status,
        })
    }

    pub async fn validate_update(&self, dto: &BairroDto) -> Result<Bairro> {
        if dto.codigo_bairro.is_none()
            && dto.codigo_municipio.is_none()
            && is_blank(dto.nome.as_deref())
            && dto.status.is_none()
        {
            return Err(invalido(
                ERRO_ALTERAR,
                "Os campos codigoBairro, codigoMunicipio, nome e status precisam estar inclusos no corpo da requisição.",
            ));
        }

        let Some(codigo_bairro) = dto.codigo_bairro else {
            return Err(invalido(ERRO_ALTERAR, "O campo codigoBairro é obrigatório."));
        };

        let (codigo_municipio, nome, status) = self.campos_validos(dto, ERRO_ALTERAR).await?;

        if self.repository.find_by_id(codigo_bairro).await?.is_none() {
            return Err(invalido(ERRO_ALTERAR, "O codigoBairro fornecido não existe."));
        }
        if let Some(existente) = self.repository.find_by_nome(&nome).await? {
            if existente.codigo_bairro != codigo_bairro {
                return Err(invalido(
                    ERRO_ALTERAR,
                    &format!("O bairro com o nome {} já está cadastrado.", nome),
                ));
            }
        }

        Ok(Bairro {
            codigo_bairro,
            codigo_municipio,
            nome,
            status,
        })
    }

    pub async fn insert(&self, novo: NovoBairro) -> Result<Vec<BairroResponseDto>> {
        let bairro = self.repository.insert(novo).await?;
        tracing::info!(
            "Bairro {} inserted with codigo_bairro={}",
            bairro.nome,
            bairro.codigo_bairro
        );
        self.find_all().await
    }

    pub async fn update(&self, bairro: Bairro) -> Result<Vec<BairroResponseDto>> {
        self.repository.update(&bairro).await?;
        tracing::info!("Bairro codigo_bairro={} updated", bairro.codigo_bairro);
        self.find_all().await
    }

    async fn campos_validos(&self, dto: &BairroDto, prefixo: &str) -> Result<(i64, String, i32)> {
        let Some(codigo_municipio) = dto.codigo_municipio else {
            return Err(invalido(prefixo, "O campo codigoMunicipio é obrigatório."));
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
        if self.municipios.find_by_id(codigo_municipio).await?.is_none() {
            return Err(invalido(prefixo, "O codigoMunicipio fornecido não existe."));
        }

        Ok((codigo_municipio, nome, status))
    }
}

fn invalido(prefixo: &str, detalhe: &str) -> AppError {
    AppError::Validation(format!("{} {}", prefixo, detalhe))
}
