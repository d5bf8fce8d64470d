use std::collections::HashSet;
use std::sync::Arc;

use crate::core::error::{AppError, Result};
use crate::features::bairros::repositories::BairroRepository;
use crate::features::pessoas::dtos::{
    BairroDetalheDto, EnderecoDto, EnderecoResponseDto, MunicipioDetalheDto, PessoaDto,
    PessoaResponseDto,
};
use crate::features::pessoas::models::{
    Endereco, EnderecoDetalhado, NovaPessoa, NovoEndereco, Pessoa, PessoaFiltros,
};
use crate::features::pessoas::repositories::{EnderecoRepository, PessoaRepository};
use crate::shared::validation::{is_blank, is_status_valido};

const ERRO_INCLUIR: &str = "Não foi possível incluir pessoa no banco de dados.";
const ERRO_ALTERAR: &str = "Não foi possível alterar pessoa no banco de dados.";

/// A person payload that passed validation, with its addresses
#[derive(Debug, Clone)]
pub struct PessoaValidada<P> {
    pub pessoa: P,
    pub enderecos: Vec<EnderecoDto>,
}

/// Service for persons and their addresses
pub struct PessoaService {
    repository: Arc<dyn PessoaRepository>,
    enderecos: Arc<dyn EnderecoRepository>,
    bairros: Arc<dyn BairroRepository>,
}

impl PessoaService {
    pub fn new(
        repository: Arc<dyn PessoaRepository>,
        enderecos: Arc<dyn EnderecoRepository>,
        bairros: Arc<dyn BairroRepository>,
    ) -> Self {
        Self {
            repository,
            enderecos,
            bairros,
        }
    }

    /// All persons without their addresses
    pub async fn find_all(&self) -> Result<Vec<PessoaResponseDto>> {
        let pessoas = self.repository.find_all().await?;
        Ok(pessoas.into_iter().map(Into::into).collect())
    }

    pub async fn find_by_filters(&self, filtros: &PessoaFiltros) -> Result<Vec<PessoaResponseDto>> {
        let pessoas = self.repository.find_by_filters(filtros).await?;
        Ok(pessoas.into_iter().map(Into::into).collect())
    }

    /// Attach the full address hierarchy (bairro, municipio, UF) to a person
    /// already read from `tb_pessoa`
    pub async fn detalhar(&self, mut pessoa: PessoaResponseDto) -> Result<PessoaResponseDto> {
        pessoa.enderecos = self
            .enderecos
            .find_detalhados_by_pessoa(pessoa.codigo_pessoa)
            .await?
            .into_iter()
            .map(endereco_detalhado_dto)
            .collect();
        Ok(pessoa)
    }

    pub async fn validate_insert(&self, dto: &PessoaDto) -> Result<PessoaValidada<NovaPessoa>> {
        if campos_ausentes(dto) {
            return Err(invalido(
                ERRO_INCLUIR,
                "Os campos nome, sobrenome, idade, login, senha e status precisam estar inclusos no corpo da requisição.",
            ));
        }

        let nova = campos_obrigatorios(dto, ERRO_INCLUIR)?;

        if self.repository.find_by_login(&nova.login).await?.is_some() {
            return Err(invalido(ERRO_INCLUIR, "O login já existe."));
        }
        if !is_status_valido(nova.status) {
            return Err(invalido(ERRO_INCLUIR, "O status deve ser 1 ou 2."));
        }
        self.validate_enderecos(&dto.enderecos, ERRO_INCLUIR).await?;

        Ok(PessoaValidada {
            pessoa: nova,
            enderecos: dto.enderecos.clone(),
        })
    }

    pub async fn validate_update(&self, dto: &PessoaDto) -> Result<PessoaValidada<Pessoa>> {
        if dto.codigo_pessoa.is_none() && campos_ausentes(dto) {
            return Err(invalido(
                ERRO_ALTERAR,
                "Os campos codigoPessoa, nome, sobrenome, idade, login, senha e status precisam estar inclusos no corpo da requisição.",
            ));
        }

        let Some(codigo_pessoa) = dto.codigo_pessoa else {
            return Err(invalido(ERRO_ALTERAR, "O campo 'codigoPessoa' é obrigatório."));
        };

        let dados = campos_obrigatorios(dto, ERRO_ALTERAR)?;

        if self.repository.find_by_id(codigo_pessoa).await?.is_none() {
            return Err(invalido(ERRO_ALTERAR, "O codigoPessoa fornecido não existe."));
        }
        if let Some(existente) = self.repository.find_by_login(&dados.login).await? {
            if existente.codigo_pessoa != codigo_pessoa {
                return Err(invalido(ERRO_ALTERAR, "O login já existe."));
            }
        }
        if !is_status_valido(dados.status) {
            return Err(invalido(ERRO_ALTERAR, "O status deve ser 1 ou 2."));
        }
        self.validate_enderecos(&dto.enderecos, ERRO_ALTERAR).await?;

        Ok(PessoaValidada {
            pessoa: Pessoa {
                codigo_pessoa,
                nome: dados.nome,
                sobrenome: dados.sobrenome,
                idade: dados.idade,
                login: dados.login,
                senha: dados.senha,
                status: dados.status,
            },
            enderecos: dto.enderecos.clone(),
        })
    }

    /// Insert the person, then each address under the new identifier
    pub async fn insert(&self, validada: PessoaValidada<NovaPessoa>) -> Result<Vec<PessoaResponseDto>> {
        let pessoa = self.repository.insert(validada.pessoa).await?;

        for endereco in validada.enderecos {
            if let Some(novo) = novo_endereco(pessoa.codigo_pessoa, endereco) {
                self.enderecos.insert(novo).await?;
            }
        }

        tracing::info!(
            "Pessoa {} inserted with codigo_pessoa={}",
            pessoa.login,
            pessoa.codigo_pessoa
        );
        self.find_all().await
    }

    /// Overwrite the person and reconcile its addresses.
    ///
    /// Submitted addresses whose id matches a stored one are updated, those
    /// without an id are inserted, stored addresses left untouched are removed.
    pub async fn update(&self, validada: PessoaValidada<Pessoa>) -> Result<Vec<PessoaResponseDto>> {
        let pessoa = validada.pessoa;
        self.repository.update(&pessoa).await?;

        let armazenados = self.enderecos.find_by_pessoa(pessoa.codigo_pessoa).await?;
        let ids_armazenados: HashSet<i64> =
            armazenados.iter().map(|e| e.codigo_endereco).collect();

        let mut tocados = HashSet::new();
        let mut inseridos = 0usize;

        for endereco in validada.enderecos {
            match endereco.codigo_endereco {
                Some(codigo_endereco) if ids_armazenados.contains(&codigo_endereco) => {
                    if let Some(atualizado) =
                        endereco_existente(pessoa.codigo_pessoa, codigo_endereco, endereco)
                    {
                        self.enderecos.update(&atualizado).await?;
                        tocados.insert(codigo_endereco);
                    }
                }
                Some(codigo_endereco) => {
                    tracing::warn!(
                        "Ignoring codigo_endereco={} not owned by codigo_pessoa={}",
                        codigo_endereco,
                        pessoa.codigo_pessoa
                    );
                }
                None => {
                    if let Some(novo) = novo_endereco(pessoa.codigo_pessoa, endereco) {
                        self.enderecos.insert(novo).await?;
                        inseridos += 1;
                    }
                }
            }
        }

        if tocados.is_empty() && inseridos == 0 && !armazenados.is_empty() {
            let removidos = self.enderecos.delete_by_pessoa(pessoa.codigo_pessoa).await?;
            tracing::info!(
                "Removed {} enderecos of codigo_pessoa={}",
                removidos,
                pessoa.codigo_pessoa
            );
        } else {
            for codigo_endereco in ids_armazenados.difference(&tocados) {
                self.enderecos.delete_by_id(*codigo_endereco).await?;
            }
        }

        tracing::info!("Pessoa codigo_pessoa={} updated", pessoa.codigo_pessoa);
        self.find_all().await
    }

    /// Every submitted address needs an existing bairro
    async fn validate_enderecos(&self, enderecos: &[EnderecoDto], prefixo: &str) -> Result<()> {
        for endereco in enderecos {
            let Some(codigo_bairro) = endereco.codigo_bairro else {
                return Err(invalido(
                    prefixo,
                    "O campo 'codigoBairro' em 'enderecos' é obrigatório.",
                ));
            };
            if self.bairros.find_by_id(codigo_bairro).await?.is_none() {
                return Err(invalido(
                    prefixo,
                    &format!("O código do bairro {} não existe.", codigo_bairro),
                ));
            }
        }
        Ok(())
    }
}

fn invalido(prefixo: &str, detalhe: &str) -> AppError {
    AppError::Validation(format!("{} {}", prefixo, detalhe))
}

fn campos_ausentes(dto: &PessoaDto) -> bool {
    is_blank(dto.nome.as_deref())
        && is_blank(dto.sobrenome.as_deref())
        && dto.idade.is_none()
        && is_blank(dto.login.as_deref())
        && is_blank(dto.senha.as_deref())
        && dto.status.is_none()
}

fn texto_obrigatorio(valor: Option<&str>, campo: &str, prefixo: &str) -> Result<String> {
    match valor {
        Some(v) if !v.trim().is_empty() => Ok(v.trim().to_string()),
        _ => Err(invalido(
            prefixo,
            &format!("O campo '{}' é obrigatório e não pode estar vazio.", campo),
        )),
    }
}

/// Presence checks in payload order; the password is kept as sent
fn campos_obrigatorios(dto: &PessoaDto, prefixo: &str) -> Result<NovaPessoa> {
    let nome = texto_obrigatorio(dto.nome.as_deref(), "nome", prefixo)?;
    let sobrenome = texto_obrigatorio(dto.sobrenome.as_deref(), "sobrenome", prefixo)?;
    let Some(idade) = dto.idade else {
        return Err(invalido(prefixo, "O campo 'idade' é obrigatório."));
    };
    let login = texto_obrigatorio(dto.login.as_deref(), "login", prefixo)?;
    let senha = match dto.senha.as_deref() {
        Some(s) if !s.trim().is_empty() => s.to_string(),
        _ => {
            return Err(invalido(
                prefixo,
                "O campo 'senha' é obrigatório e não pode estar vazio.",
            ))
        }
    };
    let Some(status) = dto.status else {
        return Err(invalido(prefixo, "O campo 'status' é obrigatório."));
    };

    Ok(NovaPessoa {
        nome,
        sobrenome,
        idade,
        login,
        senha,
        status,
    })
}

fn novo_endereco(codigo_pessoa: i64, dto: EnderecoDto) -> Option<NovoEndereco> {
    Some(NovoEndereco {
        codigo_pessoa,
        codigo_bairro: dto.codigo_bairro?,
        nome_rua: dto.nome_rua,
        numero: dto.numero,
        complemento: dto.complemento,
        cep: dto.cep,
    })
}

fn endereco_existente(codigo_pessoa: i64, codigo_endereco: i64, dto: EnderecoDto) -> Option<Endereco> {
    Some(Endereco {
        codigo_endereco,
        codigo_pessoa,
        codigo_bairro: dto.codigo_bairro?,
        nome_rua: dto.nome_rua,
        numero: dto.numero,
        complemento: dto.complemento,
        cep: dto.cep,
    })
}

fn endereco_detalhado_dto(detalhado: EnderecoDetalhado) -> EnderecoResponseDto {
    let EnderecoDetalhado {
        endereco,
        bairro,
        municipio,
        uf,
    } = detalhado;

    let municipio = municipio.map(|m| MunicipioDetalheDto {
        codigo_municipio: m.codigo_municipio,
        codigo_uf: m.codigo_uf,
        nome: m.nome,
        status: m.status,
        uf: uf.map(Into::into),
    });

    let bairro = bairro.map(|b| BairroDetalheDto {
        codigo_bairro: b.codigo_bairro,
        codigo_municipio: b.codigo_municipio,
        nome: b.nome,
        status: b.status,
        municipio,
    });

    let mut dto = EnderecoResponseDto::from(endereco);
    dto.bairro = bairro;
    dto
}
