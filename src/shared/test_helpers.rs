//! In-memory implementations of every repository trait, used by service and
//! handler tests in place of PostgreSQL.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;

use crate::core::error::{AppError, Result};
use crate::features::bairros::models::{Bairro, BairroFiltros, NovoBairro};
use crate::features::bairros::repositories::BairroRepository;
use crate::features::municipios::models::{Municipio, MunicipioFiltros, NovoMunicipio};
use crate::features::municipios::repositories::MunicipioRepository;
use crate::features::pessoas::models::{
    Endereco, EnderecoDetalhado, NovaPessoa, NovoEndereco, Pessoa, PessoaFiltros,
};
use crate::features::pessoas::repositories::{EnderecoRepository, PessoaRepository};
use crate::features::ufs::models::{NovaUf, Uf, UfFiltros};
use crate::features::ufs::repositories::UfRepository;
use crate::features::AppServices;

/// Write performed on `tb_endereco`, recorded in call order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnderecoOp {
    Insert(i64),
    Update(i64),
    Delete(i64),
    DeleteByPessoa(i64),
}

#[derive(Default)]
struct Tabelas {
    ufs: Vec<Uf>,
    municipios: Vec<Municipio>,
    bairros: Vec<Bairro>,
    pessoas: Vec<Pessoa>,
    enderecos: Vec<Endereco>,
    seq_uf: i64,
    seq_municipio: i64,
    seq_bairro: i64,
    seq_pessoa: i64,
    seq_endereco: i64,
    endereco_ops: Vec<EnderecoOp>,
    consultas_pessoa: usize,
}

#[derive(Default)]
pub struct InMemoryDb {
    tabelas: Mutex<Tabelas>,
    fail_writes: AtomicBool,
}

fn upper_eq(a: &str, b: &str) -> bool {
    a.trim().to_uppercase() == b.trim().to_uppercase()
}

fn desc<T, K: Ord>(mut items: Vec<T>, key: impl Fn(&T) -> K) -> Vec<T> {
    items.sort_by(|a, b| key(b).cmp(&key(a)));
    items
}

impl InMemoryDb {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    fn lock(&self) -> MutexGuard<'_, Tabelas> {
        self.tabelas.lock().unwrap()
    }

    /// Make every subsequent insert/update/delete fail with a database error
    pub fn fail_writes(&self) {
        self.fail_writes.store(true, Ordering::SeqCst);
    }

    fn check_write(&self) -> Result<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            Err(AppError::Database(sqlx::Error::PoolTimedOut))
        } else {
            Ok(())
        }
    }

    pub fn seed_uf(&self, sigla: &str, nome: &str, status: i32) -> Uf {
        let mut t = self.lock();
        t.seq_uf += 1;
        let uf = Uf {
            codigo_uf: t.seq_uf,
            sigla: sigla.to_uppercase(),
            nome: nome.to_uppercase(),
            status,
        };
        t.ufs.push(uf.clone());
        uf
    }

    pub fn seed_municipio(&self, codigo_uf: i64, nome: &str, status: i32) -> Municipio {
        let mut t = self.lock();
        t.seq_municipio += 1;
        let municipio = Municipio {
            codigo_municipio: t.seq_municipio,
            codigo_uf,
            nome: nome.to_uppercase(),
            status,
        };
        t.municipios.push(municipio.clone());
        municipio
    }

    pub fn seed_bairro(&self, codigo_municipio: i64, nome: &str, status: i32) -> Bairro {
        let mut t = self.lock();
        t.seq_bairro += 1;
        let bairro = Bairro {
            codigo_bairro: t.seq_bairro,
            codigo_municipio,
            nome: nome.to_uppercase(),
            status,
        };
        t.bairros.push(bairro.clone());
        bairro
    }

    pub fn seed_pessoa(&self, login: &str, status: i32) -> Pessoa {
        let mut t = self.lock();
        t.seq_pessoa += 1;
        let pessoa = Pessoa {
            codigo_pessoa: t.seq_pessoa,
            nome: "Maria".to_string(),
            sobrenome: "Silva".to_string(),
            idade: 30,
            login: login.to_string(),
            senha: "segredo".to_string(),
            status,
        };
        t.pessoas.push(pessoa.clone());
        pessoa
    }

    pub fn seed_endereco(&self, codigo_pessoa: i64, codigo_bairro: i64, rua: &str) -> Endereco {
        let mut t = self.lock();
        t.seq_endereco += 1;
        let endereco = Endereco {
            codigo_endereco: t.seq_endereco,
            codigo_pessoa,
            codigo_bairro,
            nome_rua: Some(rua.to_string()),
            numero: Some("10".to_string()),
            complemento: None,
            cep: Some("01000-000".to_string()),
        };
        t.enderecos.push(endereco.clone());
        endereco
    }

    pub fn enderecos(&self) -> Vec<Endereco> {
        self.lock().enderecos.clone()
    }

    pub fn endereco_ops(&self) -> Vec<EnderecoOp> {
        self.lock().endereco_ops.clone()
    }

    /// Reads of `tb_pessoa` by id or filters
    pub fn consultas_pessoa(&self) -> usize {
        self.lock().consultas_pessoa
    }

    pub fn municipio_count(&self) -> usize {
        self.lock().municipios.len()
    }
}

#[async_trait]
impl UfRepository for InMemoryDb {
    async fn find_by_id(&self, codigo_uf: i64) -> Result<Option<Uf>> {
        Ok(self.lock().ufs.iter().find(|u| u.codigo_uf == codigo_uf).cloned())
    }

    async fn find_by_nome(&self, nome: &str) -> Result<Option<Uf>> {
        Ok(self.lock().ufs.iter().find(|u| upper_eq(&u.nome, nome)).cloned())
    }

    async fn find_by_sigla(&self, sigla: &str) -> Result<Option<Uf>> {
        Ok(self.lock().ufs.iter().find(|u| upper_eq(&u.sigla, sigla)).cloned())
    }

    async fn find_by_status(&self, status: i32) -> Result<Vec<Uf>> {
        let ufs = self.lock().ufs.iter().filter(|u| u.status == status).cloned().collect();
        Ok(desc(ufs, |u: &Uf| u.codigo_uf))
    }

    async fn find_all(&self) -> Result<Vec<Uf>> {
        Ok(desc(self.lock().ufs.clone(), |u: &Uf| u.codigo_uf))
    }

    async fn find_by_filters(&self, f: &UfFiltros) -> Result<Vec<Uf>> {
        let ufs = self
            .lock()
            .ufs
            .iter()
            .filter(|u| f.codigo_uf.map_or(true, |c| u.codigo_uf == c))
            .filter(|u| f.sigla.as_deref().map_or(true, |s| upper_eq(&u.sigla, s)))
            .filter(|u| f.nome.as_deref().map_or(true, |n| upper_eq(&u.nome, n)))
            .filter(|u| f.status.map_or(true, |s| u.status == s))
            .cloned()
            .collect();
        Ok(desc(ufs, |u: &Uf| u.codigo_uf))
    }

    async fn insert(&self, nova: NovaUf) -> Result<Uf> {
        self.check_write()?;
        Ok(self.seed_uf(nova.sigla.trim(), nova.nome.trim(), nova.status))
    }

    async fn update(&self, uf: &Uf) -> Result<()> {
        self.check_write()?;
        let mut t = self.lock();
        if let Some(stored) = t.ufs.iter_mut().find(|u| u.codigo_uf == uf.codigo_uf) {
            stored.sigla = uf.sigla.trim().to_uppercase();
            stored.nome = uf.nome.trim().to_uppercase();
            stored.status = uf.status;
        }
        Ok(())
    }
}

#[async_trait]
impl MunicipioRepository for InMemoryDb {
    async fn find_by_id(&self, codigo_municipio: i64) -> Result<Option<Municipio>> {
        Ok(self
            .lock()
            .municipios
            .iter()
            .find(|m| m.codigo_municipio == codigo_municipio)
            .cloned())
    }

    async fn find_by_nome(&self, nome: &str) -> Result<Option<Municipio>> {
        Ok(self
            .lock()
            .municipios
            .iter()
            .find(|m| upper_eq(&m.nome, nome))
            .cloned())
    }

    async fn find_all(&self) -> Result<Vec<Municipio>> {
        Ok(desc(self.lock().municipios.clone(), |m: &Municipio| {
            m.codigo_municipio
        }))
    }

    async fn find_by_filters(&self, f: &MunicipioFiltros) -> Result<Vec<Municipio>> {
        let municipios = self
            .lock()
            .municipios
            .iter()
            .filter(|m| f.codigo_municipio.map_or(true, |c| m.codigo_municipio == c))
            .filter(|m| f.codigo_uf.map_or(true, |c| m.codigo_uf == c))
            .filter(|m| f.nome.as_deref().map_or(true, |n| upper_eq(&m.nome, n)))
            .filter(|m| f.status.map_or(true, |s| m.status == s))
            .cloned()
            .collect();
        Ok(desc(municipios, |m: &Municipio| m.codigo_municipio))
    }

    async fn insert(&self, novo: NovoMunicipio) -> Result<Municipio> {
        self.check_write()?;
        Ok(self.seed_municipio(novo.codigo_uf, novo.nome.trim(), novo.status))
    }

    async fn update(&self, municipio: &Municipio) -> Result<()> {
        self.check_write()?;
        let mut t = self.lock();
        if let Some(stored) = t
            .municipios
            .iter_mut()
            .find(|m| m.codigo_municipio == municipio.codigo_municipio)
        {
            stored.codigo_uf = municipio.codigo_uf;
            stored.nome = municipio.nome.trim().to_uppercase();
            stored.status = municipio.status;
        }
        Ok(())
    }
}

#[async_trait]
impl BairroRepository for InMemoryDb {
    async fn find_by_id(&self, codigo_bairro: i64) -> Result<Option<Bairro>> {
        Ok(self
            .lock()
            .bairros
            .iter()
            .find(|b| b.codigo_bairro == codigo_bairro)
            .cloned())
    }

    async fn find_by_nome(&self, nome: &str) -> Result<Option<Bairro>> {
        Ok(self
            .lock()
            .bairros
            .iter()
            .find(|b| upper_eq(&b.nome, nome))
            .cloned())
    }

    async fn find_all(&self) -> Result<Vec<Bairro>> {
        Ok(desc(self.lock().bairros.clone(), |b: &Bairro| b.codigo_bairro))
    }

    async fn find_by_filters(&self, f: &BairroFiltros) -> Result<Vec<Bairro>> {
        let bairros = self
            .lock()
            .bairros
            .iter()
            .filter(|b| f.codigo_bairro.map_or(true, |c| b.codigo_bairro == c))
            .filter(|b| f.codigo_municipio.map_or(true, |c| b.codigo_municipio == c))
            .filter(|b| f.nome.as_deref().map_or(true, |n| upper_eq(&b.nome, n)))
            .filter(|b| f.status.map_or(true, |s| b.status == s))
            .cloned()
            .collect();
        Ok(desc(bairros, |b: &Bairro| b.codigo_bairro))
    }

    async fn insert(&self, novo: NovoBairro) -> Result<Bairro> {
        self.check_write()?;
        Ok(self.seed_bairro(novo.codigo_municipio, novo.nome.trim(), novo.status))
    }

    async fn update(&self, bairro: &Bairro) -> Result<()> {
        self.check_write()?;
        let mut t = self.lock();
        if let Some(stored) = t
            .bairros
            .iter_mut()
            .find(|b| b.codigo_bairro == bairro.codigo_bairro)
        {
            stored.codigo_municipio = bairro.codigo_municipio;
            stored.nome = bairro.nome.trim().to_uppercase();
            stored.status = bairro.status;
        }
        Ok(())
    }
}

#[async_trait]
impl PessoaRepository for InMemoryDb {
    async fn find_by_id(&self, codigo_pessoa: i64) -> Result<Option<Pessoa>> {
        let mut t = self.lock();
        t.consultas_pessoa += 1;
        Ok(t.pessoas
            .iter()
            .find(|p| p.codigo_pessoa == codigo_pessoa)
            .cloned())
    }

    async fn find_by_login(&self, login: &str) -> Result<Option<Pessoa>> {
        Ok(self
            .lock()
            .pessoas
            .iter()
            .find(|p| upper_eq(&p.login, login))
            .cloned())
    }

    async fn find_all(&self) -> Result<Vec<Pessoa>> {
        Ok(desc(self.lock().pessoas.clone(), |p: &Pessoa| p.codigo_pessoa))
    }

    async fn find_by_filters(&self, f: &PessoaFiltros) -> Result<Vec<Pessoa>> {
        let mut t = self.lock();
        t.consultas_pessoa += 1;
        let pessoas = t
            .pessoas
            .iter()
            .filter(|p| f.codigo_pessoa.map_or(true, |c| p.codigo_pessoa == c))
            .filter(|p| f.login.as_deref().map_or(true, |l| upper_eq(&p.login, l)))
            .filter(|p| f.status.map_or(true, |s| p.status == s))
            .cloned()
            .collect();
        Ok(desc(pessoas, |p: &Pessoa| p.codigo_pessoa))
    }

    async fn insert(&self, nova: NovaPessoa) -> Result<Pessoa> {
        self.check_write()?;
        let mut t = self.lock();
        t.seq_pessoa += 1;
        let pessoa = Pessoa {
            codigo_pessoa: t.seq_pessoa,
            nome: nova.nome,
            sobrenome: nova.sobrenome,
            idade: nova.idade,
            login: nova.login,
            senha: nova.senha,
            status: nova.status,
        };
        t.pessoas.push(pessoa.clone());
        Ok(pessoa)
    }

    async fn update(&self, pessoa: &Pessoa) -> Result<()> {
        self.check_write()?;
        let mut t = self.lock();
        if let Some(stored) = t
            .pessoas
            .iter_mut()
            .find(|p| p.codigo_pessoa == pessoa.codigo_pessoa)
        {
            *stored = pessoa.clone();
        }
        Ok(())
    }
}

#[async_trait]
impl EnderecoRepository for InMemoryDb {
    async fn find_by_pessoa(&self, codigo_pessoa: i64) -> Result<Vec<Endereco>> {
        Ok(self
            .lock()
            .enderecos
            .iter()
            .filter(|e| e.codigo_pessoa == codigo_pessoa)
            .cloned()
            .collect())
    }

    async fn find_detalhados_by_pessoa(
        &self,
        codigo_pessoa: i64,
    ) -> Result<Vec<EnderecoDetalhado>> {
        let t = self.lock();
        Ok(t.enderecos
            .iter()
            .filter(|e| e.codigo_pessoa == codigo_pessoa)
            .map(|e| {
                let bairro = t
                    .bairros
                    .iter()
                    .find(|b| b.codigo_bairro == e.codigo_bairro)
                    .cloned();
                let municipio = bairro.as_ref().and_then(|b| {
                    t.municipios
                        .iter()
                        .find(|m| m.codigo_municipio == b.codigo_municipio)
                        .cloned()
                });
                let uf = municipio.as_ref().and_then(|m| {
                    t.ufs.iter().find(|u| u.codigo_uf == m.codigo_uf).cloned()
                });
                EnderecoDetalhado {
                    endereco: e.clone(),
                    bairro,
                    municipio,
                    uf,
                }
            })
            .collect())
    }

    async fn insert(&self, novo: NovoEndereco) -> Result<Endereco> {
        self.check_write()?;
        let mut t = self.lock();
        t.seq_endereco += 1;
        let endereco = Endereco {
            codigo_endereco: t.seq_endereco,
            codigo_pessoa: novo.codigo_pessoa,
            codigo_bairro: novo.codigo_bairro,
            nome_rua: novo.nome_rua,
            numero: novo.numero,
            complemento: novo.complemento,
            cep: novo.cep,
        };
        t.enderecos.push(endereco.clone());
        t.endereco_ops.push(EnderecoOp::Insert(endereco.codigo_endereco));
        Ok(endereco)
    }

    async fn update(&self, endereco: &Endereco) -> Result<()> {
        self.check_write()?;
        let mut t = self.lock();
        if let Some(stored) = t
            .enderecos
            .iter_mut()
            .find(|e| e.codigo_endereco == endereco.codigo_endereco)
        {
            *stored = endereco.clone();
        }
        t.endereco_ops.push(EnderecoOp::Update(endereco.codigo_endereco));
        Ok(())
    }

    async fn delete_by_id(&self, codigo_endereco: i64) -> Result<()> {
        self.check_write()?;
        let mut t = self.lock();
        t.enderecos.retain(|e| e.codigo_endereco != codigo_endereco);
        t.endereco_ops.push(EnderecoOp::Delete(codigo_endereco));
        Ok(())
    }

    async fn delete_by_pessoa(&self, codigo_pessoa: i64) -> Result<u64> {
        self.check_write()?;
        let mut t = self.lock();
        let before = t.enderecos.len();
        t.enderecos.retain(|e| e.codigo_pessoa != codigo_pessoa);
        let removed = (before - t.enderecos.len()) as u64;
        t.endereco_ops.push(EnderecoOp::DeleteByPessoa(codigo_pessoa));
        Ok(removed)
    }
}

/// Every service wired to the same in-memory database
pub fn in_memory_services(db: &Arc<InMemoryDb>) -> AppServices {
    AppServices::new(
        db.clone(),
        db.clone(),
        db.clone(),
        db.clone(),
        db.clone(),
    )
}
