/// Status value for an active record
pub const STATUS_ATIVO: i32 = 1;

/// Status value for an inactive record
pub const STATUS_INATIVO: i32 = 2;

// =============================================================================
// BRAZILIAN STATES
// =============================================================================

/// Every valid (name, abbreviation) pair, uppercase.
pub const UFS_BRASIL: [(&str, &str); 27] = [
    ("ACRE", "AC"),
    ("ALAGOAS", "AL"),
    ("AMAPÁ", "AP"),
    ("AMAZONAS", "AM"),
    ("BAHIA", "BA"),
    ("CEARÁ", "CE"),
    ("DISTRITO FEDERAL", "DF"),
    ("ESPÍRITO SANTO", "ES"),
    ("GOIÁS", "GO"),
    ("MARANHÃO", "MA"),
    ("MATO GROSSO", "MT"),
    ("MATO GROSSO DO SUL", "MS"),
    ("MINAS GERAIS", "MG"),
    ("PARÁ", "PA"),
    ("PARAÍBA", "PB"),
    ("PARANÁ", "PR"),
    ("PERNAMBUCO", "PE"),
    ("PIAUÍ", "PI"),
    ("RIO DE JANEIRO", "RJ"),
    ("RIO GRANDE DO NORTE", "RN"),
    ("RIO GRANDE DO SUL", "RS"),
    ("RONDÔNIA", "RO"),
    ("RORAIMA", "RR"),
    ("SANTA CATARINA", "SC"),
    ("SÃO PAULO", "SP"),
    ("SERGIPE", "SE"),
    ("TOCANTINS", "TO"),
];
