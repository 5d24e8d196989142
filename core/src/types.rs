//! Entity model for the kennel API.
//!
//! # Design
//! Field names are English in Rust and carry the backend's JSON names through
//! `serde(rename)`. References the backend may omit (a dog's guardian, a
//! litter's parents, pagination metadata) are explicit `Option`s that accept
//! both `null` and a missing key. Money is `Decimal` on our side and a JSON
//! number on the wire.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

pub type DogId = i64;
pub type GuardianId = i64;
pub type LitterId = i64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sex {
    #[serde(rename = "MACHO")]
    Male,
    #[serde(rename = "FEMEA")]
    Female,
}

impl Sex {
    /// Wire name, as used in the `sexo` query filter.
    pub fn as_str(self) -> &'static str {
        match self {
            Sex::Male => "MACHO",
            Sex::Female => "FEMEA",
        }
    }
}

/// Lifecycle state of a dog. Always the backend's value; the client never
/// derives a transition itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DogStatus {
    #[serde(rename = "DISPONIVEL")]
    Available,
    #[serde(rename = "RESERVADO")]
    Reserved,
    #[serde(rename = "VENDIDO")]
    Sold,
    #[serde(rename = "MATRIZ_PADREADOR")]
    BreedingStock,
    #[serde(rename = "INDISPONIVEL")]
    Unavailable,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Guardian {
    pub id: GuardianId,
    #[serde(rename = "nome")]
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dog {
    pub id: DogId,
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "raca")]
    pub breed: String,
    #[serde(rename = "dataNascimento")]
    pub birth_date: NaiveDate,
    #[serde(rename = "sexo")]
    pub sex: Sex,
    pub status: DogStatus,
    #[serde(rename = "tutor", default)]
    pub guardian: Option<Guardian>,
}

/// Body for creating or replacing a dog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DogPayload {
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "raca")]
    pub breed: String,
    #[serde(rename = "dataNascimento")]
    pub birth_date: NaiveDate,
    #[serde(rename = "sexo")]
    pub sex: Sex,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusUpdate {
    pub status: DogStatus,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expense {
    pub id: i64,
    #[serde(rename = "descricao")]
    pub description: String,
    #[serde(rename = "valor", with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    #[serde(rename = "data")]
    pub date: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpensePayload {
    #[serde(rename = "descricao")]
    pub description: String,
    #[serde(rename = "valor", with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    /// The backend stamps today's date when absent.
    #[serde(rename = "data", skip_serializing_if = "Option::is_none", default)]
    pub date: Option<NaiveDate>,
}

/// A sale as embedded in a financial report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaleRecord {
    pub id: i64,
    #[serde(rename = "valor", with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    #[serde(rename = "data")]
    pub date: NaiveDate,
}

/// A recorded sale, as returned by the sell endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sale {
    pub id: i64,
    #[serde(rename = "valor", with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    #[serde(rename = "data")]
    pub date: NaiveDate,
    #[serde(rename = "tutor", alias = "novoTutor")]
    pub guardian: Guardian,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalePayload {
    #[serde(rename = "novoTutorId")]
    pub new_guardian_id: GuardianId,
    #[serde(rename = "valor", with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    #[serde(rename = "data")]
    pub date: NaiveDate,
}

/// Per-dog cost and profit summary. Computed by the backend; see
/// `crate::finance` for the aggregation rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinancialReport {
    #[serde(rename = "cachorroId", default, skip_serializing_if = "Option::is_none")]
    pub dog_id: Option<DogId>,
    #[serde(rename = "nomeCachorro", default, skip_serializing_if = "Option::is_none")]
    pub dog_name: Option<String>,
    #[serde(rename = "historicoDespesas", default)]
    pub expenses: Vec<Expense>,
    #[serde(rename = "custoTotal", with = "rust_decimal::serde::float")]
    pub total_cost: Decimal,
    #[serde(rename = "registroVenda", default)]
    pub sale: Option<SaleRecord>,
    #[serde(rename = "lucro", with = "rust_decimal::serde::float")]
    pub profit: Decimal,
}

/// Kennel-wide revenue and spending over the backend's rolling window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinanceSummary {
    #[serde(rename = "receita", with = "rust_decimal::serde::float")]
    pub revenue: Decimal,
    #[serde(rename = "despesa", with = "rust_decimal::serde::float")]
    pub expenses: Decimal,
    #[serde(rename = "lucro", with = "rust_decimal::serde::float")]
    pub profit: Decimal,
}

/// Headline counters of the kennel dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardStats {
    #[serde(rename = "caesDisponiveis")]
    pub available_dogs: u64,
    #[serde(rename = "totalTutores")]
    pub guardians: u64,
}

/// Short form of a dog used for litter parents and offspring.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DogSummary {
    pub id: DogId,
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "sexo", default, skip_serializing_if = "Option::is_none")]
    pub sex: Option<Sex>,
    #[serde(rename = "raca", default, skip_serializing_if = "Option::is_none")]
    pub breed: Option<String>,
}

/// A puppy to be registered together with its litter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Offspring {
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "sexo")]
    pub sex: Sex,
}

/// Body for creating a litter. Missing parents are sent as explicit `null`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LitterPayload {
    #[serde(rename = "dataNascimento")]
    pub birth_date: NaiveDate,
    #[serde(rename = "maeId")]
    pub mother_id: Option<DogId>,
    #[serde(rename = "paiId")]
    pub father_id: Option<DogId>,
    #[serde(rename = "filhotes", default)]
    pub offspring: Vec<Offspring>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatedLitter {
    pub id: LitterId,
}

/// Row of the litter listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LitterSummary {
    pub id: LitterId,
    #[serde(rename = "dataNascimento")]
    pub birth_date: NaiveDate,
    #[serde(rename = "mae", default)]
    pub mother: Option<DogSummary>,
    #[serde(rename = "pai", default)]
    pub father: Option<DogSummary>,
    #[serde(rename = "totalFilhotes", default)]
    pub offspring_count: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LitterDetails {
    pub id: LitterId,
    #[serde(rename = "dataNascimento")]
    pub birth_date: NaiveDate,
    #[serde(rename = "mae", default)]
    pub mother: Option<DogSummary>,
    #[serde(rename = "pai", default)]
    pub father: Option<DogSummary>,
    #[serde(rename = "filhotes", default)]
    pub offspring: Vec<DogSummary>,
}

/// Paginated envelope. Only `content` is guaranteed to be present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub content: Vec<T>,
    #[serde(default)]
    pub number: Option<u32>,
    #[serde(default)]
    pub size: Option<u32>,
    #[serde(default)]
    pub total_elements: Option<u64>,
    #[serde(default)]
    pub total_pages: Option<u32>,
    #[serde(default)]
    pub first: Option<bool>,
    #[serde(default)]
    pub last: Option<bool>,
}

/// Zero-indexed page selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u32,
    pub size: u32,
}

impl PageRequest {
    pub const DEFAULT_SIZE: u32 = 10;

    pub fn new(page: u32, size: u32) -> Self {
        Self { page, size }
    }

    pub fn next(self) -> Self {
        Self {
            page: self.page.saturating_add(1),
            size: self.size,
        }
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 0,
            size: Self::DEFAULT_SIZE,
        }
    }
}

/// Which parent slot of a litter a dog occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParentRole {
    Mother,
    Father,
}

impl ParentRole {
    /// Sex a dog in this role is expected to have.
    pub fn expected_sex(self) -> Sex {
        match self {
            ParentRole::Mother => Sex::Female,
            ParentRole::Father => Sex::Male,
        }
    }

    /// Role of `dog_id` in `litter`, read from the litter's own parent
    /// references. The mother slot is checked first.
    pub fn detect(litter: &LitterSummary, dog_id: DogId) -> Option<Self> {
        let is = |parent: &Option<DogSummary>| parent.as_ref().is_some_and(|p| p.id == dog_id);
        if is(&litter.mother) {
            Some(ParentRole::Mother)
        } else if is(&litter.father) {
            Some(ParentRole::Father)
        } else {
            None
        }
    }
}

/// A litter a given dog took part in, labelled with its role.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DogLitter {
    pub litter: LitterSummary,
    /// `None` when the backend listed a litter that references the dog in
    /// neither parent slot.
    pub role: Option<ParentRole>,
}

impl DogLitter {
    /// False when the stored role contradicts the dog's recorded sex, or
    /// when no role could be detected at all.
    pub fn is_consistent_with(&self, sex: Sex) -> bool {
        self.role.is_some_and(|role| role.expected_sex() == sex)
    }
}
