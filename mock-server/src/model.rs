//! Wire types and in-memory store for the mock kennel backend.
//!
//! Field names follow the real backend's JSON. Types are defined here
//! independently of `kennel-core` so client/server drift shows up in tests.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Sex {
    Macho,
    Femea,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Status {
    Disponivel,
    Reservado,
    Vendido,
    MatrizPadreador,
    Indisponivel,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Guardian {
    pub id: i64,
    pub nome: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dog {
    pub id: i64,
    pub nome: String,
    pub raca: String,
    pub data_nascimento: NaiveDate,
    pub sexo: Sex,
    pub status: Status,
    pub tutor: Option<Guardian>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DogInput {
    pub nome: String,
    pub raca: String,
    pub data_nascimento: NaiveDate,
    pub sexo: Sex,
}

#[derive(Deserialize)]
pub struct StatusInput {
    pub status: Status,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Expense {
    pub id: i64,
    pub descricao: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub valor: Decimal,
    pub data: NaiveDate,
}

#[derive(Deserialize)]
pub struct ExpenseInput {
    pub descricao: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub valor: Decimal,
    pub data: Option<NaiveDate>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Sale {
    pub id: i64,
    #[serde(with = "rust_decimal::serde::float")]
    pub valor: Decimal,
    pub data: NaiveDate,
    #[serde(rename = "cachorroId")]
    pub dog_id: i64,
    pub tutor: Guardian,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaleInput {
    pub novo_tutor_id: i64,
    #[serde(with = "rust_decimal::serde::float")]
    pub valor: Decimal,
    pub data: NaiveDate,
}

#[derive(Serialize)]
pub struct SaleRecord {
    pub id: i64,
    #[serde(with = "rust_decimal::serde::float")]
    pub valor: Decimal,
    pub data: NaiveDate,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancialReport {
    pub cachorro_id: i64,
    pub nome_cachorro: String,
    pub historico_despesas: Vec<Expense>,
    #[serde(with = "rust_decimal::serde::float")]
    pub custo_total: Decimal,
    pub foi_vendido: bool,
    pub registro_venda: Option<SaleRecord>,
    #[serde(with = "rust_decimal::serde::float")]
    pub lucro: Decimal,
}

#[derive(Serialize)]
pub struct FinanceSummary {
    #[serde(with = "rust_decimal::serde::float")]
    pub receita: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub despesa: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub lucro: Decimal,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub caes_disponiveis: usize,
    pub total_tutores: usize,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DogRef {
    pub id: i64,
    pub nome: String,
    pub sexo: Sex,
}

impl From<&Dog> for DogRef {
    fn from(dog: &Dog) -> Self {
        Self {
            id: dog.id,
            nome: dog.nome.clone(),
            sexo: dog.sexo,
        }
    }
}

#[derive(Deserialize)]
pub struct OffspringInput {
    pub nome: String,
    pub sexo: Sex,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LitterInput {
    pub data_nascimento: NaiveDate,
    pub mae_id: Option<i64>,
    pub pai_id: Option<i64>,
    #[serde(default)]
    pub filhotes: Vec<OffspringInput>,
}

/// Stored litter; parents and puppies by id.
#[derive(Clone, Debug)]
pub struct Litter {
    pub id: i64,
    pub data_nascimento: NaiveDate,
    pub mae_id: Option<i64>,
    pub pai_id: Option<i64>,
    pub filhotes: Vec<i64>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LitterSummary {
    pub id: i64,
    pub data_nascimento: NaiveDate,
    pub mae: Option<DogRef>,
    pub pai: Option<DogRef>,
    pub total_filhotes: usize,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LitterDetails {
    pub id: i64,
    pub data_nascimento: NaiveDate,
    pub mae: Option<DogRef>,
    pub pai: Option<DogRef>,
    pub filhotes: Vec<DogRef>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub content: Vec<T>,
    pub number: usize,
    pub size: usize,
    pub total_elements: usize,
    pub total_pages: usize,
    pub first: bool,
    pub last: bool,
}

impl<T> Page<T> {
    /// Slice `items` into the zero-indexed page `number` of `size`.
    pub fn slice(items: Vec<T>, number: usize, size: usize) -> Self {
        let size = size.max(1);
        let total_elements = items.len();
        let total_pages = total_elements.div_ceil(size);
        let content = items
            .into_iter()
            .skip(number.saturating_mul(size))
            .take(size)
            .collect();
        Self {
            content,
            number,
            size,
            total_elements,
            total_pages,
            first: number == 0,
            last: number.saturating_add(1) >= total_pages,
        }
    }
}

#[derive(Deserialize)]
pub struct PageQuery {
    pub page: Option<usize>,
    pub size: Option<usize>,
    pub sexo: Option<Sex>,
}

/// Everything the mock backend knows. Ids are assigned sequentially per kind.
#[derive(Default)]
pub struct Store {
    pub dogs: BTreeMap<i64, Dog>,
    pub guardians: BTreeMap<i64, Guardian>,
    pub litters: BTreeMap<i64, Litter>,
    pub expenses: BTreeMap<i64, Vec<Expense>>,
    pub sales: BTreeMap<i64, Sale>,
    next_dog: i64,
    next_litter: i64,
    next_expense: i64,
    next_sale: i64,
}

impl Store {
    pub fn with_guardian(mut self, id: i64, nome: &str) -> Self {
        self.guardians.insert(
            id,
            Guardian {
                id,
                nome: nome.to_string(),
            },
        );
        self
    }

    pub fn insert_dog(&mut self, input: DogInput) -> Dog {
        self.next_dog += 1;
        let dog = Dog {
            id: self.next_dog,
            nome: input.nome,
            raca: input.raca,
            data_nascimento: input.data_nascimento,
            sexo: input.sexo,
            status: Status::Disponivel,
            tutor: None,
        };
        self.dogs.insert(dog.id, dog.clone());
        dog
    }

    pub fn insert_litter(
        &mut self,
        data_nascimento: NaiveDate,
        mae_id: Option<i64>,
        pai_id: Option<i64>,
        filhotes: Vec<i64>,
    ) -> Litter {
        self.next_litter += 1;
        let litter = Litter {
            id: self.next_litter,
            data_nascimento,
            mae_id,
            pai_id,
            filhotes,
        };
        self.litters.insert(litter.id, litter.clone());
        litter
    }

    pub fn insert_expense(&mut self, dog_id: i64, input: ExpenseInput, today: NaiveDate) -> Expense {
        self.next_expense += 1;
        let expense = Expense {
            id: self.next_expense,
            descricao: input.descricao,
            valor: input.valor,
            data: input.data.unwrap_or(today),
        };
        self.expenses.entry(dog_id).or_default().push(expense.clone());
        expense
    }

    pub fn insert_sale(&mut self, dog_id: i64, tutor: Guardian, valor: Decimal, data: NaiveDate) -> Sale {
        self.next_sale += 1;
        let sale = Sale {
            id: self.next_sale,
            valor,
            data,
            dog_id,
            tutor,
        };
        self.sales.insert(dog_id, sale.clone());
        sale
    }

    pub fn dog_ref(&self, id: Option<i64>) -> Option<DogRef> {
        id.and_then(|id| self.dogs.get(&id)).map(DogRef::from)
    }

    pub fn summarize(&self, litter: &Litter) -> LitterSummary {
        LitterSummary {
            id: litter.id,
            data_nascimento: litter.data_nascimento,
            mae: self.dog_ref(litter.mae_id),
            pai: self.dog_ref(litter.pai_id),
            total_filhotes: litter.filhotes.len(),
        }
    }

    pub fn details(&self, litter: &Litter) -> LitterDetails {
        LitterDetails {
            id: litter.id,
            data_nascimento: litter.data_nascimento,
            mae: self.dog_ref(litter.mae_id),
            pai: self.dog_ref(litter.pai_id),
            filhotes: litter
                .filhotes
                .iter()
                .filter_map(|id| self.dog_ref(Some(*id)))
                .collect(),
        }
    }

    pub fn financial_report(&self, dog: &Dog) -> FinancialReport {
        let historico_despesas = self.expenses.get(&dog.id).cloned().unwrap_or_default();
        let custo_total: Decimal = historico_despesas.iter().map(|e| e.valor).sum();
        let registro_venda = self.sales.get(&dog.id).map(|s| SaleRecord {
            id: s.id,
            valor: s.valor,
            data: s.data,
        });
        let receita = registro_venda.as_ref().map_or(Decimal::ZERO, |s| s.valor);
        FinancialReport {
            cachorro_id: dog.id,
            nome_cachorro: dog.nome.clone(),
            historico_despesas,
            custo_total,
            foi_vendido: registro_venda.is_some(),
            registro_venda,
            lucro: receita - custo_total,
        }
    }

    /// Kennel-wide sales and expenses dated on or after `since`.
    pub fn finance_since(&self, since: NaiveDate) -> FinanceSummary {
        let receita: Decimal = self
            .sales
            .values()
            .filter(|s| s.data >= since)
            .map(|s| s.valor)
            .sum();
        let despesa: Decimal = self
            .expenses
            .values()
            .flatten()
            .filter(|e| e.data >= since)
            .map(|e| e.valor)
            .sum();
        FinanceSummary {
            receita,
            despesa,
            lucro: receita - despesa,
        }
    }

    pub fn stats(&self) -> DashboardStats {
        DashboardStats {
            caes_disponiveis: self
                .dogs
                .values()
                .filter(|d| d.status == Status::Disponivel)
                .count(),
            total_tutores: self.guardians.len(),
        }
    }
}
