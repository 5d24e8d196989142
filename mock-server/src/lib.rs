//! In-memory stand-in for the kennel backend.
//!
//! Serves every endpoint the client core consumes and applies the backend's
//! business rules: parent sex on litter creation, unknown ids, negative
//! amounts, and the AVAILABLE -> SOLD transition on sale. Rejections use the
//! backend's `{"mensagem", "status", "timestamp"}` envelope.

pub mod model;

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use chrono::{Days, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde_json::json;
use tokio::{net::TcpListener, sync::RwLock};
use tracing::{info, warn};

use model::{
    DashboardStats, Dog, DogInput, ExpenseInput, FinanceSummary, FinancialReport, Guardian,
    LitterDetails, LitterInput, LitterSummary, Page, PageQuery, Sale, SaleInput, Sex, Status,
    StatusInput, Store,
};

pub type Db = Arc<RwLock<Store>>;

const DEFAULT_PAGE_SIZE: usize = 10;
const FINANCE_WINDOW_DAYS: u64 = 30;

pub fn app() -> Router {
    app_with(Store::default())
}

pub fn app_with(store: Store) -> Router {
    let db: Db = Arc::new(RwLock::new(store));
    Router::new()
        .route("/dogs", get(list_dogs).post(create_dog))
        .route("/dogs/{id}", get(get_dog).put(update_dog).patch(update_status))
        .route("/dogs/{id}/financial-report", get(financial_report))
        .route("/dogs/{id}/litters", get(dog_litters))
        .route("/dogs/{id}/expenses", post(add_expense))
        .route("/dogs/{id}/sell", post(sell_dog))
        .route("/litters", get(list_litters).post(create_litter))
        .route("/litters/{id}", get(get_litter))
        .route("/guardians/all", get(list_guardians))
        .route("/dashboard/stats", get(dashboard_stats))
        .route("/dashboard/finance-30-days", get(finance_summary))
        .with_state(db)
}

pub async fn serve(listener: TcpListener, store: Store) -> Result<(), std::io::Error> {
    if let Ok(addr) = listener.local_addr() {
        info!(%addr, "mock kennel backend listening");
    }
    axum::serve(listener, app_with(store)).await
}

/// A request the backend refuses.
#[derive(Debug)]
pub struct Rejection {
    status: StatusCode,
    message: String,
}

impl Rejection {
    fn not_found(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            message: message.into(),
        }
    }

    fn invalid(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }
}

impl IntoResponse for Rejection {
    fn into_response(self) -> Response {
        warn!(status = self.status.as_u16(), message = %self.message, "request rejected");
        let body = json!({
            "mensagem": self.message,
            "status": self.status.as_u16(),
            "timestamp": Utc::now(),
        });
        (self.status, Json(body)).into_response()
    }
}

type Handled<T> = Result<T, Rejection>;

fn dog_not_found(id: i64) -> Rejection {
    Rejection::not_found(format!("Cachorro não encontrado com ID: {id}"))
}

fn require_text(value: &str, message: &str) -> Handled<()> {
    if value.trim().is_empty() {
        return Err(Rejection::invalid(message));
    }
    Ok(())
}

fn require_non_negative(value: Decimal, message: &str) -> Handled<()> {
    if value < Decimal::ZERO {
        return Err(Rejection::invalid(message));
    }
    Ok(())
}

fn validate_dog(input: &DogInput) -> Handled<()> {
    require_text(&input.nome, "O nome é obrigatório.")?;
    require_text(&input.raca, "A raça é obrigatória.")
}

fn today() -> NaiveDate {
    Utc::now().date_naive()
}

async fn list_dogs(State(db): State<Db>, Query(query): Query<PageQuery>) -> Json<Page<Dog>> {
    let store = db.read().await;
    let dogs = store
        .dogs
        .values()
        .filter(|dog| query.sexo.is_none_or(|sexo| dog.sexo == sexo))
        .cloned()
        .collect();
    Json(Page::slice(
        dogs,
        query.page.unwrap_or(0),
        query.size.unwrap_or(DEFAULT_PAGE_SIZE),
    ))
}

async fn create_dog(
    State(db): State<Db>,
    Json(input): Json<DogInput>,
) -> Handled<(StatusCode, Json<Dog>)> {
    validate_dog(&input)?;
    let dog = db.write().await.insert_dog(input);
    Ok((StatusCode::CREATED, Json(dog)))
}

async fn get_dog(State(db): State<Db>, Path(id): Path<i64>) -> Handled<Json<Dog>> {
    let store = db.read().await;
    store.dogs.get(&id).cloned().map(Json).ok_or_else(|| dog_not_found(id))
}

async fn update_dog(
    State(db): State<Db>,
    Path(id): Path<i64>,
    Json(input): Json<DogInput>,
) -> Handled<Json<Dog>> {
    let mut store = db.write().await;
    let dog = store.dogs.get_mut(&id).ok_or_else(|| dog_not_found(id))?;
    validate_dog(&input)?;
    dog.nome = input.nome;
    dog.raca = input.raca;
    dog.data_nascimento = input.data_nascimento;
    dog.sexo = input.sexo;
    Ok(Json(dog.clone()))
}

async fn update_status(
    State(db): State<Db>,
    Path(id): Path<i64>,
    Json(input): Json<StatusInput>,
) -> Handled<Json<Dog>> {
    let mut store = db.write().await;
    let dog = store.dogs.get_mut(&id).ok_or_else(|| dog_not_found(id))?;
    dog.status = input.status;
    Ok(Json(dog.clone()))
}

async fn financial_report(
    State(db): State<Db>,
    Path(id): Path<i64>,
) -> Handled<Json<FinancialReport>> {
    let store = db.read().await;
    let dog = store.dogs.get(&id).ok_or_else(|| dog_not_found(id))?;
    Ok(Json(store.financial_report(dog)))
}

async fn dog_litters(
    State(db): State<Db>,
    Path(id): Path<i64>,
) -> Handled<Json<Vec<LitterSummary>>> {
    let store = db.read().await;
    if !store.dogs.contains_key(&id) {
        return Err(dog_not_found(id));
    }
    let litters = store
        .litters
        .values()
        .filter(|l| l.mae_id == Some(id) || l.pai_id == Some(id))
        .map(|l| store.summarize(l))
        .collect();
    Ok(Json(litters))
}

/// Answers `201 Created` with a `Location` header and no body.
async fn add_expense(
    State(db): State<Db>,
    Path(id): Path<i64>,
    Json(input): Json<ExpenseInput>,
) -> Handled<(StatusCode, [(header::HeaderName, String); 1])> {
    let mut store = db.write().await;
    if !store.dogs.contains_key(&id) {
        return Err(dog_not_found(id));
    }
    require_text(&input.descricao, "A descrição da despesa não pode ser vazia.")?;
    require_non_negative(input.valor, "O valor da despesa não pode ser negativo.")?;
    let expense = store.insert_expense(id, input, today());
    let location = format!("/dogs/{id}/expenses/{}", expense.id);
    Ok((StatusCode::CREATED, [(header::LOCATION, location)]))
}

async fn sell_dog(
    State(db): State<Db>,
    Path(id): Path<i64>,
    Json(input): Json<SaleInput>,
) -> Handled<Json<Sale>> {
    let mut store = db.write().await;
    let status = store
        .dogs
        .get(&id)
        .map(|dog| dog.status)
        .ok_or_else(|| dog_not_found(id))?;
    let tutor: Guardian = store
        .guardians
        .get(&input.novo_tutor_id)
        .cloned()
        .ok_or_else(|| {
            Rejection::invalid(format!("Tutor não encontrado com ID: {}", input.novo_tutor_id))
        })?;
    require_non_negative(input.valor, "O valor da venda não pode ser negativo.")?;
    if status == Status::Vendido {
        return Err(Rejection::invalid("Este cachorro já foi vendido."));
    }

    let sale = store.insert_sale(id, tutor.clone(), input.valor, input.data);
    if let Some(dog) = store.dogs.get_mut(&id) {
        dog.status = Status::Vendido;
        dog.tutor = Some(tutor);
    }
    Ok(Json(sale))
}

/// Resolve an optional parent id, insisting on the sex its role requires.
fn parent<'a>(store: &'a Store, id: Option<i64>, expected: Sex, role: &str) -> Handled<Option<&'a Dog>> {
    let Some(id) = id else {
        return Ok(None);
    };
    let dog = store
        .dogs
        .get(&id)
        .ok_or_else(|| Rejection::invalid(format!("Cachorro ({role}) não encontrado com ID: {id}")))?;
    if dog.sexo != expected {
        return Err(Rejection::invalid(format!(
            "O cachorro selecionado como {role} (ID: {id}) não tem o sexo esperado."
        )));
    }
    Ok(Some(dog))
}

async fn create_litter(
    State(db): State<Db>,
    Json(input): Json<LitterInput>,
) -> Handled<(StatusCode, Json<LitterSummary>)> {
    let mut store = db.write().await;
    let mother = parent(&store, input.mae_id, Sex::Femea, "mãe")?;
    let father = parent(&store, input.pai_id, Sex::Macho, "pai")?;
    let raca = mother
        .or(father)
        .map(|dog| dog.raca.clone())
        .unwrap_or_else(|| "SRD".to_string());
    for filhote in &input.filhotes {
        require_text(&filhote.nome, "O nome do filhote é obrigatório.")?;
    }

    let filhotes = input
        .filhotes
        .into_iter()
        .map(|filhote| {
            store
                .insert_dog(DogInput {
                    nome: filhote.nome,
                    raca: raca.clone(),
                    data_nascimento: input.data_nascimento,
                    sexo: filhote.sexo,
                })
                .id
        })
        .collect();
    let litter = store.insert_litter(input.data_nascimento, input.mae_id, input.pai_id, filhotes);
    Ok((StatusCode::CREATED, Json(store.summarize(&litter))))
}

async fn list_litters(
    State(db): State<Db>,
    Query(query): Query<PageQuery>,
) -> Json<Page<LitterSummary>> {
    let store = db.read().await;
    let litters = store.litters.values().map(|l| store.summarize(l)).collect();
    Json(Page::slice(
        litters,
        query.page.unwrap_or(0),
        query.size.unwrap_or(DEFAULT_PAGE_SIZE),
    ))
}

async fn get_litter(State(db): State<Db>, Path(id): Path<i64>) -> Handled<Json<LitterDetails>> {
    let store = db.read().await;
    store
        .litters
        .get(&id)
        .map(|litter| Json(store.details(litter)))
        .ok_or_else(|| Rejection::not_found(format!("Ninhada não encontrada com o ID: {id}")))
}

async fn list_guardians(State(db): State<Db>) -> Json<Vec<Guardian>> {
    let store = db.read().await;
    Json(store.guardians.values().cloned().collect())
}

async fn dashboard_stats(State(db): State<Db>) -> Json<DashboardStats> {
    Json(db.read().await.stats())
}

async fn finance_summary(State(db): State<Db>) -> Json<FinanceSummary> {
    let since = today()
        .checked_sub_days(Days::new(FINANCE_WINDOW_DAYS))
        .unwrap_or(NaiveDate::MIN);
    Json(db.read().await.finance_since(since))
}
