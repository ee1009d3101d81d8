use axum::{
    extract::{Query, State},
    routing::{get, post},
    Extension, Json, Router,
};

use crate::controllers::ledger_controller::LedgerController;
use crate::dto::booking_dto::CreateTurnInRequest;
use crate::dto::ledger_dto::{
    AnalyticsResponse, CashDrawerOverview, CreateDrawerTxnRequest, CreateHouseBankTxnRequest,
    ReportRangeQuery, ReportsResponse,
};
use crate::dto::ApiResponse;
use crate::models::auth::UserInfo;
use crate::models::booking::CashTurnIn;
use crate::models::ledger::{DashboardStats, DrawerTransaction, HouseBankStats, HouseBankTransaction};
use crate::models::operations::AuditLogEntry;
use crate::state::AppState;
use crate::utils::errors::AppError;

/// Dashboard para todos los roles; cada uno ve sus datos scoped
pub fn create_dashboard_router() -> Router<AppState> {
    Router::new().route("/stats", get(dashboard_stats))
}

/// Reports y analytics, admin y manager
pub fn create_reports_router() -> Router<AppState> {
    Router::new()
        .route("/reports", get(reports))
        .route("/analytics", get(analytics))
}

/// Entregas de efectivo, admin y manager
pub fn create_turn_in_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_turn_in))
        .route("/", get(list_turn_ins))
}

/// Ledgers del admin: cash drawer y house bank
pub fn create_admin_ledger_router() -> Router<AppState> {
    Router::new()
        .route("/cash-drawer", get(cash_drawer_overview))
        .route("/cash-drawer/transactions", get(list_drawer_txns))
        .route("/cash-drawer/transactions", post(create_drawer_txn))
        .route("/house-bank", get(house_bank_stats))
        .route("/house-bank/transactions", get(list_house_bank_txns))
        .route("/house-bank/transactions", post(create_house_bank_txn))
}

/// Audit log, solo admin
pub fn create_audit_router() -> Router<AppState> {
    Router::new().route("/", get(audit_log))
}

async fn dashboard_stats(
    State(state): State<AppState>,
    Extension(user): Extension<UserInfo>,
) -> Result<Json<DashboardStats>, AppError> {
    let controller = LedgerController::new(state.storage.clone());
    let response = controller.dashboard_stats(&user).await?;
    Ok(Json(response))
}

async fn reports(
    State(state): State<AppState>,
    Query(range): Query<ReportRangeQuery>,
) -> Result<Json<ReportsResponse>, AppError> {
    let controller = LedgerController::new(state.storage.clone());
    let response = controller.reports(range).await?;
    Ok(Json(response))
}

async fn analytics(
    State(state): State<AppState>,
) -> Result<Json<AnalyticsResponse>, AppError> {
    let controller = LedgerController::new(state.storage.clone());
    let response = controller.analytics().await?;
    Ok(Json(response))
}

async fn create_turn_in(
    State(state): State<AppState>,
    Extension(user): Extension<UserInfo>,
    Json(request): Json<CreateTurnInRequest>,
) -> Result<Json<ApiResponse<CashTurnIn>>, AppError> {
    let controller = LedgerController::new(state.storage.clone());
    let response = controller.create_turn_in(&user, request).await?;
    Ok(Json(response))
}

async fn list_turn_ins(
    State(state): State<AppState>,
    Extension(user): Extension<UserInfo>,
) -> Result<Json<ApiResponse<Vec<CashTurnIn>>>, AppError> {
    let controller = LedgerController::new(state.storage.clone());
    let response = controller.list_turn_ins(&user).await?;
    Ok(Json(response))
}

async fn cash_drawer_overview(
    State(state): State<AppState>,
) -> Result<Json<CashDrawerOverview>, AppError> {
    let controller = LedgerController::new(state.storage.clone());
    let response = controller.cash_drawer_overview().await?;
    Ok(Json(response))
}

async fn create_drawer_txn(
    State(state): State<AppState>,
    Extension(user): Extension<UserInfo>,
    Json(request): Json<CreateDrawerTxnRequest>,
) -> Result<Json<ApiResponse<DrawerTransaction>>, AppError> {
    let controller = LedgerController::new(state.storage.clone());
    let response = controller.create_drawer_txn(&user, request).await?;
    Ok(Json(response))
}

async fn list_drawer_txns(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<DrawerTransaction>>>, AppError> {
    let controller = LedgerController::new(state.storage.clone());
    let response = controller.list_drawer_txns().await?;
    Ok(Json(response))
}

async fn house_bank_stats(
    State(state): State<AppState>,
) -> Result<Json<HouseBankStats>, AppError> {
    let controller = LedgerController::new(state.storage.clone());
    let response = controller.house_bank_stats().await?;
    Ok(Json(response))
}

async fn create_house_bank_txn(
    State(state): State<AppState>,
    Extension(user): Extension<UserInfo>,
    Json(request): Json<CreateHouseBankTxnRequest>,
) -> Result<Json<ApiResponse<HouseBankTransaction>>, AppError> {
    let controller = LedgerController::new(state.storage.clone());
    let response = controller.create_house_bank_txn(&user, request).await?;
    Ok(Json(response))
}

async fn list_house_bank_txns(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<HouseBankTransaction>>>, AppError> {
    let controller = LedgerController::new(state.storage.clone());
    let response = controller.list_house_bank_txns().await?;
    Ok(Json(response))
}

async fn audit_log(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<AuditLogEntry>>>, AppError> {
    let controller = LedgerController::new(state.storage.clone());
    let response = controller.audit_log().await?;
    Ok(Json(response))
}
