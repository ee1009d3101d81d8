use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use crate::models::ledger::{
    AdminDrawerStats, CashDrawerStat, DrawerTxnType, ExpenseCategory, HouseBankTxnType,
};

/// Vista del cash drawer del admin: balance propio más el efectivo
/// en mano de cada manager
#[derive(Debug, Serialize)]
pub struct CashDrawerOverview {
    pub drawer: AdminDrawerStats,
    pub managers: Vec<CashDrawerStat>,
}

#[derive(Debug, Deserialize)]
pub struct CreateDrawerTxnRequest {
    pub txn_type: DrawerTxnType,
    pub amount: Decimal,
    pub category: Option<ExpenseCategory>,
    pub note: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CreateHouseBankTxnRequest {
    pub txn_type: HouseBankTxnType,
    pub amount: Decimal,
    pub category: Option<ExpenseCategory>,
    pub note: Option<String>,
}

/// Rango de fechas para reports; por defecto los últimos 30 días
#[derive(Debug, Deserialize)]
pub struct ReportRangeQuery {
    pub from: Option<DateTime<Utc>>,
    pub to: Option<DateTime<Utc>>,
}

/// Revenue y ocupación por propiedad en un rango
#[derive(Debug, Serialize)]
pub struct PropertyReport {
    pub property_id: String,
    pub property_name: String,
    pub revenue: Decimal,
    pub total_rooms: usize,
    pub occupied_rooms: usize,
    pub occupancy_rate: Decimal,
}

#[derive(Debug, Serialize)]
pub struct ReportsResponse {
    pub from: DateTime<Utc>,
    pub to: DateTime<Utc>,
    pub total_revenue: Decimal,
    pub properties: Vec<PropertyReport>,
}

/// Mix de planes, métodos de pago y conversión de inquiries
#[derive(Debug, Serialize)]
pub struct AnalyticsResponse {
    pub bookings_by_plan: PlanMix,
    pub revenue_by_method: MethodMix,
    pub inquiries_received: usize,
    pub inquiries_converted: usize,
    pub conversion_rate: Decimal,
}

#[derive(Debug, Default, Serialize)]
pub struct PlanMix {
    pub daily: usize,
    pub weekly: usize,
    pub monthly: usize,
}

#[derive(Debug, Default, Serialize)]
pub struct MethodMix {
    pub cash: Decimal,
    pub cash_app: Decimal,
}
