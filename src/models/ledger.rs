use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use uuid::Uuid;

/// Categorías de gasto operativo, set cerrado compartido entre
/// cash drawer y house bank
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExpenseCategory {
    Supplies,
    Contractors,
    Maintenance,
    Utilities,
    Other,
}

impl ExpenseCategory {
    pub const ALL: [ExpenseCategory; 5] = [
        ExpenseCategory::Supplies,
        ExpenseCategory::Contractors,
        ExpenseCategory::Maintenance,
        ExpenseCategory::Utilities,
        ExpenseCategory::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ExpenseCategory::Supplies => "supplies",
            ExpenseCategory::Contractors => "contractors",
            ExpenseCategory::Maintenance => "maintenance",
            ExpenseCategory::Utilities => "utilities",
            ExpenseCategory::Other => "other",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "supplies" => Some(ExpenseCategory::Supplies),
            "contractors" => Some(ExpenseCategory::Contractors),
            "maintenance" => Some(ExpenseCategory::Maintenance),
            "utilities" => Some(ExpenseCategory::Utilities),
            "other" => Some(ExpenseCategory::Other),
            _ => None,
        }
    }
}

impl TryFrom<String> for ExpenseCategory {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        ExpenseCategory::from_str(&s).ok_or_else(|| format!("Invalid expense category: {}", s))
    }
}

/// Movimiento del cash drawer del admin
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DrawerTxnType {
    /// Entrega de efectivo recibida de un manager
    TurninReceived,
    /// Pago por Cash App registrado como inflow del drawer
    CashappReceived,
    Expense,
}

impl DrawerTxnType {
    pub fn as_str(&self) -> &'static str {
        match self {
            DrawerTxnType::TurninReceived => "turnin_received",
            DrawerTxnType::CashappReceived => "cashapp_received",
            DrawerTxnType::Expense => "expense",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "turnin_received" => Some(DrawerTxnType::TurninReceived),
            "cashapp_received" => Some(DrawerTxnType::CashappReceived),
            "expense" => Some(DrawerTxnType::Expense),
            _ => None,
        }
    }

    pub fn is_inflow(&self) -> bool {
        matches!(self, DrawerTxnType::TurninReceived | DrawerTxnType::CashappReceived)
    }
}

impl TryFrom<String> for DrawerTxnType {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        DrawerTxnType::from_str(&s).ok_or_else(|| format!("Invalid drawer txn type: {}", s))
    }
}

/// Transacción del cash drawer del admin
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct DrawerTransaction {
    pub id: Uuid,
    #[sqlx(try_from = "String")]
    pub txn_type: DrawerTxnType,
    pub amount: Decimal,
    pub category: Option<String>,
    pub note: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl DrawerTransaction {
    pub fn expense_category(&self) -> ExpenseCategory {
        self.category
            .as_deref()
            .and_then(ExpenseCategory::from_str)
            .unwrap_or(ExpenseCategory::Other)
    }
}

/// Movimiento del house bank
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HouseBankTxnType {
    TransferIn,
    Expense,
}

impl HouseBankTxnType {
    pub fn as_str(&self) -> &'static str {
        match self {
            HouseBankTxnType::TransferIn => "transfer_in",
            HouseBankTxnType::Expense => "expense",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "transfer_in" => Some(HouseBankTxnType::TransferIn),
            "expense" => Some(HouseBankTxnType::Expense),
            _ => None,
        }
    }
}

impl TryFrom<String> for HouseBankTxnType {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        HouseBankTxnType::from_str(&s).ok_or_else(|| format!("Invalid house bank txn type: {}", s))
    }
}

/// Transacción del house bank (presupuesto operativo)
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct HouseBankTransaction {
    pub id: Uuid,
    #[sqlx(try_from = "String")]
    pub txn_type: HouseBankTxnType,
    pub amount: Decimal,
    pub category: Option<String>,
    pub note: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl HouseBankTransaction {
    pub fn expense_category(&self) -> ExpenseCategory {
        self.category
            .as_deref()
            .and_then(ExpenseCategory::from_str)
            .unwrap_or(ExpenseCategory::Other)
    }
}

// ---------------------------------------------------------------------------
// Estructuras derivadas (nunca persistidas)
// ---------------------------------------------------------------------------

/// Desglose de revenue por método de pago
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PaymentMethodBreakdown {
    pub cash: Decimal,
    pub cash_app: Decimal,
}

/// Stats del dashboard principal
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardStats {
    pub available_rooms: usize,
    pub active_bookings: usize,
    pub pending_tasks: usize,
    pub today_revenue: Decimal,
    pub payment_method_breakdown: PaymentMethodBreakdown,
    pub weekly_revenue: Decimal,
    pub monthly_revenue: Decimal,
    pub weekly_growth: Decimal,
    pub pending_payments_count: usize,
    pub pending_payments_amount: Decimal,
    pub overdue_payments_count: usize,
    pub overdue_payments_amount: Decimal,
}

/// Stat del cash drawer de un manager: efectivo cobrado hoy
/// menos lo entregado hoy, nunca negativo
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CashDrawerStat {
    pub manager_id: Uuid,
    pub manager_name: String,
    pub collected_today: Decimal,
    pub turned_in_today: Decimal,
    pub on_hand: Decimal,
    pub last_turn_in_at: Option<DateTime<Utc>>,
    pub last_turn_in_amount: Option<Decimal>,
}

/// Desglose de gastos por categoría
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryBreakdown {
    pub category: ExpenseCategory,
    pub total: Decimal,
}

/// Stats del cash drawer del admin, reducidas del log de transacciones
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AdminDrawerStats {
    pub current_balance: Decimal,
    pub total_inflows: Decimal,
    pub total_expenses: Decimal,
    pub expenses_by_category: Vec<CategoryBreakdown>,
}

/// Stats del house bank, reducidas del log de transacciones
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HouseBankStats {
    pub current_balance: Decimal,
    pub total_transfers_in: Decimal,
    pub total_expenses: Decimal,
    pub expenses_by_category: Vec<CategoryBreakdown>,
}
