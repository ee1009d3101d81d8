//! Agregación de stats del dashboard y ledgers
//!
//! Funciones puras sobre colecciones ya filtradas por rol: nunca tocan
//! storage, nunca fallan con input vacío (devuelven estructuras en cero).
//! Toda la aritmética de moneda es Decimal.

use chrono::{DateTime, Datelike, Duration, TimeZone, Utc};
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::models::booking::{Booking, BookingStatus, CashTurnIn, Payment, PaymentMethod, PaymentStatus};
use crate::models::ledger::{
    AdminDrawerStats, CashDrawerStat, CategoryBreakdown, DashboardStats, DrawerTransaction,
    ExpenseCategory, HouseBankStats, HouseBankTransaction, HouseBankTxnType,
    PaymentMethodBreakdown,
};
use crate::models::operations::{CleaningTask, TaskStatus};
use crate::models::property::{Room, RoomStatus};
use crate::models::user::User;

/// Medianoche UTC del día de `now`
fn today_start(now: DateTime<Utc>) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(now.year(), now.month(), now.day(), 0, 0, 0)
        .single()
        .unwrap_or(now)
}

fn revenue_in_window(payments: &[Payment], from: DateTime<Utc>, to: DateTime<Utc>) -> Decimal {
    payments
        .iter()
        .filter(|p| p.date_received >= from && p.date_received < to)
        .map(|p| p.amount)
        .sum()
}

/// Stats del dashboard principal. `available_rooms` cuenta por
/// status == available; el cleaning_status no participa (ver DESIGN.md).
pub fn compute_dashboard_stats(
    rooms: &[Room],
    bookings: &[Booking],
    tasks: &[CleaningTask],
    payments: &[Payment],
    now: DateTime<Utc>,
) -> DashboardStats {
    let day_start = today_start(now);
    let week_ago = now - Duration::days(7);
    let two_weeks_ago = now - Duration::days(14);
    let month_ago = now - Duration::days(30);

    let today_payments: Vec<&Payment> = payments
        .iter()
        .filter(|p| p.date_received >= day_start && p.date_received < now)
        .collect();

    let today_revenue: Decimal = today_payments.iter().map(|p| p.amount).sum();
    let breakdown = PaymentMethodBreakdown {
        cash: today_payments
            .iter()
            .filter(|p| p.method == PaymentMethod::Cash)
            .map(|p| p.amount)
            .sum(),
        cash_app: today_payments
            .iter()
            .filter(|p| p.method == PaymentMethod::CashApp)
            .map(|p| p.amount)
            .sum(),
    };

    let this_week = revenue_in_window(payments, week_ago, now);
    let last_week = revenue_in_window(payments, two_weeks_ago, week_ago);
    // Guard contra división por cero: sin revenue la semana pasada,
    // el growth se reporta como 0
    let weekly_growth = if last_week.is_zero() {
        Decimal::ZERO
    } else {
        (this_week - last_week) / last_week * Decimal::from(100)
    };

    let pending: Vec<&Booking> = bookings
        .iter()
        .filter(|b| b.payment_status == PaymentStatus::Pending)
        .collect();
    let overdue: Vec<&Booking> = bookings
        .iter()
        .filter(|b| b.payment_status == PaymentStatus::Overdue)
        .collect();

    DashboardStats {
        available_rooms: rooms
            .iter()
            .filter(|r| r.status == RoomStatus::Available)
            .count(),
        active_bookings: bookings
            .iter()
            .filter(|b| b.status == BookingStatus::Active)
            .count(),
        pending_tasks: tasks
            .iter()
            .filter(|t| t.status == TaskStatus::Pending)
            .count(),
        today_revenue,
        payment_method_breakdown: breakdown,
        weekly_revenue: this_week,
        monthly_revenue: revenue_in_window(payments, month_ago, now),
        weekly_growth,
        pending_payments_count: pending.len(),
        pending_payments_amount: pending.iter().map(|b| b.total_amount).sum(),
        overdue_payments_count: overdue.len(),
        overdue_payments_amount: overdue.iter().map(|b| b.total_amount).sum(),
    }
}

/// Stats del cash drawer por manager: efectivo cobrado hoy menos
/// entregas de hoy, con piso en 0
pub fn compute_cash_drawer_stats(
    managers: &[User],
    payments: &[Payment],
    turn_ins: &[CashTurnIn],
    now: DateTime<Utc>,
) -> Vec<CashDrawerStat> {
    let day_start = today_start(now);

    managers
        .iter()
        .map(|manager| {
            let collected_today: Decimal = payments
                .iter()
                .filter(|p| {
                    p.received_by == manager.id
                        && p.method == PaymentMethod::Cash
                        && p.date_received >= day_start
                        && p.date_received < now
                })
                .map(|p| p.amount)
                .sum();

            let turned_in_today: Decimal = turn_ins
                .iter()
                .filter(|t| {
                    t.manager_id == manager.id
                        && t.turned_in_at >= day_start
                        && t.turned_in_at < now
                })
                .map(|t| t.amount)
                .sum();

            let last = turn_ins
                .iter()
                .filter(|t| t.manager_id == manager.id)
                .max_by_key(|t| t.turned_in_at);

            CashDrawerStat {
                manager_id: manager.id,
                manager_name: manager.name.clone(),
                collected_today,
                turned_in_today,
                on_hand: (collected_today - turned_in_today).max(Decimal::ZERO),
                last_turn_in_at: last.map(|t| t.turned_in_at),
                last_turn_in_amount: last.map(|t| t.amount),
            }
        })
        .collect()
}

fn category_breakdown(expenses: &[(ExpenseCategory, Decimal)]) -> Vec<CategoryBreakdown> {
    ExpenseCategory::ALL
        .iter()
        .map(|&category| CategoryBreakdown {
            category,
            total: expenses
                .iter()
                .filter(|(c, _)| *c == category)
                .map(|(_, amount)| *amount)
                .sum(),
        })
        .collect()
}

/// Balance del cash drawer del admin: inflows (turn-ins y cash app)
/// menos gastos, nunca negativo
pub fn compute_admin_drawer_stats(transactions: &[DrawerTransaction]) -> AdminDrawerStats {
    let total_inflows: Decimal = transactions
        .iter()
        .filter(|t| t.txn_type.is_inflow())
        .map(|t| t.amount)
        .sum();

    let expenses: Vec<(ExpenseCategory, Decimal)> = transactions
        .iter()
        .filter(|t| !t.txn_type.is_inflow())
        .map(|t| (t.expense_category(), t.amount))
        .collect();
    let total_expenses: Decimal = expenses.iter().map(|(_, a)| *a).sum();

    AdminDrawerStats {
        current_balance: (total_inflows - total_expenses).max(Decimal::ZERO),
        total_inflows,
        total_expenses,
        expenses_by_category: category_breakdown(&expenses),
    }
}

/// Balance del house bank: transfers-in menos gastos, nunca negativo
pub fn compute_house_bank_stats(transactions: &[HouseBankTransaction]) -> HouseBankStats {
    let total_transfers_in: Decimal = transactions
        .iter()
        .filter(|t| t.txn_type == HouseBankTxnType::TransferIn)
        .map(|t| t.amount)
        .sum();

    let expenses: Vec<(ExpenseCategory, Decimal)> = transactions
        .iter()
        .filter(|t| t.txn_type == HouseBankTxnType::Expense)
        .map(|t| (t.expense_category(), t.amount))
        .collect();
    let total_expenses: Decimal = expenses.iter().map(|(_, a)| *a).sum();

    HouseBankStats {
        current_balance: (total_transfers_in - total_expenses).max(Decimal::ZERO),
        total_transfers_in,
        total_expenses,
        expenses_by_category: category_breakdown(&expenses),
    }
}

/// Pagos cash de hoy de un manager concreto, para el endpoint de turn-ins
pub fn cash_collected_today(payments: &[Payment], manager_id: Uuid, now: DateTime<Utc>) -> Decimal {
    let day_start = today_start(now);
    payments
        .iter()
        .filter(|p| {
            p.received_by == manager_id
                && p.method == PaymentMethod::Cash
                && p.date_received >= day_start
                && p.date_received < now
        })
        .map(|p| p.amount)
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::auth::UserRole;
    use crate::models::booking::BookingPlan;
    use crate::models::ledger::DrawerTxnType;
    use crate::models::property::{CleaningStatus, LinenStatus};
    use rust_decimal_macros::dec;

    fn payment(amount: Decimal, method: PaymentMethod, received_by: Uuid, at: DateTime<Utc>) -> Payment {
        Payment {
            id: Uuid::new_v4(),
            booking_id: Uuid::new_v4(),
            amount,
            method,
            received_by,
            discount: None,
            deposit: None,
            fee: None,
            total_paid: amount,
            date_received: at,
        }
    }

    fn booking_with(payment_status: PaymentStatus, total: Decimal) -> Booking {
        Booking {
            id: Uuid::new_v4(),
            room_id: "P1-R1".to_string(),
            guest_id: Uuid::new_v4(),
            plan: BookingPlan::Weekly,
            start_date: Utc::now(),
            end_date: None,
            total_amount: total,
            payment_status,
            status: BookingStatus::Active,
            door_code: None,
            door_code_expiry: None,
            notes: None,
            created_at: Utc::now(),
        }
    }

    fn room_with(status: RoomStatus, cleaning: CleaningStatus) -> Room {
        Room {
            id: "P1-R1".to_string(),
            property_id: "P1".to_string(),
            room_number: "R1".to_string(),
            status,
            door_code: None,
            door_code_expiry: None,
            cleaning_status: cleaning,
            linen_status: LinenStatus::Fresh,
            notes: None,
            last_cleaned: None,
            last_linen_change: None,
        }
    }

    fn manager(name: &str) -> User {
        User {
            id: Uuid::new_v4(),
            username: name.to_lowercase(),
            password_hash: "x".to_string(),
            name: name.to_string(),
            role: UserRole::Manager,
            property: Some("P1".to_string()),
            created_at: Utc::now(),
        }
    }

    fn drawer_txn(txn_type: DrawerTxnType, amount: Decimal, category: Option<&str>) -> DrawerTransaction {
        DrawerTransaction {
            id: Uuid::new_v4(),
            txn_type,
            amount,
            category: category.map(String::from),
            note: None,
            created_at: Utc::now(),
        }
    }

    fn bank_txn(txn_type: HouseBankTxnType, amount: Decimal, category: Option<&str>) -> HouseBankTransaction {
        HouseBankTransaction {
            id: Uuid::new_v4(),
            txn_type,
            amount,
            category: category.map(String::from),
            note: None,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_empty_input_yields_zeroed_stats() {
        let stats = compute_dashboard_stats(&[], &[], &[], &[], Utc::now());
        assert_eq!(stats, DashboardStats::default());

        assert_eq!(compute_house_bank_stats(&[]).current_balance, Decimal::ZERO);
        assert_eq!(compute_admin_drawer_stats(&[]).current_balance, Decimal::ZERO);
    }

    #[test]
    fn test_today_revenue_and_method_breakdown() {
        let now = Utc::now();
        let staff = Uuid::new_v4();
        let payments = vec![
            payment(dec!(100), PaymentMethod::Cash, staff, now - Duration::hours(1)),
            payment(dec!(50), PaymentMethod::CashApp, staff, now - Duration::hours(2)),
            // Ayer: no cuenta para hoy
            payment(dec!(500), PaymentMethod::Cash, staff, now - Duration::days(1)),
        ];

        let stats = compute_dashboard_stats(&[], &[], &[], &payments, now);
        assert_eq!(stats.today_revenue, dec!(150));
        assert_eq!(stats.payment_method_breakdown.cash, dec!(100));
        assert_eq!(stats.payment_method_breakdown.cash_app, dec!(50));
    }

    #[test]
    fn test_weekly_growth_zero_guard() {
        let now = Utc::now();
        let staff = Uuid::new_v4();
        // Solo revenue esta semana; la semana pasada en cero
        let payments = vec![payment(dec!(900), PaymentMethod::Cash, staff, now - Duration::days(2))];

        let stats = compute_dashboard_stats(&[], &[], &[], &payments, now);
        assert_eq!(stats.weekly_growth, Decimal::ZERO);
        assert_eq!(stats.weekly_revenue, dec!(900));
    }

    #[test]
    fn test_weekly_growth_computed() {
        let now = Utc::now();
        let staff = Uuid::new_v4();
        let payments = vec![
            payment(dec!(300), PaymentMethod::Cash, staff, now - Duration::days(2)),
            payment(dec!(200), PaymentMethod::Cash, staff, now - Duration::days(9)),
        ];

        let stats = compute_dashboard_stats(&[], &[], &[], &payments, now);
        // (300 - 200) / 200 * 100 = 50
        assert_eq!(stats.weekly_growth, dec!(50));
    }

    #[test]
    fn test_available_rooms_ignores_cleaning_status() {
        let rooms = vec![
            room_with(RoomStatus::Available, CleaningStatus::Dirty),
            room_with(RoomStatus::Available, CleaningStatus::Clean),
            room_with(RoomStatus::Occupied, CleaningStatus::Clean),
        ];
        let stats = compute_dashboard_stats(&rooms, &[], &[], &[], Utc::now());
        assert_eq!(stats.available_rooms, 2);
    }

    #[test]
    fn test_pending_and_overdue_bookings() {
        let bookings = vec![
            booking_with(PaymentStatus::Pending, dec!(100)),
            booking_with(PaymentStatus::Pending, dec!(250)),
            booking_with(PaymentStatus::Overdue, dec!(75)),
            booking_with(PaymentStatus::Paid, dec!(999)),
        ];
        let stats = compute_dashboard_stats(&[], &bookings, &[], &[], Utc::now());
        assert_eq!(stats.pending_payments_count, 2);
        assert_eq!(stats.pending_payments_amount, dec!(350));
        assert_eq!(stats.overdue_payments_count, 1);
        assert_eq!(stats.overdue_payments_amount, dec!(75));
    }

    #[test]
    fn test_cash_drawer_floored_at_zero() {
        let now = Utc::now();
        let m = manager("Alice");
        let payments = vec![payment(dec!(40), PaymentMethod::Cash, m.id, now - Duration::hours(3))];
        let turn_ins = vec![CashTurnIn {
            id: Uuid::new_v4(),
            manager_id: m.id,
            amount: dec!(100),
            note: None,
            turned_in_at: now - Duration::hours(1),
        }];

        let stats = compute_cash_drawer_stats(&[m], &payments, &turn_ins, now);
        assert_eq!(stats.len(), 1);
        // Entregó más de lo cobrado hoy: on_hand queda en 0, no negativo
        assert_eq!(stats[0].on_hand, Decimal::ZERO);
        assert_eq!(stats[0].last_turn_in_amount, Some(dec!(100)));
    }

    #[test]
    fn test_cash_drawer_ignores_cash_app() {
        let now = Utc::now();
        let m = manager("Bob");
        let payments = vec![
            payment(dec!(60), PaymentMethod::Cash, m.id, now - Duration::hours(2)),
            payment(dec!(500), PaymentMethod::CashApp, m.id, now - Duration::hours(2)),
        ];

        let stats = compute_cash_drawer_stats(&[m], &payments, &[], now);
        assert_eq!(stats[0].collected_today, dec!(60));
        assert_eq!(stats[0].on_hand, dec!(60));
    }

    #[test]
    fn test_house_bank_balance_floored_at_zero() {
        let txns = vec![
            bank_txn(HouseBankTxnType::TransferIn, dec!(100), None),
            bank_txn(HouseBankTxnType::Expense, dec!(400), Some("utilities")),
        ];
        let stats = compute_house_bank_stats(&txns);
        assert_eq!(stats.current_balance, Decimal::ZERO);
        assert_eq!(stats.total_expenses, dec!(400));
    }

    #[test]
    fn test_house_bank_category_breakdown() {
        let txns = vec![
            bank_txn(HouseBankTxnType::TransferIn, dec!(1000), None),
            bank_txn(HouseBankTxnType::Expense, dec!(120), Some("supplies")),
            bank_txn(HouseBankTxnType::Expense, dec!(80), Some("supplies")),
            bank_txn(HouseBankTxnType::Expense, dec!(50), Some("nonsense")),
        ];
        let stats = compute_house_bank_stats(&txns);
        assert_eq!(stats.current_balance, dec!(750));

        let supplies = stats
            .expenses_by_category
            .iter()
            .find(|c| c.category == ExpenseCategory::Supplies)
            .unwrap();
        assert_eq!(supplies.total, dec!(200));
        // Categoría no reconocida cae en Other
        let other = stats
            .expenses_by_category
            .iter()
            .find(|c| c.category == ExpenseCategory::Other)
            .unwrap();
        assert_eq!(other.total, dec!(50));
    }

    #[test]
    fn test_admin_drawer_balance() {
        let txns = vec![
            drawer_txn(DrawerTxnType::TurninReceived, dec!(300), None),
            drawer_txn(DrawerTxnType::CashappReceived, dec!(100), None),
            drawer_txn(DrawerTxnType::Expense, dec!(150), Some("contractors")),
        ];
        let stats = compute_admin_drawer_stats(&txns);
        assert_eq!(stats.total_inflows, dec!(400));
        assert_eq!(stats.current_balance, dec!(250));
    }
}
