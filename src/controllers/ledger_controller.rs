use std::collections::HashSet;
use std::sync::Arc;

use chrono::{Duration, Utc};
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::dto::booking_dto::CreateTurnInRequest;
use crate::dto::ledger_dto::{
    AnalyticsResponse, CashDrawerOverview, CreateDrawerTxnRequest, CreateHouseBankTxnRequest,
    MethodMix, PlanMix, PropertyReport, ReportRangeQuery, ReportsResponse,
};
use crate::dto::ApiResponse;
use crate::models::auth::{UserInfo, UserRole};
use crate::models::booking::{BookingPlan, CashTurnIn, Payment, PaymentMethod};
use crate::models::inquiry::InquiryStatus;
use crate::models::ledger::{
    DashboardStats, DrawerTransaction, DrawerTxnType, HouseBankStats, HouseBankTransaction,
};
use crate::models::operations::AuditLogEntry;
use crate::models::property::RoomStatus;
use crate::services::{scope_service, stats_service};
use crate::storage::Storage;
use crate::utils::errors::AppError;

pub struct LedgerController {
    storage: Arc<dyn Storage>,
}

impl LedgerController {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self { storage }
    }

    /// Stats del dashboard, calculadas sobre los datos que el usuario
    /// puede ver según su rol
    pub async fn dashboard_stats(&self, user: &UserInfo) -> Result<DashboardStats, AppError> {
        let rooms = self.storage.list_rooms().await?;
        let bookings = self.storage.list_bookings().await?;
        let tasks = self.storage.list_cleaning_tasks().await?;
        let payments = self.storage.list_payments().await?;

        let scoped_rooms = scope_service::scope_rooms(user, rooms.clone());
        let scoped_bookings = scope_service::scope_bookings(user, &rooms, bookings);
        let scoped_tasks = scope_service::scope_cleaning_tasks(user, &rooms, tasks);
        let scoped_payments = self.payments_for_bookings(&scoped_bookings, payments, user);

        Ok(stats_service::compute_dashboard_stats(
            &scoped_rooms,
            &scoped_bookings,
            &scoped_tasks,
            &scoped_payments,
            Utc::now(),
        ))
    }

    /// Revenue y ocupación por propiedad en un rango; por defecto los
    /// últimos 30 días
    pub async fn reports(&self, range: ReportRangeQuery) -> Result<ReportsResponse, AppError> {
        let to = range.to.unwrap_or_else(Utc::now);
        let from = range.from.unwrap_or(to - Duration::days(30));

        if from > to {
            return Err(AppError::BadRequest(
                "El inicio del rango no puede ser posterior al fin".to_string(),
            ));
        }

        let properties = self.storage.list_properties().await?;
        let rooms = self.storage.list_rooms().await?;
        let bookings = self.storage.list_bookings().await?;
        let payments = self.storage.list_payments().await?;

        let mut total_revenue = Decimal::ZERO;
        let mut reports = Vec::with_capacity(properties.len());

        for property in properties {
            let property_rooms: Vec<_> = rooms
                .iter()
                .filter(|r| r.property_id == property.id)
                .collect();
            let room_ids: HashSet<&str> =
                property_rooms.iter().map(|r| r.id.as_str()).collect();
            let booking_ids: HashSet<Uuid> = bookings
                .iter()
                .filter(|b| room_ids.contains(b.room_id.as_str()))
                .map(|b| b.id)
                .collect();

            let revenue: Decimal = payments
                .iter()
                .filter(|p| {
                    booking_ids.contains(&p.booking_id)
                        && p.date_received >= from
                        && p.date_received <= to
                })
                .map(|p| p.amount)
                .sum();
            total_revenue += revenue;

            let total_rooms = property_rooms.len();
            let occupied_rooms = property_rooms
                .iter()
                .filter(|r| r.status == RoomStatus::Occupied)
                .count();
            let occupancy_rate = if total_rooms == 0 {
                Decimal::ZERO
            } else {
                Decimal::from(occupied_rooms) / Decimal::from(total_rooms) * Decimal::from(100)
            };

            reports.push(PropertyReport {
                property_id: property.id,
                property_name: property.name,
                revenue,
                total_rooms,
                occupied_rooms,
                occupancy_rate,
            });
        }

        Ok(ReportsResponse {
            from,
            to,
            total_revenue,
            properties: reports,
        })
    }

    /// Mix de planes y métodos de pago más conversión de inquiries
    pub async fn analytics(&self) -> Result<AnalyticsResponse, AppError> {
        let bookings = self.storage.list_bookings().await?;
        let payments = self.storage.list_payments().await?;
        let inquiries = self.storage.list_inquiries().await?;

        let mut plan_mix = PlanMix::default();
        for booking in &bookings {
            match booking.plan {
                BookingPlan::Daily => plan_mix.daily += 1,
                BookingPlan::Weekly => plan_mix.weekly += 1,
                BookingPlan::Monthly => plan_mix.monthly += 1,
            }
        }

        let mut method_mix = MethodMix::default();
        for payment in &payments {
            match payment.method {
                PaymentMethod::Cash => method_mix.cash += payment.amount,
                PaymentMethod::CashApp => method_mix.cash_app += payment.amount,
            }
        }

        let inquiries_received = inquiries.len();
        let inquiries_converted = inquiries
            .iter()
            .filter(|i| i.status == InquiryStatus::BookingConfirmed)
            .count();
        let conversion_rate = if inquiries_received == 0 {
            Decimal::ZERO
        } else {
            Decimal::from(inquiries_converted) / Decimal::from(inquiries_received)
                * Decimal::from(100)
        };

        Ok(AnalyticsResponse {
            bookings_by_plan: plan_mix,
            revenue_by_method: method_mix,
            inquiries_received,
            inquiries_converted,
            conversion_rate,
        })
    }

    // --- Turn-ins ---

    /// Entrega de efectivo al drawer del admin; registra el turn-in y
    /// su inflow como unidad de trabajo
    pub async fn create_turn_in(
        &self,
        user: &UserInfo,
        request: CreateTurnInRequest,
    ) -> Result<ApiResponse<CashTurnIn>, AppError> {
        if request.amount <= Decimal::ZERO {
            return Err(AppError::ValidationError(
                "El monto de la entrega debe ser positivo".to_string(),
            ));
        }

        let now = Utc::now();
        let turn_in = CashTurnIn {
            id: Uuid::new_v4(),
            manager_id: user.id,
            amount: request.amount,
            note: request.note,
            turned_in_at: now,
        };
        let drawer_txn = DrawerTransaction {
            id: Uuid::new_v4(),
            txn_type: DrawerTxnType::TurninReceived,
            amount: request.amount,
            category: None,
            note: Some(format!("Entrega de {}", user.username)),
            created_at: now,
        };

        let created = self.storage.create_turn_in(turn_in, drawer_txn).await?;

        self.storage
            .append_audit(AuditLogEntry {
                id: Uuid::new_v4(),
                user_id: Some(user.id),
                action: "turn_in".to_string(),
                entity: "cash_turn_in".to_string(),
                entity_id: created.id.to_string(),
                detail: Some(created.amount.to_string()),
                created_at: Utc::now(),
            })
            .await?;

        Ok(ApiResponse::success_with_message(
            created,
            "Entrega registrada exitosamente".to_string(),
        ))
    }

    /// Lista de entregas; el manager solo ve las propias
    pub async fn list_turn_ins(
        &self,
        user: &UserInfo,
    ) -> Result<ApiResponse<Vec<CashTurnIn>>, AppError> {
        let turn_ins = self.storage.list_turn_ins().await?;
        let scoped = match user.role {
            UserRole::Admin => turn_ins,
            UserRole::Manager => turn_ins
                .into_iter()
                .filter(|t| t.manager_id == user.id)
                .collect(),
            UserRole::Helper => Vec::new(),
        };
        Ok(ApiResponse::success(scoped))
    }

    // --- Cash drawer del admin ---

    pub async fn cash_drawer_overview(&self) -> Result<CashDrawerOverview, AppError> {
        let transactions = self.storage.list_drawer_txns().await?;
        let users = self.storage.list_users().await?;
        let payments = self.storage.list_payments().await?;
        let turn_ins = self.storage.list_turn_ins().await?;

        let managers: Vec<_> = users
            .into_iter()
            .filter(|u| u.role == UserRole::Manager)
            .collect();

        Ok(CashDrawerOverview {
            drawer: stats_service::compute_admin_drawer_stats(&transactions),
            managers: stats_service::compute_cash_drawer_stats(
                &managers,
                &payments,
                &turn_ins,
                Utc::now(),
            ),
        })
    }

    pub async fn create_drawer_txn(
        &self,
        user: &UserInfo,
        request: CreateDrawerTxnRequest,
    ) -> Result<ApiResponse<DrawerTransaction>, AppError> {
        if request.amount <= Decimal::ZERO {
            return Err(AppError::ValidationError(
                "El monto debe ser positivo".to_string(),
            ));
        }

        let txn = DrawerTransaction {
            id: Uuid::new_v4(),
            txn_type: request.txn_type,
            amount: request.amount,
            category: request.category.map(|c| c.as_str().to_string()),
            note: request.note,
            created_at: Utc::now(),
        };

        let created = self.storage.create_drawer_txn(txn).await?;

        self.storage
            .append_audit(AuditLogEntry {
                id: Uuid::new_v4(),
                user_id: Some(user.id),
                action: "create".to_string(),
                entity: "drawer_transaction".to_string(),
                entity_id: created.id.to_string(),
                detail: Some(format!("{} {}", created.txn_type.as_str(), created.amount)),
                created_at: Utc::now(),
            })
            .await?;

        Ok(ApiResponse::success_with_message(
            created,
            "Transacción registrada".to_string(),
        ))
    }

    pub async fn list_drawer_txns(
        &self,
    ) -> Result<ApiResponse<Vec<DrawerTransaction>>, AppError> {
        let transactions = self.storage.list_drawer_txns().await?;
        Ok(ApiResponse::success(transactions))
    }

    // --- House bank ---

    pub async fn house_bank_stats(&self) -> Result<HouseBankStats, AppError> {
        let transactions = self.storage.list_house_bank_txns().await?;
        Ok(stats_service::compute_house_bank_stats(&transactions))
    }

    pub async fn create_house_bank_txn(
        &self,
        user: &UserInfo,
        request: CreateHouseBankTxnRequest,
    ) -> Result<ApiResponse<HouseBankTransaction>, AppError> {
        if request.amount <= Decimal::ZERO {
            return Err(AppError::ValidationError(
                "El monto debe ser positivo".to_string(),
            ));
        }

        let txn = HouseBankTransaction {
            id: Uuid::new_v4(),
            txn_type: request.txn_type,
            amount: request.amount,
            category: request.category.map(|c| c.as_str().to_string()),
            note: request.note,
            created_at: Utc::now(),
        };

        let created = self.storage.create_house_bank_txn(txn).await?;

        self.storage
            .append_audit(AuditLogEntry {
                id: Uuid::new_v4(),
                user_id: Some(user.id),
                action: "create".to_string(),
                entity: "house_bank_transaction".to_string(),
                entity_id: created.id.to_string(),
                detail: Some(format!("{} {}", created.txn_type.as_str(), created.amount)),
                created_at: Utc::now(),
            })
            .await?;

        Ok(ApiResponse::success_with_message(
            created,
            "Transacción registrada".to_string(),
        ))
    }

    pub async fn list_house_bank_txns(
        &self,
    ) -> Result<ApiResponse<Vec<HouseBankTransaction>>, AppError> {
        let transactions = self.storage.list_house_bank_txns().await?;
        Ok(ApiResponse::success(transactions))
    }

    // --- Audit log ---

    pub async fn audit_log(&self) -> Result<ApiResponse<Vec<AuditLogEntry>>, AppError> {
        let entries = self.storage.list_audit_log().await?;
        Ok(ApiResponse::success(entries))
    }

    /// Pagos visibles: admin todos, manager los de sus bookings,
    /// helper ninguno
    fn payments_for_bookings(
        &self,
        scoped_bookings: &[crate::models::booking::Booking],
        payments: Vec<Payment>,
        user: &UserInfo,
    ) -> Vec<Payment> {
        match user.role {
            UserRole::Admin => payments,
            UserRole::Manager => {
                let ids: HashSet<Uuid> = scoped_bookings.iter().map(|b| b.id).collect();
                payments
                    .into_iter()
                    .filter(|p| ids.contains(&p.booking_id))
                    .collect()
            }
            UserRole::Helper => Vec::new(),
        }
    }
}
