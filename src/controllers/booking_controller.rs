use std::sync::Arc;

use chrono::Utc;
use rust_decimal::Decimal;
use uuid::Uuid;
use validator::Validate;

use crate::dto::booking_dto::{
    CreateBookingRequest, CreateGuestRequest, CreatePaymentRequest, UpdateBookingRequest,
    UpdateGuestRequest,
};
use crate::dto::ApiResponse;
use crate::models::auth::{UserInfo, UserRole};
use crate::models::booking::{Booking, BookingStatus, Payment, PaymentMethod, PaymentStatus};
use crate::models::guest::Guest;
use crate::models::ledger::{DrawerTransaction, DrawerTxnType};
use crate::models::operations::AuditLogEntry;
use crate::services::scope_service;
use crate::storage::Storage;
use crate::utils::errors::AppError;

pub struct BookingController {
    storage: Arc<dyn Storage>,
}

impl BookingController {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self { storage }
    }

    // --- Guests ---

    pub async fn create_guest(
        &self,
        request: CreateGuestRequest,
    ) -> Result<ApiResponse<Guest>, AppError> {
        request.validate()?;

        let guest = Guest {
            id: Uuid::new_v4(),
            name: request.name,
            contact: request.contact,
            contact_type: request.contact_type,
            referral_source: request.referral_source,
            cashtag: request.cashtag,
            created_at: Utc::now(),
        };

        let created = self.storage.create_guest(guest).await?;

        Ok(ApiResponse::success_with_message(
            created,
            "Huésped creado exitosamente".to_string(),
        ))
    }

    pub async fn list_guests(&self) -> Result<ApiResponse<Vec<Guest>>, AppError> {
        let guests = self.storage.list_guests().await?;
        Ok(ApiResponse::success(guests))
    }

    pub async fn get_guest(&self, id: Uuid) -> Result<Guest, AppError> {
        self.storage
            .get_guest(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Huésped no encontrado".to_string()))
    }

    pub async fn update_guest(
        &self,
        id: Uuid,
        request: UpdateGuestRequest,
    ) -> Result<ApiResponse<Guest>, AppError> {
        request.validate()?;

        let mut guest = self.get_guest(id).await?;

        if let Some(name) = request.name {
            guest.name = name;
        }
        if let Some(contact) = request.contact {
            guest.contact = contact;
        }
        if let Some(contact_type) = request.contact_type {
            guest.contact_type = contact_type;
        }
        if let Some(referral_source) = request.referral_source {
            guest.referral_source = Some(referral_source);
        }
        if let Some(cashtag) = request.cashtag {
            guest.cashtag = Some(cashtag);
        }

        let updated = self.storage.update_guest(guest).await?;

        Ok(ApiResponse::success_with_message(
            updated,
            "Huésped actualizado exitosamente".to_string(),
        ))
    }

    // --- Bookings ---

    /// Crea el booking y ocupa la habitación como unidad de trabajo;
    /// 409 si la habitación ya está ocupada
    pub async fn create_booking(
        &self,
        user: &UserInfo,
        request: CreateBookingRequest,
    ) -> Result<ApiResponse<Booking>, AppError> {
        request.validate()?;

        let room = self
            .storage
            .get_room(&request.room_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Habitación no encontrada".to_string()))?;
        self.ensure_property_access(user, &room.property_id)?;

        self.storage
            .get_guest(request.guest_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Huésped no encontrado".to_string()))?;

        let booking = Booking {
            id: Uuid::new_v4(),
            room_id: request.room_id,
            guest_id: request.guest_id,
            plan: request.plan,
            start_date: request.start_date.unwrap_or_else(Utc::now),
            end_date: request.end_date,
            total_amount: request.total_amount,
            payment_status: PaymentStatus::Pending,
            status: BookingStatus::Active,
            door_code: None,
            door_code_expiry: None,
            notes: request.notes,
            created_at: Utc::now(),
        };

        let created = self.storage.create_booking(booking).await?;

        self.storage
            .append_audit(AuditLogEntry {
                id: Uuid::new_v4(),
                user_id: Some(user.id),
                action: "create".to_string(),
                entity: "booking".to_string(),
                entity_id: created.id.to_string(),
                detail: Some(format!("room {}", created.room_id)),
                created_at: Utc::now(),
            })
            .await?;

        Ok(ApiResponse::success_with_message(
            created,
            "Booking creado exitosamente".to_string(),
        ))
    }

    pub async fn list_bookings(
        &self,
        user: &UserInfo,
    ) -> Result<ApiResponse<Vec<Booking>>, AppError> {
        let rooms = self.storage.list_rooms().await?;
        let bookings = self.storage.list_bookings().await?;
        Ok(ApiResponse::success(scope_service::scope_bookings(
            user, &rooms, bookings,
        )))
    }

    pub async fn get_booking(&self, user: &UserInfo, id: Uuid) -> Result<Booking, AppError> {
        let booking = self
            .storage
            .get_booking(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Booking no encontrado".to_string()))?;
        self.ensure_booking_access(user, &booking).await?;
        Ok(booking)
    }

    pub async fn update_booking(
        &self,
        user: &UserInfo,
        id: Uuid,
        request: UpdateBookingRequest,
    ) -> Result<ApiResponse<Booking>, AppError> {
        let mut booking = self.get_booking(user, id).await?;

        if let Some(plan) = request.plan {
            booking.plan = plan;
        }
        if let Some(end_date) = request.end_date {
            booking.end_date = Some(end_date);
        }
        if let Some(total_amount) = request.total_amount {
            booking.total_amount = total_amount;
        }
        if let Some(payment_status) = request.payment_status {
            booking.payment_status = payment_status;
        }
        if let Some(status) = request.status {
            booking.status = status;
        }
        if let Some(notes) = request.notes {
            booking.notes = Some(notes);
        }

        let updated = self.storage.update_booking(booking).await?;

        Ok(ApiResponse::success_with_message(
            updated,
            "Booking actualizado exitosamente".to_string(),
        ))
    }

    // --- Payments ---

    /// Registra un pago y marca el booking como pagado. Los pagos por
    /// cash_app generan además un inflow en el cash drawer del admin.
    pub async fn record_payment(
        &self,
        user: &UserInfo,
        request: CreatePaymentRequest,
    ) -> Result<ApiResponse<Payment>, AppError> {
        if request.amount <= Decimal::ZERO {
            return Err(AppError::ValidationError(
                "El monto del pago debe ser positivo".to_string(),
            ));
        }

        let booking = self.get_booking(user, request.booking_id).await?;

        let total_paid = request.amount - request.discount.unwrap_or(Decimal::ZERO)
            + request.deposit.unwrap_or(Decimal::ZERO)
            + request.fee.unwrap_or(Decimal::ZERO);

        let payment = Payment {
            id: Uuid::new_v4(),
            booking_id: booking.id,
            amount: request.amount,
            method: request.method,
            received_by: user.id,
            discount: request.discount,
            deposit: request.deposit,
            fee: request.fee,
            total_paid,
            date_received: Utc::now(),
        };

        let drawer_txn = match request.method {
            PaymentMethod::CashApp => Some(DrawerTransaction {
                id: Uuid::new_v4(),
                txn_type: DrawerTxnType::CashappReceived,
                amount: request.amount,
                category: None,
                note: Some(format!("Pago cash_app booking {}", booking.id)),
                created_at: Utc::now(),
            }),
            // El efectivo queda en el drawer del manager hasta el turn-in
            PaymentMethod::Cash => None,
        };

        let created = self.storage.record_payment(payment, drawer_txn).await?;

        self.storage
            .append_audit(AuditLogEntry {
                id: Uuid::new_v4(),
                user_id: Some(user.id),
                action: "record".to_string(),
                entity: "payment".to_string(),
                entity_id: created.id.to_string(),
                detail: Some(format!("{} {}", created.method.as_str(), created.amount)),
                created_at: Utc::now(),
            })
            .await?;

        Ok(ApiResponse::success_with_message(
            created,
            "Pago registrado exitosamente".to_string(),
        ))
    }

    pub async fn list_payments(
        &self,
        user: &UserInfo,
    ) -> Result<ApiResponse<Vec<Payment>>, AppError> {
        let payments = self.storage.list_payments().await?;
        let scoped = match user.role {
            UserRole::Admin => payments,
            UserRole::Manager => {
                let rooms = self.storage.list_rooms().await?;
                let bookings = self.storage.list_bookings().await?;
                let visible: std::collections::HashSet<Uuid> =
                    scope_service::scope_bookings(user, &rooms, bookings)
                        .into_iter()
                        .map(|b| b.id)
                        .collect();
                payments
                    .into_iter()
                    .filter(|p| visible.contains(&p.booking_id))
                    .collect()
            }
            UserRole::Helper => Vec::new(),
        };
        Ok(ApiResponse::success(scoped))
    }

    async fn ensure_booking_access(
        &self,
        user: &UserInfo,
        booking: &Booking,
    ) -> Result<(), AppError> {
        match user.role {
            UserRole::Admin => Ok(()),
            UserRole::Helper => Err(AppError::Forbidden(
                "No tienes acceso a bookings".to_string(),
            )),
            UserRole::Manager => {
                let room = self
                    .storage
                    .get_room(&booking.room_id)
                    .await?
                    .ok_or_else(|| AppError::NotFound("Habitación no encontrada".to_string()))?;
                self.ensure_property_access(user, &room.property_id)
            }
        }
    }

    fn ensure_property_access(&self, user: &UserInfo, property_id: &str) -> Result<(), AppError> {
        match user.role {
            UserRole::Admin => Ok(()),
            UserRole::Manager => {
                if user.property.as_deref() == Some(property_id) {
                    Ok(())
                } else {
                    Err(AppError::Forbidden(
                        "No tienes acceso a esta propiedad".to_string(),
                    ))
                }
            }
            UserRole::Helper => Err(AppError::Forbidden(
                "No tienes acceso a bookings".to_string(),
            )),
        }
    }
}
