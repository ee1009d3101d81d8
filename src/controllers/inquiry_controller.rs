use std::sync::Arc;

use chrono::{Duration, Utc};
use uuid::Uuid;
use validator::Validate;

use crate::dto::inquiry_dto::{
    AssignRoomRequest, CreateBannedUserRequest, SubmitInquiryRequest, SubmitInquiryResponse,
    TrackInquiryResponse, UpdateInquiryStatusRequest,
};
use crate::dto::ApiResponse;
use crate::models::auth::UserInfo;
use crate::models::booking::{Booking, BookingStatus, PaymentStatus};
use crate::models::guest::{BannedUser, Guest};
use crate::models::inquiry::{Inquiry, InquiryStatus};
use crate::models::operations::AuditLogEntry;
use crate::services::door_code_service;
use crate::storage::Storage;
use crate::utils::errors::AppError;

/// Validez del tracker token de una inquiry pública
const TOKEN_TTL_DAYS: i64 = 7;

pub struct InquiryController {
    storage: Arc<dyn Storage>,
}

impl InquiryController {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self { storage }
    }

    /// Chequeo de bloqueo para la submission pública
    pub async fn contact_is_banned(&self, contact: &str) -> Result<bool, AppError> {
        let banned = self.storage.list_banned_users().await?;
        Ok(banned.iter().any(|b| b.matches_contact(contact)))
    }

    /// Submission pública; el tracker token se devuelve una única vez
    pub async fn submit(
        &self,
        request: SubmitInquiryRequest,
    ) -> Result<SubmitInquiryResponse, AppError> {
        request.validate()?;

        if let Some(property_id) = &request.property_id {
            self.storage
                .get_property(property_id)
                .await?
                .ok_or_else(|| AppError::NotFound("Propiedad no encontrada".to_string()))?;
        }

        let now = Utc::now();
        let inquiry = Inquiry {
            id: Uuid::new_v4(),
            name: request.name,
            contact: request.contact,
            contact_type: request.contact_type,
            property_id: request.property_id,
            plan: request.plan,
            message: request.message,
            status: InquiryStatus::Received,
            tracker_token: door_code_service::generate_tracker_token(),
            token_expiry: now + Duration::days(TOKEN_TTL_DAYS),
            created_at: now,
        };

        let created = self.storage.create_inquiry(inquiry).await?;

        Ok(SubmitInquiryResponse {
            tracker_token: created.tracker_token,
            token_expiry: created.token_expiry,
            status: created.status,
        })
    }

    /// Lookup público por token; token vencido se comporta igual que
    /// token inexistente
    pub async fn track(&self, token: &str) -> Result<TrackInquiryResponse, AppError> {
        let inquiry = self
            .storage
            .get_inquiry_by_token(token)
            .await?
            .filter(|i| !i.token_is_expired(Utc::now()))
            .ok_or_else(|| AppError::NotFound("Inquiry no encontrada".to_string()))?;

        Ok(TrackInquiryResponse {
            status: inquiry.status,
            property_id: inquiry.property_id,
            created_at: inquiry.created_at,
        })
    }

    pub async fn list(&self) -> Result<ApiResponse<Vec<Inquiry>>, AppError> {
        let inquiries = self.storage.list_inquiries().await?;
        Ok(ApiResponse::success(inquiries))
    }

    pub async fn update_status(
        &self,
        id: Uuid,
        request: UpdateInquiryStatusRequest,
    ) -> Result<ApiResponse<Inquiry>, AppError> {
        let mut inquiry = self
            .storage
            .get_inquiry(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Inquiry no encontrada".to_string()))?;

        if !inquiry.status.can_transition_to(request.status) {
            return Err(AppError::Conflict(format!(
                "Transición inválida: {} -> {}",
                inquiry.status.as_str(),
                request.status.as_str()
            )));
        }

        inquiry.status = request.status;
        let updated = self.storage.update_inquiry(inquiry).await?;

        Ok(ApiResponse::success_with_message(
            updated,
            "Estado de inquiry actualizado".to_string(),
        ))
    }

    /// Convierte el lead: crea Guest + Booking, regenera el door code de
    /// la habitación y deja la inquiry en booking_confirmed
    pub async fn assign_room(
        &self,
        user: &UserInfo,
        id: Uuid,
        request: AssignRoomRequest,
    ) -> Result<ApiResponse<Booking>, AppError> {
        request.validate()?;

        let mut inquiry = self
            .storage
            .get_inquiry(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Inquiry no encontrada".to_string()))?;

        // La asignación se admite desde received o payment_confirmed
        if !matches!(
            inquiry.status,
            InquiryStatus::Received | InquiryStatus::PaymentConfirmed
        ) {
            return Err(AppError::Conflict(format!(
                "La inquiry no admite asignación en estado {}",
                inquiry.status.as_str()
            )));
        }

        let mut room = self
            .storage
            .get_room(&request.room_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Habitación no encontrada".to_string()))?;

        let guest = self
            .storage
            .create_guest(Guest {
                id: Uuid::new_v4(),
                name: inquiry.name.clone(),
                contact: inquiry.contact.clone(),
                contact_type: inquiry.contact_type,
                referral_source: Some("inquiry".to_string()),
                cashtag: None,
                created_at: Utc::now(),
            })
            .await?;

        let issued = door_code_service::issue_code(request.plan.as_str());

        let booking = match self
            .storage
            .create_booking(Booking {
                id: Uuid::new_v4(),
                room_id: request.room_id.clone(),
                guest_id: guest.id,
                plan: request.plan,
                start_date: request.start_date.unwrap_or_else(Utc::now),
                end_date: request.end_date,
                total_amount: request.total_amount,
                payment_status: PaymentStatus::Pending,
                status: BookingStatus::Active,
                door_code: Some(issued.code.clone()),
                door_code_expiry: Some(issued.expiry),
                notes: inquiry.message.clone(),
                created_at: Utc::now(),
            })
            .await
        {
            Ok(booking) => booking,
            // Si la reserva no se concreta, el guest recién creado se revierte
            Err(err) => {
                self.storage.delete_guest(guest.id).await?;
                return Err(err);
            }
        };

        room.door_code = Some(issued.code);
        room.door_code_expiry = Some(issued.expiry);
        self.storage.update_room(room).await?;

        inquiry.status = InquiryStatus::BookingConfirmed;
        self.storage.update_inquiry(inquiry).await?;

        self.storage
            .append_audit(AuditLogEntry {
                id: Uuid::new_v4(),
                user_id: Some(user.id),
                action: "assign_room".to_string(),
                entity: "inquiry".to_string(),
                entity_id: id.to_string(),
                detail: Some(format!("room {}", booking.room_id)),
                created_at: Utc::now(),
            })
            .await?;

        Ok(ApiResponse::success_with_message(
            booking,
            "Habitación asignada exitosamente".to_string(),
        ))
    }

    // --- Personas bloqueadas ---

    pub async fn create_banned_user(
        &self,
        request: CreateBannedUserRequest,
    ) -> Result<ApiResponse<BannedUser>, AppError> {
        request.validate()?;

        if request.email.is_none() && request.phone.is_none() {
            return Err(AppError::ValidationError(
                "Se requiere email o teléfono para bloquear".to_string(),
            ));
        }

        let banned = BannedUser {
            id: Uuid::new_v4(),
            name: request.name,
            email: request.email,
            phone: request.phone,
            reason: request.reason,
            created_at: Utc::now(),
        };

        let created = self.storage.create_banned_user(banned).await?;

        Ok(ApiResponse::success_with_message(
            created,
            "Persona bloqueada".to_string(),
        ))
    }

    pub async fn list_banned_users(&self) -> Result<ApiResponse<Vec<BannedUser>>, AppError> {
        let banned = self.storage.list_banned_users().await?;
        Ok(ApiResponse::success(banned))
    }

    pub async fn delete_banned_user(&self, id: Uuid) -> Result<ApiResponse<()>, AppError> {
        self.storage.delete_banned_user(id).await?;
        Ok(ApiResponse::success_with_message(
            (),
            "Bloqueo eliminado".to_string(),
        ))
    }
}
