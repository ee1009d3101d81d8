//! Adapter de storage sobre PostgreSQL
//!
//! Queries sqlx con bind explícito contra el schema de
//! `migrations/0001_initial.sql`. Los enums viajan como TEXT
//! (`as_str()` al escribir, `try_from` al leer). Las unidades de
//! trabajo multi-paso corren dentro de una transacción.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::booking::{Booking, CashTurnIn, Payment, PaymentStatus};
use crate::models::guest::{BannedUser, Guest};
use crate::models::inquiry::Inquiry;
use crate::models::ledger::{DrawerTransaction, HouseBankTransaction};
use crate::models::operations::{
    AuditLogEntry, CleaningTask, CleaningTaskType, InventoryItem, MaintenanceRequest, TaskStatus,
};
use crate::models::property::{
    CleaningStatus, LinenStatus, MasterCode, Property, Room, RoomStatus,
};
use crate::models::user::User;
use crate::storage::Storage;
use crate::utils::errors::{AppError, AppResult};

pub struct PgStorage {
    pool: PgPool,
}

impl PgStorage {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl Storage for PgStorage {
    // --- Users ---

    async fn create_user(&self, user: User) -> AppResult<User> {
        let existing: Option<(Uuid,)> =
            sqlx::query_as("SELECT id FROM users WHERE username = $1")
                .bind(&user.username)
                .fetch_optional(&self.pool)
                .await?;
        if existing.is_some() {
            return Err(AppError::Conflict(format!(
                "Username already exists: {}",
                user.username
            )));
        }

        let created = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (id, username, password_hash, name, role, property, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING *
            "#,
        )
        .bind(user.id)
        .bind(&user.username)
        .bind(&user.password_hash)
        .bind(&user.name)
        .bind(user.role.as_str())
        .bind(&user.property)
        .bind(user.created_at)
        .fetch_one(&self.pool)
        .await?;

        Ok(created)
    }

    async fn get_user(&self, id: Uuid) -> AppResult<Option<User>> {
        let user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(user)
    }

    async fn get_user_by_username(&self, username: &str) -> AppResult<Option<User>> {
        let user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE username = $1")
            .bind(username)
            .fetch_optional(&self.pool)
            .await?;
        Ok(user)
    }

    async fn list_users(&self) -> AppResult<Vec<User>> {
        let users = sqlx::query_as::<_, User>("SELECT * FROM users ORDER BY created_at")
            .fetch_all(&self.pool)
            .await?;
        Ok(users)
    }

    async fn update_user(&self, user: User) -> AppResult<User> {
        let updated = sqlx::query_as::<_, User>(
            r#"
            UPDATE users
            SET username = $2, password_hash = $3, name = $4, role = $5, property = $6
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(user.id)
        .bind(&user.username)
        .bind(&user.password_hash)
        .bind(&user.name)
        .bind(user.role.as_str())
        .bind(&user.property)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        Ok(updated)
    }

    // --- Properties ---

    async fn create_property(&self, property: Property) -> AppResult<Property> {
        let created = sqlx::query_as::<_, Property>(
            r#"
            INSERT INTO properties
                (id, name, daily_rate, weekly_rate, monthly_rate,
                 front_door_code, front_door_code_expiry, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING *
            "#,
        )
        .bind(&property.id)
        .bind(&property.name)
        .bind(property.daily_rate)
        .bind(property.weekly_rate)
        .bind(property.monthly_rate)
        .bind(&property.front_door_code)
        .bind(property.front_door_code_expiry)
        .bind(property.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db) if db.is_unique_violation() => {
                AppError::Conflict(format!("Property already exists: {}", property.id))
            }
            other => AppError::Database(other),
        })?;

        Ok(created)
    }

    async fn get_property(&self, id: &str) -> AppResult<Option<Property>> {
        let property = sqlx::query_as::<_, Property>("SELECT * FROM properties WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(property)
    }

    async fn list_properties(&self) -> AppResult<Vec<Property>> {
        let properties = sqlx::query_as::<_, Property>("SELECT * FROM properties ORDER BY id")
            .fetch_all(&self.pool)
            .await?;
        Ok(properties)
    }

    async fn update_property(&self, property: Property) -> AppResult<Property> {
        let updated = sqlx::query_as::<_, Property>(
            r#"
            UPDATE properties
            SET name = $2, daily_rate = $3, weekly_rate = $4, monthly_rate = $5,
                front_door_code = $6, front_door_code_expiry = $7
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(&property.id)
        .bind(&property.name)
        .bind(property.daily_rate)
        .bind(property.weekly_rate)
        .bind(property.monthly_rate)
        .bind(&property.front_door_code)
        .bind(property.front_door_code_expiry)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound("Property not found".to_string()))?;

        Ok(updated)
    }

    // --- Rooms ---

    async fn create_room(&self, room: Room) -> AppResult<Room> {
        if self.get_property(&room.property_id).await?.is_none() {
            return Err(AppError::NotFound(format!(
                "Property not found: {}",
                room.property_id
            )));
        }

        let created = sqlx::query_as::<_, Room>(
            r#"
            INSERT INTO rooms
                (id, property_id, room_number, status, door_code, door_code_expiry,
                 cleaning_status, linen_status, notes, last_cleaned, last_linen_change)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            RETURNING *
            "#,
        )
        .bind(&room.id)
        .bind(&room.property_id)
        .bind(&room.room_number)
        .bind(room.status.as_str())
        .bind(&room.door_code)
        .bind(room.door_code_expiry)
        .bind(room.cleaning_status.as_str())
        .bind(room.linen_status.as_str())
        .bind(&room.notes)
        .bind(room.last_cleaned)
        .bind(room.last_linen_change)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db) if db.is_unique_violation() => {
                AppError::Conflict(format!("Room already exists: {}", room.id))
            }
            other => AppError::Database(other),
        })?;

        Ok(created)
    }

    async fn get_room(&self, id: &str) -> AppResult<Option<Room>> {
        let room = sqlx::query_as::<_, Room>("SELECT * FROM rooms WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(room)
    }

    async fn list_rooms(&self) -> AppResult<Vec<Room>> {
        let rooms = sqlx::query_as::<_, Room>("SELECT * FROM rooms ORDER BY id")
            .fetch_all(&self.pool)
            .await?;
        Ok(rooms)
    }

    async fn update_room(&self, room: Room) -> AppResult<Room> {
        let updated = sqlx::query_as::<_, Room>(
            r#"
            UPDATE rooms
            SET room_number = $2, status = $3, door_code = $4, door_code_expiry = $5,
                cleaning_status = $6, linen_status = $7, notes = $8,
                last_cleaned = $9, last_linen_change = $10
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(&room.id)
        .bind(&room.room_number)
        .bind(room.status.as_str())
        .bind(&room.door_code)
        .bind(room.door_code_expiry)
        .bind(room.cleaning_status.as_str())
        .bind(room.linen_status.as_str())
        .bind(&room.notes)
        .bind(room.last_cleaned)
        .bind(room.last_linen_change)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound("Room not found".to_string()))?;

        Ok(updated)
    }

    // --- Guests ---

    async fn create_guest(&self, guest: Guest) -> AppResult<Guest> {
        let created = sqlx::query_as::<_, Guest>(
            r#"
            INSERT INTO guests
                (id, name, contact, contact_type, referral_source, cashtag, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING *
            "#,
        )
        .bind(guest.id)
        .bind(&guest.name)
        .bind(&guest.contact)
        .bind(guest.contact_type.as_str())
        .bind(&guest.referral_source)
        .bind(&guest.cashtag)
        .bind(guest.created_at)
        .fetch_one(&self.pool)
        .await?;

        Ok(created)
    }

    async fn get_guest(&self, id: Uuid) -> AppResult<Option<Guest>> {
        let guest = sqlx::query_as::<_, Guest>("SELECT * FROM guests WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(guest)
    }

    async fn list_guests(&self) -> AppResult<Vec<Guest>> {
        let guests = sqlx::query_as::<_, Guest>("SELECT * FROM guests ORDER BY created_at")
            .fetch_all(&self.pool)
            .await?;
        Ok(guests)
    }

    async fn update_guest(&self, guest: Guest) -> AppResult<Guest> {
        let updated = sqlx::query_as::<_, Guest>(
            r#"
            UPDATE guests
            SET name = $2, contact = $3, contact_type = $4, referral_source = $5, cashtag = $6
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(guest.id)
        .bind(&guest.name)
        .bind(&guest.contact)
        .bind(guest.contact_type.as_str())
        .bind(&guest.referral_source)
        .bind(&guest.cashtag)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound("Guest not found".to_string()))?;

        Ok(updated)
    }

    async fn delete_guest(&self, id: Uuid) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM guests WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Guest not found".to_string()));
        }
        Ok(())
    }

    // --- Bookings ---

    async fn create_booking(&self, booking: Booking) -> AppResult<Booking> {
        let mut tx = self.pool.begin().await?;

        // FOR UPDATE: dos requests simultáneos por la misma habitación
        // serializan aquí
        let room: Option<(String,)> =
            sqlx::query_as("SELECT status FROM rooms WHERE id = $1 FOR UPDATE")
                .bind(&booking.room_id)
                .fetch_optional(&mut *tx)
                .await?;

        let status = match room {
            Some((status,)) => status,
            None => {
                return Err(AppError::NotFound(format!(
                    "Room not found: {}",
                    booking.room_id
                )))
            }
        };
        if RoomStatus::from_str(&status) == Some(RoomStatus::Occupied) {
            return Err(AppError::Conflict(format!(
                "Room is already occupied: {}",
                booking.room_id
            )));
        }

        let created = sqlx::query_as::<_, Booking>(
            r#"
            INSERT INTO bookings
                (id, room_id, guest_id, plan, start_date, end_date, total_amount,
                 payment_status, status, door_code, door_code_expiry, notes, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
            RETURNING *
            "#,
        )
        .bind(booking.id)
        .bind(&booking.room_id)
        .bind(booking.guest_id)
        .bind(booking.plan.as_str())
        .bind(booking.start_date)
        .bind(booking.end_date)
        .bind(booking.total_amount)
        .bind(booking.payment_status.as_str())
        .bind(booking.status.as_str())
        .bind(&booking.door_code)
        .bind(booking.door_code_expiry)
        .bind(&booking.notes)
        .bind(booking.created_at)
        .fetch_one(&mut *tx)
        .await?;

        sqlx::query("UPDATE rooms SET status = $2 WHERE id = $1")
            .bind(&booking.room_id)
            .bind(RoomStatus::Occupied.as_str())
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(created)
    }

    async fn get_booking(&self, id: Uuid) -> AppResult<Option<Booking>> {
        let booking = sqlx::query_as::<_, Booking>("SELECT * FROM bookings WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(booking)
    }

    async fn list_bookings(&self) -> AppResult<Vec<Booking>> {
        let bookings = sqlx::query_as::<_, Booking>("SELECT * FROM bookings ORDER BY created_at")
            .fetch_all(&self.pool)
            .await?;
        Ok(bookings)
    }

    async fn update_booking(&self, booking: Booking) -> AppResult<Booking> {
        let updated = sqlx::query_as::<_, Booking>(
            r#"
            UPDATE bookings
            SET plan = $2, start_date = $3, end_date = $4, total_amount = $5,
                payment_status = $6, status = $7, door_code = $8,
                door_code_expiry = $9, notes = $10
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(booking.id)
        .bind(booking.plan.as_str())
        .bind(booking.start_date)
        .bind(booking.end_date)
        .bind(booking.total_amount)
        .bind(booking.payment_status.as_str())
        .bind(booking.status.as_str())
        .bind(&booking.door_code)
        .bind(booking.door_code_expiry)
        .bind(&booking.notes)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound("Booking not found".to_string()))?;

        Ok(updated)
    }

    // --- Payments ---

    async fn record_payment(
        &self,
        payment: Payment,
        drawer_txn: Option<DrawerTransaction>,
    ) -> AppResult<Payment> {
        let mut tx = self.pool.begin().await?;

        let booking: Option<(Uuid,)> =
            sqlx::query_as("SELECT id FROM bookings WHERE id = $1 FOR UPDATE")
                .bind(payment.booking_id)
                .fetch_optional(&mut *tx)
                .await?;
        if booking.is_none() {
            return Err(AppError::NotFound("Booking not found".to_string()));
        }

        let created = sqlx::query_as::<_, Payment>(
            r#"
            INSERT INTO payments
                (id, booking_id, amount, method, received_by, discount, deposit,
                 fee, total_paid, date_received)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            RETURNING *
            "#,
        )
        .bind(payment.id)
        .bind(payment.booking_id)
        .bind(payment.amount)
        .bind(payment.method.as_str())
        .bind(payment.received_by)
        .bind(payment.discount)
        .bind(payment.deposit)
        .bind(payment.fee)
        .bind(payment.total_paid)
        .bind(payment.date_received)
        .fetch_one(&mut *tx)
        .await?;

        sqlx::query("UPDATE bookings SET payment_status = $2 WHERE id = $1")
            .bind(payment.booking_id)
            .bind(PaymentStatus::Paid.as_str())
            .execute(&mut *tx)
            .await?;

        if let Some(txn) = drawer_txn {
            sqlx::query(
                r#"
                INSERT INTO drawer_transactions (id, txn_type, amount, category, note, created_at)
                VALUES ($1, $2, $3, $4, $5, $6)
                "#,
            )
            .bind(txn.id)
            .bind(txn.txn_type.as_str())
            .bind(txn.amount)
            .bind(&txn.category)
            .bind(&txn.note)
            .bind(txn.created_at)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;
        Ok(created)
    }

    async fn list_payments(&self) -> AppResult<Vec<Payment>> {
        let payments =
            sqlx::query_as::<_, Payment>("SELECT * FROM payments ORDER BY date_received")
                .fetch_all(&self.pool)
                .await?;
        Ok(payments)
    }

    // --- Cleaning tasks ---

    async fn create_cleaning_task(&self, task: CleaningTask) -> AppResult<CleaningTask> {
        let created = sqlx::query_as::<_, CleaningTask>(
            r#"
            INSERT INTO cleaning_tasks
                (id, room_id, property_id, task_type, priority, status,
                 assigned_to, notes, created_at, completed_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            RETURNING *
            "#,
        )
        .bind(task.id)
        .bind(&task.room_id)
        .bind(&task.property_id)
        .bind(task.task_type.as_str())
        .bind(task.priority.as_str())
        .bind(task.status.as_str())
        .bind(task.assigned_to)
        .bind(&task.notes)
        .bind(task.created_at)
        .bind(task.completed_at)
        .fetch_one(&self.pool)
        .await?;

        Ok(created)
    }

    async fn get_cleaning_task(&self, id: Uuid) -> AppResult<Option<CleaningTask>> {
        let task = sqlx::query_as::<_, CleaningTask>("SELECT * FROM cleaning_tasks WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(task)
    }

    async fn list_cleaning_tasks(&self) -> AppResult<Vec<CleaningTask>> {
        let tasks =
            sqlx::query_as::<_, CleaningTask>("SELECT * FROM cleaning_tasks ORDER BY created_at")
                .fetch_all(&self.pool)
                .await?;
        Ok(tasks)
    }

    async fn update_cleaning_task(&self, task: CleaningTask) -> AppResult<CleaningTask> {
        let updated = sqlx::query_as::<_, CleaningTask>(
            r#"
            UPDATE cleaning_tasks
            SET room_id = $2, property_id = $3, task_type = $4, priority = $5,
                status = $6, assigned_to = $7, notes = $8, completed_at = $9
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(task.id)
        .bind(&task.room_id)
        .bind(&task.property_id)
        .bind(task.task_type.as_str())
        .bind(task.priority.as_str())
        .bind(task.status.as_str())
        .bind(task.assigned_to)
        .bind(&task.notes)
        .bind(task.completed_at)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound("Cleaning task not found".to_string()))?;

        Ok(updated)
    }

    async fn set_cleaning_task_status(
        &self,
        id: Uuid,
        status: TaskStatus,
        now: DateTime<Utc>,
    ) -> AppResult<CleaningTask> {
        let mut tx = self.pool.begin().await?;

        let completed_at = if status == TaskStatus::Completed {
            Some(now)
        } else {
            None
        };

        let task = sqlx::query_as::<_, CleaningTask>(
            r#"
            UPDATE cleaning_tasks
            SET status = $2, completed_at = COALESCE($3, completed_at)
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(status.as_str())
        .bind(completed_at)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or_else(|| AppError::NotFound("Cleaning task not found".to_string()))?;

        // Cascada sobre la habitación al completar
        if status == TaskStatus::Completed {
            if let Some(room_id) = &task.room_id {
                match task.task_type {
                    CleaningTaskType::RoomCleaning => {
                        sqlx::query(
                            r#"
                            UPDATE rooms
                            SET cleaning_status = $2, linen_status = $3,
                                last_cleaned = $4, last_linen_change = $4
                            WHERE id = $1
                            "#,
                        )
                        .bind(room_id)
                        .bind(CleaningStatus::Clean.as_str())
                        .bind(LinenStatus::Fresh.as_str())
                        .bind(now)
                        .execute(&mut *tx)
                        .await?;
                    }
                    CleaningTaskType::LinenChange => {
                        sqlx::query(
                            "UPDATE rooms SET linen_status = $2, last_linen_change = $3 WHERE id = $1",
                        )
                        .bind(room_id)
                        .bind(LinenStatus::Fresh.as_str())
                        .bind(now)
                        .execute(&mut *tx)
                        .await?;
                    }
                    CleaningTaskType::CommonArea => {}
                }
            }
        }

        tx.commit().await?;
        Ok(task)
    }

    // --- Maintenance ---

    async fn create_maintenance(&self, request: MaintenanceRequest) -> AppResult<MaintenanceRequest> {
        let created = sqlx::query_as::<_, MaintenanceRequest>(
            r#"
            INSERT INTO maintenance_requests
                (id, room_id, property_id, description, priority, status,
                 reported_by, assigned_to, created_at, resolved_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            RETURNING *
            "#,
        )
        .bind(request.id)
        .bind(&request.room_id)
        .bind(&request.property_id)
        .bind(&request.description)
        .bind(request.priority.as_str())
        .bind(request.status.as_str())
        .bind(request.reported_by)
        .bind(request.assigned_to)
        .bind(request.created_at)
        .bind(request.resolved_at)
        .fetch_one(&self.pool)
        .await?;

        Ok(created)
    }

    async fn get_maintenance(&self, id: Uuid) -> AppResult<Option<MaintenanceRequest>> {
        let request =
            sqlx::query_as::<_, MaintenanceRequest>("SELECT * FROM maintenance_requests WHERE id = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;
        Ok(request)
    }

    async fn list_maintenance(&self) -> AppResult<Vec<MaintenanceRequest>> {
        let requests = sqlx::query_as::<_, MaintenanceRequest>(
            "SELECT * FROM maintenance_requests ORDER BY created_at",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(requests)
    }

    async fn update_maintenance(&self, request: MaintenanceRequest) -> AppResult<MaintenanceRequest> {
        let updated = sqlx::query_as::<_, MaintenanceRequest>(
            r#"
            UPDATE maintenance_requests
            SET room_id = $2, property_id = $3, description = $4, priority = $5,
                status = $6, reported_by = $7, assigned_to = $8, resolved_at = $9
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(request.id)
        .bind(&request.room_id)
        .bind(&request.property_id)
        .bind(&request.description)
        .bind(request.priority.as_str())
        .bind(request.status.as_str())
        .bind(request.reported_by)
        .bind(request.assigned_to)
        .bind(request.resolved_at)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound("Maintenance request not found".to_string()))?;

        Ok(updated)
    }

    // --- Inventory ---

    async fn create_inventory_item(&self, item: InventoryItem) -> AppResult<InventoryItem> {
        if self.get_property(&item.property_id).await?.is_none() {
            return Err(AppError::NotFound(format!(
                "Property not found: {}",
                item.property_id
            )));
        }

        let created = sqlx::query_as::<_, InventoryItem>(
            r#"
            INSERT INTO inventory_items (id, property_id, item, quantity, threshold, unit)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(item.id)
        .bind(&item.property_id)
        .bind(&item.item)
        .bind(item.quantity)
        .bind(item.threshold)
        .bind(&item.unit)
        .fetch_one(&self.pool)
        .await?;

        Ok(created)
    }

    async fn get_inventory_item(&self, id: Uuid) -> AppResult<Option<InventoryItem>> {
        let item = sqlx::query_as::<_, InventoryItem>("SELECT * FROM inventory_items WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(item)
    }

    async fn list_inventory(&self) -> AppResult<Vec<InventoryItem>> {
        let items = sqlx::query_as::<_, InventoryItem>("SELECT * FROM inventory_items ORDER BY item")
            .fetch_all(&self.pool)
            .await?;
        Ok(items)
    }

    async fn update_inventory_item(&self, item: InventoryItem) -> AppResult<InventoryItem> {
        let updated = sqlx::query_as::<_, InventoryItem>(
            r#"
            UPDATE inventory_items
            SET item = $2, quantity = $3, threshold = $4, unit = $5
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(item.id)
        .bind(&item.item)
        .bind(item.quantity)
        .bind(item.threshold)
        .bind(&item.unit)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound("Inventory item not found".to_string()))?;

        Ok(updated)
    }

    async fn delete_inventory_item(&self, id: Uuid) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM inventory_items WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Inventory item not found".to_string()));
        }
        Ok(())
    }

    // --- Inquiries ---

    async fn create_inquiry(&self, inquiry: Inquiry) -> AppResult<Inquiry> {
        let created = sqlx::query_as::<_, Inquiry>(
            r#"
            INSERT INTO inquiries
                (id, name, contact, contact_type, property_id, plan, message,
                 status, tracker_token, token_expiry, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            RETURNING *
            "#,
        )
        .bind(inquiry.id)
        .bind(&inquiry.name)
        .bind(&inquiry.contact)
        .bind(inquiry.contact_type.as_str())
        .bind(&inquiry.property_id)
        .bind(inquiry.plan.map(|p| p.as_str()))
        .bind(&inquiry.message)
        .bind(inquiry.status.as_str())
        .bind(&inquiry.tracker_token)
        .bind(inquiry.token_expiry)
        .bind(inquiry.created_at)
        .fetch_one(&self.pool)
        .await?;

        Ok(created)
    }

    async fn get_inquiry(&self, id: Uuid) -> AppResult<Option<Inquiry>> {
        let inquiry = sqlx::query_as::<_, Inquiry>("SELECT * FROM inquiries WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(inquiry)
    }

    async fn get_inquiry_by_token(&self, token: &str) -> AppResult<Option<Inquiry>> {
        let inquiry = sqlx::query_as::<_, Inquiry>("SELECT * FROM inquiries WHERE tracker_token = $1")
            .bind(token)
            .fetch_optional(&self.pool)
            .await?;
        Ok(inquiry)
    }

    async fn list_inquiries(&self) -> AppResult<Vec<Inquiry>> {
        let inquiries = sqlx::query_as::<_, Inquiry>("SELECT * FROM inquiries ORDER BY created_at")
            .fetch_all(&self.pool)
            .await?;
        Ok(inquiries)
    }

    async fn update_inquiry(&self, inquiry: Inquiry) -> AppResult<Inquiry> {
        let updated = sqlx::query_as::<_, Inquiry>(
            r#"
            UPDATE inquiries
            SET name = $2, contact = $3, contact_type = $4, property_id = $5,
                plan = $6, message = $7, status = $8
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(inquiry.id)
        .bind(&inquiry.name)
        .bind(&inquiry.contact)
        .bind(inquiry.contact_type.as_str())
        .bind(&inquiry.property_id)
        .bind(inquiry.plan.map(|p| p.as_str()))
        .bind(&inquiry.message)
        .bind(inquiry.status.as_str())
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound("Inquiry not found".to_string()))?;

        Ok(updated)
    }

    // --- Banned users ---

    async fn create_banned_user(&self, banned: BannedUser) -> AppResult<BannedUser> {
        let created = sqlx::query_as::<_, BannedUser>(
            r#"
            INSERT INTO banned_users (id, name, email, phone, reason, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(banned.id)
        .bind(&banned.name)
        .bind(&banned.email)
        .bind(&banned.phone)
        .bind(&banned.reason)
        .bind(banned.created_at)
        .fetch_one(&self.pool)
        .await?;

        Ok(created)
    }

    async fn list_banned_users(&self) -> AppResult<Vec<BannedUser>> {
        let banned =
            sqlx::query_as::<_, BannedUser>("SELECT * FROM banned_users ORDER BY created_at")
                .fetch_all(&self.pool)
                .await?;
        Ok(banned)
    }

    async fn delete_banned_user(&self, id: Uuid) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM banned_users WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Banned user not found".to_string()));
        }
        Ok(())
    }

    // --- Master codes ---

    async fn create_master_code(&self, code: MasterCode) -> AppResult<MasterCode> {
        let created = sqlx::query_as::<_, MasterCode>(
            r#"
            INSERT INTO master_codes (id, property_id, label, code, expiry, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(code.id)
        .bind(&code.property_id)
        .bind(&code.label)
        .bind(&code.code)
        .bind(code.expiry)
        .bind(code.created_at)
        .fetch_one(&self.pool)
        .await?;

        Ok(created)
    }

    async fn list_master_codes(&self) -> AppResult<Vec<MasterCode>> {
        let codes =
            sqlx::query_as::<_, MasterCode>("SELECT * FROM master_codes ORDER BY created_at")
                .fetch_all(&self.pool)
                .await?;
        Ok(codes)
    }

    async fn delete_master_code(&self, id: Uuid) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM master_codes WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Master code not found".to_string()));
        }
        Ok(())
    }

    // --- Cash turn-ins ---

    async fn create_turn_in(
        &self,
        turn_in: CashTurnIn,
        drawer_txn: DrawerTransaction,
    ) -> AppResult<CashTurnIn> {
        let mut tx = self.pool.begin().await?;

        let created = sqlx::query_as::<_, CashTurnIn>(
            r#"
            INSERT INTO cash_turn_ins (id, manager_id, amount, note, turned_in_at)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(turn_in.id)
        .bind(turn_in.manager_id)
        .bind(turn_in.amount)
        .bind(&turn_in.note)
        .bind(turn_in.turned_in_at)
        .fetch_one(&mut *tx)
        .await?;

        sqlx::query(
            r#"
            INSERT INTO drawer_transactions (id, txn_type, amount, category, note, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(drawer_txn.id)
        .bind(drawer_txn.txn_type.as_str())
        .bind(drawer_txn.amount)
        .bind(&drawer_txn.category)
        .bind(&drawer_txn.note)
        .bind(drawer_txn.created_at)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(created)
    }

    async fn list_turn_ins(&self) -> AppResult<Vec<CashTurnIn>> {
        let turn_ins =
            sqlx::query_as::<_, CashTurnIn>("SELECT * FROM cash_turn_ins ORDER BY turned_in_at")
                .fetch_all(&self.pool)
                .await?;
        Ok(turn_ins)
    }

    // --- Ledgers ---

    async fn create_drawer_txn(&self, txn: DrawerTransaction) -> AppResult<DrawerTransaction> {
        let created = sqlx::query_as::<_, DrawerTransaction>(
            r#"
            INSERT INTO drawer_transactions (id, txn_type, amount, category, note, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(txn.id)
        .bind(txn.txn_type.as_str())
        .bind(txn.amount)
        .bind(&txn.category)
        .bind(&txn.note)
        .bind(txn.created_at)
        .fetch_one(&self.pool)
        .await?;

        Ok(created)
    }

    async fn list_drawer_txns(&self) -> AppResult<Vec<DrawerTransaction>> {
        let txns = sqlx::query_as::<_, DrawerTransaction>(
            "SELECT * FROM drawer_transactions ORDER BY created_at",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(txns)
    }

    async fn create_house_bank_txn(
        &self,
        txn: HouseBankTransaction,
    ) -> AppResult<HouseBankTransaction> {
        let created = sqlx::query_as::<_, HouseBankTransaction>(
            r#"
            INSERT INTO house_bank_transactions (id, txn_type, amount, category, note, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(txn.id)
        .bind(txn.txn_type.as_str())
        .bind(txn.amount)
        .bind(&txn.category)
        .bind(&txn.note)
        .bind(txn.created_at)
        .fetch_one(&self.pool)
        .await?;

        Ok(created)
    }

    async fn list_house_bank_txns(&self) -> AppResult<Vec<HouseBankTransaction>> {
        let txns = sqlx::query_as::<_, HouseBankTransaction>(
            "SELECT * FROM house_bank_transactions ORDER BY created_at",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(txns)
    }

    // --- Audit log ---

    async fn append_audit(&self, entry: AuditLogEntry) -> AppResult<()> {
        sqlx::query(
            r#"
            INSERT INTO audit_log (id, user_id, action, entity, entity_id, detail, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(entry.id)
        .bind(entry.user_id)
        .bind(&entry.action)
        .bind(&entry.entity)
        .bind(&entry.entity_id)
        .bind(&entry.detail)
        .bind(entry.created_at)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn list_audit_log(&self) -> AppResult<Vec<AuditLogEntry>> {
        let entries =
            sqlx::query_as::<_, AuditLogEntry>("SELECT * FROM audit_log ORDER BY created_at")
                .fetch_all(&self.pool)
                .await?;
        Ok(entries)
    }
}
