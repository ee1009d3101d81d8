//! Adapter de storage en memoria
//!
//! Mapas por entidad detrás de `tokio::sync::RwLock`. Pensado para
//! desarrollo y tests: mismo contrato que el adapter relacional, sin
//! base de datos. Las unidades de trabajo toman los write locks de
//! todas las entidades involucradas antes de mutar, así una validación
//! fallida no deja estado a medias.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::models::booking::{Booking, CashTurnIn, Payment, PaymentStatus};
use crate::models::guest::{BannedUser, Guest};
use crate::models::inquiry::Inquiry;
use crate::models::ledger::{DrawerTransaction, HouseBankTransaction};
use crate::models::operations::{
    AuditLogEntry, CleaningTask, CleaningTaskType, InventoryItem, MaintenanceRequest, TaskStatus,
};
use crate::models::property::{CleaningStatus, LinenStatus, MasterCode, Property, Room, RoomStatus};
use crate::models::user::User;
use crate::storage::Storage;
use crate::utils::errors::{AppError, AppResult};

/// Storage en memoria, keyed por id
#[derive(Default)]
pub struct MemStorage {
    users: RwLock<HashMap<Uuid, User>>,
    properties: RwLock<HashMap<String, Property>>,
    rooms: RwLock<HashMap<String, Room>>,
    guests: RwLock<HashMap<Uuid, Guest>>,
    bookings: RwLock<HashMap<Uuid, Booking>>,
    payments: RwLock<HashMap<Uuid, Payment>>,
    cleaning_tasks: RwLock<HashMap<Uuid, CleaningTask>>,
    maintenance: RwLock<HashMap<Uuid, MaintenanceRequest>>,
    inventory: RwLock<HashMap<Uuid, InventoryItem>>,
    inquiries: RwLock<HashMap<Uuid, Inquiry>>,
    banned_users: RwLock<HashMap<Uuid, BannedUser>>,
    master_codes: RwLock<HashMap<Uuid, MasterCode>>,
    turn_ins: RwLock<HashMap<Uuid, CashTurnIn>>,
    drawer_txns: RwLock<HashMap<Uuid, DrawerTransaction>>,
    house_bank_txns: RwLock<HashMap<Uuid, HouseBankTransaction>>,
    audit_log: RwLock<Vec<AuditLogEntry>>,
}

impl MemStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Storage for MemStorage {
    // --- Users ---

    async fn create_user(&self, user: User) -> AppResult<User> {
        let mut users = self.users.write().await;
        if users.values().any(|u| u.username == user.username) {
            return Err(AppError::Conflict(format!(
                "Username already exists: {}",
                user.username
            )));
        }
        users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn get_user(&self, id: Uuid) -> AppResult<Option<User>> {
        Ok(self.users.read().await.get(&id).cloned())
    }

    async fn get_user_by_username(&self, username: &str) -> AppResult<Option<User>> {
        Ok(self
            .users
            .read()
            .await
            .values()
            .find(|u| u.username == username)
            .cloned())
    }

    async fn list_users(&self) -> AppResult<Vec<User>> {
        let mut users: Vec<User> = self.users.read().await.values().cloned().collect();
        users.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        Ok(users)
    }

    async fn update_user(&self, user: User) -> AppResult<User> {
        let mut users = self.users.write().await;
        if !users.contains_key(&user.id) {
            return Err(AppError::NotFound("User not found".to_string()));
        }
        users.insert(user.id, user.clone());
        Ok(user)
    }

    // --- Properties ---

    async fn create_property(&self, property: Property) -> AppResult<Property> {
        let mut properties = self.properties.write().await;
        if properties.contains_key(&property.id) {
            return Err(AppError::Conflict(format!(
                "Property already exists: {}",
                property.id
            )));
        }
        properties.insert(property.id.clone(), property.clone());
        Ok(property)
    }

    async fn get_property(&self, id: &str) -> AppResult<Option<Property>> {
        Ok(self.properties.read().await.get(id).cloned())
    }

    async fn list_properties(&self) -> AppResult<Vec<Property>> {
        let mut properties: Vec<Property> =
            self.properties.read().await.values().cloned().collect();
        properties.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(properties)
    }

    async fn update_property(&self, property: Property) -> AppResult<Property> {
        let mut properties = self.properties.write().await;
        if !properties.contains_key(&property.id) {
            return Err(AppError::NotFound("Property not found".to_string()));
        }
        properties.insert(property.id.clone(), property.clone());
        Ok(property)
    }

    // --- Rooms ---

    async fn create_room(&self, room: Room) -> AppResult<Room> {
        if self.get_property(&room.property_id).await?.is_none() {
            return Err(AppError::NotFound(format!(
                "Property not found: {}",
                room.property_id
            )));
        }
        let mut rooms = self.rooms.write().await;
        if rooms.contains_key(&room.id) {
            return Err(AppError::Conflict(format!("Room already exists: {}", room.id)));
        }
        rooms.insert(room.id.clone(), room.clone());
        Ok(room)
    }

    async fn get_room(&self, id: &str) -> AppResult<Option<Room>> {
        Ok(self.rooms.read().await.get(id).cloned())
    }

    async fn list_rooms(&self) -> AppResult<Vec<Room>> {
        let mut rooms: Vec<Room> = self.rooms.read().await.values().cloned().collect();
        rooms.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(rooms)
    }

    async fn update_room(&self, room: Room) -> AppResult<Room> {
        let mut rooms = self.rooms.write().await;
        if !rooms.contains_key(&room.id) {
            return Err(AppError::NotFound("Room not found".to_string()));
        }
        rooms.insert(room.id.clone(), room.clone());
        Ok(room)
    }

    // --- Guests ---

    async fn create_guest(&self, guest: Guest) -> AppResult<Guest> {
        self.guests.write().await.insert(guest.id, guest.clone());
        Ok(guest)
    }

    async fn get_guest(&self, id: Uuid) -> AppResult<Option<Guest>> {
        Ok(self.guests.read().await.get(&id).cloned())
    }

    async fn list_guests(&self) -> AppResult<Vec<Guest>> {
        let mut guests: Vec<Guest> = self.guests.read().await.values().cloned().collect();
        guests.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        Ok(guests)
    }

    async fn update_guest(&self, guest: Guest) -> AppResult<Guest> {
        let mut guests = self.guests.write().await;
        if !guests.contains_key(&guest.id) {
            return Err(AppError::NotFound("Guest not found".to_string()));
        }
        guests.insert(guest.id, guest.clone());
        Ok(guest)
    }

    async fn delete_guest(&self, id: Uuid) -> AppResult<()> {
        let removed = self.guests.write().await.remove(&id);
        if removed.is_none() {
            return Err(AppError::NotFound("Guest not found".to_string()));
        }
        Ok(())
    }

    // --- Bookings ---

    async fn create_booking(&self, booking: Booking) -> AppResult<Booking> {
        // Locks de ambas entidades antes de validar, así la operación
        // es todo-o-nada
        let mut rooms = self.rooms.write().await;
        let mut bookings = self.bookings.write().await;

        let room = rooms
            .get_mut(&booking.room_id)
            .ok_or_else(|| AppError::NotFound(format!("Room not found: {}", booking.room_id)))?;
        if room.status == RoomStatus::Occupied {
            return Err(AppError::Conflict(format!(
                "Room is already occupied: {}",
                booking.room_id
            )));
        }

        room.status = RoomStatus::Occupied;
        bookings.insert(booking.id, booking.clone());
        Ok(booking)
    }

    async fn get_booking(&self, id: Uuid) -> AppResult<Option<Booking>> {
        Ok(self.bookings.read().await.get(&id).cloned())
    }

    async fn list_bookings(&self) -> AppResult<Vec<Booking>> {
        let mut bookings: Vec<Booking> = self.bookings.read().await.values().cloned().collect();
        bookings.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        Ok(bookings)
    }

    async fn update_booking(&self, booking: Booking) -> AppResult<Booking> {
        let mut bookings = self.bookings.write().await;
        if !bookings.contains_key(&booking.id) {
            return Err(AppError::NotFound("Booking not found".to_string()));
        }
        bookings.insert(booking.id, booking.clone());
        Ok(booking)
    }

    // --- Payments ---

    async fn record_payment(
        &self,
        payment: Payment,
        drawer_txn: Option<DrawerTransaction>,
    ) -> AppResult<Payment> {
        let mut bookings = self.bookings.write().await;
        let mut payments = self.payments.write().await;
        let mut drawer = self.drawer_txns.write().await;

        let booking = bookings
            .get_mut(&payment.booking_id)
            .ok_or_else(|| AppError::NotFound("Booking not found".to_string()))?;

        booking.payment_status = PaymentStatus::Paid;
        payments.insert(payment.id, payment.clone());
        if let Some(txn) = drawer_txn {
            drawer.insert(txn.id, txn);
        }
        Ok(payment)
    }

    async fn list_payments(&self) -> AppResult<Vec<Payment>> {
        let mut payments: Vec<Payment> = self.payments.read().await.values().cloned().collect();
        payments.sort_by(|a, b| a.date_received.cmp(&b.date_received));
        Ok(payments)
    }

    // --- Cleaning tasks ---

    async fn create_cleaning_task(&self, task: CleaningTask) -> AppResult<CleaningTask> {
        self.cleaning_tasks.write().await.insert(task.id, task.clone());
        Ok(task)
    }

    async fn get_cleaning_task(&self, id: Uuid) -> AppResult<Option<CleaningTask>> {
        Ok(self.cleaning_tasks.read().await.get(&id).cloned())
    }

    async fn list_cleaning_tasks(&self) -> AppResult<Vec<CleaningTask>> {
        let mut tasks: Vec<CleaningTask> =
            self.cleaning_tasks.read().await.values().cloned().collect();
        tasks.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        Ok(tasks)
    }

    async fn update_cleaning_task(&self, task: CleaningTask) -> AppResult<CleaningTask> {
        let mut tasks = self.cleaning_tasks.write().await;
        if !tasks.contains_key(&task.id) {
            return Err(AppError::NotFound("Cleaning task not found".to_string()));
        }
        tasks.insert(task.id, task.clone());
        Ok(task)
    }

    async fn set_cleaning_task_status(
        &self,
        id: Uuid,
        status: TaskStatus,
        now: DateTime<Utc>,
    ) -> AppResult<CleaningTask> {
        let mut rooms = self.rooms.write().await;
        let mut tasks = self.cleaning_tasks.write().await;

        let task = tasks
            .get_mut(&id)
            .ok_or_else(|| AppError::NotFound("Cleaning task not found".to_string()))?;

        task.status = status;
        if status == TaskStatus::Completed {
            task.completed_at = Some(now);

            // Cascada sobre la habitación asociada
            if let Some(room_id) = &task.room_id {
                if let Some(room) = rooms.get_mut(room_id) {
                    match task.task_type {
                        CleaningTaskType::RoomCleaning => {
                            room.cleaning_status = CleaningStatus::Clean;
                            room.linen_status = LinenStatus::Fresh;
                            room.last_cleaned = Some(now);
                            room.last_linen_change = Some(now);
                        }
                        CleaningTaskType::LinenChange => {
                            room.linen_status = LinenStatus::Fresh;
                            room.last_linen_change = Some(now);
                        }
                        CleaningTaskType::CommonArea => {}
                    }
                }
            }
        }

        Ok(task.clone())
    }

    // --- Maintenance ---

    async fn create_maintenance(&self, request: MaintenanceRequest) -> AppResult<MaintenanceRequest> {
        self.maintenance.write().await.insert(request.id, request.clone());
        Ok(request)
    }

    async fn get_maintenance(&self, id: Uuid) -> AppResult<Option<MaintenanceRequest>> {
        Ok(self.maintenance.read().await.get(&id).cloned())
    }

    async fn list_maintenance(&self) -> AppResult<Vec<MaintenanceRequest>> {
        let mut requests: Vec<MaintenanceRequest> =
            self.maintenance.read().await.values().cloned().collect();
        requests.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        Ok(requests)
    }

    async fn update_maintenance(&self, request: MaintenanceRequest) -> AppResult<MaintenanceRequest> {
        let mut requests = self.maintenance.write().await;
        if !requests.contains_key(&request.id) {
            return Err(AppError::NotFound("Maintenance request not found".to_string()));
        }
        requests.insert(request.id, request.clone());
        Ok(request)
    }

    // --- Inventory ---

    async fn create_inventory_item(&self, item: InventoryItem) -> AppResult<InventoryItem> {
        if self.get_property(&item.property_id).await?.is_none() {
            return Err(AppError::NotFound(format!(
                "Property not found: {}",
                item.property_id
            )));
        }
        self.inventory.write().await.insert(item.id, item.clone());
        Ok(item)
    }

    async fn get_inventory_item(&self, id: Uuid) -> AppResult<Option<InventoryItem>> {
        Ok(self.inventory.read().await.get(&id).cloned())
    }

    async fn list_inventory(&self) -> AppResult<Vec<InventoryItem>> {
        let mut items: Vec<InventoryItem> =
            self.inventory.read().await.values().cloned().collect();
        items.sort_by(|a, b| a.item.cmp(&b.item));
        Ok(items)
    }

    async fn update_inventory_item(&self, item: InventoryItem) -> AppResult<InventoryItem> {
        let mut items = self.inventory.write().await;
        if !items.contains_key(&item.id) {
            return Err(AppError::NotFound("Inventory item not found".to_string()));
        }
        items.insert(item.id, item.clone());
        Ok(item)
    }

    async fn delete_inventory_item(&self, id: Uuid) -> AppResult<()> {
        let removed = self.inventory.write().await.remove(&id);
        if removed.is_none() {
            return Err(AppError::NotFound("Inventory item not found".to_string()));
        }
        Ok(())
    }

    // --- Inquiries ---

    async fn create_inquiry(&self, inquiry: Inquiry) -> AppResult<Inquiry> {
        self.inquiries.write().await.insert(inquiry.id, inquiry.clone());
        Ok(inquiry)
    }

    async fn get_inquiry(&self, id: Uuid) -> AppResult<Option<Inquiry>> {
        Ok(self.inquiries.read().await.get(&id).cloned())
    }

    async fn get_inquiry_by_token(&self, token: &str) -> AppResult<Option<Inquiry>> {
        Ok(self
            .inquiries
            .read()
            .await
            .values()
            .find(|i| i.tracker_token == token)
            .cloned())
    }

    async fn list_inquiries(&self) -> AppResult<Vec<Inquiry>> {
        let mut inquiries: Vec<Inquiry> =
            self.inquiries.read().await.values().cloned().collect();
        inquiries.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        Ok(inquiries)
    }

    async fn update_inquiry(&self, inquiry: Inquiry) -> AppResult<Inquiry> {
        let mut inquiries = self.inquiries.write().await;
        if !inquiries.contains_key(&inquiry.id) {
            return Err(AppError::NotFound("Inquiry not found".to_string()));
        }
        inquiries.insert(inquiry.id, inquiry.clone());
        Ok(inquiry)
    }

    // --- Banned users ---

    async fn create_banned_user(&self, banned: BannedUser) -> AppResult<BannedUser> {
        self.banned_users.write().await.insert(banned.id, banned.clone());
        Ok(banned)
    }

    async fn list_banned_users(&self) -> AppResult<Vec<BannedUser>> {
        let mut banned: Vec<BannedUser> =
            self.banned_users.read().await.values().cloned().collect();
        banned.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        Ok(banned)
    }

    async fn delete_banned_user(&self, id: Uuid) -> AppResult<()> {
        let removed = self.banned_users.write().await.remove(&id);
        if removed.is_none() {
            return Err(AppError::NotFound("Banned user not found".to_string()));
        }
        Ok(())
    }

    // --- Master codes ---

    async fn create_master_code(&self, code: MasterCode) -> AppResult<MasterCode> {
        self.master_codes.write().await.insert(code.id, code.clone());
        Ok(code)
    }

    async fn list_master_codes(&self) -> AppResult<Vec<MasterCode>> {
        let mut codes: Vec<MasterCode> =
            self.master_codes.read().await.values().cloned().collect();
        codes.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        Ok(codes)
    }

    async fn delete_master_code(&self, id: Uuid) -> AppResult<()> {
        let removed = self.master_codes.write().await.remove(&id);
        if removed.is_none() {
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
        let mut turn_ins = self.turn_ins.write().await;
        let mut drawer = self.drawer_txns.write().await;

        turn_ins.insert(turn_in.id, turn_in.clone());
        drawer.insert(drawer_txn.id, drawer_txn);
        Ok(turn_in)
    }

    async fn list_turn_ins(&self) -> AppResult<Vec<CashTurnIn>> {
        let mut turn_ins: Vec<CashTurnIn> =
            self.turn_ins.read().await.values().cloned().collect();
        turn_ins.sort_by(|a, b| a.turned_in_at.cmp(&b.turned_in_at));
        Ok(turn_ins)
    }

    // --- Ledgers ---

    async fn create_drawer_txn(&self, txn: DrawerTransaction) -> AppResult<DrawerTransaction> {
        self.drawer_txns.write().await.insert(txn.id, txn.clone());
        Ok(txn)
    }

    async fn list_drawer_txns(&self) -> AppResult<Vec<DrawerTransaction>> {
        let mut txns: Vec<DrawerTransaction> =
            self.drawer_txns.read().await.values().cloned().collect();
        txns.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        Ok(txns)
    }

    async fn create_house_bank_txn(
        &self,
        txn: HouseBankTransaction,
    ) -> AppResult<HouseBankTransaction> {
        self.house_bank_txns.write().await.insert(txn.id, txn.clone());
        Ok(txn)
    }

    async fn list_house_bank_txns(&self) -> AppResult<Vec<HouseBankTransaction>> {
        let mut txns: Vec<HouseBankTransaction> =
            self.house_bank_txns.read().await.values().cloned().collect();
        txns.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        Ok(txns)
    }

    // --- Audit log ---

    async fn append_audit(&self, entry: AuditLogEntry) -> AppResult<()> {
        self.audit_log.write().await.push(entry);
        Ok(())
    }

    async fn list_audit_log(&self) -> AppResult<Vec<AuditLogEntry>> {
        Ok(self.audit_log.read().await.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::auth::UserRole;
    use crate::models::booking::{BookingPlan, BookingStatus, PaymentMethod};
    use crate::models::guest::ContactType;
    use crate::models::operations::{CleaningTaskType, Priority};
    use rust_decimal_macros::dec;

    fn property(id: &str) -> Property {
        Property {
            id: id.to_string(),
            name: format!("House {}", id),
            daily_rate: dec!(45),
            weekly_rate: dec!(250),
            monthly_rate: dec!(900),
            front_door_code: None,
            front_door_code_expiry: None,
            created_at: Utc::now(),
        }
    }

    fn room(id: &str, property_id: &str) -> Room {
        Room {
            id: id.to_string(),
            property_id: property_id.to_string(),
            room_number: "R1".to_string(),
            status: RoomStatus::Available,
            door_code: None,
            door_code_expiry: None,
            cleaning_status: CleaningStatus::Dirty,
            linen_status: LinenStatus::Used,
            notes: None,
            last_cleaned: None,
            last_linen_change: None,
        }
    }

    fn booking(room_id: &str) -> Booking {
        Booking {
            id: Uuid::new_v4(),
            room_id: room_id.to_string(),
            guest_id: Uuid::new_v4(),
            plan: BookingPlan::Monthly,
            start_date: Utc::now(),
            end_date: None,
            total_amount: dec!(900),
            payment_status: PaymentStatus::Pending,
            status: BookingStatus::Active,
            door_code: None,
            door_code_expiry: None,
            notes: None,
            created_at: Utc::now(),
        }
    }

    async fn seeded() -> MemStorage {
        let storage = MemStorage::new();
        storage.create_property(property("P1")).await.unwrap();
        storage.create_room(room("P1-R1", "P1")).await.unwrap();
        storage
    }

    #[tokio::test]
    async fn test_delete_guest_removes_row() {
        let storage = MemStorage::new();
        let guest = storage
            .create_guest(Guest {
                id: Uuid::new_v4(),
                name: "Marta".to_string(),
                contact: "marta@example.com".to_string(),
                contact_type: ContactType::Email,
                referral_source: None,
                cashtag: None,
                created_at: Utc::now(),
            })
            .await
            .unwrap();

        storage.delete_guest(guest.id).await.unwrap();
        assert!(storage.get_guest(guest.id).await.unwrap().is_none());

        let err = storage.delete_guest(guest.id).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_create_booking_occupies_room() {
        let storage = seeded().await;
        storage.create_booking(booking("P1-R1")).await.unwrap();

        let room = storage.get_room("P1-R1").await.unwrap().unwrap();
        assert_eq!(room.status, RoomStatus::Occupied);
    }

    #[tokio::test]
    async fn test_double_booking_rejected() {
        let storage = seeded().await;
        storage.create_booking(booking("P1-R1")).await.unwrap();

        let err = storage.create_booking(booking("P1-R1")).await.unwrap_err();
        assert!(matches!(err, AppError::Conflict(_)));
        // Solo el primer booking quedó persistido
        assert_eq!(storage.list_bookings().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_booking_unknown_room_leaves_no_state() {
        let storage = seeded().await;
        let err = storage.create_booking(booking("P9-R9")).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
        assert!(storage.list_bookings().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_record_payment_marks_booking_paid() {
        let storage = seeded().await;
        let b = storage.create_booking(booking("P1-R1")).await.unwrap();

        let payment = Payment {
            id: Uuid::new_v4(),
            booking_id: b.id,
            amount: dec!(900),
            method: PaymentMethod::Cash,
            received_by: Uuid::new_v4(),
            discount: None,
            deposit: None,
            fee: None,
            total_paid: dec!(900),
            date_received: Utc::now(),
        };
        storage.record_payment(payment, None).await.unwrap();

        let updated = storage.get_booking(b.id).await.unwrap().unwrap();
        assert_eq!(updated.payment_status, PaymentStatus::Paid);
    }

    #[tokio::test]
    async fn test_completing_room_cleaning_cascades() {
        let storage = seeded().await;
        let task = CleaningTask {
            id: Uuid::new_v4(),
            room_id: Some("P1-R1".to_string()),
            property_id: None,
            task_type: CleaningTaskType::RoomCleaning,
            priority: Priority::High,
            status: TaskStatus::Pending,
            assigned_to: None,
            notes: None,
            created_at: Utc::now(),
            completed_at: None,
        };
        storage.create_cleaning_task(task.clone()).await.unwrap();

        let now = Utc::now();
        let done = storage
            .set_cleaning_task_status(task.id, TaskStatus::Completed, now)
            .await
            .unwrap();
        assert_eq!(done.completed_at, Some(now));

        let room = storage.get_room("P1-R1").await.unwrap().unwrap();
        assert_eq!(room.cleaning_status, CleaningStatus::Clean);
        assert_eq!(room.linen_status, LinenStatus::Fresh);
        assert_eq!(room.last_cleaned, Some(now));
        assert_eq!(room.last_linen_change, Some(now));
    }

    #[tokio::test]
    async fn test_duplicate_username_rejected() {
        let storage = MemStorage::new();
        let user = User {
            id: Uuid::new_v4(),
            username: "admin".to_string(),
            password_hash: "h".to_string(),
            name: "Admin".to_string(),
            role: UserRole::Admin,
            property: None,
            created_at: Utc::now(),
        };
        storage.create_user(user.clone()).await.unwrap();

        let mut dup = user;
        dup.id = Uuid::new_v4();
        assert!(matches!(
            storage.create_user(dup).await.unwrap_err(),
            AppError::Conflict(_)
        ));
    }

    #[tokio::test]
    async fn test_inquiry_token_lookup() {
        let storage = MemStorage::new();
        let inquiry = Inquiry {
            id: Uuid::new_v4(),
            name: "Lead".to_string(),
            contact: "lead@example.com".to_string(),
            contact_type: crate::models::guest::ContactType::Email,
            property_id: None,
            plan: None,
            message: None,
            status: crate::models::inquiry::InquiryStatus::Received,
            tracker_token: "tok123".to_string(),
            token_expiry: Utc::now() + chrono::Duration::days(7),
            created_at: Utc::now(),
        };
        storage.create_inquiry(inquiry).await.unwrap();

        assert!(storage.get_inquiry_by_token("tok123").await.unwrap().is_some());
        assert!(storage.get_inquiry_by_token("nope").await.unwrap().is_none());
    }
}
