//! Capa de persistencia
//!
//! El trait `Storage` define el contrato CRUD que comparten el adapter
//! en memoria (`MemStorage`) y el relacional (`PgStorage`). El estado de
//! la aplicación inyecta un `Arc<dyn Storage>`, así los handlers y los
//! tests no saben contra qué adapter corren.
//!
//! Las secuencias multi-paso (crear booking + ocupar habitación,
//! registrar pago + marcar booking pagado, completar tarea + cascada
//! sobre la habitación) son operaciones únicas del trait: en Postgres
//! corren dentro de una transacción y en memoria bajo los write locks,
//! nunca como dos llamadas independientes.

pub mod memory;
pub mod postgres;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::models::booking::{Booking, CashTurnIn, Payment};
use crate::models::guest::{BannedUser, Guest};
use crate::models::inquiry::Inquiry;
use crate::models::ledger::{DrawerTransaction, HouseBankTransaction};
use crate::models::operations::{
    AuditLogEntry, CleaningTask, InventoryItem, MaintenanceRequest, TaskStatus,
};
use crate::models::property::{MasterCode, Property, Room};
use crate::models::user::User;
use crate::utils::errors::AppResult;

pub use memory::MemStorage;
pub use postgres::PgStorage;

#[async_trait]
pub trait Storage: Send + Sync {
    // --- Users ---
    async fn create_user(&self, user: User) -> AppResult<User>;
    async fn get_user(&self, id: Uuid) -> AppResult<Option<User>>;
    async fn get_user_by_username(&self, username: &str) -> AppResult<Option<User>>;
    async fn list_users(&self) -> AppResult<Vec<User>>;
    async fn update_user(&self, user: User) -> AppResult<User>;

    // --- Properties ---
    async fn create_property(&self, property: Property) -> AppResult<Property>;
    async fn get_property(&self, id: &str) -> AppResult<Option<Property>>;
    async fn list_properties(&self) -> AppResult<Vec<Property>>;
    async fn update_property(&self, property: Property) -> AppResult<Property>;

    // --- Rooms ---
    async fn create_room(&self, room: Room) -> AppResult<Room>;
    async fn get_room(&self, id: &str) -> AppResult<Option<Room>>;
    async fn list_rooms(&self) -> AppResult<Vec<Room>>;
    async fn update_room(&self, room: Room) -> AppResult<Room>;

    // --- Guests ---
    async fn create_guest(&self, guest: Guest) -> AppResult<Guest>;
    async fn get_guest(&self, id: Uuid) -> AppResult<Option<Guest>>;
    async fn list_guests(&self) -> AppResult<Vec<Guest>>;
    async fn update_guest(&self, guest: Guest) -> AppResult<Guest>;
    async fn delete_guest(&self, id: Uuid) -> AppResult<()>;

    // --- Bookings ---
    /// Unidad de trabajo: inserta el booking y marca la habitación como
    /// ocupada; falla completa si la habitación no existe o ya está ocupada
    async fn create_booking(&self, booking: Booking) -> AppResult<Booking>;
    async fn get_booking(&self, id: Uuid) -> AppResult<Option<Booking>>;
    async fn list_bookings(&self) -> AppResult<Vec<Booking>>;
    async fn update_booking(&self, booking: Booking) -> AppResult<Booking>;

    // --- Payments ---
    /// Unidad de trabajo: inserta el pago, marca el booking como pagado
    /// y registra la transacción de drawer asociada (pagos cash_app)
    async fn record_payment(
        &self,
        payment: Payment,
        drawer_txn: Option<DrawerTransaction>,
    ) -> AppResult<Payment>;
    async fn list_payments(&self) -> AppResult<Vec<Payment>>;

    // --- Cleaning tasks ---
    async fn create_cleaning_task(&self, task: CleaningTask) -> AppResult<CleaningTask>;
    async fn get_cleaning_task(&self, id: Uuid) -> AppResult<Option<CleaningTask>>;
    async fn list_cleaning_tasks(&self) -> AppResult<Vec<CleaningTask>>;
    async fn update_cleaning_task(&self, task: CleaningTask) -> AppResult<CleaningTask>;
    /// Unidad de trabajo: al completar una tarea de limpieza de habitación
    /// actualiza en cascada cleaning_status / linen_status / timestamps
    async fn set_cleaning_task_status(
        &self,
        id: Uuid,
        status: TaskStatus,
        now: DateTime<Utc>,
    ) -> AppResult<CleaningTask>;

    // --- Maintenance ---
    async fn create_maintenance(&self, request: MaintenanceRequest) -> AppResult<MaintenanceRequest>;
    async fn get_maintenance(&self, id: Uuid) -> AppResult<Option<MaintenanceRequest>>;
    async fn list_maintenance(&self) -> AppResult<Vec<MaintenanceRequest>>;
    async fn update_maintenance(&self, request: MaintenanceRequest) -> AppResult<MaintenanceRequest>;

    // --- Inventory ---
    async fn create_inventory_item(&self, item: InventoryItem) -> AppResult<InventoryItem>;
    async fn get_inventory_item(&self, id: Uuid) -> AppResult<Option<InventoryItem>>;
    async fn list_inventory(&self) -> AppResult<Vec<InventoryItem>>;
    async fn update_inventory_item(&self, item: InventoryItem) -> AppResult<InventoryItem>;
    async fn delete_inventory_item(&self, id: Uuid) -> AppResult<()>;

    // --- Inquiries ---
    async fn create_inquiry(&self, inquiry: Inquiry) -> AppResult<Inquiry>;
    async fn get_inquiry(&self, id: Uuid) -> AppResult<Option<Inquiry>>;
    async fn get_inquiry_by_token(&self, token: &str) -> AppResult<Option<Inquiry>>;
    async fn list_inquiries(&self) -> AppResult<Vec<Inquiry>>;
    async fn update_inquiry(&self, inquiry: Inquiry) -> AppResult<Inquiry>;

    // --- Banned users ---
    async fn create_banned_user(&self, banned: BannedUser) -> AppResult<BannedUser>;
    async fn list_banned_users(&self) -> AppResult<Vec<BannedUser>>;
    async fn delete_banned_user(&self, id: Uuid) -> AppResult<()>;

    // --- Master codes ---
    async fn create_master_code(&self, code: MasterCode) -> AppResult<MasterCode>;
    async fn list_master_codes(&self) -> AppResult<Vec<MasterCode>>;
    async fn delete_master_code(&self, id: Uuid) -> AppResult<()>;

    // --- Cash turn-ins ---
    /// Unidad de trabajo: registra la entrega y su inflow en el drawer
    async fn create_turn_in(
        &self,
        turn_in: CashTurnIn,
        drawer_txn: DrawerTransaction,
    ) -> AppResult<CashTurnIn>;
    async fn list_turn_ins(&self) -> AppResult<Vec<CashTurnIn>>;

    // --- Ledgers ---
    async fn create_drawer_txn(&self, txn: DrawerTransaction) -> AppResult<DrawerTransaction>;
    async fn list_drawer_txns(&self) -> AppResult<Vec<DrawerTransaction>>;
    async fn create_house_bank_txn(
        &self,
        txn: HouseBankTransaction,
    ) -> AppResult<HouseBankTransaction>;
    async fn list_house_bank_txns(&self) -> AppResult<Vec<HouseBankTransaction>>;

    // --- Audit log ---
    async fn append_audit(&self, entry: AuditLogEntry) -> AppResult<()>;
    async fn list_audit_log(&self) -> AppResult<Vec<AuditLogEntry>>;
}
