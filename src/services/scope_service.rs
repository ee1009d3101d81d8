//! Visibilidad por rol
//!
//! Filtros puros que derivan el subconjunto de recursos que cada rol
//! puede ver. Regla general: admin ve todo; manager ve solo su propiedad
//! (un manager sin propiedad asignada ve el conjunto vacío, nunca todo);
//! helper ve habitaciones e inventario completos (contexto de limpieza)
//! pero solo sus propias tareas, y ningún booking.

use std::collections::HashSet;

use crate::models::auth::{UserInfo, UserRole};
use crate::models::booking::Booking;
use crate::models::operations::{CleaningTask, InventoryItem, MaintenanceRequest};
use crate::models::property::Room;

/// Ids de las habitaciones visibles para un manager
fn manager_room_ids(user: &UserInfo, rooms: &[Room]) -> HashSet<String> {
    match &user.property {
        Some(property) => rooms
            .iter()
            .filter(|r| &r.property_id == property)
            .map(|r| r.id.clone())
            .collect(),
        // Manager sin propiedad: fail safe, conjunto vacío
        None => HashSet::new(),
    }
}

/// Habitaciones visibles para el usuario
pub fn scope_rooms(user: &UserInfo, rooms: Vec<Room>) -> Vec<Room> {
    match user.role {
        UserRole::Admin | UserRole::Helper => rooms,
        UserRole::Manager => match &user.property {
            Some(property) => rooms
                .into_iter()
                .filter(|r| &r.property_id == property)
                .collect(),
            None => Vec::new(),
        },
    }
}

/// Inventario visible para el usuario
pub fn scope_inventory(user: &UserInfo, items: Vec<InventoryItem>) -> Vec<InventoryItem> {
    match user.role {
        UserRole::Admin | UserRole::Helper => items,
        UserRole::Manager => match &user.property {
            Some(property) => items
                .into_iter()
                .filter(|i| &i.property_id == property)
                .collect(),
            None => Vec::new(),
        },
    }
}

/// Bookings visibles: manager filtra transitivamente por sus habitaciones;
/// helper recibe lista vacía, no un error
pub fn scope_bookings(user: &UserInfo, rooms: &[Room], bookings: Vec<Booking>) -> Vec<Booking> {
    match user.role {
        UserRole::Admin => bookings,
        UserRole::Manager => {
            let room_ids = manager_room_ids(user, rooms);
            bookings
                .into_iter()
                .filter(|b| room_ids.contains(&b.room_id))
                .collect()
        }
        UserRole::Helper => Vec::new(),
    }
}

/// Tareas de limpieza visibles: manager por propiedad (directa o vía
/// habitación), helper solo las asignadas a él
pub fn scope_cleaning_tasks(
    user: &UserInfo,
    rooms: &[Room],
    tasks: Vec<CleaningTask>,
) -> Vec<CleaningTask> {
    match user.role {
        UserRole::Admin => tasks,
        UserRole::Manager => {
            let room_ids = manager_room_ids(user, rooms);
            let property = user.property.as_deref();
            tasks
                .into_iter()
                .filter(|t| {
                    let by_property = match (&t.property_id, property) {
                        (Some(p), Some(mine)) => p == mine,
                        _ => false,
                    };
                    let by_room = t
                        .room_id
                        .as_ref()
                        .map_or(false, |id| room_ids.contains(id));
                    by_property || by_room
                })
                .collect()
        }
        UserRole::Helper => tasks
            .into_iter()
            .filter(|t| t.assigned_to == Some(user.id))
            .collect(),
    }
}

/// Pedidos de mantenimiento visibles, misma forma que las cleaning tasks
pub fn scope_maintenance(
    user: &UserInfo,
    rooms: &[Room],
    requests: Vec<MaintenanceRequest>,
) -> Vec<MaintenanceRequest> {
    match user.role {
        UserRole::Admin => requests,
        UserRole::Manager => {
            let room_ids = manager_room_ids(user, rooms);
            let property = user.property.as_deref();
            requests
                .into_iter()
                .filter(|m| {
                    let by_property = match (&m.property_id, property) {
                        (Some(p), Some(mine)) => p == mine,
                        _ => false,
                    };
                    let by_room = m
                        .room_id
                        .as_ref()
                        .map_or(false, |id| room_ids.contains(id));
                    by_property || by_room
                })
                .collect()
        }
        UserRole::Helper => requests
            .into_iter()
            .filter(|m| m.assigned_to == Some(user.id))
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::booking::{BookingPlan, BookingStatus, PaymentStatus};
    use crate::models::operations::{CleaningTaskType, Priority, TaskStatus};
    use crate::models::property::{CleaningStatus, LinenStatus, RoomStatus};
    use chrono::Utc;
    use rust_decimal_macros::dec;
    use uuid::Uuid;

    fn user(role: UserRole, property: Option<&str>) -> UserInfo {
        UserInfo {
            id: Uuid::new_v4(),
            username: "u".to_string(),
            name: "U".to_string(),
            role,
            property: property.map(String::from),
        }
    }

    fn room(id: &str, property_id: &str) -> Room {
        Room {
            id: id.to_string(),
            property_id: property_id.to_string(),
            room_number: id.split('-').last().unwrap_or(id).to_string(),
            status: RoomStatus::Available,
            door_code: None,
            door_code_expiry: None,
            cleaning_status: CleaningStatus::Clean,
            linen_status: LinenStatus::Fresh,
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
            plan: BookingPlan::Weekly,
            start_date: Utc::now(),
            end_date: None,
            total_amount: dec!(150.00),
            payment_status: PaymentStatus::Pending,
            status: BookingStatus::Active,
            door_code: None,
            door_code_expiry: None,
            notes: None,
            created_at: Utc::now(),
        }
    }

    fn task(room_id: Option<&str>, assigned_to: Option<Uuid>) -> CleaningTask {
        CleaningTask {
            id: Uuid::new_v4(),
            room_id: room_id.map(String::from),
            property_id: None,
            task_type: CleaningTaskType::RoomCleaning,
            priority: Priority::Normal,
            status: TaskStatus::Pending,
            assigned_to,
            notes: None,
            created_at: Utc::now(),
            completed_at: None,
        }
    }

    fn sample_rooms() -> Vec<Room> {
        vec![room("P1-R1", "P1"), room("P1-R2", "P1"), room("P2-R1", "P2")]
    }

    #[test]
    fn test_admin_sees_everything() {
        let admin = user(UserRole::Admin, None);
        let rooms = sample_rooms();
        assert_eq!(scope_rooms(&admin, rooms.clone()).len(), 3);

        let bookings = vec![booking("P1-R1"), booking("P2-R1")];
        assert_eq!(scope_bookings(&admin, &rooms, bookings).len(), 2);
    }

    #[test]
    fn test_manager_sees_exactly_their_property() {
        let manager = user(UserRole::Manager, Some("P1"));
        let scoped = scope_rooms(&manager, sample_rooms());
        assert_eq!(scoped.len(), 2);
        assert!(scoped.iter().all(|r| r.property_id == "P1"));
    }

    #[test]
    fn test_manager_bookings_filtered_transitively() {
        let manager = user(UserRole::Manager, Some("P1"));
        let rooms = sample_rooms();
        let bookings = vec![booking("P1-R1"), booking("P1-R2"), booking("P2-R1")];
        let scoped = scope_bookings(&manager, &rooms, bookings);
        assert_eq!(scoped.len(), 2);
        assert!(scoped.iter().all(|b| b.room_id.starts_with("P1")));
    }

    #[test]
    fn test_manager_without_property_sees_nothing() {
        // Fail safe, no fail open
        let manager = user(UserRole::Manager, None);
        let rooms = sample_rooms();
        assert!(scope_rooms(&manager, rooms.clone()).is_empty());
        assert!(scope_bookings(&manager, &rooms, vec![booking("P1-R1")]).is_empty());
        assert!(scope_cleaning_tasks(&manager, &rooms, vec![task(Some("P1-R1"), None)]).is_empty());
    }

    #[test]
    fn test_helper_bookings_empty_not_error() {
        let helper = user(UserRole::Helper, None);
        let rooms = sample_rooms();
        let scoped = scope_bookings(&helper, &rooms, vec![booking("P1-R1"), booking("P2-R1")]);
        assert!(scoped.is_empty());
    }

    #[test]
    fn test_helper_sees_rooms_and_only_their_tasks() {
        let helper = user(UserRole::Helper, None);
        let rooms = sample_rooms();
        assert_eq!(scope_rooms(&helper, rooms.clone()).len(), 3);

        let mine = task(Some("P1-R1"), Some(helper.id));
        let theirs = task(Some("P1-R2"), Some(Uuid::new_v4()));
        let unassigned = task(Some("P2-R1"), None);
        let scoped = scope_cleaning_tasks(&helper, &rooms, vec![mine.clone(), theirs, unassigned]);
        assert_eq!(scoped.len(), 1);
        assert_eq!(scoped[0].id, mine.id);
    }

    #[test]
    fn test_manager_tasks_by_property_or_room() {
        let manager = user(UserRole::Manager, Some("P1"));
        let rooms = sample_rooms();

        let mut direct = task(None, None);
        direct.property_id = Some("P1".to_string());
        let via_room = task(Some("P1-R2"), None);
        let other = task(Some("P2-R1"), None);

        let scoped = scope_cleaning_tasks(&manager, &rooms, vec![direct, via_room, other]);
        assert_eq!(scoped.len(), 2);
    }
}
