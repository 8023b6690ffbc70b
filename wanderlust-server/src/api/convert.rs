//! Conversions between db models and the shared wire models
//!
//! Record ids leave the db layer as their canonical `table:key` string
//! form; clients treat them as opaque.

use surrealdb::RecordId;

use crate::db::models;

fn id_string(id: &Option<RecordId>) -> String {
    id.as_ref().map(|id| id.to_string()).unwrap_or_default()
}

impl From<models::User> for shared::models::User {
    fn from(u: models::User) -> Self {
        Self {
            id: id_string(&u.id),
            name: u.name,
            email: u.email,
            role: u.role,
            hometown: u.hometown,
            dob: u.dob,
        }
    }
}

impl From<models::Tour> for shared::models::Tour {
    fn from(t: models::Tour) -> Self {
        Self {
            id: id_string(&t.id),
            title: t.title,
            short_desc: t.short_desc,
            full_desc: t.full_desc,
            price: t.price,
            duration: t.duration,
            priority: t.priority,
            image: t.image,
            location: t.location,
        }
    }
}

impl From<models::Booking> for shared::models::Booking {
    fn from(b: models::Booking) -> Self {
        Self {
            id: id_string(&b.id),
            user_id: b.user_id,
            tour_id: b.tour_id,
            tour_title: b.tour_title,
            tour_image: b.tour_image,
            start_date: b.start_date,
            end_date: b.end_date,
            total_price: b.total_price,
            status: b.status,
            created_at: b.created_at,
        }
    }
}
