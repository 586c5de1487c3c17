use chrono::NaiveDateTime;
use diesel::prelude::*;

#[derive(Queryable, Selectable, Debug, Clone, PartialEq)]
#[diesel(table_name = crate::schema::threads)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct ThreadRow {
    pub id: String,
    pub title: String,
    pub body: String,
    pub owner: String,
    pub created_at: NaiveDateTime,
}

// `created_at` is assigned by the database.
#[derive(Insertable, Debug)]
#[diesel(table_name = crate::schema::threads)]
pub struct NewThread {
    pub id: String,
    pub title: String,
    pub body: String,
    pub owner: String,
}
