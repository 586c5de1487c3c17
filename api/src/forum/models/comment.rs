use chrono::NaiveDateTime;
use diesel::prelude::*;

#[derive(Queryable, Selectable, Debug, Clone, PartialEq)]
#[diesel(table_name = crate::schema::thread_comments)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct CommentRow {
    pub id: String,
    pub thread_id: String,
    pub creator_username: String,
    pub comment: String,
    pub created_at: NaiveDateTime,
    pub is_delete: bool,
}

#[derive(Insertable, Debug)]
#[diesel(table_name = crate::schema::thread_comments)]
pub struct NewComment {
    pub id: String,
    pub thread_id: String,
    pub creator_username: String,
    pub comment: String,
}
