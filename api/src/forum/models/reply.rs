use chrono::NaiveDateTime;
use diesel::prelude::*;

#[derive(Queryable, Selectable, Debug, Clone, PartialEq)]
#[diesel(table_name = crate::schema::comment_replies)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct ReplyRow {
    pub id: String,
    pub thread_id: String,
    pub comment_id: String,
    pub creator_username: String,
    pub comment: String,
    pub created_at: NaiveDateTime,
    pub is_delete: bool,
}

#[derive(Insertable, Debug)]
#[diesel(table_name = crate::schema::comment_replies)]
pub struct NewReply {
    pub id: String,
    pub thread_id: String,
    pub comment_id: String,
    pub creator_username: String,
    pub comment: String,
}
