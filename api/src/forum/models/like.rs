use diesel::prelude::*;

// A like is an insert/delete toggle, so only the insertable shape exists.
#[derive(Insertable, Debug, Clone, PartialEq)]
#[diesel(table_name = crate::schema::comment_likes)]
pub struct NewLike {
    pub id: String,
    pub comment_id: String,
    pub owner: String,
}
