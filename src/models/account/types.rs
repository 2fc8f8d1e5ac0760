/// Dashboard account, including the argon2 hash, as read for sign-in.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Account {
    pub id: String,
    pub name: String,
    pub email: String,
    pub password: String,
}

/// New account data for seeding.
pub struct NewAccount {
    pub name: String,
    pub email: String,
    pub password: String,
}
