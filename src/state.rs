use crate::{
    db::{DbPool, OrmConn, orm_from_pool},
    repositories::postgres::{
        PgBookRepository, PgCustomerRepository, PgLoginRepository, PgOrderRepository,
    },
};

#[derive(Clone)]
pub struct AppState {
    pub pool: DbPool,
    pub orm: OrmConn,
}

impl AppState {
    pub fn new(pool: DbPool) -> Self {
        let orm = orm_from_pool(&pool);
        Self { pool, orm }
    }

    pub fn books(&self) -> PgBookRepository {
        PgBookRepository::new(self.pool.clone())
    }

    pub fn customers(&self) -> PgCustomerRepository {
        PgCustomerRepository::new(self.pool.clone())
    }

    pub fn orders(&self) -> PgOrderRepository {
        PgOrderRepository::new(self.pool.clone(), self.orm.clone())
    }

    pub fn logins(&self) -> PgLoginRepository {
        PgLoginRepository::new(self.pool.clone())
    }
}
