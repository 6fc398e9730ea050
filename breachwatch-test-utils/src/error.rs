use thiserror::Error;

#[derive(Error, Debug)]
pub enum TestError {
    #[error(transparent)]
    HibpError(#[from] hibp_client::Error),
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
}
