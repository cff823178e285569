use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TideError {
    #[error("{year}-{month}-{day} [yy-mm-dd] is not a valid date in the range 1901-2099")]
    InvalidDate { year: i32, month: u32, day: u32 },
}
