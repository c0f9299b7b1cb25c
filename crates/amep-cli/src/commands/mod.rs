pub mod classroom;
pub mod dispatch;
pub mod engagement;
pub mod init;
pub mod poll;
pub mod project;
pub mod schema;
pub mod shared;
pub mod workspace;
