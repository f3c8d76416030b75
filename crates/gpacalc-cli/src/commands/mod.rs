pub mod cgpa;
pub mod clear_all;
pub mod export;
pub mod improve;
pub mod init;
pub mod semesters;
pub mod sgpa;
pub mod theme;
pub mod validate;
