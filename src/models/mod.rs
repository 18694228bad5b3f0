pub mod appointments;
pub mod enums;
