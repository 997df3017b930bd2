pub mod company;
pub mod contact;
