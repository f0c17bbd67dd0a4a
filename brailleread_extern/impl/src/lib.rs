pub mod contact;
pub mod http;
