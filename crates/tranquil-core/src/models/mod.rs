pub mod answer;
pub mod category;
pub mod chat_request;
pub mod field;
pub mod profile;
pub mod question;
