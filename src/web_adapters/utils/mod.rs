pub mod auth;
pub mod emails;
pub mod response;

pub use response::{
    response_200, response_200_message, response_401, response_429, response_500,
    response_use_case_error,
};
