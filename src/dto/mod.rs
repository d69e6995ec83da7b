pub mod generate_dto;
pub mod question_dto;
pub mod response;
