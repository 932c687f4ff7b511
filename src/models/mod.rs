pub mod question;
pub mod question_set;
pub mod rating;
