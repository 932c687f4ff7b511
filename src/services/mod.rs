pub mod extractor;
pub mod gemini_client;
pub mod generation_service;
pub mod heuristics;
pub mod prompt_builder;
pub mod question_service;
pub mod question_set_service;
pub mod rating_service;
pub mod stats_service;
