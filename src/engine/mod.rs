pub mod progression;
pub mod scoring;

pub mod fact_matcher;
pub mod follow_ups;
pub mod tutor;

pub mod llm_client;
pub mod protocol;
pub mod worker;
