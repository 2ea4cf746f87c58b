pub mod geo_client;
pub mod llm_client;
