pub mod alias_action;
pub mod cli_args;
pub mod configs;
pub mod es_response;
pub mod index_info;
pub mod settings;
