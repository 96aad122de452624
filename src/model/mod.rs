pub mod api_response;
pub mod cli_error;
pub mod cli_output;
pub mod collection;
pub mod exit_code;
pub mod forms;
