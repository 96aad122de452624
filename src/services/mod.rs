pub mod wf_api;
