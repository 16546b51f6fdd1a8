// HTTP layer entry point
// Response builders decoupled from routing and business logic

pub mod response;

pub use response::{
    build_404_response, build_405_response, build_options_response, build_text_response,
};
