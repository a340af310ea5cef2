pub mod price_record;
pub mod request_params;
pub mod schema;
