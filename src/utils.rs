mod generate_connection_id;

pub use generate_connection_id::generate_connection_id;
