mod argument_binder;
mod binder_error;

pub use argument_binder::bind_arguments;
pub use binder_error::BindError;
