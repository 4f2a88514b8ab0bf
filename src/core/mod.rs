pub mod bindings;
pub mod clock;
pub mod input_adapter;
pub mod timer;
