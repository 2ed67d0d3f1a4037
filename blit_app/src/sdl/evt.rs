pub mod pump;

pub use pump::EventPump;
