//! Application services for the message subsystem.
//!
//! Services orchestrate domain operations and coordinate between ports.

mod dispatch;


pub use dispatch::MessageService;
