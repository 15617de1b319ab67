mod application_tag;
mod thread_message;
mod verified_tick;

pub use application_tag::*;
pub use thread_message::*;
pub use verified_tick::*;
