//! SMS sender implementations

mod mock;
mod twilio;

pub use mock::MockSms;
pub use twilio::{TwilioConfig, TwilioSms};
