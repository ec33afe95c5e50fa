mod address_validation;
mod email_message;
mod message_builder;
mod message_error;

pub use self::{
    address_validation::is_valid_address, email_message::EmailMessage,
    message_builder::MessageBuilder, message_error::MessageError,
};
