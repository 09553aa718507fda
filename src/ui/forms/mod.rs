//! Form rendering module
//!
//! - `field_renderer`: bordered field with an inline validation message
//! - `customer_form`: the customer sign-up form

mod customer_form;
mod field_renderer;

pub use customer_form::draw_customer_form;
