pub mod class;
pub mod whitespace;

pub use class::{
    alpha, alphanumeric, digit, is_alpha, is_alphanumeric, is_digit, is_letter, is_lower,
    is_space, is_upper, letter, lower, upper,
};
pub use whitespace::{space, spaces};
