pub mod pages;
pub mod signup;
