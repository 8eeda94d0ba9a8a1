pub mod exceptions;
