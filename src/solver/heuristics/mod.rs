pub mod restart;
pub mod value;
pub mod variable;
