pub mod aggregate;
pub mod ranking;
pub mod salary;
pub mod search;
pub mod similarity;
pub mod text;

pub use aggregate::aggregate;
pub use ranking::rank;
pub use salary::{SalaryField, normalize_salary};
pub use similarity::similarity;
pub use text::{Lexicon, TextVector, vectorize};
