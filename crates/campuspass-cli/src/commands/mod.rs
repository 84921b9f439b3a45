pub mod campuses;
pub mod inspect;
pub mod issue;
pub mod validate;
