mod conditions;

pub use conditions::Conditions;
