//! Trait definitions

mod integrand;
mod quadrature;

pub use integrand::Integrand;
pub use quadrature::JacobiRuleProvider;
