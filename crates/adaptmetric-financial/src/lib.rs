//! # adaptmetric-financial
//!
//! Turns an engine's annual loss scale into discounted financial figures.
//! The discount rate and horizon are deployment configuration, not
//! request inputs, which keeps the mapping from engine result to
//! [`FinancialOutcome`](adaptmetric_types::FinancialOutcome) a pure
//! function. The [`npv`] module also carries the benefit-cost and payback
//! primitives used for comparing adaptation investments.

pub mod model;
pub mod npv;

pub use model::{FinancialModel, InvestmentAppraisal};
pub use npv::{
    benefit_cost_ratio, level_annuity, net_present_value, payback_years, project_cash_flows,
};
