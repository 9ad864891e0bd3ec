//! tinysheet_engine - Grid model, formula parser and evaluator.

pub mod engine;
