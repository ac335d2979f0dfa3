pub mod arith;
pub mod report;
