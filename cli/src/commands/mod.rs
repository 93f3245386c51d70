pub mod cli;
pub mod invoke;
pub mod lambda;
pub mod serve;
