pub mod descriptor;
pub mod formula;
pub mod runner;
pub mod sink;
