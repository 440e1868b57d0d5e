pub mod load;
pub mod run;
