#[cfg(feature="system-help_sim")]     pub mod help_sim;
#[cfg(feature="system-target_fit")]   pub mod target_fit;
#[cfg(feature="system-tech_compare")] pub mod tech_compare;
