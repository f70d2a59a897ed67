pub mod accelerator;
