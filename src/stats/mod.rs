pub mod zipf;
