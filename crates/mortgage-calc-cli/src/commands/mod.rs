pub mod amortize;
