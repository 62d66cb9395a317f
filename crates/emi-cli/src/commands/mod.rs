pub mod amortisation;
