pub mod candidate_builder;
