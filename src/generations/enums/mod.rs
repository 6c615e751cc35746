pub mod poll_outcome;
