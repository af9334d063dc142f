pub mod open_er;
