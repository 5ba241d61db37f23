pub mod renaming;
