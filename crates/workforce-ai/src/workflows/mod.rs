pub mod productivity;
