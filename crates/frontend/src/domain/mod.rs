pub mod a001_profile;
